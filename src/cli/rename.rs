//! # 重命名参数定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/rename.rs`

use crate::report::Language;

use clap::Args;
use std::path::PathBuf;

/// 重命名参数
#[derive(Args, Debug)]
pub struct RenameArgs {
    /// Folder whose files are renamed (not searched recursively)
    #[arg(short = 'i', long = "in", value_name = "DIR")]
    pub folder: PathBuf,

    /// Literal, case-sensitive prefix selecting the files to rename
    #[arg(short, long, allow_hyphen_values = true)]
    pub prefix: String,

    /// String that replaces the prefix
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub to: String,

    /// Language of the printed report
    #[arg(short, long, value_enum, env = "UNPREFIX_LANG", default_value_t = Language::En)]
    pub lang: Language,
}
