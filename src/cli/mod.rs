//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 参数
//! - `--in`: 目标目录
//! - `--prefix`: 匹配前缀
//! - `--to`: 替换串（默认空串）
//! - `--lang`: 报告语言
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: rename

pub mod rename;

use clap::Parser;

/// unprefix - 批量去除或替换文件名前缀
#[derive(Parser)]
#[command(name = "unprefix")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Strip or replace a filename prefix for every matching file in a folder",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub rename: rename::RenameArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Language;
    use clap::CommandFactory;
    use std::path::PathBuf;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_required_and_defaults() {
        let cli = Cli::try_parse_from(["unprefix", "--in", "photos", "--prefix", "IMG_"]).unwrap();
        assert_eq!(cli.rename.folder, PathBuf::from("photos"));
        assert_eq!(cli.rename.prefix, "IMG_");
        assert_eq!(cli.rename.to, "");
    }

    #[test]
    fn test_parse_replacement_and_language() {
        let cli = Cli::try_parse_from([
            "unprefix", "-i", "photos", "-p", "IMG_", "-t", "trip_", "--lang", "ru",
        ])
        .unwrap();
        assert_eq!(cli.rename.to, "trip_");
        assert_eq!(cli.rename.lang, Language::Ru);
    }

    #[test]
    fn test_missing_prefix_is_rejected() {
        assert!(Cli::try_parse_from(["unprefix", "--in", "photos"]).is_err());
    }
}
