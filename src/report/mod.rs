//! # 报告模块
//!
//! 将 `RenameOutcome` 格式化为一条可读消息。纯函数，不做任何 I/O。
//!
//! ## 输出优先级
//! 1. 目录为空
//! 2. 没有匹配前缀的文件
//! 3. 汇总行，有失败时追加按原因分组的错误块
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 调用
//! - 使用 `models/`
//! - 子模块: locale

pub mod locale;

pub use locale::Language;

use crate::models::{RenameFailure, RenameOutcome};

use indexmap::IndexMap;

/// 按失败原因分组，保持原因的首次出现顺序和组内文件顺序
pub fn group_errors(errors: &[RenameFailure]) -> IndexMap<&str, Vec<&str>> {
    let mut groups: IndexMap<&str, Vec<&str>> = IndexMap::new();
    for error in errors {
        groups
            .entry(error.reason.as_str())
            .or_default()
            .push(error.file.as_str());
    }
    groups
}

/// 错误块；无错误时为空串
pub fn format_errors(errors: &[RenameFailure], lang: Language) -> String {
    if errors.is_empty() {
        return String::new();
    }

    let mut lines = vec![lang.errors_header().to_string()];
    for (reason, files) in group_errors(errors) {
        lines.push(format!("{}:", reason));
        lines.extend(files.iter().map(|file| format!("\t{}", file)));
    }
    lines.join("\n")
}

/// 格式化完整报告
pub fn format_report(outcome: &RenameOutcome, lang: Language) -> String {
    if outcome.total == 0 {
        return lang.no_files().to_string();
    }

    if outcome.found == 0 {
        return lang.no_prefix_match(&outcome.prefix);
    }

    let summary = lang.summary(
        &outcome.folder_path,
        outcome.found,
        &outcome.prefix,
        outcome.renamed,
    );

    if outcome.has_errors() {
        format!("{}\n{}", summary, format_errors(&outcome.errors, lang))
    } else {
        summary
    }
}
