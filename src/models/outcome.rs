//! # 重命名结果模型
//!
//! 一次调用的汇总记录：扫描计数、成功计数与逐文件失败原因。
//! 由 `batch::runner` 一次性构建，之后只读。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 构建
//! - 被 `report/` 格式化

use std::path::PathBuf;

/// 单个文件的重命名失败
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameFailure {
    /// 原文件名
    pub file: String,
    /// 失败原因（底层 I/O 错误的文本）
    pub reason: String,
}

impl RenameFailure {
    pub fn new(file: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            reason: reason.into(),
        }
    }
}

/// 一次批量重命名的汇总结果
///
/// 满足 `found == renamed + errors.len()` 且 `found <= total`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOutcome {
    /// 目标目录
    pub folder_path: PathBuf,
    /// 匹配前缀
    pub prefix: String,
    /// 目录项总数（含子目录与不匹配的文件）
    pub total: usize,
    /// 以前缀开头的普通文件数
    pub found: usize,
    /// 成功重命名数
    pub renamed: usize,
    /// 失败详情，按遇到顺序
    pub errors: Vec<RenameFailure>,
}

impl RenameOutcome {
    /// 创建空结果
    pub fn new(folder_path: PathBuf, prefix: impl Into<String>) -> Self {
        Self {
            folder_path,
            prefix: prefix.into(),
            total: 0,
            found: 0,
            renamed: 0,
            errors: Vec::new(),
        }
    }

    /// 失败数量
    pub fn failed(&self) -> usize {
        self.errors.len()
    }

    /// 是否存在失败
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_outcome_is_empty() {
        let outcome = RenameOutcome::new(PathBuf::from("/tmp/photos"), "IMG_");
        assert_eq!(outcome.total, 0);
        assert_eq!(outcome.found, 0);
        assert_eq!(outcome.renamed, 0);
        assert!(!outcome.has_errors());
        assert_eq!(outcome.prefix, "IMG_");
    }

    #[test]
    fn test_failed_counts_errors() {
        let mut outcome = RenameOutcome::new(PathBuf::from("."), "old_");
        outcome.errors.push(RenameFailure::new("old_a", "Permission denied"));
        outcome.errors.push(RenameFailure::new("old_b", "Permission denied"));
        assert_eq!(outcome.failed(), 2);
        assert!(outcome.has_errors());
    }
}
