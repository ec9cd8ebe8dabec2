//! # 批量执行器
//!
//! 顺序执行单目录内的前缀替换重命名。
//!
//! ## 功能
//! - 只替换文件名中前缀的第一次出现
//! - 单个文件失败不中断批处理，失败原因记入结果
//! - 不重试、不回滚已完成的重命名
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 调用
//! - 使用 `batch/collector.rs` 列目录与筛选
//! - 产出 `models::RenameOutcome`

use crate::batch::collector::{strip_name_prefix, FileCollector};
use crate::error::{Result, UnprefixError};
use crate::models::{RenameFailure, RenameOutcome};

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{self, Path, PathBuf};
use tracing::debug;

/// 单个文件的重命名结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameStatus {
    /// 重命名成功（新文件名）
    Renamed(String),
    /// 新旧文件名相同，无需改动
    Unchanged,
    /// 重命名失败（错误信息）
    Failed(String),
}

/// 将文件名开头的 `prefix` 替换为 `replacement`
///
/// 只处理开头的那一次出现；文件名不以 `prefix` 开头时为 None。
pub fn replace_prefix(name: &OsStr, prefix: &str, replacement: &str) -> Option<OsString> {
    let rest = strip_name_prefix(name, prefix)?;
    let mut new_name = OsString::from(replacement);
    new_name.push(rest);
    Some(new_name)
}

/// 替换串不能包含路径分隔符，否则文件会被移出目标目录
pub fn validate_replacement(replacement: &str) -> Result<()> {
    if replacement.chars().any(path::is_separator) {
        return Err(UnprefixError::InvalidArgument(format!(
            "replacement '{}' must not contain a path separator",
            replacement
        )));
    }
    Ok(())
}

/// 批量执行器
pub struct RenameRunner {
    /// 目标目录
    folder: PathBuf,
    /// 匹配前缀
    prefix: String,
    /// 替换串
    replacement: String,
}

impl RenameRunner {
    /// 创建新的批量执行器，默认替换为空串
    pub fn new(folder: PathBuf, prefix: &str) -> Self {
        Self {
            folder,
            prefix: prefix.to_string(),
            replacement: String::new(),
        }
    }

    /// 设置替换串
    pub fn with_replacement(mut self, replacement: &str) -> Self {
        self.replacement = replacement.to_string();
        self
    }

    /// 扫描目录并重命名所有匹配文件
    ///
    /// 只有列目录失败（或参数非法）会返回错误；逐文件的失败记入结果。
    pub fn run(&self) -> Result<RenameOutcome> {
        validate_replacement(&self.replacement)?;

        let collector = FileCollector::new(self.folder.clone()).with_prefix(&self.prefix);
        let entries = collector.collect()?;

        let mut outcome = RenameOutcome::new(self.folder.clone(), self.prefix.as_str());

        for entry in &entries {
            outcome.total += 1;

            if !collector.matches(entry) {
                continue;
            }

            outcome.found += 1;
            let status = self.rename_one(&entry.path, &entry.name);
            merge(&mut outcome, &entry.display_name(), status);
        }

        debug!(
            folder = %self.folder.display(),
            total = outcome.total,
            found = outcome.found,
            renamed = outcome.renamed,
            failed = outcome.failed(),
            "batch finished"
        );

        Ok(outcome)
    }

    /// 重命名单个文件
    fn rename_one(&self, path: &Path, name: &OsStr) -> RenameStatus {
        let Some(new_name) = replace_prefix(name, &self.prefix, &self.replacement) else {
            return RenameStatus::Failed(format!("name does not start with {}", self.prefix));
        };
        if new_name.as_os_str() == name {
            debug!(file = %name.to_string_lossy(), "name unchanged, skipping rename");
            return RenameStatus::Unchanged;
        }

        let new_path = self.folder.join(&new_name);
        match fs::rename(path, &new_path) {
            Ok(()) => RenameStatus::Renamed(new_name.to_string_lossy().into_owned()),
            Err(e) => RenameStatus::Failed(e.to_string()),
        }
    }
}

/// 合并单个文件的结果
fn merge(outcome: &mut RenameOutcome, file: &str, status: RenameStatus) {
    match status {
        RenameStatus::Renamed(new_name) => {
            debug!(from = file, to = %new_name, "renamed");
            outcome.renamed += 1;
        }
        RenameStatus::Unchanged => outcome.renamed += 1,
        RenameStatus::Failed(reason) => {
            debug!(file, error = %reason, "rename failed");
            outcome.errors.push(RenameFailure::new(file, reason));
        }
    }
}
