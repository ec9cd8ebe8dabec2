//! # 文件收集器
//!
//! 列出目标目录的全部条目，并判断每个条目是否参与重命名。
//!
//! ## 功能
//! - 非递归列目录，目录不存在或不可读时返回致命错误
//! - 普通文件判断（跟随符号链接）
//! - 字面前缀匹配，无 glob 语义
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `error.rs`

use crate::error::{Result, UnprefixError};

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

/// 单个目录项
#[derive(Debug, Clone)]
pub struct DirEntryInfo {
    /// 文件名（不含目录）
    pub name: OsString,
    /// 完整路径
    pub path: PathBuf,
    /// 是否为普通文件
    pub is_file: bool,
}

impl DirEntryInfo {
    /// 用于报告的文件名，非 UTF-8 字节以替换字符显示
    pub fn display_name(&self) -> String {
        self.name.to_string_lossy().into_owned()
    }
}

/// 按字节去掉文件名开头的 `prefix`，不以其开头时为 None
///
/// 文件名不必是合法 UTF-8。
#[cfg(unix)]
pub fn strip_name_prefix<'a>(name: &'a OsStr, prefix: &str) -> Option<&'a OsStr> {
    use std::os::unix::ffi::OsStrExt;

    name.as_bytes()
        .strip_prefix(prefix.as_bytes())
        .map(OsStr::from_bytes)
}

#[cfg(not(unix))]
pub fn strip_name_prefix<'a>(name: &'a OsStr, prefix: &str) -> Option<&'a OsStr> {
    name.to_str()?.strip_prefix(prefix).map(OsStr::new)
}

/// 列出目录下的所有条目名，按名称排序
pub fn list_directory(path: &Path) -> Result<Vec<OsString>> {
    if !path.exists() {
        return Err(UnprefixError::DirectoryNotFound {
            path: path.display().to_string(),
        });
    }
    if !path.is_dir() {
        return Err(UnprefixError::NotADirectory {
            path: path.display().to_string(),
        });
    }

    let read_error = |source: std::io::Error| UnprefixError::DirectoryReadError {
        path: path.display().to_string(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(path).map_err(read_error)? {
        names.push(entry.map_err(read_error)?.file_name());
    }

    names.sort();
    Ok(names)
}

/// 是否为普通文件（符号链接指向文件时也算）
pub fn is_regular_file(path: &Path) -> bool {
    path.is_file()
}

/// 文件收集器
pub struct FileCollector {
    /// 目标目录
    folder: PathBuf,
    /// 匹配前缀
    prefix: String,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(folder: PathBuf) -> Self {
        Self {
            folder,
            prefix: String::new(),
        }
    }

    /// 设置匹配前缀
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    /// 收集目录下全部条目（含不匹配的条目）
    pub fn collect(&self) -> Result<Vec<DirEntryInfo>> {
        let entries = list_directory(&self.folder)?
            .into_iter()
            .map(|name| {
                let path = self.folder.join(&name);
                let is_file = is_regular_file(&path);
                DirEntryInfo {
                    name,
                    path,
                    is_file,
                }
            })
            .collect();

        Ok(entries)
    }

    /// 条目是否参与重命名
    pub fn matches(&self, entry: &DirEntryInfo) -> bool {
        if !entry.is_file {
            return false;
        }

        strip_name_prefix(&entry.name, &self.prefix).is_some()
    }
}
