//! # 报告语言
//!
//! 每种语言一套固定文案。
//!
//! ## 依赖关系
//! - 被 `report/mod.rs` 使用
//! - `cli/rename.rs` 通过 `clap::ValueEnum` 暴露为 `--lang`

use clap::ValueEnum;
use std::path::Path;

/// 报告语言
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum Language {
    /// English
    #[default]
    En,
    /// Русский
    Ru,
    /// 中文
    Zh,
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::En => write!(f, "en"),
            Language::Ru => write!(f, "ru"),
            Language::Zh => write!(f, "zh"),
        }
    }
}

impl Language {
    /// 目录为空
    pub fn no_files(&self) -> &'static str {
        match self {
            Language::En => "No files found in the folder",
            Language::Ru => "В папке не найдены файлы",
            Language::Zh => "文件夹中没有找到任何文件",
        }
    }

    /// 没有以前缀开头的文件
    pub fn no_prefix_match(&self, prefix: &str) -> String {
        match self {
            Language::En => format!("No files with prefix {} found in the folder", prefix),
            Language::Ru => format!("В папке отсутствуют файлы с префиксом {}", prefix),
            Language::Zh => format!("文件夹中没有以 {} 开头的文件", prefix),
        }
    }

    /// 汇总行
    pub fn summary(&self, folder: &Path, found: usize, prefix: &str, renamed: usize) -> String {
        let folder = folder.display();
        match self {
            Language::En => format!(
                "In folder {} found {} {} with prefix \"{}\", successfully renamed {}.",
                folder,
                found,
                if found == 1 { "file" } else { "files" },
                prefix,
                renamed
            ),
            Language::Ru => format!(
                "В папке {} найдено {} файлов с префиксом \"{}\", успешно переименовано {}.",
                folder, found, prefix, renamed
            ),
            Language::Zh => format!(
                "在文件夹 {} 中找到 {} 个以 \"{}\" 开头的文件，成功重命名 {} 个。",
                folder, found, prefix, renamed
            ),
        }
    }

    /// 错误块标题
    pub fn errors_header(&self) -> &'static str {
        match self {
            Language::En => "The following errors occurred:",
            Language::Ru => "В ходе выполнения возникли следующие ошибки:",
            Language::Zh => "执行过程中出现以下错误：",
        }
    }
}
