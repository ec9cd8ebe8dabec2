//! # rename 命令实现
//!
//! 扫描目录、重命名匹配文件，并打印唯一一条报告。
//!
//! ## 依赖关系
//! - 使用 `cli/rename.rs` 定义的参数
//! - 使用 `batch/` 执行重命名
//! - 使用 `report/` 生成消息，`utils/output.rs` 打印

use crate::batch::RenameRunner;
use crate::cli::rename::RenameArgs;
use crate::error::Result;
use crate::report;
use crate::utils::output;

use tracing::info;

/// 执行 rename 命令
pub fn execute(args: RenameArgs) -> Result<()> {
    let message = build_report(&args)?;
    output::print_report(&message);
    Ok(())
}

/// 执行重命名并返回格式化后的报告
pub fn build_report(args: &RenameArgs) -> Result<String> {
    info!(
        folder = %args.folder.display(),
        prefix = %args.prefix,
        replacement = %args.to,
        "renaming files"
    );

    let outcome = RenameRunner::new(args.folder.clone(), &args.prefix)
        .with_replacement(&args.to)
        .run()?;

    Ok(report::format_report(&outcome, args.lang))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UnprefixError;
    use crate::report::Language;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn args(folder: &Path, prefix: &str, to: &str) -> RenameArgs {
        RenameArgs {
            folder: folder.to_path_buf(),
            prefix: prefix.to_string(),
            to: to.to_string(),
            lang: Language::En,
        }
    }

    #[test]
    fn test_empty_folder_report() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");

        let report = build_report(&args(temp_dir.path(), "old_", "")).unwrap();
        assert_eq!(report, "No files found in the folder");
    }

    #[test]
    fn test_no_matching_files_report() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        for name in ["a.txt", "b.txt", "c.txt"] {
            fs::write(temp_dir.path().join(name), "x").unwrap();
        }

        let report = build_report(&args(temp_dir.path(), "old_", "")).unwrap();
        assert_eq!(report, "No files with prefix old_ found in the folder");
    }

    #[test]
    fn test_successful_rename_report() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path();
        for name in ["old_a.txt", "old_b.txt", "c.txt"] {
            fs::write(path.join(name), "x").unwrap();
        }

        let report = build_report(&args(path, "old_", "")).unwrap();
        assert_eq!(
            report,
            format!(
                "In folder {} found 2 files with prefix \"old_\", successfully renamed 2.",
                path.display()
            )
        );
        assert!(path.join("a.txt").is_file());
        assert!(path.join("b.txt").is_file());
        assert!(path.join("c.txt").is_file());
    }

    #[test]
    fn test_identical_failures_share_one_group() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path();
        fs::write(path.join("old_x"), "x").unwrap();
        fs::write(path.join("old_y"), "y").unwrap();
        fs::create_dir(path.join("x")).unwrap();
        fs::create_dir(path.join("y")).unwrap();

        let report = build_report(&args(path, "old_", "")).unwrap();
        let lines: Vec<&str> = report.lines().collect();

        assert!(lines[0].contains("found 2 files"));
        assert!(lines[0].ends_with("successfully renamed 0."));
        assert_eq!(lines[1], "The following errors occurred:");
        // 一个原因行 + 两个文件行
        assert_eq!(lines.len(), 5);
        assert!(lines[2].ends_with(':'));
        assert_eq!(&lines[3..], &["\told_x", "\told_y"]);
    }

    #[test]
    fn test_missing_folder_produces_no_report() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let missing = temp_dir.path().join("missing");

        let result = build_report(&args(&missing, "old_", ""));
        assert!(matches!(
            result,
            Err(UnprefixError::DirectoryNotFound { .. })
        ));
    }
}
