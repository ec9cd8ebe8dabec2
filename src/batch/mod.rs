//! # 批量处理模块
//!
//! 扫描单个目录并对匹配前缀的文件逐个重命名。
//!
//! ## 功能
//! - 列出目录项，判断是否为普通文件
//! - 按字面前缀筛选（区分大小写）
//! - 顺序重命名，逐文件记录失败
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 调用
//! - 产出 `models::RenameOutcome`

pub mod collector;
pub mod runner;

pub use runner::RenameRunner;
