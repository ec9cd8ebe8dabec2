//! # 工具函数模块
//!
//! 提供美化输出与日志初始化。
//!
//! ## 依赖关系
//! - 被 `main.rs` 与 `commands/` 使用
//! - 子模块: logging, output

pub mod logging;
pub mod output;
