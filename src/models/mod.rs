//! # 数据模型模块
//!
//! 定义一次重命名批处理的汇总结果。
//!
//! ## 依赖关系
//! - 被 `batch/` 构建，被 `report/` 消费
//! - 子模块: outcome

pub mod outcome;

pub use outcome::{RenameFailure, RenameOutcome};
