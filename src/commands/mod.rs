//! # 命令执行模块
//!
//! 实现重命名命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `report/`, `utils/`
//! - 子模块: rename

pub mod rename;

use crate::cli::rename::RenameArgs;
use crate::error::Result;

/// 执行命令
pub fn run(args: RenameArgs) -> Result<()> {
    rename::execute(args)
}
