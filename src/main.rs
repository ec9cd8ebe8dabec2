//! # unprefix - 批量去除文件名前缀
//!
//! 在单个目录内，把以指定前缀开头的文件改名：去掉前缀，或替换为另一个字符串。
//! 结束后打印一条本地化的汇总报告。
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/   (列目录、筛选、重命名)
//!   │     ├── models/  (结果模型)
//!   │     └── report/  (报告格式化与多语言文案)
//!   ├── utils/      (输出与日志)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod report;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    utils::logging::init();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.rename) {
        utils::output::print_error(&utils::output::error_chain(&e));
        std::process::exit(1);
    }
}
