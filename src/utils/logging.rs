//! # 日志初始化
//!
//! `tracing` 诊断日志写到 stderr，由 `RUST_LOG` 控制，默认只输出警告。
//! stdout 只留给报告。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `tracing-subscriber`

use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "warn";

/// 初始化全局日志，重复调用无副作用
pub fn init() {
    let _ = fmt()
        .with_env_filter(build_env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn build_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
