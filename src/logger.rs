//! 日志初始化
//!
//! 使用 RUST_LOG 环境变量控制过滤级别，默认 info

use tracing_subscriber::EnvFilter;

/// 初始化全局日志订阅器
///
/// 重复调用时静默忽略（测试中多个用例会各自调用）
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
