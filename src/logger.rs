//! 日志初始化

use tracing_subscriber::EnvFilter;

/// 初始化 tracing 日志
///
/// `RUST_LOG` 优先；否则默认 `info`，详细模式为 `debug`。重复调用不会报错。
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
