//! 日志初始化
//!
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::AppError;

/// 安装全局 fmt 订阅者；优先使用 `RUST_LOG`，否则使用 `default_filter`
pub fn init(default_filter: &str) -> Result<(), AppError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| AppError::Config {
            reason: format!("tracing subscriber: {e}"),
        })
}
