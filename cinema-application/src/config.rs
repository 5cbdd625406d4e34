//! 应用配置
//!
//! 从 TOML 加载；缺失的键回落到默认值，加载后校验购票策略。
//!
//! ```toml
//! log_filter = "cinema_domain=debug,info"
//!
//! [policy]
//! adult_price = 20
//! child_price = 10
//! max_tickets = 20
//! ```
//!
use std::path::Path;

use cinema_domain::policy::TicketPolicy;
use cinema_domain::value_object::ValueObject;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// 覆盖购票上限的环境变量
pub const MAX_TICKETS_ENV: &str = "CINEMA_MAX_TICKETS";

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub policy: TicketPolicy,
    /// `RUST_LOG` 未设置时使用的过滤指令
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            policy: TicketPolicy::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, AppError> {
        let config: Self = toml::from_str(content).map_err(|e| AppError::Config {
            reason: e.to_string(),
        })?;
        config.validated()
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| AppError::Config {
            reason: format!("failed to read {}: {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// 读取环境变量覆盖
    pub fn apply_env_overrides(self) -> Result<Self, AppError> {
        let raw = std::env::var(MAX_TICKETS_ENV).ok();
        self.with_max_tickets_override(raw.as_deref())
    }

    pub fn with_max_tickets_override(mut self, raw: Option<&str>) -> Result<Self, AppError> {
        if let Some(raw) = raw {
            let max_tickets: u32 = raw.trim().parse().map_err(|e| AppError::Config {
                reason: format!("{MAX_TICKETS_ENV}={raw:?}: {e}"),
            })?;
            self.policy = self.policy.with_max_tickets(max_tickets);
        }
        self.validated()
    }

    fn validated(self) -> Result<Self, AppError> {
        self.policy.validate().map_err(|e| AppError::Config {
            reason: e.to_string(),
        })?;
        Ok(self)
    }
}
