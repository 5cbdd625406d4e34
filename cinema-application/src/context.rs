use bon::Builder;

/// 应用层上下文（Application Context）
///
/// 承载一次应用层调用（命令/查询）所需的横切信息，例如：
/// - 关联追踪 `correlation_id`，写入处理器的 tracing span；
/// - 执行者 `actor_id`；
/// - 幂等键（`idempotency_key`）：同样写入 span，供基础设施层识别重复提交。
///
/// 典型用法：
/// ```rust
/// use cinema_application::context::AppContext;
///
/// let ctx = AppContext::builder()
///     .correlation_id("cor-123".into())
///     .actor_id("u-1".into())
///     .maybe_idempotency_key(Some("idem-xyz".into()))
///     .build();
/// assert_eq!(ctx.correlation_id(), Some("cor-123"));
/// ```
#[derive(Builder, Clone, Debug, Default)]
pub struct AppContext {
    correlation_id: Option<String>,
    actor_id: Option<String>,
    idempotency_key: Option<String>,
}

impl AppContext {
    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    pub fn actor_id(&self) -> Option<&str> {
        self.actor_id.as_deref()
    }

    pub fn idempotency_key(&self) -> Option<&str> {
        self.idempotency_key.as_deref()
    }
}
