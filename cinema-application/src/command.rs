use serde::{Deserialize, Serialize};

use crate::dto::TicketRequestDto;

/// 应用层命令（Command）
///
/// 表达“意图”的写操作请求，通常会修改领域状态或触发外部副作用。
/// - 不返回业务数据，仅表达执行结果（成功/失败）。
/// - 与 [`Query`](crate::query::Query) 相对，`Command` 应避免读写混用。
///
/// 关联常量：
/// - `NAME`：命令的稳定名称，用于日志、追踪与路由。避免依赖 `type_name::<T>()`。
pub trait Command: Send + Sync + 'static {
    /// 命令的稳定名称（建议常量字符串，不随重构变化）
    const NAME: &'static str;
}

/// 购票命令
///
/// 账户与请求列表都可能缺失（例如 JSON 中的 `null`），缺失由校验环节报告。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PurchaseTickets {
    #[serde(default)]
    pub account_id: Option<i64>,
    #[serde(default)]
    pub requests: Option<Vec<TicketRequestDto>>,
}

impl PurchaseTickets {
    pub fn new(account_id: i64, requests: Vec<TicketRequestDto>) -> Self {
        Self {
            account_id: Some(account_id),
            requests: Some(requests),
        }
    }
}

impl Command for PurchaseTickets {
    const NAME: &'static str = "purchase_tickets";
}
