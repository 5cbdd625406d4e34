use serde::{Deserialize, Serialize};

use crate::dto::{Dto, PurchaseReceiptDto, TicketRequestDto};

/// 应用层查询（Query）
///
/// 表达只读意图，不改变领域状态，也不触发外部副作用。
/// - 结果返回 [`Dto`](crate::dto::Dto)；
/// - 与 [`Command`](crate::command::Command) 相对，`Query` 应避免副作用。
pub trait Query: Send + Sync + 'static {
    /// 查询的稳定名称（建议常量字符串，不随重构变化）
    const NAME: &'static str;

    /// 查询返回的数据传输对象（序列化友好、与领域模型解耦）
    type Dto: Dto;
}

/// 购票报价：执行与购票相同的校验并计算座位数与金额，但不预订、不扣款
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuoteTickets {
    #[serde(default)]
    pub account_id: Option<i64>,
    #[serde(default)]
    pub requests: Option<Vec<TicketRequestDto>>,
}

impl Query for QuoteTickets {
    const NAME: &'static str = "quote_tickets";
    type Dto = PurchaseReceiptDto;
}
