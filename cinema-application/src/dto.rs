use cinema_domain::domain_service::PurchaseReceipt;
use cinema_domain::ticket::TicketType;
use serde::{Deserialize, Serialize};

/// 数据传输对象（DTO）
///
/// - 作为应用层的输出载体，面向接口/外部系统序列化友好；
/// - 与领域模型解耦，避免将领域对象直接暴露到接口层；
/// - 应保持只读特性与简洁结构，适配不同用例的返回需求。
pub trait Dto: Serialize + Send + Sync + 'static {}

/// 入站票种请求（未经校验）
///
/// 票种可能缺失或未知、数量可能为负，均由 [`crate::validation`] 收集为违规。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRequestDto {
    #[serde(default)]
    pub ticket_type: Option<String>,
    #[serde(default)]
    pub count: i64,
}

impl TicketRequestDto {
    pub fn new(ticket_type: TicketType, count: i64) -> Self {
        Self {
            ticket_type: Some(ticket_type.to_string()),
            count,
        }
    }

    /// 未指定票种的请求
    pub fn untyped(count: i64) -> Self {
        Self {
            ticket_type: None,
            count,
        }
    }
}

/// 购票结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseReceiptDto {
    pub account_id: i64,
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
    pub seats: u64,
    pub amount: u64,
}

impl Dto for PurchaseReceiptDto {}

impl From<PurchaseReceipt> for PurchaseReceiptDto {
    fn from(receipt: PurchaseReceipt) -> Self {
        Self {
            account_id: receipt.account_id.value(),
            adults: receipt.adults,
            children: receipt.children,
            infants: receipt.infants,
            seats: receipt.seats,
            amount: receipt.amount,
        }
    }
}
