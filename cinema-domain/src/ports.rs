//! 外部协作方端口
//!
//! 座位预订与支付由外部服务实现，领域层只消费其契约。
//! 实现方以 `DomainError::SeatReservation` / `DomainError::Payment` 报告失败，
//! 领域服务不做包装或转换。
//!
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::DomainResult;
use crate::value_object::AccountId;

/// 座位预订服务
#[async_trait]
pub trait SeatReservationService: Send + Sync {
    /// 为非婴儿持票人预订 `total_seats` 个座位
    async fn reserve_seat(&self, account_id: AccountId, total_seats: u64) -> DomainResult<()>;
}

/// 支付服务
#[async_trait]
pub trait TicketPaymentService: Send + Sync {
    /// 扣取 `total_amount`
    async fn make_payment(&self, account_id: AccountId, total_amount: u64) -> DomainResult<()>;
}

#[async_trait]
impl<T> SeatReservationService for Arc<T>
where
    T: SeatReservationService + ?Sized,
{
    async fn reserve_seat(&self, account_id: AccountId, total_seats: u64) -> DomainResult<()> {
        (**self).reserve_seat(account_id, total_seats).await
    }
}

#[async_trait]
impl<T> TicketPaymentService for Arc<T>
where
    T: TicketPaymentService + ?Sized,
{
    async fn make_payment(&self, account_id: AccountId, total_amount: u64) -> DomainResult<()> {
        (**self).make_payment(account_id, total_amount).await
    }
}
