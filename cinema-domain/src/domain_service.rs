//! 领域服务（Domain Service）
//!
//! 封装不属于单个聚合的领域逻辑，通常依赖多个聚合或外部服务，
//! 以纯接口方式定义输入/输出与错误并支持异步执行。
//!
//! `TicketPurchaseService` 负责购票流程的后半段：按票种汇总、检查业务规则、
//! 计算座位数与金额，然后依次调用座位预订与支付。
//! 预订成功而支付失败时不做回滚，失败原样返回给调用方。
//!
use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::error::{DomainError, DomainResult, RejectionReason};
use crate::policy::TicketPolicy;
use crate::ports::{SeatReservationService, TicketPaymentService};
use crate::rules::check_purchase_rules;
use crate::tally::TicketTally;
use crate::ticket::TicketTypeRequest;
use crate::value_object::AccountId;

/// 领域服务：封装不属于单个聚合的领域逻辑
#[async_trait]
pub trait DomainService: Send + Sync {
    type Input;
    type Output;
    type Error;

    async fn execute(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;
}

/// 已通过字段校验的购票订单
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketOrder {
    account_id: AccountId,
    requests: Vec<TicketTypeRequest>,
}

impl TicketOrder {
    /// 订单至少包含一个票种请求
    pub fn new(account_id: AccountId, requests: Vec<TicketTypeRequest>) -> DomainResult<Self> {
        if requests.is_empty() {
            return Err(RejectionReason::EmptyRequest.into());
        }
        Ok(Self {
            account_id,
            requests,
        })
    }

    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    pub fn requests(&self) -> &[TicketTypeRequest] {
        &self.requests
    }
}

/// 购票结果：提交给协作方的座位数与金额
///
/// 只在全部规则通过后构造，各票种数量不超过购票上限。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PurchaseReceipt {
    pub account_id: AccountId,
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
    pub seats: u64,
    pub amount: u64,
}

/// 规则通过后收窄数量；失败说明上限检查被绕过
fn narrow<T: TryFrom<u128>>(value: u128, what: &str) -> DomainResult<T> {
    T::try_from(value).map_err(|_| DomainError::Invariant {
        reason: format!("{what} {value} out of range after purchase rules passed"),
    })
}

/// 购票领域服务
pub struct TicketPurchaseService<R, P> {
    reservation: R,
    payment: P,
    policy: TicketPolicy,
}

impl<R, P> TicketPurchaseService<R, P>
where
    R: SeatReservationService,
    P: TicketPaymentService,
{
    pub fn new(reservation: R, payment: P) -> Self {
        Self::with_policy(reservation, payment, TicketPolicy::default())
    }

    pub fn with_policy(reservation: R, payment: P, policy: TicketPolicy) -> Self {
        Self {
            reservation,
            payment,
            policy,
        }
    }

    pub fn policy(&self) -> &TicketPolicy {
        &self.policy
    }

    /// 汇总并检查规则，计算座位数与金额；不调用任何协作方
    pub fn quote(&self, order: &TicketOrder) -> DomainResult<PurchaseReceipt> {
        let tally = TicketTally::from_requests(order.requests())?;
        debug!(
            account_id = %order.account_id(),
            adults = %tally.adults(),
            children = %tally.children(),
            infants = %tally.infants(),
            "aggregated ticket requests"
        );

        check_purchase_rules(&tally, &self.policy)?;

        Ok(PurchaseReceipt {
            account_id: order.account_id(),
            adults: narrow(tally.adults(), "adult count")?,
            children: narrow(tally.children(), "child count")?,
            infants: narrow(tally.infants(), "infant count")?,
            seats: narrow(tally.seat_count(), "seat count")?,
            amount: narrow(tally.total_price(&self.policy), "amount")?,
        })
    }
}

#[async_trait]
impl<R, P> DomainService for TicketPurchaseService<R, P>
where
    R: SeatReservationService,
    P: TicketPaymentService,
{
    type Input = TicketOrder;
    type Output = PurchaseReceipt;
    type Error = DomainError;

    async fn execute(&self, order: TicketOrder) -> DomainResult<PurchaseReceipt> {
        let receipt = self.quote(&order).inspect_err(|err| {
            if let Some(reason) = err.rejection_reason() {
                warn!(account_id = %order.account_id(), %reason, "purchase rejected");
            }
        })?;

        self.reservation
            .reserve_seat(receipt.account_id, receipt.seats)
            .await
            .inspect_err(|err| {
                error!(
                    account_id = %receipt.account_id,
                    seats = receipt.seats,
                    %err,
                    "seat reservation failed"
                );
            })?;

        self.payment
            .make_payment(receipt.account_id, receipt.amount)
            .await
            .inspect_err(|err| {
                error!(
                    account_id = %receipt.account_id,
                    seats = receipt.seats,
                    amount = receipt.amount,
                    %err,
                    "payment failed after seats were reserved; reservation is not released"
                );
            })?;

        info!(
            account_id = %receipt.account_id,
            seats = receipt.seats,
            amount = receipt.amount,
            "tickets purchased"
        );
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticket::TicketType;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<String>>,
        fail_payment: bool,
    }

    #[async_trait]
    impl SeatReservationService for Recorder {
        async fn reserve_seat(&self, account_id: AccountId, total_seats: u64) -> DomainResult<()> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("reserve({account_id}, {total_seats})"));
            Ok(())
        }
    }

    #[async_trait]
    impl TicketPaymentService for Recorder {
        async fn make_payment(&self, account_id: AccountId, total_amount: u64) -> DomainResult<()> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("pay({account_id}, {total_amount})"));
            if self.fail_payment {
                return Err(DomainError::Payment {
                    reason: "declined".into(),
                });
            }
            Ok(())
        }
    }

    fn order(requests: &[(TicketType, u64)]) -> TicketOrder {
        TicketOrder::new(
            AccountId::new(1).unwrap(),
            requests
                .iter()
                .map(|&(t, n)| TicketTypeRequest::new(t, n))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_order_is_rejected() {
        let err = TicketOrder::new(AccountId::new(1).unwrap(), Vec::new()).unwrap_err();
        assert_eq!(err.rejection_reason(), Some(RejectionReason::EmptyRequest));
    }

    #[test]
    fn test_quote_does_not_touch_collaborators() {
        let recorder = Arc::new(Recorder::default());
        let service = TicketPurchaseService::new(recorder.clone(), recorder.clone());

        let receipt = service
            .quote(&order(&[(TicketType::Adult, 2), (TicketType::Child, 3)]))
            .unwrap();
        assert_eq!(receipt.seats, 5);
        assert_eq!(receipt.amount, 70);
        assert_eq!((receipt.adults, receipt.children, receipt.infants), (2, 3, 0));
        assert!(recorder.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_quote_rejects_infants_beyond_u32_adults() {
        let service = TicketPurchaseService::new(Recorder::default(), Recorder::default());
        let max = u64::from(u32::MAX);
        let err = service
            .quote(&order(&[
                (TicketType::Adult, max),
                (TicketType::Infant, max),
                (TicketType::Infant, 1),
            ]))
            .unwrap_err();
        assert_eq!(err.rejection_reason(), Some(RejectionReason::TooManyInfants));
    }

    #[tokio::test]
    async fn test_reservation_precedes_payment() {
        let recorder = Arc::new(Recorder::default());
        let service = TicketPurchaseService::new(recorder.clone(), recorder.clone());

        service
            .execute(order(&[(TicketType::Adult, 2), (TicketType::Infant, 2)]))
            .await
            .unwrap();

        assert_eq!(
            *recorder.calls.lock().unwrap(),
            vec!["reserve(1, 2)".to_string(), "pay(1, 40)".to_string()]
        );
    }

    #[tokio::test]
    async fn test_payment_failure_propagates_without_rollback() {
        let recorder = Arc::new(Recorder {
            fail_payment: true,
            ..Default::default()
        });
        let service = TicketPurchaseService::new(recorder.clone(), recorder.clone());

        let err = service
            .execute(order(&[(TicketType::Adult, 1)]))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Payment { ref reason } if reason == "declined"));
        // 预订已发生且未被撤销
        assert_eq!(
            *recorder.calls.lock().unwrap(),
            vec!["reserve(1, 1)".to_string(), "pay(1, 20)".to_string()]
        );
    }
}
