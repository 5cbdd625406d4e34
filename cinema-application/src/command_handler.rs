use async_trait::async_trait;
use cinema_domain::domain_service::{DomainService, TicketPurchaseService};
use cinema_domain::error::DomainError;
use cinema_domain::ports::{SeatReservationService, TicketPaymentService};
use tracing::{Instrument, info_span, warn};

use crate::command::{Command, PurchaseTickets};
use crate::context::AppContext;
use crate::dto::PurchaseReceiptDto;
use crate::error::AppError;
use crate::validation::validate_order;

#[async_trait]
pub trait CommandHandler<C>: Send + Sync
where
    C: Command,
{
    async fn handle(&self, ctx: &AppContext, cmd: C) -> Result<(), AppError>;
}

/// 购票处理器：购票流程的入口
///
/// 先做字段校验（账户、请求列表、逐条票种与数量），
/// 再交给 [`TicketPurchaseService`] 汇总、检查业务规则并调用协作方。
/// 同一处理器也应答 [`QuoteTickets`](crate::query::QuoteTickets) 查询。
pub struct PurchaseTicketsHandler<R, P> {
    service: TicketPurchaseService<R, P>,
}

impl<R, P> PurchaseTicketsHandler<R, P>
where
    R: SeatReservationService,
    P: TicketPaymentService,
{
    pub fn new(service: TicketPurchaseService<R, P>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &TicketPurchaseService<R, P> {
        &self.service
    }

    /// 执行购票并返回结算结果
    pub async fn purchase_tickets(
        &self,
        ctx: &AppContext,
        cmd: PurchaseTickets,
    ) -> Result<PurchaseReceiptDto, AppError> {
        let span = info_span!(
            "command",
            name = PurchaseTickets::NAME,
            correlation_id = ctx.correlation_id().unwrap_or_default(),
            idempotency_key = ctx.idempotency_key().unwrap_or_default(),
        );

        async move {
            let order = validate_order(cmd.account_id, cmd.requests.as_deref())
                .inspect_err(log_rejection)?;
            let receipt = self.service.execute(order).await?;
            Ok::<_, AppError>(receipt.into())
        }
        .instrument(span)
        .await
    }
}

#[async_trait]
impl<R, P> CommandHandler<PurchaseTickets> for PurchaseTicketsHandler<R, P>
where
    R: SeatReservationService,
    P: TicketPaymentService,
{
    async fn handle(&self, ctx: &AppContext, cmd: PurchaseTickets) -> Result<(), AppError> {
        self.purchase_tickets(ctx, cmd).await.map(|_| ())
    }
}

/// 字段校验失败时记录原因码
pub(crate) fn log_rejection(err: &DomainError) {
    if let Some(reason) = err.rejection_reason() {
        warn!(%reason, %err, "purchase rejected");
    }
}
