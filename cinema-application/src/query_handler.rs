use async_trait::async_trait;
use cinema_domain::ports::{SeatReservationService, TicketPaymentService};
use tracing::{debug, info_span};

use crate::command_handler::{PurchaseTicketsHandler, log_rejection};
use crate::context::AppContext;
use crate::dto::PurchaseReceiptDto;
use crate::error::AppError;
use crate::query::{Query, QuoteTickets};
use crate::validation::validate_order;

#[async_trait]
pub trait QueryHandler<Q>: Send + Sync
where
    Q: Query,
{
    async fn handle(&self, ctx: &AppContext, q: Q) -> Result<Q::Dto, AppError>;
}

impl<R, P> PurchaseTicketsHandler<R, P>
where
    R: SeatReservationService,
    P: TicketPaymentService,
{
    /// 报价：与购票相同的校验与计算，不调用任何协作方
    pub fn quote_tickets(
        &self,
        ctx: &AppContext,
        q: &QuoteTickets,
    ) -> Result<PurchaseReceiptDto, AppError> {
        let _guard = info_span!(
            "query",
            name = QuoteTickets::NAME,
            correlation_id = ctx.correlation_id().unwrap_or_default(),
            idempotency_key = ctx.idempotency_key().unwrap_or_default(),
        )
        .entered();

        let order =
            validate_order(q.account_id, q.requests.as_deref()).inspect_err(log_rejection)?;
        let receipt = self.service().quote(&order).inspect_err(log_rejection)?;
        debug!(seats = receipt.seats, amount = receipt.amount, "quoted");
        Ok(receipt.into())
    }
}

#[async_trait]
impl<R, P> QueryHandler<QuoteTickets> for PurchaseTicketsHandler<R, P>
where
    R: SeatReservationService,
    P: TicketPaymentService,
{
    async fn handle(
        &self,
        ctx: &AppContext,
        q: QuoteTickets,
    ) -> Result<PurchaseReceiptDto, AppError> {
        self.quote_tickets(ctx, &q)
    }
}
