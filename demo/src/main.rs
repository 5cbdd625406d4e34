use async_trait::async_trait;
use cinema_application::PurchaseTicketsHandler;
use cinema_application::command::PurchaseTickets;
use cinema_application::config::AppConfig;
use cinema_application::context::AppContext;
use cinema_application::telemetry;
use cinema_domain::domain_service::TicketPurchaseService;
use cinema_domain::error::DomainResult;
use cinema_domain::ports::{SeatReservationService, TicketPaymentService};
use cinema_domain::value_object::AccountId;
use tracing::{info, warn};

/// 仅记录日志的座位预订
struct LoggingSeatReservation;

#[async_trait]
impl SeatReservationService for LoggingSeatReservation {
    async fn reserve_seat(&self, account_id: AccountId, total_seats: u64) -> DomainResult<()> {
        info!(%account_id, total_seats, "reserve seats");
        Ok(())
    }
}

/// 仅记录日志的支付
struct LoggingPayment;

#[async_trait]
impl TicketPaymentService for LoggingPayment {
    async fn make_payment(&self, account_id: AccountId, total_amount: u64) -> DomainResult<()> {
        info!(%account_id, total_amount, "charge account");
        Ok(())
    }
}

const SAMPLE_ORDERS: &str = r#"[
    {"account_id": 1, "requests": [{"ticket_type": "ADULT", "count": 2}, {"ticket_type": "CHILD", "count": 3}]},
    {"account_id": 1, "requests": [{"ticket_type": "ADULT", "count": 2}, {"ticket_type": "INFANT", "count": 2}]},
    {"account_id": 1, "requests": [{"ticket_type": "INFANT", "count": 3}, {"ticket_type": "CHILD", "count": 3}, {"ticket_type": "ADULT", "count": 3}]},
    {"account_id": 1, "requests": [{"ticket_type": "ADULT", "count": 2}, {"ticket_type": "INFANT", "count": 3}]},
    {"account_id": 1, "requests": [{"ticket_type": "INFANT", "count": 5}, {"ticket_type": "ADULT", "count": 15}, {"ticket_type": "CHILD", "count": 2}]},
    {"account_id": 0, "requests": [{"ticket_type": "ADULT", "count": 2}]},
    {"account_id": 1, "requests": [{"ticket_type": null, "count": 3}, {"ticket_type": "ADULT", "count": -1}]}
]"#;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 用法：demo [config.toml]
    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    }
    .apply_env_overrides()?;
    telemetry::init(&config.log_filter)?;

    let handler = PurchaseTicketsHandler::new(TicketPurchaseService::with_policy(
        LoggingSeatReservation,
        LoggingPayment,
        config.policy.clone(),
    ));

    let orders: Vec<PurchaseTickets> = serde_json::from_str(SAMPLE_ORDERS)?;
    for (i, cmd) in orders.into_iter().enumerate() {
        let ctx = AppContext::builder()
            .correlation_id(format!("demo-{i}"))
            .actor_id("demo".into())
            .build();
        match handler.purchase_tickets(&ctx, cmd).await {
            Ok(receipt) => info!(
                seats = receipt.seats,
                amount = receipt.amount,
                "order {i} completed"
            ),
            Err(err) => warn!(%err, "order {i} rejected"),
        }
    }
    Ok(())
}
