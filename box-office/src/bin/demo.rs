//! Box Office Demo
//!
//! Runs a handful of group purchases through the box office with logging
//! payment and seat reservation services, showing accepted orders and each
//! kind of rejection.
//!
//! # Usage
//!
//! ```bash
//! # Built-in scenarios
//! cargo run --bin demo
//!
//! # A single order of your own (null entries are empty slots)
//! BOX_OFFICE_ORDER='[{"type":"ADULT","noOfTickets":2},null,{"type":"INFANT","noOfTickets":1}]' \
//!     cargo run --bin demo
//!
//! # See a declined payment propagate
//! BOX_OFFICE_DECLINE_PAYMENTS=true cargo run --bin demo
//! ```

use box_office::{
    AccountId, Config, LoggingPaymentService, LoggingSeatReservationService, TicketService,
    TicketServiceImpl, TicketTypeRequest, metrics::register_business_metrics,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type Order = Vec<Option<TicketTypeRequest>>;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    let config = Config::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    register_business_metrics();

    let payments = if config.decline_payments {
        LoggingPaymentService::declining()
    } else {
        LoggingPaymentService::new()
    };
    let service = TicketServiceImpl::with_services(
        payments.shared(),
        LoggingSeatReservationService::new().shared(),
    );
    let account_id = AccountId::new(config.account_id);

    println!("\n🎟️  ============================================");
    println!("   Box Office - Group Purchase Demo");
    println!("============================================\n");

    let orders: Vec<(String, Order)> = match &config.order {
        Some(json) => vec![(
            "Order from BOX_OFFICE_ORDER".to_string(),
            serde_json::from_str(json)?,
        )],
        None => scenarios(),
    };

    for (title, order) in &orders {
        println!("▶ {title}");
        match service.purchase_tickets(account_id, Some(order.as_slice())) {
            Ok(outcome) => println!(
                "  ✓ charged {} for {} seat(s)\n",
                outcome.total_price, outcome.seats_to_reserve
            ),
            Err(error) => println!("  ✗ {error}\n"),
        }
    }

    Ok(())
}

fn scenarios() -> Vec<(String, Order)> {
    use TicketTypeRequest as T;

    vec![
        ("One adult".to_string(), vec![Some(T::adults(1))]),
        ("One child on their own".to_string(), vec![Some(T::children(1))]),
        (
            "Two infants, one adult".to_string(),
            vec![Some(T::infants(2)), Some(T::adults(1))],
        ),
        (
            "Family of six".to_string(),
            vec![Some(T::infants(1)), Some(T::adults(2)), Some(T::children(3))],
        ),
        (
            "Party of twenty-four".to_string(),
            vec![Some(T::adults(12)), Some(T::infants(4)), Some(T::children(8))],
        ),
        (
            "Large family with empty slots".to_string(),
            vec![
                Some(T::infants(3)),
                None,
                Some(T::adults(5)),
                None,
                Some(T::children(6)),
            ],
        ),
    ]
}
