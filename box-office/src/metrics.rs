//! Business metrics for the box office.
//!
//! Recorded through the `metrics` facade. The host decides whether and where
//! to export them; without an installed recorder every call is a no-op.
//!
//! # Exported Metrics
//!
//! ## Counters
//! - `box_office_purchases_total{outcome}` - Purchases by outcome (completed, rejected, failed)
//! - `box_office_rejections_total{reason}` - Rejected purchases by broken rule
//! - `box_office_tickets_sold_total{ticket_type}` - Tickets sold by type
//! - `box_office_revenue_total` - Total amount charged

use crate::error::Rejection;
use crate::types::{AggregatedCounts, PurchaseOutcome, TicketType};
use metrics::describe_counter;

/// Register descriptions for all box office metrics.
///
/// Call once at startup, before any metrics are recorded.
pub fn register_business_metrics() {
    describe_counter!(
        "box_office_purchases_total",
        "Total number of purchase attempts by outcome (completed, rejected, failed)"
    );
    describe_counter!(
        "box_office_rejections_total",
        "Total number of rejected purchases by the rule they broke"
    );
    describe_counter!(
        "box_office_tickets_sold_total",
        "Total number of tickets sold by ticket type"
    );
    describe_counter!(
        "box_office_revenue_total",
        "Total amount charged for tickets"
    );

    tracing::info!("Business metrics registered");
}

/// Record the outcome of a purchase attempt.
pub fn record_purchase(outcome: &'static str) {
    metrics::counter!("box_office_purchases_total", "outcome" => outcome).increment(1);
}

/// Record a purchase refused by a purchase rule.
pub fn record_rejection(rejection: Rejection) {
    metrics::counter!("box_office_purchases_total", "outcome" => "rejected").increment(1);
    metrics::counter!("box_office_rejections_total", "reason" => rejection.as_str()).increment(1);
    tracing::debug!(reason = rejection.as_str(), "Recorded rejection metric");
}

/// Record tickets and revenue from a completed purchase.
///
/// Only called for validated purchases, whose totals are never negative.
pub fn record_tickets_sold(counts: &AggregatedCounts, outcome: &PurchaseOutcome) {
    for ticket_type in TicketType::ALL {
        let sold = u64::try_from(counts.of(ticket_type)).unwrap_or_default();
        metrics::counter!("box_office_tickets_sold_total", "ticket_type" => ticket_type.as_str())
            .increment(sold);
    }

    let revenue = u64::try_from(outcome.total_price).unwrap_or_default();
    metrics::counter!("box_office_revenue_total").increment(revenue);
    tracing::debug!(revenue, "Recorded tickets_sold metric");
}
