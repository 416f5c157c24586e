//! Ticket pricing.

use crate::types::{AggregatedCounts, PurchaseOutcome, TicketType};

/// Price a purchase and count the seats it needs.
///
/// Infants are free and sit on an adult's lap, so they add nothing to either
/// figure.
#[must_use]
pub fn price(counts: &AggregatedCounts) -> PurchaseOutcome {
    let (total_price, seats_to_reserve) = TicketType::ALL
        .into_iter()
        .fold((0, 0), |(total, seats), ticket_type| {
            let count = counts.of(ticket_type);
            let seats = if ticket_type.occupies_seat() {
                seats + count
            } else {
                seats
            };
            (total + count * ticket_type.unit_price(), seats)
        });

    PurchaseOutcome {
        total_price,
        seats_to_reserve,
    }
}
