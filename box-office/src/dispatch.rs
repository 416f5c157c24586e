//! Handing a validated purchase to the payment and seat reservation services.

use crate::error::{PurchaseError, Result};
use crate::service::PurchaseEnvironment;
use crate::types::{AccountId, PurchaseOutcome};

/// Take payment, then reserve seats.
///
/// Only call this once the purchase has passed validation. Nothing is retried
/// or rolled back: if reservation fails the payment stands.
///
/// # Errors
///
/// Returns [`PurchaseError::Payment`] if the charge fails, in which case no
/// seats are requested, or [`PurchaseError::SeatReservation`] if the seats
/// cannot be reserved.
pub fn dispatch(
    env: &PurchaseEnvironment,
    account_id: AccountId,
    outcome: &PurchaseOutcome,
) -> Result<()> {
    env.payments
        .make_payment(account_id, outcome.total_price)
        .map_err(PurchaseError::Payment)?;

    env.seats
        .reserve_seat(account_id, outcome.seats_to_reserve)
        .map_err(|error| {
            tracing::error!(
                %account_id,
                amount_paid = outcome.total_price,
                %error,
                "Seat reservation failed after payment was taken"
            );
            PurchaseError::SeatReservation(error)
        })
}
