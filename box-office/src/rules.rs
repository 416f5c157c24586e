//! Purchase rules.
//!
//! Rules run in a fixed order and the first one broken is the one reported:
//!
//! 1. the account id must be positive
//! 2. at least one adult ticket
//! 3. no more infants than adults
//! 4. no more than [`MAX_TICKETS_PER_PURCHASE`] tickets in total
//! 5. no ticket type may total below zero
//!
//! A negative adult total is outnumbered by any non-negative infant total, so
//! it is reported as [`Rejection::TooManyInfants`] by rule 3. Rule 5 only sees
//! it when the infant total is no higher.
//!
//! Children have no ratio limit against adults.

use crate::error::{Rejection, Result};
use crate::types::{AccountId, AggregatedCounts, MAX_TICKETS_PER_PURCHASE};

/// Check aggregated counts and the paying account against the purchase rules.
///
/// # Errors
///
/// Returns the [`Rejection`] for the first rule the purchase breaks.
pub fn validate(counts: &AggregatedCounts, account_id: AccountId) -> Result<()> {
    match first_violation(counts, account_id) {
        Some(rejection) => {
            tracing::warn!(
                %account_id,
                reason = rejection.as_str(),
                adults = counts.adults,
                children = counts.children,
                infants = counts.infants,
                "Purchase rejected"
            );
            Err(rejection.into())
        }
        None => Ok(()),
    }
}

fn first_violation(counts: &AggregatedCounts, account_id: AccountId) -> Option<Rejection> {
    if !account_id.is_valid() {
        return Some(Rejection::AccountNotAuthentic);
    }

    // Also catches the all-zero purchase.
    if counts.adults == 0 {
        return Some(Rejection::NoAdultPresent);
    }

    if counts.infants > counts.adults {
        return Some(Rejection::TooManyInfants);
    }

    if counts.total_tickets() > MAX_TICKETS_PER_PURCHASE {
        return Some(Rejection::GroupTooLarge);
    }

    if counts.adults < 0 || counts.children < 0 || counts.infants < 0 {
        return Some(Rejection::NegativeTicketCount);
    }

    None
}
