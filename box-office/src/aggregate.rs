//! Folding raw ticket requests into per-type totals.
//!
//! Callers may pass empty slots (`None`) anywhere in the request list; they are
//! skipped. Counts are summed as given, so zero and negative requests reach
//! the purchase rules unchanged.

use crate::error::{Rejection, Result};
use crate::types::{AggregatedCounts, TicketTypeRequest};

/// Sum a request list into [`AggregatedCounts`].
///
/// # Errors
///
/// Returns [`Rejection::NoValidRequests`] when the list itself is missing, or
/// when it holds exactly one slot and that slot is empty. Longer lists made
/// only of empty slots aggregate to zero and are left to the purchase rules.
pub fn aggregate(requests: Option<&[Option<TicketTypeRequest>]>) -> Result<AggregatedCounts> {
    let requests = match requests {
        None | Some([None]) => return Err(Rejection::NoValidRequests.into()),
        Some(requests) => requests,
    };

    let counts = requests
        .iter()
        .flatten()
        .fold(AggregatedCounts::default(), |mut counts, request| {
            counts.add(request.ticket_type(), i64::from(request.no_of_tickets()));
            counts
        });

    tracing::debug!(
        slots = requests.len(),
        adults = counts.adults,
        children = counts.children,
        infants = counts.infants,
        "Ticket requests aggregated"
    );

    Ok(counts)
}
