//! Property-based testing strategies using proptest.
//!
//! Strategies generate raw input the way callers might send it: counts that
//! can be zero or negative, and request lists with empty slots.

use box_office::{AccountId, TicketType, TicketTypeRequest};
use proptest::prelude::*;

/// Any ticket type
pub fn ticket_type() -> impl Strategy<Value = TicketType> {
    prop_oneof![
        Just(TicketType::Adult),
        Just(TicketType::Child),
        Just(TicketType::Infant),
    ]
}

/// A request whose count lies in `counts`
pub fn ticket_request_in(
    counts: std::ops::RangeInclusive<i32>,
) -> impl Strategy<Value = TicketTypeRequest> {
    (ticket_type(), counts)
        .prop_map(|(ticket_type, count)| TicketTypeRequest::new(ticket_type, count))
}

/// A request with a small count, including zero and negatives
pub fn ticket_request() -> impl Strategy<Value = TicketTypeRequest> {
    ticket_request_in(-3..=12)
}

/// A request list of up to `max_len` slots, roughly one in five empty
pub fn request_slots(
    request: impl Strategy<Value = TicketTypeRequest>,
    max_len: usize,
) -> impl Strategy<Value = Vec<Option<TicketTypeRequest>>> {
    prop::collection::vec(prop::option::weighted(0.8, request), 0..=max_len)
}

/// A request list with non-negative counts, as a well-behaved caller sends
pub fn well_formed_slots() -> impl Strategy<Value = Vec<Option<TicketTypeRequest>>> {
    request_slots(ticket_request_in(0..=12), 8)
}

/// An account id that passes the authenticity check
pub fn valid_account_id() -> impl Strategy<Value = AccountId> {
    (1..=i64::MAX).prop_map(AccountId::new)
}

/// An account id that fails the authenticity check
pub fn invalid_account_id() -> impl Strategy<Value = AccountId> {
    (i64::MIN..=0).prop_map(AccountId::new)
}
