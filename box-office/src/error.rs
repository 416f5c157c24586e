//! Error types for ticket purchases.

use crate::collaborators::{PaymentError, ReservationError};
use thiserror::Error;

/// Result type for box office operations
pub type Result<T> = std::result::Result<T, PurchaseError>;

/// Why a purchase request was refused before any money moved.
///
/// The rules that produce these are evaluated in a fixed order and only the
/// first one violated is reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum Rejection {
    /// The request list was missing, or held a single empty slot
    #[error("no valid ticket type request was provided")]
    NoValidRequests,

    /// Account id is zero or negative
    #[error("account not authentic: account ids must be positive")]
    AccountNotAuthentic,

    /// Child or infant tickets without an adult ticket
    #[error("no adult present: child and infant tickets require an adult ticket")]
    NoAdultPresent,

    /// More infants than adults to hold them
    ///
    /// Also covers a negative adult total, which any non-negative infant
    /// total outnumbers.
    #[error("too many infants: each infant must sit on an adult's lap")]
    TooManyInfants,

    /// Over the per-purchase ticket limit
    #[error("group too large: at most 20 tickets can be purchased at once")]
    GroupTooLarge,

    /// A ticket type summed to a negative total
    #[error("negative ticket count: ticket totals cannot be below zero")]
    NegativeTicketCount,
}

impl Rejection {
    /// Short label used in logs and metric labels
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoValidRequests => "no_valid_requests",
            Self::AccountNotAuthentic => "account_not_authentic",
            Self::NoAdultPresent => "no_adult_present",
            Self::TooManyInfants => "too_many_infants",
            Self::GroupTooLarge => "group_too_large",
            Self::NegativeTicketCount => "negative_ticket_count",
        }
    }
}

/// Errors returned by `purchase_tickets`
#[derive(Debug, Error)]
pub enum PurchaseError {
    /// The request broke a purchase rule; no collaborator was called
    #[error("invalid purchase: {0}")]
    InvalidPurchase(Rejection),

    /// The payment service failed
    #[error("payment failed")]
    Payment(#[source] PaymentError),

    /// The seat reservation service failed after payment was taken
    #[error("seat reservation failed")]
    SeatReservation(#[source] ReservationError),
}

impl PurchaseError {
    /// The rule that was broken, if this is a validation failure
    #[must_use]
    pub const fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::InvalidPurchase(rejection) => Some(*rejection),
            Self::Payment(_) | Self::SeatReservation(_) => None,
        }
    }
}

impl From<Rejection> for PurchaseError {
    fn from(rejection: Rejection) -> Self {
        Self::InvalidPurchase(rejection)
    }
}
