//! External services the box office hands a validated purchase to.
//!
//! Payment and seat reservation live outside this crate. The box office only
//! depends on the [`PaymentService`] and [`SeatReservationService`] traits,
//! and the host injects concrete implementations through
//! [`PurchaseEnvironment`](crate::service::PurchaseEnvironment).
//!
//! Both calls are synchronous and return nothing on success. Any timeout or
//! cancellation policy belongs to the implementation, not to the caller.

use crate::types::AccountId;
use std::sync::Arc;
use thiserror::Error;

/// Payment service error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// The charge was refused
    #[error("payment declined: {reason}")]
    Declined {
        /// Decline reason
        reason: String,
    },
    /// The payment provider could not be reached
    #[error("payment service unavailable: {message}")]
    Unavailable {
        /// Error message
        message: String,
    },
}

/// Seat reservation service error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReservationError {
    /// The venue refused the reservation
    #[error("seat reservation rejected: {reason}")]
    Rejected {
        /// Rejection reason
        reason: String,
    },
    /// The reservation system could not be reached
    #[error("seat reservation service unavailable: {message}")]
    Unavailable {
        /// Error message
        message: String,
    },
}

/// Charges an account for tickets.
pub trait PaymentService: Send + Sync {
    /// Take `amount_to_pay` from the account
    ///
    /// # Errors
    ///
    /// Returns error if the charge fails
    fn make_payment(&self, account_id: AccountId, amount_to_pay: i64) -> Result<(), PaymentError>;
}

/// Holds seats at the venue for an account.
pub trait SeatReservationService: Send + Sync {
    /// Reserve `total_seats_to_allocate` seats for the account
    ///
    /// # Errors
    ///
    /// Returns error if the seats cannot be reserved
    fn reserve_seat(
        &self,
        account_id: AccountId,
        total_seats_to_allocate: i64,
    ) -> Result<(), ReservationError>;
}

/// Payment service that logs each charge.
///
/// Stands in for a real payment provider in development. With
/// `decline_all` set, every charge is refused instead.
#[derive(Clone, Debug, Default)]
pub struct LoggingPaymentService {
    decline_all: bool,
}

impl LoggingPaymentService {
    /// Creates a service that accepts every charge
    #[must_use]
    pub const fn new() -> Self {
        Self { decline_all: false }
    }

    /// Creates a service that declines every charge
    #[must_use]
    pub const fn declining() -> Self {
        Self { decline_all: true }
    }

    /// Creates an Arc-wrapped instance for sharing
    #[must_use]
    pub fn shared(self) -> Arc<dyn PaymentService> {
        Arc::new(self)
    }
}

impl PaymentService for LoggingPaymentService {
    fn make_payment(&self, account_id: AccountId, amount_to_pay: i64) -> Result<(), PaymentError> {
        if self.decline_all {
            tracing::warn!(%account_id, amount_to_pay, "Payment declined");
            return Err(PaymentError::Declined {
                reason: "declined by configuration".to_string(),
            });
        }

        tracing::info!(%account_id, amount_to_pay, "Payment taken");
        Ok(())
    }
}

/// Seat reservation service that logs each reservation and always succeeds.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingSeatReservationService;

impl LoggingSeatReservationService {
    /// Creates a new logging reservation service
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Creates an Arc-wrapped instance for sharing
    #[must_use]
    pub fn shared(self) -> Arc<dyn SeatReservationService> {
        Arc::new(self)
    }
}

impl SeatReservationService for LoggingSeatReservationService {
    fn reserve_seat(
        &self,
        account_id: AccountId,
        total_seats_to_allocate: i64,
    ) -> Result<(), ReservationError> {
        tracing::info!(%account_id, total_seats_to_allocate, "Seats reserved");
        Ok(())
    }
}
