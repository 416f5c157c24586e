//! # Box Office Testing
//!
//! Testing utilities and helpers for the box office.
//!
//! This crate provides:
//! - Recording mock implementations of the collaborator traits
//! - A Given-When-Then harness for purchases ([`PurchaseTest`])
//! - Property-based testing strategies
//!
//! ## Example
//!
//! ```
//! use box_office::{Rejection, TicketTypeRequest};
//! use box_office_testing::PurchaseTest;
//!
//! PurchaseTest::new()
//!     .given_account(4_500_821)
//!     .when_requests(vec![Some(TicketTypeRequest::children(1))])
//!     .then_rejected(Rejection::NoAdultPresent)
//!     .run();
//! ```

pub mod properties;
pub mod purchase_test;

/// Mock implementations of the collaborator traits
///
/// Both mocks append to a shared [`CallLog`](mocks::CallLog), so tests can
/// check which services were called, with what, and in which order.
pub mod mocks {
    #![allow(clippy::unwrap_used)] // Test infrastructure uses unwrap for simplicity
    #![allow(clippy::missing_panics_doc)]

    use box_office::{
        AccountId, PaymentError, PaymentService, PurchaseEnvironment, ReservationError,
        SeatReservationService,
    };
    use std::sync::{Arc, RwLock};

    /// A call made to one of the collaborators
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum CollaboratorCall {
        /// `make_payment` was called
        Payment {
            /// Account charged
            account_id: AccountId,
            /// Amount charged
            amount: i64,
        },
        /// `reserve_seat` was called
        SeatReservation {
            /// Account the seats are for
            account_id: AccountId,
            /// Seats requested
            seats: i64,
        },
    }

    /// Ordered record of collaborator calls, shared between mocks
    #[derive(Clone, Debug, Default)]
    pub struct CallLog {
        calls: Arc<RwLock<Vec<CollaboratorCall>>>,
    }

    impl CallLog {
        /// Create an empty call log
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        fn push(&self, call: CollaboratorCall) {
            self.calls.write().unwrap().push(call);
        }

        /// All calls so far, oldest first
        #[must_use]
        pub fn calls(&self) -> Vec<CollaboratorCall> {
            self.calls.read().unwrap().clone()
        }

        /// Number of calls so far
        #[must_use]
        pub fn len(&self) -> usize {
            self.calls.read().unwrap().len()
        }

        /// Whether no collaborator has been called
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.calls.read().unwrap().is_empty()
        }
    }

    /// Payment service that records every charge.
    ///
    /// Fails every charge with the configured error, if one is set.
    #[derive(Clone, Debug)]
    pub struct RecordingPaymentService {
        log: CallLog,
        failure: Option<PaymentError>,
    }

    impl RecordingPaymentService {
        /// Create a payment service that accepts every charge
        #[must_use]
        pub const fn new(log: CallLog) -> Self {
            Self { log, failure: None }
        }

        /// Create a payment service that fails every charge with `error`
        #[must_use]
        pub const fn failing(log: CallLog, error: PaymentError) -> Self {
            Self {
                log,
                failure: Some(error),
            }
        }
    }

    impl PaymentService for RecordingPaymentService {
        fn make_payment(
            &self,
            account_id: AccountId,
            amount_to_pay: i64,
        ) -> Result<(), PaymentError> {
            self.log.push(CollaboratorCall::Payment {
                account_id,
                amount: amount_to_pay,
            });
            self.failure.clone().map_or(Ok(()), Err)
        }
    }

    /// Seat reservation service that records every reservation.
    ///
    /// Fails every reservation with the configured error, if one is set.
    #[derive(Clone, Debug)]
    pub struct RecordingSeatReservationService {
        log: CallLog,
        failure: Option<ReservationError>,
    }

    impl RecordingSeatReservationService {
        /// Create a reservation service that accepts every reservation
        #[must_use]
        pub const fn new(log: CallLog) -> Self {
            Self { log, failure: None }
        }

        /// Create a reservation service that fails every reservation with `error`
        #[must_use]
        pub const fn failing(log: CallLog, error: ReservationError) -> Self {
            Self {
                log,
                failure: Some(error),
            }
        }
    }

    impl SeatReservationService for RecordingSeatReservationService {
        fn reserve_seat(
            &self,
            account_id: AccountId,
            total_seats_to_allocate: i64,
        ) -> Result<(), ReservationError> {
            self.log.push(CollaboratorCall::SeatReservation {
                account_id,
                seats: total_seats_to_allocate,
            });
            self.failure.clone().map_or(Ok(()), Err)
        }
    }

    /// Environment whose collaborators both succeed and record into the returned log
    #[must_use]
    pub fn recording_environment() -> (PurchaseEnvironment, CallLog) {
        let log = CallLog::new();
        let env = PurchaseEnvironment::new(
            Arc::new(RecordingPaymentService::new(log.clone())),
            Arc::new(RecordingSeatReservationService::new(log.clone())),
        );
        (env, log)
    }
}

/// Install a test-friendly tracing subscriber.
///
/// Safe to call from every test; only the first call installs anything.
/// Honours `RUST_LOG` and defaults to `box_office=debug`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "box_office=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

// Re-export commonly used items
pub use mocks::{
    CallLog, CollaboratorCall, RecordingPaymentService, RecordingSeatReservationService,
    recording_environment,
};
pub use purchase_test::PurchaseTest;
