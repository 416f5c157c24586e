//! Box Office - group ticket purchases for a venue
//!
//! Validates and prices a group ticket order, then hands payment and seat
//! reservation to external services. The box office itself keeps no state:
//! every call to [`TicketService::purchase_tickets`] is independent.
//!
//! # Architecture
//!
//! ```text
//!   Option<&[Option<TicketTypeRequest>]>
//!                  │
//!                  ▼
//!          ┌──────────────┐   NoValidRequests
//!          │  aggregate   │──────────────────────┐
//!          └──────────────┘                      │
//!                  │ AggregatedCounts            │
//!                  ▼                             │
//!          ┌──────────────┐   first broken rule  │
//!          │   validate   │──────────────────────┤
//!          └──────────────┘                      │
//!                  │                             ▼
//!                  ▼                       InvalidPurchase
//!          ┌──────────────┐
//!          │    price     │
//!          └──────────────┘
//!                  │ PurchaseOutcome
//!                  ▼
//!          ┌──────────────┐      ┌────────────────────────┐
//!          │   dispatch   │─────▶│ PaymentService         │
//!          │              │─────▶│ SeatReservationService │
//!          └──────────────┘      └────────────────────────┘
//! ```
//!
//! # Purchase rules
//!
//! | Ticket | Price | Seat |
//! |--------|-------|------|
//! | Adult  | 20    | yes  |
//! | Child  | 10    | yes  |
//! | Infant | 0     | no   |
//!
//! - Child and infant tickets need at least one adult ticket.
//! - Each infant sits on an adult's lap, so infants may not outnumber adults.
//! - At most 20 tickets per purchase.
//!
//! # Usage
//!
//! ```
//! use box_office::{
//!     AccountId, LoggingPaymentService, LoggingSeatReservationService, TicketService,
//!     TicketServiceImpl, TicketTypeRequest,
//! };
//!
//! let service = TicketServiceImpl::with_services(
//!     LoggingPaymentService::new().shared(),
//!     LoggingSeatReservationService::new().shared(),
//! );
//!
//! let order = [
//!     Some(TicketTypeRequest::adults(2)),
//!     Some(TicketTypeRequest::children(3)),
//!     Some(TicketTypeRequest::infants(1)),
//! ];
//! let outcome = service.purchase_tickets(AccountId::new(2_397_844), Some(&order[..]))?;
//!
//! assert_eq!(outcome.total_price, 70);
//! assert_eq!(outcome.seats_to_reserve, 5);
//! # Ok::<(), box_office::PurchaseError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod aggregate;
pub mod collaborators;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod metrics;
pub mod pricing;
pub mod rules;
pub mod service;
pub mod types;

pub use collaborators::{
    LoggingPaymentService, LoggingSeatReservationService, PaymentError, PaymentService,
    ReservationError, SeatReservationService,
};
pub use config::Config;
pub use error::{PurchaseError, Rejection, Result};
pub use service::{PurchaseEnvironment, TicketService, TicketServiceImpl};
pub use types::*;
