//! The ticket purchase entry point.
//!
//! [`TicketServiceImpl::purchase_tickets`] runs a single linear pipeline:
//!
//! ```text
//! requests ─▶ aggregate ─▶ validate ─▶ price ─▶ pay ─▶ reserve
//!                 │            │                  │        │
//!                 └────────────┴──── Err ─────────┴────────┘
//! ```
//!
//! Nothing is stored between calls. The only shared values are the
//! collaborators held by [`PurchaseEnvironment`], so one service can be used
//! from many threads as long as the collaborators allow it.

use crate::aggregate::aggregate;
use crate::collaborators::{PaymentService, SeatReservationService};
use crate::dispatch::dispatch;
use crate::error::{PurchaseError, Result};
use crate::metrics;
use crate::pricing::price;
use crate::rules::validate;
use crate::types::{AccountId, PurchaseOutcome, TicketTypeRequest};
use std::sync::Arc;

/// Services injected into the box office.
#[derive(Clone)]
pub struct PurchaseEnvironment {
    /// Payment provider
    pub payments: Arc<dyn PaymentService>,
    /// Venue seat reservation system
    pub seats: Arc<dyn SeatReservationService>,
}

impl PurchaseEnvironment {
    /// Creates a new `PurchaseEnvironment`
    #[must_use]
    pub fn new(
        payments: Arc<dyn PaymentService>,
        seats: Arc<dyn SeatReservationService>,
    ) -> Self {
        Self { payments, seats }
    }
}

impl std::fmt::Debug for PurchaseEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PurchaseEnvironment").finish_non_exhaustive()
    }
}

/// Sells tickets to an account.
pub trait TicketService {
    /// Validate, price, pay for and reserve a ticket order.
    ///
    /// `requests` may be `None`, and individual slots may be empty.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseError::InvalidPurchase`] with the first broken rule
    /// before any service is called, or the payment or reservation failure
    /// unchanged.
    fn purchase_tickets(
        &self,
        account_id: AccountId,
        requests: Option<&[Option<TicketTypeRequest>]>,
    ) -> Result<PurchaseOutcome>;
}

/// Default [`TicketService`].
#[derive(Clone, Debug)]
pub struct TicketServiceImpl {
    env: PurchaseEnvironment,
}

impl TicketServiceImpl {
    /// Creates a service that pays and reserves through `env`
    #[must_use]
    pub const fn new(env: PurchaseEnvironment) -> Self {
        Self { env }
    }

    /// Creates a service from the two collaborators
    #[must_use]
    pub fn with_services(
        payments: Arc<dyn PaymentService>,
        seats: Arc<dyn SeatReservationService>,
    ) -> Self {
        Self::new(PurchaseEnvironment::new(payments, seats))
    }

    fn run(
        &self,
        account_id: AccountId,
        requests: Option<&[Option<TicketTypeRequest>]>,
    ) -> Result<PurchaseOutcome> {
        let counts = aggregate(requests)?;
        validate(&counts, account_id)?;

        let outcome = price(&counts);
        dispatch(&self.env, account_id, &outcome)?;

        metrics::record_tickets_sold(&counts, &outcome);
        Ok(outcome)
    }
}

impl TicketService for TicketServiceImpl {
    #[tracing::instrument(skip_all, fields(account_id = %account_id))]
    fn purchase_tickets(
        &self,
        account_id: AccountId,
        requests: Option<&[Option<TicketTypeRequest>]>,
    ) -> Result<PurchaseOutcome> {
        let result = self.run(account_id, requests);

        match &result {
            Ok(outcome) => {
                tracing::info!(
                    total_price = outcome.total_price,
                    seats = outcome.seats_to_reserve,
                    "Tickets purchased"
                );
                metrics::record_purchase("completed");
            }
            Err(PurchaseError::InvalidPurchase(rejection)) => {
                metrics::record_rejection(*rejection);
            }
            Err(error) => {
                tracing::warn!(%error, "Purchase failed in an external service");
                metrics::record_purchase("failed");
            }
        }

        result
    }
}
