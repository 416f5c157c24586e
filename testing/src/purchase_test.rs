//! Ergonomic testing utilities for purchases
//!
//! This module provides a fluent API for testing the box office with readable
//! Given-When-Then syntax. Collaborators are recording mocks, so every test can
//! also assert on what was charged and reserved.

#![allow(clippy::module_name_repetitions)]

use crate::mocks::{
    CallLog, CollaboratorCall, RecordingPaymentService, RecordingSeatReservationService,
};
use box_office::{
    AccountId, PaymentError, PurchaseEnvironment, PurchaseError, PurchaseOutcome, Rejection,
    ReservationError, TicketService, TicketServiceImpl, TicketTypeRequest,
};
use std::sync::Arc;

/// Type alias for outcome assertion functions
type OutcomeAssertion = Box<dyn FnOnce(&Result<PurchaseOutcome, PurchaseError>)>;

/// Type alias for collaborator call assertion functions
type CallAssertion = Box<dyn FnOnce(&[CollaboratorCall])>;

/// Fluent API for testing purchases with Given-When-Then syntax
///
/// # Example
///
/// ```
/// use box_office::TicketTypeRequest;
/// use box_office_testing::PurchaseTest;
///
/// PurchaseTest::new()
///     .given_account(2_397_844)
///     .when_requests(vec![
///         Some(TicketTypeRequest::infants(1)),
///         Some(TicketTypeRequest::adults(2)),
///         Some(TicketTypeRequest::children(3)),
///     ])
///     .then_succeeds(70, 5)
///     .run();
/// ```
pub struct PurchaseTest {
    account_id: Option<AccountId>,
    payment_failure: Option<PaymentError>,
    reservation_failure: Option<ReservationError>,
    requests: Option<Option<Vec<Option<TicketTypeRequest>>>>,
    outcome_assertions: Vec<OutcomeAssertion>,
    call_assertions: Vec<CallAssertion>,
}

impl PurchaseTest {
    /// Create a new purchase test
    #[must_use]
    pub const fn new() -> Self {
        Self {
            account_id: None,
            payment_failure: None,
            reservation_failure: None,
            requests: None,
            outcome_assertions: Vec::new(),
            call_assertions: Vec::new(),
        }
    }

    /// Set the paying account (Given)
    #[must_use]
    pub fn given_account(mut self, account_id: i64) -> Self {
        self.account_id = Some(AccountId::new(account_id));
        self
    }

    /// Make the payment service fail (Given)
    #[must_use]
    pub fn given_payment_failure(mut self, error: PaymentError) -> Self {
        self.payment_failure = Some(error);
        self
    }

    /// Make the seat reservation service fail (Given)
    #[must_use]
    pub fn given_reservation_failure(mut self, error: ReservationError) -> Self {
        self.reservation_failure = Some(error);
        self
    }

    /// Set the request list to purchase (When)
    #[must_use]
    pub fn when_requests(mut self, requests: Vec<Option<TicketTypeRequest>>) -> Self {
        self.requests = Some(Some(requests));
        self
    }

    /// Purchase with no request list at all (When)
    #[must_use]
    pub fn when_no_requests(mut self) -> Self {
        self.requests = Some(None);
        self
    }

    /// Add an assertion about the purchase result (Then)
    #[must_use]
    pub fn then_outcome<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&Result<PurchaseOutcome, PurchaseError>) + 'static,
    {
        self.outcome_assertions.push(Box::new(assertion));
        self
    }

    /// Add an assertion about the collaborator calls made (Then)
    #[must_use]
    pub fn then_calls<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&[CollaboratorCall]) + 'static,
    {
        self.call_assertions.push(Box::new(assertion));
        self
    }

    /// Expect success with the given price and seat count, charged and
    /// reserved in that order (Then)
    #[must_use]
    pub fn then_succeeds(self, total_price: i64, seats_to_reserve: i64) -> Self {
        self.then_outcome(move |result| {
            assert_eq!(
                result.as_ref().ok(),
                Some(&PurchaseOutcome {
                    total_price,
                    seats_to_reserve,
                }),
                "Expected a successful purchase, got {result:?}"
            );
        })
        .then_calls(move |calls| {
            assertions::assert_paid_then_reserved(calls, total_price, seats_to_reserve);
        })
    }

    /// Expect the given rejection and no collaborator calls (Then)
    #[must_use]
    pub fn then_rejected(self, rejection: Rejection) -> Self {
        self.then_outcome(move |result| {
            assert_eq!(
                result.as_ref().err().and_then(PurchaseError::rejection),
                Some(rejection),
                "Expected rejection {rejection:?}, got {result:?}"
            );
        })
        .then_calls(assertions::assert_no_calls)
    }

    /// Run the test and execute all assertions
    ///
    /// # Panics
    ///
    /// Panics if the account or requests are not set, or if any assertions fail.
    #[allow(clippy::panic)] // Test code can panic
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self) {
        let account_id = self
            .account_id
            .expect("Account must be set with given_account()");

        let requests = self
            .requests
            .expect("Requests must be set with when_requests() or when_no_requests()");

        let log = CallLog::new();
        let payments = match self.payment_failure {
            Some(error) => RecordingPaymentService::failing(log.clone(), error),
            None => RecordingPaymentService::new(log.clone()),
        };
        let seats = match self.reservation_failure {
            Some(error) => RecordingSeatReservationService::failing(log.clone(), error),
            None => RecordingSeatReservationService::new(log.clone()),
        };
        let service =
            TicketServiceImpl::new(PurchaseEnvironment::new(Arc::new(payments), Arc::new(seats)));

        // Execute purchase
        let result = service.purchase_tickets(account_id, requests.as_deref());
        let calls = log.calls();

        // Run outcome assertions
        for assertion in self.outcome_assertions {
            assertion(&result);
        }

        // Run call assertions
        for assertion in self.call_assertions {
            assertion(&calls);
        }
    }
}

impl Default for PurchaseTest {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper assertions for collaborator calls
pub mod assertions {
    use crate::mocks::CollaboratorCall;

    /// Assert that no collaborator was called
    ///
    /// # Panics
    ///
    /// Panics if any call was made.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_no_calls(calls: &[CollaboratorCall]) {
        assert!(
            calls.is_empty(),
            "Expected no collaborator calls, but found {}: {:?}",
            calls.len(),
            calls
        );
    }

    /// Assert exactly one payment of `amount` followed by one reservation of `seats`
    ///
    /// # Panics
    ///
    /// Panics if the calls differ in number, order, or values.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_paid_then_reserved(calls: &[CollaboratorCall], amount: i64, seats: i64) {
        match calls {
            [
                CollaboratorCall::Payment {
                    account_id: paid_by,
                    amount: paid,
                },
                CollaboratorCall::SeatReservation {
                    account_id: reserved_for,
                    seats: reserved,
                },
            ] => {
                assert_eq!(*paid, amount, "Unexpected payment amount");
                assert_eq!(*reserved, seats, "Unexpected seat count");
                assert_eq!(paid_by, reserved_for, "Payment and reservation accounts differ");
            }
            other => panic!("Expected payment then reservation, but found {other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purchase_test_success() {
        PurchaseTest::new()
            .given_account(4_500_821)
            .when_requests(vec![Some(TicketTypeRequest::adults(1))])
            .then_succeeds(20, 1)
            .run();
    }

    #[test]
    fn test_purchase_test_rejection() {
        PurchaseTest::new()
            .given_account(4_500_821)
            .when_no_requests()
            .then_rejected(Rejection::NoValidRequests)
            .run();
    }

    #[test]
    fn test_purchase_test_payment_failure() {
        PurchaseTest::new()
            .given_account(4_500_821)
            .given_payment_failure(PaymentError::Unavailable {
                message: "timeout".to_string(),
            })
            .when_requests(vec![Some(TicketTypeRequest::adults(1))])
            .then_outcome(|result| {
                assert!(matches!(result, Err(PurchaseError::Payment(_))));
            })
            .then_calls(|calls| assert_eq!(calls.len(), 1))
            .run();
    }

    #[test]
    fn test_assertions_no_calls() {
        assertions::assert_no_calls(&[]);
    }
}
