//! Domain types for the box office.
//!
//! This module contains the value objects that flow through a single purchase:
//! the raw [`TicketTypeRequest`]s supplied by the caller, the [`AggregatedCounts`]
//! derived from them, and the [`PurchaseOutcome`] handed to the collaborators.
//! None of these values outlive a call to `purchase_tickets`.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Business constants
// ============================================================================

/// Price of an adult ticket, in whole pounds.
pub const ADULT_TICKET_PRICE: i64 = 20;

/// Price of a child ticket, in whole pounds.
pub const CHILD_TICKET_PRICE: i64 = 10;

/// Infants sit on an adult's lap and are not charged.
pub const INFANT_TICKET_PRICE: i64 = 0;

/// Largest number of tickets (of any type) a single purchase may contain.
pub const MAX_TICKETS_PER_PURCHASE: i64 = 20;

// ============================================================================
// Identifiers
// ============================================================================

/// Identifier of the account paying for the tickets.
///
/// Account ids are opaque to the box office; the only check performed is that
/// the id is strictly positive (see [`AccountId::is_valid`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
    /// Creates an `AccountId` from its raw numeric value
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw numeric value
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Whether this id can belong to a real account
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Ticket requests
// ============================================================================

/// The closed set of ticket categories sold at the venue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketType {
    /// Adult ticket, occupies a seat
    Adult,
    /// Child ticket, occupies a seat
    Child,
    /// Infant ticket, sits on an adult's lap
    Infant,
}

impl TicketType {
    /// All ticket types, in display order
    pub const ALL: [Self; 3] = [Self::Adult, Self::Child, Self::Infant];

    /// Price of one ticket of this type
    #[must_use]
    pub const fn unit_price(self) -> i64 {
        match self {
            Self::Adult => ADULT_TICKET_PRICE,
            Self::Child => CHILD_TICKET_PRICE,
            Self::Infant => INFANT_TICKET_PRICE,
        }
    }

    /// Whether a ticket of this type needs a seat reserved
    #[must_use]
    pub const fn occupies_seat(self) -> bool {
        !matches!(self, Self::Infant)
    }

    /// Lowercase label used in logs and metric labels
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Adult => "adult",
            Self::Child => "child",
            Self::Infant => "infant",
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request for some number of tickets of one type.
///
/// The count is taken as supplied: zero and negative values are representable
/// and are judged by the purchase rules, not rejected on construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketTypeRequest {
    #[serde(rename = "type")]
    ticket_type: TicketType,
    no_of_tickets: i32,
}

impl TicketTypeRequest {
    /// Creates a new request
    #[must_use]
    pub const fn new(ticket_type: TicketType, no_of_tickets: i32) -> Self {
        Self {
            ticket_type,
            no_of_tickets,
        }
    }

    /// Shorthand for `n` adult tickets
    #[must_use]
    pub const fn adults(no_of_tickets: i32) -> Self {
        Self::new(TicketType::Adult, no_of_tickets)
    }

    /// Shorthand for `n` child tickets
    #[must_use]
    pub const fn children(no_of_tickets: i32) -> Self {
        Self::new(TicketType::Child, no_of_tickets)
    }

    /// Shorthand for `n` infant tickets
    #[must_use]
    pub const fn infants(no_of_tickets: i32) -> Self {
        Self::new(TicketType::Infant, no_of_tickets)
    }

    /// The requested ticket type
    #[must_use]
    pub const fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    /// The requested number of tickets
    #[must_use]
    pub const fn no_of_tickets(&self) -> i32 {
        self.no_of_tickets
    }
}

// ============================================================================
// Derived values
// ============================================================================

/// Per-type ticket totals for one purchase.
///
/// Totals are widened to `i64` so summing any number of `i32` requests
/// cannot overflow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedCounts {
    /// Adult tickets requested
    pub adults: i64,
    /// Child tickets requested
    pub children: i64,
    /// Infant tickets requested
    pub infants: i64,
}

impl AggregatedCounts {
    /// Creates counts from per-type totals
    #[must_use]
    pub const fn new(adults: i64, children: i64, infants: i64) -> Self {
        Self {
            adults,
            children,
            infants,
        }
    }

    /// Adds `count` tickets of `ticket_type`
    pub fn add(&mut self, ticket_type: TicketType, count: i64) {
        match ticket_type {
            TicketType::Adult => self.adults += count,
            TicketType::Child => self.children += count,
            TicketType::Infant => self.infants += count,
        }
    }

    /// Total for a single ticket type
    #[must_use]
    pub const fn of(&self, ticket_type: TicketType) -> i64 {
        match ticket_type {
            TicketType::Adult => self.adults,
            TicketType::Child => self.children,
            TicketType::Infant => self.infants,
        }
    }

    /// Tickets of every type
    #[must_use]
    pub const fn total_tickets(&self) -> i64 {
        self.adults + self.children + self.infants
    }
}

/// What a validated purchase costs and how many seats it needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOutcome {
    /// Amount charged to the account
    pub total_price: i64,
    /// Seats reserved for the account
    pub seats_to_reserve: i64,
}
