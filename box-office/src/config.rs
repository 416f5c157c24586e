//! Configuration for the box office demo.
//!
//! Loads configuration from environment variables with sensible defaults.
//! Ticket prices and the group size limit are business constants in
//! [`types`](crate::types) and are intentionally absent here.

use std::env;

/// Account used when `BOX_OFFICE_ACCOUNT_ID` is not set.
pub const DEFAULT_ACCOUNT_ID: i64 = 4_500_821;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Account charged for the demo purchases
    pub account_id: i64,
    /// Make the logging payment service decline every charge
    pub decline_payments: bool,
    /// Optional JSON order to purchase instead of the built-in scenarios
    pub order: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            account_id: DEFAULT_ACCOUNT_ID,
            decline_payments: false,
            order: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable variables fall back to their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            account_id: lookup("BOX_OFFICE_ACCOUNT_ID")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.account_id),
            decline_payments: lookup("BOX_OFFICE_DECLINE_PAYMENTS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.decline_payments),
            order: lookup("BOX_OFFICE_ORDER").filter(|s| !s.trim().is_empty()),
        }
    }
}
