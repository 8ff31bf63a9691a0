//! Participant address type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque identity string for a participant on the target ledger.
///
/// Addresses are caller-supplied and never checked for on-chain existence
/// here; the only check available is a superficial plausibility test used
/// before submitting governance actions.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address(String);

impl Address {
    /// Minimum length for a string to plausibly be a ledger address.
    ///
    /// Base58-encoded account keys are 32–44 characters long.
    pub const MIN_PLAUSIBLE_LEN: usize = 32;

    /// Create an address from a raw string. No validation is performed.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this string is long enough to plausibly be a real address.
    pub fn is_plausible(&self) -> bool {
        self.0.len() >= Self::MIN_PLAUSIBLE_LEN
    }

    /// Shorten to a `prefix...suffix` display form, keeping `chars`
    /// characters on each end. Strings too short to gain anything from
    /// shortening are returned unchanged.
    pub fn short(&self, chars: usize) -> String {
        if self.0.len() <= chars * 2 + 3 {
            return self.0.clone();
        }
        match (self.0.get(..chars), self.0.get(self.0.len() - chars..)) {
            (Some(head), Some(tail)) => format!("{head}...{tail}"),
            // Non-ASCII input that does not split on a char boundary.
            _ => self.0.clone(),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Address {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Address {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_form_of_base58_address() {
        let addr = Address::new("EzYfF5kvbgTNcSMyhoMbuAGNXSBkgetnVKYNgJTyxQpP");
        assert_eq!(addr.short(4), "EzYf...xQpP");
    }

    #[test]
    fn short_form_wider_window() {
        let addr = Address::new("DEV9KnoyFcmENTgJ1S1p5KVJ1T4yeymDB3qRUKNoWZd4");
        assert_eq!(addr.short(6), "DEV9Kn...NoWZd4");
    }

    #[test]
    fn short_input_returned_unchanged() {
        let addr = Address::new("shortid");
        assert_eq!(addr.short(4), "shortid");
    }

    #[test]
    fn plausibility_check() {
        assert!(Address::new("EzYfF5kvbgTNcSMyhoMbuAGNXSBkgetnVKYNgJTyxQpP").is_plausible());
        assert!(!Address::new("shortid").is_plausible());
        assert!(!Address::new("").is_plausible());
    }
}
