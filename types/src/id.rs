//! Delegation record identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque unique handle for a delegation record.
///
/// Assigned by the store at creation time, stable for the record's
/// lifetime, and the sole handle for revocation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DelegationId(String);

impl DelegationId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DelegationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for DelegationId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
