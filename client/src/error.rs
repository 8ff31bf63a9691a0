//! Governance client error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Malformed delegatee identity or non-finite/negative amount.
    /// Raised before any store mutation; the caller must correct the
    /// input and resubmit.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Network or program rejection in remote mode. Surfaced as a generic
    /// failure; there is no automatic retry.
    #[error("remote failure: {0}")]
    Remote(String),

    /// A remote call was attempted without a bound caller identity.
    #[error("no caller identity bound to the session")]
    NoCaller,
}
