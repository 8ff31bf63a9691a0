//! Collaborator traits shared across the workspace.
//!
//! Defined here, below both the app layer and the nullable test doubles,
//! so that implementations in either crate refer to the same trait.

use crate::Address;

/// Supplies the numeric balance shown next to the connected wallet.
///
/// The core neither computes nor validates this figure.
pub trait BalanceSource: Send + Sync {
    fn balance(&self, address: &Address) -> f64;
}

/// Sink for user-facing success and error notifications.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}
