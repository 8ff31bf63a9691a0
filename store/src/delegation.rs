//! The delegation store contract.

use august_types::{Address, Delegation, DelegationId};

/// Authoritative registry of delegation records for the lifetime of the
/// process.
///
/// All three operations are infallible for structurally valid input and
/// complete synchronously; callers that need an asynchronous surface (to
/// model a future remote program) wrap the store behind the governance
/// client. Policy checks — delegatee shape, amount sign — belong to the
/// caller, never the store.
pub trait DelegationStore: Send + Sync {
    /// Construct a new record with a freshly generated unique id and the
    /// current timestamp, append it in insertion order, and return the id.
    fn create(&self, delegatee: Address, amount: f64) -> DelegationId;

    /// Remove the record matching `id` if present. An absent id completes
    /// without error: revocation is idempotent, safe to call twice.
    fn revoke(&self, id: &DelegationId);

    /// Ordered snapshot of all current records (insertion order).
    ///
    /// The mock performs no caller filtering; a live backend filters to
    /// the calling principal's delegations server-side.
    fn list(&self) -> Vec<Delegation>;
}
