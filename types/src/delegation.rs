//! The delegation record.

use crate::{Address, DelegationId, Timestamp};
use serde::{Deserialize, Serialize};

/// A record representing one voting-power grant.
///
/// Lives in the delegation store from the moment `create` returns until
/// `revoke` is called with its id or the process ends.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Delegation {
    /// Store-assigned unique identity, stable for the record's lifetime.
    pub id: DelegationId,
    /// Recipient of the delegated voting power. Caller-supplied; only
    /// superficially shape-checked, never resolved on chain.
    pub delegatee: Address,
    /// Non-negative voting power, unit-less at this layer (callers read
    /// it as a token quantity). Enforced by callers, not the store.
    pub amount: f64,
    /// Creation time, assigned by the store.
    pub timestamp: Timestamp,
}
