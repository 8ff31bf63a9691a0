//! In-memory delegation store.

use crate::delegation::DelegationStore;
use august_types::{Address, Delegation, DelegationId, Timestamp};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Process-lifetime, in-memory delegation registry.
///
/// Thread-safe for use under tokio's multi-threaded runtime: each create
/// or revoke is a single atomic collection edit behind the mutex. There is
/// no cross-call transaction boundary — concurrent writers from multiple
/// clients may interleave, which is acceptable for a single demo instance.
///
/// Ids are `delegation-<n>` with `n` from a monotonically increasing
/// counter, so they are unique even when two records are created within
/// the same clock tick.
pub struct MemoryDelegationStore {
    records: Mutex<Vec<Delegation>>,
    next_id: AtomicU64,
}

impl MemoryDelegationStore {
    /// Create an empty store. Tests should instantiate their own store
    /// rather than sharing one process-wide instance.
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Create a store pre-populated with the demo's two seed delegations.
    pub fn with_seed_data() -> Self {
        let now = Timestamp::now();
        let store = Self::new();
        {
            let mut records = store.records.lock().unwrap();
            records.push(Delegation {
                id: DelegationId::new("delegation-1"),
                delegatee: Address::new("DEV9KnoyFcmENTgJ1S1p5KVJ1T4yeymDB3qRUKNoWZd4"),
                amount: 100.0,
                timestamp: now,
            });
            records.push(Delegation {
                id: DelegationId::new("delegation-2"),
                delegatee: Address::new("EzYfF5kvbgTNcSMyhoMbuAGNXSBkgetnVKYNgJTyxQpP"),
                amount: 250.0,
                timestamp: Timestamp::new(now.as_secs().saturating_sub(86400)),
            });
        }
        store.next_id.store(3, Ordering::Relaxed);
        store
    }

    /// Remove every record. Contents never survive a restart; this exists
    /// so tests can reuse an instance from a known-empty state.
    pub fn clear(&self) {
        self.records.lock().unwrap().clear();
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().unwrap().is_empty()
    }
}

impl Default for MemoryDelegationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DelegationStore for MemoryDelegationStore {
    fn create(&self, delegatee: Address, amount: f64) -> DelegationId {
        let n = self.next_id.fetch_add(1, Ordering::Relaxed);
        let id = DelegationId::new(format!("delegation-{n}"));
        let record = Delegation {
            id: id.clone(),
            delegatee,
            amount,
            timestamp: Timestamp::now(),
        };
        tracing::debug!(id = %id, "delegation created");
        self.records.lock().unwrap().push(record);
        id
    }

    fn revoke(&self, id: &DelegationId) {
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|d| &d.id != id);
        if records.len() == before {
            tracing::debug!(id = %id, "revoke of absent delegation (no-op)");
        }
    }

    fn list(&self) -> Vec<Delegation> {
        self.records.lock().unwrap().clone()
    }
}
