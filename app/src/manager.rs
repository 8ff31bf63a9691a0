//! Delegation manager view-model.
//!
//! Orchestrates fetch-on-mount and refresh-after-write against the
//! governance client, and surfaces write outcomes through the notifier.
//! There are no optimistic updates: every successful write is followed by
//! a full fetch-and-replace of the delegation snapshot.

use crate::form::DelegationForm;
use crate::notify::Notifier;
use august_client::GovernanceClient;
use august_types::{Delegation, DelegationId};
use std::sync::Arc;

/// Load state of the delegation view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    Uninitialized,
    Loading,
    Ready,
}

pub struct DelegationManager {
    client: GovernanceClient,
    notifier: Arc<dyn Notifier>,
    state: LoadState,
    /// Raised on every write action and lowered on completion. While
    /// raised, further writes are ignored, serializing mutations from
    /// this view.
    submitting: bool,
    delegations: Vec<Delegation>,
    pub form: DelegationForm,
}

impl DelegationManager {
    pub fn new(client: GovernanceClient, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client,
            notifier,
            state: LoadState::Uninitialized,
            submitting: false,
            delegations: Vec::new(),
            form: DelegationForm::default(),
        }
    }

    /// Fetch-on-mount.
    ///
    /// Without a bound caller identity (wallet not connected) the view
    /// goes straight to Ready with an empty set, no fetch attempted. A
    /// failed fetch is swallowed into an empty set — in the mock
    /// environment there is no remote dependency to legitimately fail —
    /// but is logged so a live backend's failures stay visible.
    pub async fn load(&mut self) {
        if self.client.caller().is_none() {
            self.delegations.clear();
            self.state = LoadState::Ready;
            return;
        }

        self.state = LoadState::Loading;
        match self.client.list_delegations().await {
            Ok(records) => self.delegations = records,
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch delegations, showing empty set");
                self.delegations.clear();
            }
        }
        self.state = LoadState::Ready;
    }

    /// Submit the create-delegation form.
    ///
    /// Ignored while another write is in flight. Invalid form input emits
    /// an error notification and leaves the form intact for correction.
    /// On success the snapshot is re-fetched, the form is cleared, and a
    /// success notification is emitted.
    pub async fn submit(&mut self) {
        if self.submitting {
            return;
        }
        self.submitting = true;

        let (delegatee, amount) = match self.form.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                self.notifier.error(&e.to_string());
                self.submitting = false;
                return;
            }
        };

        match self.client.create_delegation(&delegatee, amount).await {
            Ok(id) => {
                tracing::debug!(id = %id, "delegation submitted");
                self.refresh().await;
                self.form.clear();
                self.notifier.success("Delegation created successfully");
            }
            Err(e) => {
                tracing::warn!(error = %e, "delegation submission failed");
                self.notifier.error("Failed to create delegation");
            }
        }
        self.submitting = false;
    }

    /// Revoke the delegation with the given id.
    ///
    /// Ignored while another write is in flight. On success the snapshot
    /// is re-fetched and a success notification is emitted.
    pub async fn revoke(&mut self, id: &DelegationId) {
        if self.submitting {
            return;
        }
        self.submitting = true;

        match self.client.revoke_delegation(id).await {
            Ok(_) => {
                self.refresh().await;
                self.notifier.success("Delegation revoked successfully");
            }
            Err(e) => {
                tracing::warn!(error = %e, id = %id, "revocation failed");
                self.notifier.error("Failed to revoke delegation");
            }
        }
        self.submitting = false;
    }

    /// Full fetch-and-replace after a successful write. Keeps the previous
    /// snapshot if the re-fetch itself fails.
    async fn refresh(&mut self) {
        match self.client.list_delegations().await {
            Ok(records) => self.delegations = records,
            Err(e) => {
                tracing::warn!(error = %e, "post-write refresh failed, keeping stale snapshot");
            }
        }
    }

    /// The current read-only delegation snapshot.
    pub fn delegations(&self) -> &[Delegation] {
        &self.delegations
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use august_nullables::NullNotifier;
    use august_store::{DelegationStore, MemoryDelegationStore};
    use august_types::Address;

    const CALLER: &str = "DEV9KnoyFcmENTgJ1S1p5KVJ1T4yeymDB3qRUKNoWZd4";
    const DELEGATEE: &str = "EzYfF5kvbgTNcSMyhoMbuAGNXSBkgetnVKYNgJTyxQpP";

    fn manager_with_caller(
        store: Arc<MemoryDelegationStore>,
    ) -> (Arc<NullNotifier>, DelegationManager) {
        let client = GovernanceClient::mock(store).with_caller(Address::new(CALLER));
        let notifier = Arc::new(NullNotifier::new());
        let manager = DelegationManager::new(client, Arc::clone(&notifier) as Arc<dyn Notifier>);
        (notifier, manager)
    }

    #[tokio::test]
    async fn load_without_caller_is_ready_and_empty() {
        let client = GovernanceClient::mock(Arc::new(MemoryDelegationStore::with_seed_data()));
        let notifier = Arc::new(NullNotifier::new());
        let mut manager = DelegationManager::new(client, notifier);
        assert_eq!(manager.state(), LoadState::Uninitialized);

        manager.load().await;

        // No fetch attempted: the seeded records are not shown.
        assert_eq!(manager.state(), LoadState::Ready);
        assert!(manager.delegations().is_empty());
    }

    #[tokio::test]
    async fn load_with_caller_fetches_snapshot() {
        let store = Arc::new(MemoryDelegationStore::with_seed_data());
        let (_notifier, mut manager) = manager_with_caller(store);

        manager.load().await;

        assert_eq!(manager.state(), LoadState::Ready);
        assert_eq!(manager.delegations().len(), 2);
    }

    #[tokio::test]
    async fn submit_valid_form_creates_and_clears() {
        let store = Arc::new(MemoryDelegationStore::new());
        let (notifier, mut manager) = manager_with_caller(Arc::clone(&store));
        manager.load().await;

        manager.form.delegatee = DELEGATEE.to_string();
        manager.form.amount = "250".to_string();
        manager.submit().await;

        assert_eq!(manager.delegations().len(), 1);
        assert_eq!(manager.delegations()[0].amount, 250.0);
        assert_eq!(manager.form, DelegationForm::default());
        assert_eq!(notifier.successes().len(), 1);
        assert!(notifier.errors().is_empty());
        assert!(!manager.is_submitting());
    }

    #[tokio::test]
    async fn submit_invalid_form_notifies_and_keeps_form() {
        let store = Arc::new(MemoryDelegationStore::new());
        let (notifier, mut manager) = manager_with_caller(Arc::clone(&store));
        manager.load().await;

        manager.form.delegatee = "shortid".to_string();
        manager.form.amount = "-5".to_string();
        manager.submit().await;

        // Nothing reached the store; the form stays for correction.
        assert!(store.is_empty());
        assert!(manager.delegations().is_empty());
        assert_eq!(manager.form.delegatee, "shortid");
        assert_eq!(notifier.errors().len(), 1);
        assert!(notifier.successes().is_empty());
    }

    #[tokio::test]
    async fn revoke_refreshes_snapshot() {
        let store = Arc::new(MemoryDelegationStore::new());
        let id = store.create(Address::new(DELEGATEE), 250.0);
        let (notifier, mut manager) = manager_with_caller(Arc::clone(&store));
        manager.load().await;
        assert_eq!(manager.delegations().len(), 1);

        manager.revoke(&id).await;

        assert!(manager.delegations().is_empty());
        assert_eq!(notifier.successes().len(), 1);
        assert!(!manager.is_submitting());
    }

    #[tokio::test]
    async fn writes_ignored_while_submitting() {
        let store = Arc::new(MemoryDelegationStore::new());
        let id = store.create(Address::new(DELEGATEE), 1.0);
        let (notifier, mut manager) = manager_with_caller(Arc::clone(&store));
        manager.load().await;

        manager.submitting = true;
        manager.form.delegatee = DELEGATEE.to_string();
        manager.form.amount = "10".to_string();
        manager.submit().await;
        manager.revoke(&id).await;

        // Both writes dropped: no mutation, no notifications.
        assert_eq!(store.len(), 1);
        assert!(notifier.successes().is_empty());
        assert!(notifier.errors().is_empty());
        assert_eq!(manager.form.amount, "10");
    }
}
