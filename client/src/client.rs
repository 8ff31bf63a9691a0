//! The governance client facade.

use crate::error::ClientError;
use crate::node::NodeClient;
use august_store::{DelegationStore, MemoryDelegationStore};
use august_types::{Address, Delegation, DelegationId};
use std::sync::Arc;

/// Where governance actions are routed. Selected once at construction,
/// never per call.
pub enum Backend {
    /// In-memory mock store; the demo's default.
    Mock(Arc<MemoryDelegationStore>),
    /// A live governance program reached over JSON-RPC.
    Remote(NodeClient),
}

/// Single point of access for governance actions.
///
/// Every operation is `async` even though the mock backend completes
/// synchronously underneath: the caller contract already matches the
/// eventual live program, so nothing upstream changes when the mock is
/// swapped out.
pub struct GovernanceClient {
    backend: Backend,
    caller: Option<Address>,
}

impl GovernanceClient {
    /// Create a client routed to the in-memory mock store.
    pub fn mock(store: Arc<MemoryDelegationStore>) -> Self {
        Self {
            backend: Backend::Mock(store),
            caller: None,
        }
    }

    /// Create a client routed to a remote governance program.
    pub fn remote(node: NodeClient) -> Self {
        Self {
            backend: Backend::Remote(node),
            caller: None,
        }
    }

    /// Bind the connected wallet's identity to this client. Remote calls
    /// require a bound caller; the mock does not.
    pub fn with_caller(mut self, caller: Address) -> Self {
        self.caller = Some(caller);
        self
    }

    /// The bound caller identity, if any.
    pub fn caller(&self) -> Option<&Address> {
        self.caller.as_ref()
    }

    /// Create a delegation of `amount` voting power to `delegatee`.
    ///
    /// The delegatee must pass the superficial shape check and the amount
    /// must be finite and non-negative; anything else is `InvalidInput`,
    /// raised before any store mutation.
    pub async fn create_delegation(
        &self,
        delegatee: &Address,
        amount: f64,
    ) -> Result<DelegationId, ClientError> {
        if !delegatee.is_plausible() {
            return Err(ClientError::InvalidInput(format!(
                "delegatee does not look like a valid address: {:?}",
                delegatee.as_str()
            )));
        }
        if !amount.is_finite() || amount < 0.0 {
            return Err(ClientError::InvalidInput(format!(
                "amount must be a finite non-negative number, got {amount}"
            )));
        }

        match &self.backend {
            Backend::Mock(store) => {
                let id = store.create(delegatee.clone(), amount);
                tracing::info!(id = %id, delegatee = %delegatee.short(4), amount, "created mock delegation");
                Ok(id)
            }
            Backend::Remote(node) => {
                let caller = self.caller.as_ref().ok_or(ClientError::NoCaller)?;
                node.delegate_votes(caller, delegatee, amount).await
            }
        }
    }

    /// Revoke the delegation with the given id. Returns the same id back
    /// on success. Revoking an id that no longer exists is a no-op, not
    /// an error.
    pub async fn revoke_delegation(
        &self,
        id: &DelegationId,
    ) -> Result<DelegationId, ClientError> {
        match &self.backend {
            Backend::Mock(store) => {
                store.revoke(id);
                tracing::info!(id = %id, "revoked mock delegation");
                Ok(id.clone())
            }
            Backend::Remote(node) => {
                node.revoke_delegation(id).await?;
                Ok(id.clone())
            }
        }
    }

    /// Fetch the current delegation set.
    ///
    /// The mock returns every record in insertion order regardless of
    /// caller; a live program filters to the bound caller's delegations
    /// server-side.
    pub async fn list_delegations(&self) -> Result<Vec<Delegation>, ClientError> {
        match &self.backend {
            Backend::Mock(store) => Ok(store.list()),
            Backend::Remote(node) => {
                let caller = self.caller.as_ref().ok_or(ClientError::NoCaller)?;
                node.delegations(caller).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_client() -> (Arc<MemoryDelegationStore>, GovernanceClient) {
        let store = Arc::new(MemoryDelegationStore::new());
        let client = GovernanceClient::mock(Arc::clone(&store));
        (store, client)
    }

    fn good_delegatee() -> Address {
        Address::new("EzYfF5kvbgTNcSMyhoMbuAGNXSBkgetnVKYNgJTyxQpP")
    }

    #[tokio::test]
    async fn create_then_list_then_revoke() {
        let (_store, client) = mock_client();

        let id = client
            .create_delegation(&good_delegatee(), 250.0)
            .await
            .unwrap();

        let records = client.list_delegations().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].amount, 250.0);
        assert_eq!(records[0].id, id);

        let returned = client.revoke_delegation(&id).await.unwrap();
        assert_eq!(returned, id);
        assert!(client.list_delegations().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_delegatee_rejected_without_mutation() {
        let (store, client) = mock_client();

        let err = client
            .create_delegation(&Address::new(""), 10.0)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidInput(_)));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn short_delegatee_and_negative_amount_rejected() {
        let (store, client) = mock_client();

        let err = client
            .create_delegation(&Address::new("shortid"), -5.0)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidInput(_)));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn non_finite_amount_rejected() {
        let (store, client) = mock_client();

        for bad in [f64::NAN, f64::INFINITY, -1.0] {
            let err = client
                .create_delegation(&good_delegatee(), bad)
                .await
                .unwrap_err();
            assert!(matches!(err, ClientError::InvalidInput(_)));
        }
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn double_revoke_is_noop() {
        let (store, client) = mock_client();
        let id = client
            .create_delegation(&good_delegatee(), 1.0)
            .await
            .unwrap();

        client.revoke_delegation(&id).await.unwrap();
        client.revoke_delegation(&id).await.unwrap();
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn remote_calls_require_bound_caller() {
        // The caller check fires before any network traffic, so an
        // unroutable URL never gets contacted.
        let node = NodeClient::new("http://127.0.0.1:1").unwrap();
        let client = GovernanceClient::remote(node);

        let err = client
            .create_delegation(&good_delegatee(), 10.0)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::NoCaller));

        let err = client.list_delegations().await.unwrap_err();
        assert!(matches!(err, ClientError::NoCaller));
    }

    #[tokio::test]
    async fn validation_precedes_backend_selection() {
        // Invalid input fails identically in remote mode, with no caller
        // required and no request sent.
        let node = NodeClient::new("http://127.0.0.1:1").unwrap();
        let client = GovernanceClient::remote(node);

        let err = client
            .create_delegation(&Address::new("shortid"), 10.0)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidInput(_)));
    }
}
