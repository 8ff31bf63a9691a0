//! HTTP client for a live governance program node.
//!
//! Wraps `reqwest::Client` with the node's base URL and provides typed
//! methods for each instruction the demo needs. The remote program owns
//! one delegation account per (delegator, delegatee) pair, derived
//! deterministically server-side; the account address comes back as the
//! record id.

use crate::error::ClientError;
use august_types::{Address, Delegation, DelegationId, Timestamp};
use serde::Deserialize;
use std::time::Duration;

#[derive(Clone)]
pub struct NodeClient {
    http: reqwest::Client,
    node_url: String,
}

impl NodeClient {
    /// Create a new NodeClient targeting the given base URL
    /// (e.g. `http://127.0.0.1:8899`).
    pub fn new(node_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ClientError::Remote(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            http,
            node_url: node_url.into(),
        })
    }

    /// The configured node URL.
    pub fn node_url(&self) -> &str {
        &self.node_url
    }

    /// Send a JSON-RPC request and return the `result` field.
    async fn rpc_call(
        &self,
        action: &str,
        params: serde_json::Value,
    ) -> Result<serde_json::Value, ClientError> {
        let mut body = params;
        body.as_object_mut()
            .ok_or_else(|| ClientError::Remote("params must be a JSON object".into()))?
            .insert("action".to_string(), serde_json::json!(action));

        let response = self
            .http
            .post(&self.node_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::Remote(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(ClientError::Remote(format!(
                "node returned HTTP {}",
                response.status()
            )));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ClientError::Remote(format!("invalid JSON response: {e}")))?;

        if let Some(err) = json.get("error").and_then(|e| e.as_str()) {
            return Err(ClientError::Remote(format!("node error: {err}")));
        }

        Ok(json.get("result").cloned().unwrap_or(json))
    }

    /// Submit a `delegate_votes` instruction. Returns the id of the
    /// delegation account the program derived for (delegator, delegatee).
    pub async fn delegate_votes(
        &self,
        delegator: &Address,
        delegatee: &Address,
        amount: f64,
    ) -> Result<DelegationId, ClientError> {
        let result = self
            .rpc_call(
                "delegate_votes",
                serde_json::json!({
                    "delegator": delegator.as_str(),
                    "delegatee": delegatee.as_str(),
                    "amount": amount,
                }),
            )
            .await?;

        let resp: DelegateVotesResult = serde_json::from_value(result)
            .map_err(|e| ClientError::Remote(format!("invalid delegate_votes response: {e}")))?;
        Ok(DelegationId::new(resp.id))
    }

    /// Submit a `revoke_delegation` instruction for the given record.
    pub async fn revoke_delegation(&self, id: &DelegationId) -> Result<(), ClientError> {
        self.rpc_call(
            "revoke_delegation",
            serde_json::json!({ "delegation": id.as_str() }),
        )
        .await?;
        Ok(())
    }

    /// Fetch the delegations belonging to `account`. A live program
    /// filters server-side to records whose delegator matches.
    pub async fn delegations(&self, account: &Address) -> Result<Vec<Delegation>, ClientError> {
        let result = self
            .rpc_call(
                "delegations",
                serde_json::json!({ "account": account.as_str() }),
            )
            .await?;

        let resp: DelegationsResult = serde_json::from_value(result)
            .map_err(|e| ClientError::Remote(format!("invalid delegations response: {e}")))?;

        Ok(resp
            .delegations
            .into_iter()
            .map(|d| Delegation {
                id: DelegationId::new(d.id),
                delegatee: Address::new(d.delegatee),
                amount: d.amount,
                timestamp: Timestamp::new(d.timestamp),
            })
            .collect())
    }
}

/// Response from the `delegate_votes` instruction.
#[derive(Debug, Clone, Deserialize)]
struct DelegateVotesResult {
    id: String,
}

/// Response from the `delegations` query.
#[derive(Debug, Clone, Deserialize)]
struct DelegationsResult {
    #[serde(default)]
    delegations: Vec<DelegationEntry>,
}

/// A single delegation record as returned by the node.
#[derive(Debug, Clone, Deserialize)]
struct DelegationEntry {
    id: String,
    delegatee: String,
    amount: f64,
    timestamp: u64,
}
