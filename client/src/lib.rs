//! Governance client for the AugustDAO demo.
//!
//! `GovernanceClient` is the single point of access for governance
//! actions. At construction time it is bound to exactly one backend:
//! the in-memory mock store, or a remote governance program reached over
//! JSON-RPC. The caller contract is identical in both modes, so swapping
//! the mock for a live program never changes calling code.

pub mod client;
pub mod error;
pub mod node;

pub use client::{Backend, GovernanceClient};
pub use error::ClientError;
pub use node::NodeClient;
