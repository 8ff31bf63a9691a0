//! Fundamental types for the AugustDAO demo.
//!
//! This crate defines the core types shared by every other crate in the
//! workspace: participant addresses, delegation ids, timestamps, and the
//! delegation record itself.

pub mod address;
pub mod delegation;
pub mod id;
pub mod time;
pub mod traits;

pub use address::Address;
pub use delegation::Delegation;
pub use id::DelegationId;
pub use time::Timestamp;
pub use traits::{BalanceSource, Notifier};
