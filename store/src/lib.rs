//! Delegation storage for the AugustDAO demo.
//!
//! `DelegationStore` is the mock persistence contract: create, revoke,
//! list. The rest of the workspace depends only on the trait; the one
//! implementation here is in-memory and lives for the process.

pub mod delegation;
pub mod memory;

pub use delegation::DelegationStore;
pub use memory::MemoryDelegationStore;
