//! Application layer for the AugustDAO demo.
//!
//! Orchestrates the governance client from the point of view of a single
//! UI surface: the delegation manager view-model, the wallet session, the
//! notification boundary, and the fixed demo proposal set.

pub mod form;
pub mod manager;
pub mod notify;
pub mod proposals;
pub mod session;

pub use form::{DelegationForm, FormError};
pub use manager::{DelegationManager, LoadState};
pub use notify::{LogNotifier, Notifier};
pub use proposals::{demo_proposals, Proposal, ProposalStatus};
pub use session::{BalanceSource, DemoBalanceSource, WalletSession};
