//! Nullable infrastructure for deterministic testing.
//!
//! The app layer's external collaborators (toast notifier, clock, balance
//! supplier) are abstracted behind traits; this crate provides
//! test-friendly implementations that return deterministic values and can
//! be inspected or controlled programmatically.
//!
//! Usage: swap real implementations for nullables in tests.

pub mod balance;
pub mod clock;
pub mod notifier;

pub use balance::NullBalanceSource;
pub use clock::NullClock;
pub use notifier::NullNotifier;
