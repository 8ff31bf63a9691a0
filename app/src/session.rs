//! Wallet session boundary.
//!
//! The core consumes a bound caller identity (present or absent) and a
//! display balance from an external wallet-connection collaborator. It
//! does not implement connection, signing, or key management.

use august_types::Address;
use rand::Rng;

pub use august_types::BalanceSource;

/// Demo balance supplier: a jittered value in the 1.0–3.0 range, standing
/// in for a real balance fetch.
pub struct DemoBalanceSource;

impl BalanceSource for DemoBalanceSource {
    fn balance(&self, _address: &Address) -> f64 {
        rand::rng().random_range(1.0..3.0)
    }
}

/// The currently connected wallet, if any.
#[derive(Default)]
pub struct WalletSession {
    identity: Option<Address>,
    balance: Option<f64>,
}

impl WalletSession {
    pub fn disconnected() -> Self {
        Self::default()
    }

    /// Bind a wallet identity and fetch its display balance.
    pub fn connect(&mut self, address: Address, source: &dyn BalanceSource) {
        self.balance = Some(source.balance(&address));
        self.identity = Some(address);
    }

    /// Drop the bound identity and its balance.
    pub fn disconnect(&mut self) {
        self.identity = None;
        self.balance = None;
    }

    /// Re-fetch the display balance for the bound identity, if any.
    pub fn refresh_balance(&mut self, source: &dyn BalanceSource) {
        if let Some(address) = &self.identity {
            self.balance = Some(source.balance(address));
        }
    }

    pub fn identity(&self) -> Option<&Address> {
        self.identity.as_ref()
    }

    pub fn balance(&self) -> Option<f64> {
        self.balance
    }

    pub fn is_connected(&self) -> bool {
        self.identity.is_some()
    }
}
