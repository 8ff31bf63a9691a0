//! Nullable balance source — a fixed display balance.

use august_app::BalanceSource;
use august_types::Address;

/// Returns the same balance for every address.
pub struct NullBalanceSource {
    fixed: f64,
}

impl NullBalanceSource {
    pub fn new(fixed: f64) -> Self {
        Self { fixed }
    }
}

impl BalanceSource for NullBalanceSource {
    fn balance(&self, _address: &Address) -> f64 {
        self.fixed
    }
}
