//! Nullable notifier — records toasts instead of showing them.

use august_app::Notifier;
use std::sync::Mutex;

/// A notifier that records every success and error message for later
/// inspection by tests.
pub struct NullNotifier {
    successes: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl NullNotifier {
    pub fn new() -> Self {
        Self {
            successes: Mutex::new(Vec::new()),
            errors: Mutex::new(Vec::new()),
        }
    }

    /// Every success message emitted so far, in order.
    pub fn successes(&self) -> Vec<String> {
        self.successes.lock().unwrap().clone()
    }

    /// Every error message emitted so far, in order.
    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl Default for NullNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NullNotifier {
    fn success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}
