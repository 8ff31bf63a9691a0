//! Notification boundary.
//!
//! The view-model emits success/error toasts through this trait; the
//! transport (log line, UI toast) is the collaborator's business.

pub use august_types::Notifier;

/// Notifier that writes toasts to the structured log. Used by the demo
/// binary, where the terminal is the UI.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        tracing::info!(toast = "success", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(toast = "error", "{message}");
    }
}
