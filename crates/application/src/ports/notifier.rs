//! Toast presenter port.

use rekey_domain::Severity;

/// Port for the user-facing notification presenter.
///
/// Fire-and-forget: delivery is the presenter's problem, callers never
/// block on it.
pub trait Notifier: Send + Sync {
    /// Presents `message` to the user with the given severity.
    fn notify(&self, message: &str, severity: Severity);
}
