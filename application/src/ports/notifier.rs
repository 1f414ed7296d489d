//! User notification port
//!
//! Defines how use cases surface outcomes to whoever drives them.

/// Callback for user-facing notifications
///
/// Implementations live in the presentation layer and can display
/// notifications in various ways (console, status line, etc.)
pub trait Notifier: Send + Sync {
    /// Called when an action completed successfully
    fn success(&self, message: &str);

    /// Called when an action failed
    fn error(&self, message: &str);

    /// Called before a remote call starts
    fn on_request_start(&self, _label: &str) {}

    /// Called after a remote call returns, successfully or not
    fn on_request_end(&self) {}
}

/// No-op notifier for when notifications are not needed
pub struct NoNotifier;

impl Notifier for NoNotifier {
    fn success(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}
