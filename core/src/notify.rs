//! User-facing notifications and navigation.

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    /// An operation completed successfully.
    Success,
    /// Neutral information.
    Info,
    /// Something needs attention but did not fail.
    Warning,
    /// An operation failed.
    Error,
}

/// Sink for terminal success/failure notices.
pub trait Notifier: Send + Sync {
    /// Show `message` to the user.
    fn alert(&self, message: &str, level: AlertLevel);
}

/// Receives navigation requests emitted by the flows.
pub trait Navigator: Send + Sync {
    /// Request navigation to `route` (`""` is the application root).
    fn go(&self, route: &str);
}
