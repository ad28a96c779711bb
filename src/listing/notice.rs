//! Transient user-facing messages.

use std::fmt;
use std::time::{Duration, Instant};

/// How long a notice stays visible unless configured otherwise.
pub const DEFAULT_NOTICE_TTL: Duration = Duration::from_secs(3);

/// Visual weight of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// An operation succeeded.
    Success,
    /// Neutral information.
    Info,
    /// Something needs attention but nothing failed.
    Warning,
    /// An operation failed.
    Danger,
}

impl Severity {
    /// Returns the lowercase name (`"danger"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message shown to the user for a limited time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    message: String,
    severity: Severity,
    raised_at: Instant,
    ttl: Duration,
}

impl Notice {
    /// Creates a notice raised now with the default lifetime.
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            raised_at: Instant::now(),
            ttl: DEFAULT_NOTICE_TTL,
        }
    }

    /// Creates a success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    /// Creates a failure notice.
    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Danger)
    }

    /// Overrides the lifetime.
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Returns the message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the severity.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns when the notice stops being shown.
    pub fn expires_at(&self) -> Instant {
        self.raised_at + self.ttl
    }

    /// Returns `true` once `now` has reached the expiry.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at()
    }

    /// Returns `true` once the lifetime has elapsed.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttl() {
        let notice = Notice::danger("Failed to fetch products");
        assert_eq!(notice.severity(), Severity::Danger);
        assert_eq!(notice.expires_at() - notice.raised_at, Duration::from_secs(3));
    }

    #[test]
    fn test_expiry() {
        let notice = Notice::success("Product added").with_ttl(Duration::from_millis(10));
        let raised = notice.raised_at;
        assert!(!notice.is_expired_at(raised));
        assert!(!notice.is_expired_at(raised + Duration::from_millis(9)));
        assert!(notice.is_expired_at(raised + Duration::from_millis(10)));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Notice::danger("Failed to fetch users").to_string(),
            "[danger] Failed to fetch users"
        );
    }
}
