//! StatusMessage - Transient user-facing operation feedback
//!
//! A message is displayed for a fixed 5 seconds of wall-clock time and is
//! superseded immediately by any newer message. Expiry is evaluated against
//! a caller-supplied clock so the lifetime is testable with simulated time.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Seconds a message stays visible with no newer message set
pub const MESSAGE_TTL_SECS: i64 = 5;

/// How a message should be styled when rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Success,
    /// Operation accepted by the backend but the reply was missing expected
    /// data (e.g. a success text without a parsable balance). State may be
    /// stale until the next refresh.
    Warning,
    Failure,
}

/// A transient status banner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
    /// When the message was set; drives the 5-second display window
    pub shown_at: DateTime<Utc>,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>, severity: Severity, shown_at: DateTime<Utc>) -> Self {
        Self {
            text: text.into(),
            severity,
            shown_at,
        }
    }

    pub fn success(text: impl Into<String>, shown_at: DateTime<Utc>) -> Self {
        Self::new(text, Severity::Success, shown_at)
    }

    pub fn warning(text: impl Into<String>, shown_at: DateTime<Utc>) -> Self {
        Self::new(text, Severity::Warning, shown_at)
    }

    pub fn failure(text: impl Into<String>, shown_at: DateTime<Utc>) -> Self {
        Self::new(text, Severity::Failure, shown_at)
    }

    /// True once the 5-second display window has elapsed at `now`
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now - self.shown_at >= Duration::seconds(MESSAGE_TTL_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_visible_before_ttl() {
        let t0 = Utc::now();
        let msg = StatusMessage::success("Login successful!", t0);

        assert!(!msg.is_expired(t0));
        assert!(!msg.is_expired(t0 + Duration::seconds(4)));
    }

    #[test]
    fn test_message_expires_after_ttl() {
        let t0 = Utc::now();
        let msg = StatusMessage::failure("Invalid credentials!", t0);

        assert!(msg.is_expired(t0 + Duration::seconds(5)));
        assert!(msg.is_expired(t0 + Duration::seconds(60)));
    }

    #[test]
    fn test_severity_constructors() {
        let t0 = Utc::now();
        assert_eq!(StatusMessage::success("ok", t0).severity, Severity::Success);
        assert_eq!(StatusMessage::warning("hm", t0).severity, Severity::Warning);
        assert_eq!(StatusMessage::failure("no", t0).severity, Severity::Failure);
    }
}
