//! Client errors

use thiserror::Error;

/// Errors from the remote client.
///
/// A transport failure (DNS, connection refused, timeout) is returned as a
/// value, never thrown past the caller; the workflow layer alone decides
/// how to surface it to the user. The user-facing rendering is always the
/// generic "Network error occurred" text, with the transport detail kept
/// for logging.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("Network error occurred")]
    Transport(String),

    #[error("Malformed response from {endpoint}: {reason}")]
    Decode {
        endpoint: &'static str,
        reason: String,
    },
}

impl ClientError {
    /// True for failures where the backend was never reached
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }
}
