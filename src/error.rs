//! Push delivery error types.

use thiserror::Error;

/// Result type for push operations.
pub type Result<T> = std::result::Result<T, AirshipError>;

/// Errors raised while building or delivering a push request.
#[derive(Debug, Error)]
pub enum AirshipError {
    /// Payload could not be serialized to JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The request could not be constructed.
    #[error("Invalid request: {0}")]
    Request(String),

    /// Network error.
    #[error("Network error: {0}")]
    Network(String),

    /// Operation timed out.
    #[error("Operation timed out")]
    Timeout,

    /// The service rejected the push with a non-2xx status.
    #[error("Push rejected with status {status}: {body}")]
    Remote {
        /// HTTP status code returned by the service.
        status: u16,
        /// Raw response body text.
        body: String,
    },
}

impl AirshipError {
    /// Check if this error is a rejection from the remote service.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. })
    }

    /// Get the HTTP status code if the service rejected the push.
    pub fn status(&self) -> Option<u16> {
        if let Self::Remote { status, .. } = self {
            Some(*status)
        } else {
            None
        }
    }
}

impl From<reqwest::Error> for AirshipError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_builder() {
            Self::Request(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AirshipError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_message_carries_status_and_body() {
        let err = AirshipError::Remote {
            status: 400,
            body: "audience required".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("400"));
        assert!(msg.contains("audience required"));
    }

    #[test]
    fn test_status_accessor() {
        let err = AirshipError::Remote {
            status: 404,
            body: String::new(),
        };
        assert!(err.is_remote());
        assert_eq!(err.status(), Some(404));

        let err = AirshipError::Timeout;
        assert_eq!(err.status(), None);
    }
}
