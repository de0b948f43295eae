//! Error types for the network layer
//!
//! Every failure a request can produce is one tag of `NetworkError`.

use thiserror::Error;

// == Network Error Enum ==
/// Closed taxonomy of request failures.
///
/// Underlying causes are kept as their rendered messages, so two errors are
/// equal when they share a tag and a message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// Endpoint could not form a valid URL
    #[error("Invalid URL")]
    InvalidUrl,

    /// Transport returned something that is not a well-formed HTTP response
    #[error("Invalid response from server")]
    InvalidResponse,

    /// Status outside 200..=299, other than 429
    #[error("HTTP error: status {0}")]
    Http(u16),

    /// Status 429
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Transport call exceeded its deadline
    #[error("Request timed out")]
    Timeout,

    /// Secure connection negotiation failed
    #[error("TLS error: {0}")]
    Tls(String),

    /// Any other transport failure (connectivity, DNS, reset)
    #[error("Network error: {0}")]
    Network(String),

    /// Response body did not parse into the expected shape
    #[error("Decoding error: {0}")]
    Decoding(String),
}

impl NetworkError {
    // == Retryable ==
    /// Returns true when the failure is transient and worth retrying.
    ///
    /// Configuration and contract problems (bad URL, TLS, decoding, 4xx) are
    /// not retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            NetworkError::Timeout
            | NetworkError::Network(_)
            | NetworkError::RateLimitExceeded
            | NetworkError::InvalidResponse => true,
            NetworkError::Http(status) => *status >= 500,
            NetworkError::InvalidUrl | NetworkError::Tls(_) | NetworkError::Decoding(_) => false,
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the network layer.
pub type Result<T> = std::result::Result<T, NetworkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_by_tag_and_message() {
        assert_eq!(
            NetworkError::Decoding("expected value at line 1".to_string()),
            NetworkError::Decoding("expected value at line 1".to_string())
        );
        assert_ne!(
            NetworkError::Decoding("a".to_string()),
            NetworkError::Decoding("b".to_string())
        );
        assert_ne!(
            NetworkError::Network("reset".to_string()),
            NetworkError::Tls("reset".to_string())
        );
        assert_eq!(NetworkError::Http(404), NetworkError::Http(404));
        assert_ne!(NetworkError::Http(404), NetworkError::Http(500));
    }

    #[test]
    fn test_retryable_classes() {
        assert!(NetworkError::Timeout.is_retryable());
        assert!(NetworkError::RateLimitExceeded.is_retryable());
        assert!(NetworkError::Network("dns".to_string()).is_retryable());
        assert!(NetworkError::Http(503).is_retryable());

        assert!(!NetworkError::InvalidUrl.is_retryable());
        assert!(!NetworkError::Decoding("bad".to_string()).is_retryable());
        assert!(!NetworkError::Tls("cert".to_string()).is_retryable());
        assert!(!NetworkError::Http(404).is_retryable());
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(NetworkError::Http(418).to_string(), "HTTP error: status 418");
        assert_eq!(NetworkError::Timeout.to_string(), "Request timed out");
        assert_eq!(
            NetworkError::Network("connection refused".to_string()).to_string(),
            "Network error: connection refused"
        );
    }
}
