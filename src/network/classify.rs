//! Maps transport, status and decode failures onto `NetworkError`.

use crate::error::NetworkError;
use crate::network::transport::TransportError;

pub fn classify_transport(err: TransportError) -> NetworkError {
    match err {
        TransportError::Timeout => NetworkError::Timeout,
        TransportError::Tls(cause) => NetworkError::Tls(cause),
        TransportError::Connection(cause) => NetworkError::Network(cause),
        TransportError::InvalidResponse(_) => NetworkError::InvalidResponse,
    }
}

/// `None` for 2xx, otherwise the matching error. 429 is singled out.
pub fn classify_status(status: u16) -> Option<NetworkError> {
    match status {
        200..=299 => None,
        429 => Some(NetworkError::RateLimitExceeded),
        // Not a valid HTTP status line
        0..=99 | 1000.. => Some(NetworkError::InvalidResponse),
        other => Some(NetworkError::Http(other)),
    }
}

pub fn classify_decode(err: serde_json::Error) -> NetworkError {
    NetworkError::Decoding(err.to_string())
}
