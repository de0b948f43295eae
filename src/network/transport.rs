//! HTTP transport
//!
//! The dispatcher talks to the network through the `Transport` trait so tests
//! can substitute a scripted fake. `ReqwestTransport` is the real client.

use std::collections::HashMap;
use std::error::Error as StdError;
use std::io;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, Url};
use thiserror::Error;

use crate::network::endpoint::HttpMethod;

/// Fully resolved request handed to a transport.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: HashMap<String, String>,
}

/// Status and raw body of a received response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Failures where no usable response arrived.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,

    #[error("secure connection failed: {0}")]
    Tls(String),

    #[error("connection failed: {0}")]
    Connection(String),

    /// Something arrived but it was not a readable HTTP response
    #[error("malformed response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

// == Reqwest Transport ==
/// `reqwest` client with one timeout applied to every request.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Connection(e.to_string()))?;
        Ok(Self { client })
    }

}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        };

        let mut builder = self.client.request(method, request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await.map_err(map_reqwest_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout
            } else {
                TransportError::InvalidResponse(e.to_string())
            }
        })?;

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        return TransportError::Timeout;
    }
    let message = error_chain(&err);
    if is_tls_failure(&err) {
        TransportError::Tls(message)
    } else if err.is_builder() || err.is_decode() {
        TransportError::InvalidResponse(message)
    } else {
        TransportError::Connection(message)
    }
}

/// Looks below `err` for the I/O error the connector failed with.
///
/// The TLS stream reports handshake and certificate failures as
/// `InvalidData`, while plain socket failures carry their own kind
/// (`ConnectionRefused`, `ConnectionReset`, ...). The top-level error is
/// skipped since its message embeds the request URL.
pub(crate) fn is_tls_failure(err: &(dyn StdError + 'static)) -> bool {
    let mut current = err.source();
    while let Some(e) = current {
        if let Some(io) = e.downcast_ref::<io::Error>() {
            return io.kind() == io::ErrorKind::InvalidData;
        }
        current = e.source();
    }
    false
}

/// Joins an error and its sources into one message.
fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut current = err.source();
    while let Some(e) = current {
        message.push_str(": ");
        message.push_str(&e.to_string());
        current = e.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Wrapped {
        message: &'static str,
        source: Option<io::Error>,
    }

    impl fmt::Display for Wrapped {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.message)
        }
    }

    impl StdError for Wrapped {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            self.source.as_ref().map(|e| e as &(dyn StdError + 'static))
        }
    }

    fn wrapped(message: &'static str, source: io::Error) -> Wrapped {
        Wrapped {
            message,
            source: Some(source),
        }
    }

    #[test]
    fn tls_failure_found_in_source_chain() {
        let err = wrapped(
            "error sending request",
            io::Error::new(io::ErrorKind::InvalidData, "invalid peer certificate: UnknownIssuer"),
        );
        assert!(is_tls_failure(&err));
        assert_eq!(
            error_chain(&err),
            "error sending request: invalid peer certificate: UnknownIssuer"
        );
    }

    #[test]
    fn connection_refused_is_not_tls() {
        let err = wrapped(
            "error sending request",
            io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"),
        );
        assert!(!is_tls_failure(&err));
    }

    #[test]
    fn url_text_does_not_make_a_failure_tls() {
        let err = wrapped(
            "error sending request for url (http://127.0.0.1:1/search.ashx?q=Hassleholm&tls=ssl)",
            io::Error::new(io::ErrorKind::ConnectionRefused, "tcp connect error"),
        );
        assert!(!is_tls_failure(&err));
    }

    #[test]
    fn error_without_io_cause_is_not_tls() {
        let err = Wrapped {
            message: "handshake failed: bad certificate",
            source: None,
        };
        assert!(!is_tls_failure(&err));
    }

    #[test]
    fn response_constructor() {
        let response = HttpResponse::new(200, "{}");
        assert_eq!(response.status, 200);
        assert_eq!(response.body, b"{}");
    }
}
