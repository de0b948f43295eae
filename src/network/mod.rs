//! Network Module
//!
//! Endpoint descriptors, the transport seam, error classification and the
//! caching dispatcher that ties them together.

pub mod classify;
pub mod dispatcher;
pub mod endpoint;
pub mod transport;

pub use dispatcher::Dispatcher;
pub use endpoint::{Endpoint, HttpMethod};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport, TransportError};
