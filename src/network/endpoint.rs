//! Endpoint descriptors
//!
//! An `Endpoint` is a pure value describing one request target. Its canonical
//! URL is both what gets requested and the response cache key.

use std::collections::HashMap;
use std::fmt;

use reqwest::Url;

use crate::error::{NetworkError, Result};

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request target: path, method, headers, ordered query and cache TTL.
///
/// Query parameter order is significant: it is preserved in the canonical URL
/// and therefore in the cache key. Headers are sent with the request but do
/// not identify it.
#[derive(Debug, Clone, Default)]
pub struct Endpoint {
    pub path: String,
    pub method: HttpMethod,
    pub headers: HashMap<String, String>,
    pub query: Vec<(String, String)>,
    /// Seconds a successful response may be served from cache; 0 disables caching
    pub cache_ttl: u64,
}

impl Endpoint {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            ..Self::default()
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    /// Appends a query parameter after those already present.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn cache_ttl(mut self, seconds: u64) -> Self {
        self.cache_ttl = seconds;
        self
    }

    /// Same endpoint with caching disabled, used for forced refreshes.
    pub fn without_cache(&self) -> Self {
        self.clone().cache_ttl(0)
    }

    pub fn is_cacheable(&self) -> bool {
        self.cache_ttl > 0
    }

    // == Canonical URL ==
    /// Base URL + path + encoded query string, in parameter order.
    ///
    /// Fails with `InvalidUrl` if the base does not parse or is not an
    /// http(s) URL with a host.
    pub fn canonical_url(&self, base_url: &str) -> Result<Url> {
        let base = Url::parse(base_url).map_err(|_| NetworkError::InvalidUrl)?;
        if !matches!(base.scheme(), "http" | "https") || base.host_str().is_none() {
            return Err(NetworkError::InvalidUrl);
        }

        let joined = format!(
            "{}/{}",
            base.as_str().trim_end_matches('/'),
            self.path.trim_start_matches('/')
        );
        let mut url = Url::parse(&joined).map_err(|_| NetworkError::InvalidUrl)?;

        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.iter());
        }
        Ok(url)
    }

    // == Cache Key ==
    /// Key under which this endpoint's response is cached.
    ///
    /// The canonical URL for GET; other methods are prefixed with their name
    /// so a POST never shares an entry with a GET of the same URL.
    pub fn cache_key(&self, base_url: &str) -> Result<String> {
        let url = self.canonical_url(base_url)?;
        Ok(match self.method {
            HttpMethod::Get => url.into(),
            method => format!("{method} {url}"),
        })
    }
}

/// Identity for caching purposes: method, path and ordered query. Headers and
/// TTL are ignored.
impl PartialEq for Endpoint {
    fn eq(&self, other: &Self) -> bool {
        self.method == other.method && self.path == other.path && self.query == other.query
    }
}

impl Eq for Endpoint {}

impl std::hash::Hash for Endpoint {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.method.hash(state);
        self.path.hash(state);
        self.query.hash(state);
    }
}
