//! Network dispatcher
//!
//! Single entry point for requests: resolves the endpoint, serves from the
//! response cache when allowed, otherwise fetches, classifies, decodes and
//! caches the raw body.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::cache::{shared, CacheStats, CacheStore, SharedCache};
use crate::config::Config;
use crate::error::Result;
use crate::network::classify::{classify_decode, classify_status, classify_transport};
use crate::network::endpoint::Endpoint;
use crate::network::transport::{HttpRequest, ReqwestTransport, Transport};

#[derive(Clone)]
pub struct Dispatcher {
    base_url: String,
    transport: Arc<dyn Transport>,
    cache: SharedCache,
}

impl Dispatcher {
    pub fn new(
        base_url: impl Into<String>,
        transport: Arc<dyn Transport>,
        cache: SharedCache,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
            cache,
        }
    }

    /// Builds a dispatcher with a `reqwest` transport and a fresh cache sized
    /// from the config.
    pub fn from_config(config: &Config) -> Result<Self> {
        let transport =
            ReqwestTransport::new(config.request_timeout()).map_err(classify_transport)?;
        let cache = shared(CacheStore::new(config.max_cache_entries));
        Ok(Self::new(config.base_url.clone(), Arc::new(transport), cache))
    }

    /// Handle to the underlying cache store.
    pub fn cache(&self) -> SharedCache {
        self.cache.clone()
    }

    // == Request ==
    /// Performs `endpoint` and decodes the body as `T`.
    ///
    /// With a non-zero TTL a valid cached body is decoded and returned without
    /// touching the network; an undecodable cached body is discarded and the
    /// request falls through to a fresh fetch. Only bodies that decoded
    /// successfully are cached.
    pub async fn request<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T> {
        self.request_with(endpoint, |_: &T| true).await
    }

    /// Like [`request`](Self::request), but the decoded value is only cached
    /// when `should_cache` accepts it.
    ///
    /// For payloads that report failures inside a successful response.
    pub async fn request_with<T, F>(&self, endpoint: &Endpoint, should_cache: F) -> Result<T>
    where
        T: DeserializeOwned,
        F: FnOnce(&T) -> bool,
    {
        let url = endpoint.canonical_url(&self.base_url)?;
        let key = endpoint.cache_key(&self.base_url)?;

        if endpoint.is_cacheable() {
            if let Some(value) = self.cached::<T>(&key).await {
                return Ok(value);
            }
        }

        info!(method = %endpoint.method, path = %endpoint.path, "fetching from network");
        let request = HttpRequest {
            method: endpoint.method,
            url,
            headers: endpoint.headers.clone(),
        };
        let response = self.transport.send(request).await.map_err(|e| {
            let err = classify_transport(e);
            warn!(path = %endpoint.path, error = %err, "transport failure");
            err
        })?;

        if let Some(err) = classify_status(response.status) {
            warn!(path = %endpoint.path, status = response.status, error = %err, "request failed");
            return Err(err);
        }

        let value = serde_json::from_slice::<T>(&response.body).map_err(|e| {
            let err = classify_decode(e);
            warn!(path = %endpoint.path, error = %err, "response did not decode");
            err
        })?;

        if !endpoint.is_cacheable() {
            return Ok(value);
        }
        if should_cache(&value) {
            let stored = self
                .cache
                .write()
                .await
                .put(&key, response.body, endpoint.cache_ttl);
            debug!(key = %key, ttl = endpoint.cache_ttl, stored, "cached response");
        } else {
            debug!(key = %key, "response not cached");
        }

        Ok(value)
    }

    /// Decodes a cached body, dropping it if it no longer decodes as `T`.
    async fn cached<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let payload = self.cache.write().await.get(key);
        let Some(payload) = payload else {
            debug!(key, "cache miss");
            return None;
        };

        match serde_json::from_slice::<T>(&payload) {
            Ok(value) => {
                debug!(key, "cache hit");
                Some(value)
            }
            Err(e) => {
                warn!(key, error = %e, "cached response did not decode, refetching");
                self.cache.write().await.reject(key);
                None
            }
        }
    }

    // == Cache Management ==
    /// Drops every cached response.
    pub async fn clear_all_caches(&self) {
        let dropped = self.cache.write().await.clear();
        debug!(dropped, "cleared response cache");
    }

    /// Drops the cached response for `endpoint`, if any.
    pub async fn remove_cache(&self, endpoint: &Endpoint) {
        // Nothing can be cached under an invalid URL
        if let Ok(key) = endpoint.cache_key(&self.base_url) {
            let removed = self.cache.write().await.remove(&key);
            debug!(key = %key, removed, "invalidated cached response");
        }
    }

    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
