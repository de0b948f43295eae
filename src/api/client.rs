//! Weather Client
//!
//! Provider operations on top of the caching dispatcher.

use crate::api::routes::{RouteTtls, WeatherRoute};
use crate::cache::CacheStats;
use crate::config::Config;
use crate::error::Result;
use crate::models::{SearchResponse, WeatherResponse};
use crate::network::{Dispatcher, Endpoint};

#[derive(Debug, Clone)]
pub struct WeatherClient {
    dispatcher: Dispatcher,
    api_key: String,
    ttls: RouteTtls,
}

impl WeatherClient {
    pub fn new(dispatcher: Dispatcher, api_key: impl Into<String>, ttls: RouteTtls) -> Self {
        Self {
            dispatcher,
            api_key: api_key.into(),
            ttls,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let dispatcher = Dispatcher::from_config(config)?;
        Ok(Self::new(
            dispatcher,
            config.api_key.clone(),
            RouteTtls::from_config(config),
        ))
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Locations matching `query`.
    pub async fn search(&self, query: &str, refresh: bool) -> Result<SearchResponse> {
        let endpoint = self.endpoint(&WeatherRoute::search(query));
        self.fetch(endpoint, refresh, |_: &SearchResponse| true).await
    }

    /// Current conditions for `city`.
    ///
    /// Provider errors arrive with a 200 status; those responses are returned
    /// but never cached.
    pub async fn current_weather(&self, city: &str, refresh: bool) -> Result<WeatherResponse> {
        let endpoint = self.endpoint(&WeatherRoute::current_weather(city));
        self.fetch(endpoint, refresh, |response: &WeatherResponse| {
            response.provider_error().is_none()
        })
        .await
    }

    pub async fn clear_cache(&self) {
        self.dispatcher.clear_all_caches().await;
    }

    pub async fn cache_stats(&self) -> CacheStats {
        self.dispatcher.cache_stats().await
    }

    fn endpoint(&self, route: &WeatherRoute) -> Endpoint {
        route.endpoint(&self.api_key, self.ttls)
    }

    /// A refresh drops any cached copy and fetches with caching disabled.
    async fn fetch<T, F>(&self, endpoint: Endpoint, refresh: bool, should_cache: F) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        F: FnOnce(&T) -> bool,
    {
        if refresh {
            self.dispatcher.remove_cache(&endpoint).await;
            return self.dispatcher.request(&endpoint.without_cache()).await;
        }
        self.dispatcher.request_with(&endpoint, should_cache).await
    }
}
