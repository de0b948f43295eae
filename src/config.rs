//! Configuration Module
//!
//! Handles loading client configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default provider base URL
pub const DEFAULT_BASE_URL: &str = "https://api.worldweatheronline.com/premium/v1";

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Provider base URL that endpoint paths are appended to
    pub base_url: String,
    /// Provider API key, sent with every request
    pub api_key: String,
    /// Transport timeout in seconds, applied to every request
    pub request_timeout: u64,
    /// Maximum number of responses the cache can hold
    pub max_cache_entries: usize,
    /// TTL in seconds for city search responses
    pub search_cache_ttl: u64,
    /// TTL in seconds for current weather responses
    pub weather_cache_ttl: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `WEATHER_API_BASE_URL` - Provider base URL (default: World Weather Online)
    /// - `WEATHER_API_KEY` - Provider API key (default: empty)
    /// - `REQUEST_TIMEOUT` - Transport timeout in seconds (default: 30)
    /// - `MAX_CACHE_ENTRIES` - Maximum cached responses (default: 100)
    /// - `SEARCH_CACHE_TTL` - Search response TTL in seconds (default: 3600)
    /// - `WEATHER_CACHE_TTL` - Weather response TTL in seconds (default: 600)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env::var("WEATHER_API_BASE_URL").unwrap_or(defaults.base_url),
            api_key: env::var("WEATHER_API_KEY").unwrap_or(defaults.api_key),
            request_timeout: parse_var("REQUEST_TIMEOUT").unwrap_or(defaults.request_timeout),
            max_cache_entries: parse_var("MAX_CACHE_ENTRIES")
                .unwrap_or(defaults.max_cache_entries),
            search_cache_ttl: parse_var("SEARCH_CACHE_TTL").unwrap_or(defaults.search_cache_ttl),
            weather_cache_ttl: parse_var("WEATHER_CACHE_TTL")
                .unwrap_or(defaults.weather_cache_ttl),
        }
    }

    /// Transport timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            request_timeout: 30,
            max_cache_entries: 100,
            search_cache_ttl: 3600,
            weather_cache_ttl: 600,
        }
    }
}
