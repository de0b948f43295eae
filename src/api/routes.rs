//! Provider Routes
//!
//! Builds the `Endpoint` for each provider operation.

use crate::config::Config;
use crate::network::Endpoint;

pub const SEARCH_PATH: &str = "/search.ashx";
pub const WEATHER_PATH: &str = "/weather.ashx";

/// Number of search matches requested per query
const SEARCH_RESULT_LIMIT: &str = "10";

/// Cache lifetimes per route, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteTtls {
    pub search: u64,
    pub weather: u64,
}

impl RouteTtls {
    pub fn from_config(config: &Config) -> Self {
        Self {
            search: config.search_cache_ttl,
            weather: config.weather_cache_ttl,
        }
    }
}

impl Default for RouteTtls {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// One provider operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeatherRoute {
    Search { query: String },
    CurrentWeather { city: String },
}

impl WeatherRoute {
    pub fn search(query: impl Into<String>) -> Self {
        WeatherRoute::Search {
            query: query.into(),
        }
    }

    pub fn current_weather(city: impl Into<String>) -> Self {
        WeatherRoute::CurrentWeather { city: city.into() }
    }

    pub fn path(&self) -> &'static str {
        match self {
            WeatherRoute::Search { .. } => SEARCH_PATH,
            WeatherRoute::CurrentWeather { .. } => WEATHER_PATH,
        }
    }

    // == Endpoint ==
    /// Endpoint for this route.
    ///
    /// `key` and `format` always come first, followed by route parameters in
    /// a fixed order, so the same logical request always has the same cache
    /// key.
    pub fn endpoint(&self, api_key: &str, ttls: RouteTtls) -> Endpoint {
        let base = Endpoint::get(self.path())
            .query("key", api_key)
            .query("format", "json");

        match self {
            WeatherRoute::Search { query } => base
                .query("q", query.trim())
                .query("num_of_results", SEARCH_RESULT_LIMIT)
                .cache_ttl(ttls.search),
            WeatherRoute::CurrentWeather { city } => base
                .query("q", city.trim())
                .query("num_of_days", "1")
                .query("fx", "no")
                .cache_ttl(ttls.weather),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://api.test/premium/v1";

    fn ttls() -> RouteTtls {
        RouteTtls {
            search: 3600,
            weather: 600,
        }
    }

    #[test]
    fn test_search_endpoint() {
        let endpoint = WeatherRoute::search("London").endpoint("secret", ttls());

        assert_eq!(endpoint.cache_ttl, 3600);
        assert_eq!(
            endpoint.canonical_url(BASE).unwrap().as_str(),
            "https://api.test/premium/v1/search.ashx?key=secret&format=json&q=London&num_of_results=10"
        );
    }

    #[test]
    fn test_weather_endpoint() {
        let endpoint = WeatherRoute::current_weather("Paris").endpoint("secret", ttls());

        assert_eq!(endpoint.cache_ttl, 600);
        assert_eq!(
            endpoint.canonical_url(BASE).unwrap().as_str(),
            "https://api.test/premium/v1/weather.ashx?key=secret&format=json&q=Paris&num_of_days=1&fx=no"
        );
    }

    #[test]
    fn test_query_is_trimmed_for_stable_keys() {
        let a = WeatherRoute::search("  London ").endpoint("k", ttls());
        let b = WeatherRoute::search("London").endpoint("k", ttls());
        assert_eq!(a.cache_key(BASE).unwrap(), b.cache_key(BASE).unwrap());
    }

    #[test]
    fn test_ttls_from_config() {
        let config = Config {
            search_cache_ttl: 10,
            weather_cache_ttl: 20,
            ..Config::default()
        };
        assert_eq!(
            RouteTtls::from_config(&config),
            RouteTtls {
                search: 10,
                weather: 20
            }
        );
    }
}
