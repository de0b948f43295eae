//! Weather provider API
//!
//! Typed routes for the provider's endpoints and a client that issues them
//! through the caching dispatcher.
//!
//! # Endpoints
//! - `GET /search.ashx` - Find locations matching a query
//! - `GET /weather.ashx` - Current conditions for a location

pub mod client;
pub mod routes;

pub use client::WeatherClient;
pub use routes::{RouteTtls, WeatherRoute};
