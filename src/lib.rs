//! Weather Net - weather provider client with a request cache
//!
//! Resolves endpoint descriptors to canonical URLs, serves responses from a
//! TTL-bounded in-memory cache when possible, and maps every failure onto a
//! closed error taxonomy.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod network;

pub use api::WeatherClient;
pub use config::Config;
pub use error::{NetworkError, Result};
pub use network::{Dispatcher, Endpoint, HttpMethod};
