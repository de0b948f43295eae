//! Weather Net - command-line front end
//!
//! Looks up cities and current conditions. Repeated lookups within one run are
//! served from the response cache.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use weather_net::{Config, WeatherClient};

#[derive(Debug, Parser)]
#[command(name = "weather_net", version, about = "Weather lookups with a response cache")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Bypass and invalidate cached responses
    #[arg(long, global = true)]
    refresh: bool,

    /// Print cache statistics when done
    #[arg(long, global = true)]
    stats: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search for cities matching each query
    Search {
        #[arg(required = true)]
        queries: Vec<String>,
    },
    /// Show current conditions for each city
    Current {
        #[arg(required = true)]
        cities: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_net=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config::from_env();
    if config.api_key.is_empty() {
        bail!("WEATHER_API_KEY is not set");
    }
    info!(
        "Configuration loaded: base_url={}, timeout={}s, max_cache_entries={}",
        config.base_url, config.request_timeout, config.max_cache_entries
    );

    let client = WeatherClient::from_config(&config).context("Failed to build HTTP client")?;

    match &cli.command {
        Command::Search { queries } => {
            for query in queries {
                match client.search(query, cli.refresh).await {
                    Ok(response) => print_search(query, &response),
                    Err(err) => report(query, &err),
                }
            }
        }
        Command::Current { cities } => {
            for city in cities {
                match client.current_weather(city, cli.refresh).await {
                    Ok(response) => print_current(city, &response),
                    Err(err) => report(city, &err),
                }
            }
        }
    }

    if cli.stats {
        let stats = client.cache_stats().await;
        println!("{}", serde_json::to_string_pretty(&stats)?);
    }

    Ok(())
}

fn print_search(query: &str, response: &weather_net::models::SearchResponse) {
    match response.results() {
        Some(results) if !results.is_empty() => {
            println!("{query}:");
            for result in results {
                let name = result.display_name().unwrap_or_else(|| "(unnamed)".to_string());
                match result.coordinates() {
                    Some((lat, lon)) => println!("  {name} ({lat:.3}, {lon:.3})"),
                    None => println!("  {name}"),
                }
            }
        }
        _ => println!("{query}: no matches"),
    }
}

fn print_current(city: &str, response: &weather_net::models::WeatherResponse) {
    if let Some(message) = response.provider_error() {
        println!("{city}: {message}");
        return;
    }
    let Some(current) = response.current_condition() else {
        println!("{city}: no current conditions");
        return;
    };

    let location = response.resolved_location().unwrap_or(city);
    let description = current.description().unwrap_or("unknown");
    match current.temperature_c() {
        Some(temp) => println!("{location}: {temp}°C, {description}"),
        None => println!("{location}: {description}"),
    }
    if let (Some(humidity), Some(wind)) = (current.humidity_pct(), current.wind_speed()) {
        println!("  humidity {humidity}%, wind {wind} km/h");
    }
}

fn report(subject: &str, err: &weather_net::NetworkError) {
    if err.is_retryable() {
        eprintln!("{subject}: {err} (try again)");
    } else {
        eprintln!("{subject}: {err}");
    }
}
