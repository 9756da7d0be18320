//! Tweet Search
//!
//! Command-line front end for the search client:
//! 1. Loads config and API credentials
//! 2. Acquires an application-only token on a background task
//! 3. Searches around the configured point with it
//! 4. Prints the results

mod config;
mod fetch;
mod render;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use twitter_client::TwitterClient;

use crate::config::{Config, Credentials};

/// Value following `flag` in the argument list, if any.
fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}

fn parse_coordinate(args: &[String], flag: &str) -> Result<Option<f64>> {
    arg_value(args, flag)
        .map(|v| {
            v.parse::<f64>()
                .with_context(|| format!("{flag} expects a number, got {v:?}"))
        })
        .transpose()
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr as JSON so stdout carries only the rendered posts
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_env("LOG_LEVEL")
                .or_else(|_| EnvFilter::try_from_default_env())
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr),
        )
        .init();

    info!("starting tweet-search");

    // CLI: --config, --latitude, --longitude
    let args: Vec<String> = std::env::args().collect();
    let config_path = Config::resolve_path(arg_value(&args, "--config"));
    info!(path = %config_path.display(), "loading configuration");

    let mut config = Config::load_or_default(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;

    if let Some(latitude) = parse_coordinate(&args, "--latitude")? {
        config.search.latitude = latitude;
    }
    if let Some(longitude) = parse_coordinate(&args, "--longitude")? {
        config.search.longitude = longitude;
    }
    config.search.validate()?;

    let credentials =
        Credentials::resolve(&config.twitter).context("failed to resolve API credentials")?;

    info!(
        api_base_url = %config.twitter.api_base_url,
        timeout_secs = config.twitter.timeout_secs,
        latitude = config.search.latitude,
        longitude = config.search.longitude,
        "configuration loaded"
    );

    let client = TwitterClient::with_config(config.twitter.client_config())
        .context("failed to build HTTP client")?;

    let outcome = fetch::spawn_fetch(
        client,
        credentials,
        config.search.latitude,
        config.search.longitude,
    )
    .await
    .context("fetch task ended without a result")?;

    match outcome {
        Ok(posts) => {
            let mut stdout = std::io::stdout().lock();
            render::render_posts(&mut stdout, &posts).context("failed to write posts")?;
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "failed to retrieve posts");
            anyhow::bail!("failed to retrieve posts: {e}")
        }
    }
}
