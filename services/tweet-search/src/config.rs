//! Configuration types and loading
//!
//! Config precedence: CLI args > env vars > config file > defaults.
//! The API key and secret come from TWITTER_API_KEY / TWITTER_API_SECRET or
//! from the files named in the config, never from the TOML directly.

use common::Secret;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use twitter_client::ClientConfig;

/// Config file used when neither --config nor CONFIG_PATH is given
pub const DEFAULT_CONFIG_PATH: &str = "tweet-search.toml";

/// Env var holding the API key
pub const API_KEY_ENV: &str = "TWITTER_API_KEY";

/// Env var holding the API secret
pub const API_SECRET_ENV: &str = "TWITTER_API_SECRET";

/// Root configuration
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub twitter: TwitterConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// API endpoint, transport, and credential file settings
#[derive(Debug, Deserialize)]
pub struct TwitterConfig {
    #[serde(default = "default_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Path to a file containing the API key (alternative to TWITTER_API_KEY)
    #[serde(default)]
    pub api_key_file: Option<PathBuf>,
    /// Path to a file containing the API secret (alternative to TWITTER_API_SECRET)
    #[serde(default)]
    pub api_secret_file: Option<PathBuf>,
}

/// Center point of the search
#[derive(Debug, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
}

impl Default for TwitterConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_base_url(),
            timeout_secs: default_timeout(),
            api_key_file: None,
            api_secret_file: None,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
        }
    }
}

fn default_base_url() -> String {
    twitter_client::ClientConfig::default().base_url
}

fn default_timeout() -> u64 {
    twitter_client::DEFAULT_TIMEOUT.as_secs()
}

// Washington, DC
fn default_latitude() -> f64 {
    38.9012594
}

fn default_longitude() -> f64 {
    -77.0511015
}

impl TwitterConfig {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api_base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

impl SearchConfig {
    /// Check both coordinates are in range. Called after CLI overrides too.
    pub fn validate(&self) -> common::Result<()> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(common::Error::Config(format!(
                "latitude must be between -90 and 90, got: {}",
                self.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(common::Error::Config(format!(
                "longitude must be between -180 and 180, got: {}",
                self.longitude
            )));
        }
        Ok(())
    }
}

impl Config {
    /// Load configuration from a TOML file and validate it.
    pub fn load(path: &Path) -> common::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;

        if !config.twitter.api_base_url.starts_with("http://")
            && !config.twitter.api_base_url.starts_with("https://")
        {
            return Err(common::Error::Config(format!(
                "api_base_url must start with http:// or https://, got: {}",
                config.twitter.api_base_url
            )));
        }

        if config.twitter.timeout_secs == 0 {
            return Err(common::Error::Config(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        config.search.validate()?;

        Ok(config)
    }

    /// Load from `path`, falling back to defaults only when `path` is the
    /// implicit default and does not exist. An explicit path must exist.
    pub fn load_or_default(path: &Path) -> common::Result<Self> {
        if path == Path::new(DEFAULT_CONFIG_PATH) && !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Resolve config file path from CLI arg or CONFIG_PATH env var.
    pub fn resolve_path(cli_path: Option<&str>) -> PathBuf {
        if let Some(p) = cli_path {
            return PathBuf::from(p);
        }
        if let Ok(p) = std::env::var("CONFIG_PATH") {
            return PathBuf::from(p);
        }
        PathBuf::from(DEFAULT_CONFIG_PATH)
    }
}

/// API key and secret for the token request
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: Secret<String>,
    pub api_secret: Secret<String>,
}

impl Credentials {
    /// Resolve credentials: env var takes precedence over the configured file.
    pub fn resolve(twitter: &TwitterConfig) -> common::Result<Self> {
        Ok(Self {
            api_key: resolve_secret(API_KEY_ENV, twitter.api_key_file.as_deref())?,
            api_secret: resolve_secret(API_SECRET_ENV, twitter.api_secret_file.as_deref())?,
        })
    }
}

fn resolve_secret(env_var: &str, file: Option<&Path>) -> common::Result<Secret<String>> {
    if let Some(secret) = std::env::var(env_var)
        .ok()
        .and_then(|v| Secret::from_trimmed(&v))
    {
        return Ok(secret);
    }

    if let Some(path) = file {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            common::Error::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        if let Some(secret) = Secret::from_trimmed(&raw) {
            return Ok(secret);
        }
    }

    Err(common::Error::MissingCredential(format!(
        "set {env_var} or configure a credential file"
    )))
}
