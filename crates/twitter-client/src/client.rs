//! Twitter API client
//!
//! Owns the HTTP transport and exposes the two calls a caller needs: acquire
//! an application-only token, then search near a point with it. The client
//! holds no per-call state; clones share one connection pool and may be used
//! from several tasks at once.

use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use tracing::{debug, trace, warn};
use twitter_auth::{API_BASE_URL, TOKEN_PATH};

use crate::error::{Error, Result};
use crate::geo::GeoQuery;
use crate::post::{Post, parse_search_response};

/// Connect and read timeout applied to every request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Transport settings for `TwitterClient`.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme and host, without a trailing path (e.g. `https://api.twitter.com`)
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TwitterClient {
    http: reqwest::Client,
    base_url: String,
}

impl TwitterClient {
    /// Client for the production API with default timeouts.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.timeout)
            .read_timeout(config.timeout)
            .build()
            .map_err(|e| Error::Transport(format!("building HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Exchange an API key and secret for a bearer token.
    ///
    /// Returns `Ok("")` on a non-success status or empty body.
    pub async fn acquire_token(&self, api_key: &str, api_secret: &str) -> Result<String> {
        let url = format!("{}{TOKEN_PATH}", self.base_url);
        twitter_auth::acquire_token(&self.http, &url, api_key, api_secret).await
    }

    /// Search for posts near a point using a bearer token.
    ///
    /// The token is forwarded verbatim. Returns an empty list on a non-success
    /// status or empty body; a body that does not match the expected shape is
    /// `Error::MalformedResponse`.
    pub async fn search_by_location(
        &self,
        token: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<Post>> {
        let query = GeoQuery::new(latitude, longitude);
        let url = query.url(&self.base_url);

        debug!(url = %url, "searching posts by location");
        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .send()
            .await
            .map_err(|e| Error::Transport(format!("search request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(format!("reading search response failed: {e}")))?;
        debug!(%status, bytes = body.len(), "search endpoint responded");
        trace!(body = %body, "search response body");

        if !status.is_success() || body.is_empty() {
            warn!(%status, empty_body = body.is_empty(), "search returned no results");
            return Ok(Vec::new());
        }

        let posts = parse_search_response(&body)?;
        debug!(count = posts.len(), geocode = %query.geocode(), "parsed search results");
        Ok(posts)
    }
}
