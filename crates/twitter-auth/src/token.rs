//! Application-only token acquisition
//!
//! POSTs the client-credentials grant to the token endpoint with the encoded
//! API key/secret as Basic credentials. The returned bearer token is opaque and
//! is handed back verbatim; nothing here caches or inspects it.
//!
//! A non-success status or an empty body yields an empty token rather than an
//! error. Callers must check for `""` before relying on the token.

use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::constants::GRANT_TYPE;
use crate::encode::encode_secrets;
use crate::error::{Error, Result};

/// Response body from the token endpoint.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Always "bearer" for application-only auth
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Exchange an API key and secret for an application-only bearer token.
///
/// Returns `Ok("")` when the endpoint answers with a non-2xx status or an
/// empty body. Transport failures map to `Error::Transport`; a 2xx body
/// without a string `access_token` maps to `Error::MalformedResponse`.
pub async fn acquire_token(
    client: &reqwest::Client,
    token_url: &str,
    api_key: &str,
    api_secret: &str,
) -> Result<String> {
    let encoded = encode_secrets(api_key, api_secret);

    debug!(url = token_url, "requesting application-only token");
    let response = client
        .post(token_url)
        .header(AUTHORIZATION, format!("Basic {encoded}"))
        .form(&[("grant_type", GRANT_TYPE)])
        .send()
        .await
        .map_err(|e| Error::Transport(format!("token request failed: {e}")))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| Error::Transport(format!("reading token response failed: {e}")))?;
    debug!(%status, bytes = body.len(), "token endpoint responded");

    if !status.is_success() || body.is_empty() {
        warn!(%status, empty_body = body.is_empty(), "token endpoint returned no token");
        return Ok(String::new());
    }

    let token: TokenResponse = serde_json::from_str(&body)
        .map_err(|e| Error::MalformedResponse(format!("invalid token response: {e}")))?;
    debug!(token_type = ?token.token_type, "acquired application-only token");

    Ok(token.access_token)
}
