//! Credential encoding for the application-only OAuth flow
//!
//! The token endpoint expects HTTP Basic credentials built from the API key
//! and secret: each is URL-encoded, joined with a colon, and the result is
//! base64-encoded. Inputs are not validated; an empty key or secret still
//! produces a well-formed value.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Encode an API key and secret into the Basic credential for the token endpoint.
///
/// `BASE64(urlencode(key) + ":" + urlencode(secret))`
///
/// Pure and deterministic: the same inputs always produce the same output.
pub fn encode_secrets(api_key: &str, api_secret: &str) -> String {
    let combined = format!(
        "{}:{}",
        urlencoding::encode(api_key),
        urlencoding::encode(api_secret)
    );
    STANDARD.encode(combined.as_bytes())
}
