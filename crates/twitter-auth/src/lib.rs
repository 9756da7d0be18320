//! Twitter application-only OAuth
//!
//! Encodes an API key/secret pair into Basic credentials and exchanges them
//! for a bearer token at the OAuth2 token endpoint. This crate has no
//! dependency on the search client; it takes a `reqwest::Client` and a token
//! URL from the caller so it can be tested against a local stub server.
//!
//! Token flow:
//! 1. `encode::encode_secrets()` builds `BASE64(urlencode(key):urlencode(secret))`
//! 2. `token::acquire_token()` POSTs `grant_type=client_credentials`
//! 3. The caller forwards the token as `Authorization: Bearer <token>`

pub mod constants;
pub mod encode;
pub mod error;
pub mod token;

pub use constants::*;
pub use encode::encode_secrets;
pub use error::{Error, Result};
pub use token::{TokenResponse, acquire_token};
