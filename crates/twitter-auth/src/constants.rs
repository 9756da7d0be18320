//! Twitter application-only OAuth constants
//!
//! Endpoint paths are relative to a base URL so tests can point the client
//! at a local stub server. Production callers use `API_BASE_URL`.

/// Production API host
pub const API_BASE_URL: &str = "https://api.twitter.com";

/// Token endpoint path for the client-credentials grant
pub const TOKEN_PATH: &str = "/oauth2/token";

/// Full production token endpoint
pub const TOKEN_ENDPOINT: &str = "https://api.twitter.com/oauth2/token";

/// Grant type for application-only auth (no user context)
pub const GRANT_TYPE: &str = "client_credentials";
