//! Error types for the search client
//!
//! Token acquisition and search share one taxonomy, so this re-exports the
//! auth crate's error rather than wrapping it.

pub use twitter_auth::{Error, Result};
