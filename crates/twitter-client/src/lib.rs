//! Twitter search client
//!
//! Wraps application-only token acquisition and geocoded search behind one
//! `TwitterClient` that owns the HTTP transport. Results are mapped into
//! `Post` values in the order the API returned them.
//!
//! A non-success status or empty body is a soft failure: an empty token or
//! an empty list, never an error. Errors are reserved for transport failures
//! and responses whose JSON does not match the expected shape.

pub mod client;
pub mod error;
pub mod geo;
pub mod post;

pub use client::{ClientConfig, DEFAULT_TIMEOUT, TwitterClient};
pub use error::{Error, Result};
pub use geo::{GeoQuery, RADIUS_MILES, SEARCH_TERM};
pub use post::Post;
