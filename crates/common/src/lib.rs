//! Shared types for the tweet search workspace: secret handling and
//! configuration errors.

mod error;
mod secret;

pub use error::{Error, Result};
pub use secret::Secret;
