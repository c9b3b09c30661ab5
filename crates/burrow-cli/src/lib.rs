//! Blocking HTTP client for a Burrow gateway.

pub mod client;
pub mod error;
pub mod model;

pub use client::{Client, DEFAULT_TIMEOUT};
pub use error::{ClientError, Result};
pub use model::ShortenResponse;
