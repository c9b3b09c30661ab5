//! HTTP gateway for the Burrow URL shortener.
//!
//! Exposes `POST /api/v1/shorten` and a catch-all `GET /<code>` redirect on
//! top of any [`Hasher`](burrow_core::Hasher) and
//! [`Storage`](burrow_core::Storage) pair.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use error::{AppError, Result};
pub use state::AppState;
