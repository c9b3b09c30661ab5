//! Core types and traits for the Burrow URL shortener.
//!
//! This crate provides the capability contracts shared by the hash
//! generator, the store and the HTTP gateway.

pub mod error;
pub mod hasher;
pub mod shortcode;
pub mod storage;

pub use error::{HashError, StorageError};
pub use hasher::Hasher;
pub use shortcode::ShortCode;
pub use storage::Storage;
