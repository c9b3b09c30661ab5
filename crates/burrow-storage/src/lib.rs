//! Storage backends for the Burrow URL shortener.

pub mod memory;

pub use burrow_core::storage::Result;
pub use burrow_core::{Storage, StorageError};
pub use memory::InMemoryStore;
