use crate::error::StorageError;
use crate::shortcode::ShortCode;
use std::sync::Arc;

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// A key/value store mapping short codes to original URLs.
///
/// Values are copied in and out; callers never hold a reference into the
/// store. Implementations must give every `get` either the latest completed
/// `set` for that key or [`StorageError::KeyNotFound`].
pub trait Storage: Send + Sync + 'static {
    /// Stores `original_url` under `code`, overwriting any previous value.
    fn set(&self, code: &ShortCode, original_url: &str) -> Result<()>;

    /// Returns the original URL stored under `code`.
    fn get(&self, code: &ShortCode) -> Result<String>;
}

impl<T: Storage + ?Sized> Storage for Arc<T> {
    fn set(&self, code: &ShortCode, original_url: &str) -> Result<()> {
        (**self).set(code, original_url)
    }

    fn get(&self, code: &ShortCode) -> Result<String> {
        (**self).get(code)
    }
}
