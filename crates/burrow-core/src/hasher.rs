use crate::error::HashError;
use crate::shortcode::ShortCode;
use std::sync::Arc;

/// Trait for turning an original URL into a short code.
///
/// Implementations must be safe to call from many request handlers at once
/// and must not dedupe: hashing the same URL twice is expected to yield two
/// different codes.
pub trait Hasher: Send + Sync + 'static {
    fn hash(&self, original_url: &str) -> Result<ShortCode, HashError>;
}

impl<T: Hasher + ?Sized> Hasher for Arc<T> {
    fn hash(&self, original_url: &str) -> Result<ShortCode, HashError> {
        (**self).hash(original_url)
    }
}
