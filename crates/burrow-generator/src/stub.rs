use burrow_core::{HashError, Hasher, ShortCode};

/// A [`Hasher`] that ignores its input and returns a canned result.
///
/// Used to drive the HTTP layer without a real generator.
#[derive(Debug, Clone)]
pub struct StubHasher {
    result: Result<ShortCode, HashError>,
}

impl StubHasher {
    pub fn returning(code: impl Into<ShortCode>) -> Self {
        Self {
            result: Ok(code.into()),
        }
    }

    pub fn failing(err: HashError) -> Self {
        Self { result: Err(err) }
    }
}

impl Hasher for StubHasher {
    fn hash(&self, _original_url: &str) -> Result<ShortCode, HashError> {
        self.result.clone()
    }
}
