use std::sync::Arc;

use burrow_core::{Hasher, Storage};

#[derive(Clone)]
pub struct AppState {
    hasher: Arc<dyn Hasher>,
    storage: Arc<dyn Storage>,
    local_addr: String,
    public_base_url: Option<String>,
}

impl AppState {
    /// `local_addr` is the host used in `short_url` when neither a public
    /// base URL is configured nor a `Host` header is sent.
    pub fn new(hasher: impl Hasher, storage: impl Storage, local_addr: impl Into<String>) -> Self {
        Self {
            hasher: Arc::new(hasher),
            storage: Arc::new(storage),
            local_addr: local_addr.into(),
            public_base_url: None,
        }
    }

    pub fn with_public_base_url(mut self, public_base_url: impl Into<String>) -> Self {
        self.public_base_url = Some(public_base_url.into());
        self
    }

    pub fn hasher(&self) -> &dyn Hasher {
        self.hasher.as_ref()
    }

    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    pub fn local_addr(&self) -> &str {
        &self.local_addr
    }

    pub fn public_base_url(&self) -> Option<&str> {
        self.public_base_url.as_deref()
    }
}
