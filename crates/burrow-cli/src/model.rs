use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct ShortenRequest<'a> {
    pub original_url: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub short_url: String,
    pub short_hash: String,
    pub original_url: String,
}
