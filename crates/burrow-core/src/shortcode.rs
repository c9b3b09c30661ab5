use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// An opaque identifier for a shortened URL.
///
/// Codes are not validated on construction: the redirect path accepts any
/// final path segment and simply fails the lookup if nothing is stored.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortCode(String);

impl ShortCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Extracts the code from the final segment of a request path.
    ///
    /// `"/abc123"` and `"/api/abc123"` both yield `abc123`. A trailing slash
    /// yields an empty code.
    pub fn from_path(path: &str) -> Self {
        let segment = path.rsplit('/').next().unwrap_or_default();
        Self(segment.to_owned())
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self)
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ShortCode {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ShortCode {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_path_takes_last_segment() {
        assert_eq!(ShortCode::from_path("/abc123").as_str(), "abc123");
        assert_eq!(ShortCode::from_path("/api/abc123").as_str(), "abc123");
        assert_eq!(ShortCode::from_path("abc123").as_str(), "abc123");
    }

    #[test]
    fn from_path_trailing_slash_is_empty() {
        assert!(ShortCode::from_path("/").is_empty());
        assert!(ShortCode::from_path("/abc123/").is_empty());
        assert!(ShortCode::from_path("").is_empty());
    }

    #[test]
    fn display() {
        let code = ShortCode::new("my-code");
        assert_eq!(code.to_string(), "my-code");
        assert_eq!(code.len(), 7);
    }

    #[test]
    fn to_url() {
        let code = ShortCode::new("abc123");
        assert_eq!(code.to_url("localhost:8080"), "localhost:8080/abc123");
        assert_eq!(
            code.to_url("https://burrow.example/"),
            "https://burrow.example/abc123"
        );
    }

    #[test]
    fn serializes_as_plain_string() {
        let code = ShortCode::new("abc123");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"abc123\"");

        let parsed: ShortCode = serde_json::from_str("\"xyz789\"").unwrap();
        assert_eq!(parsed, ShortCode::new("xyz789"));
    }
}
