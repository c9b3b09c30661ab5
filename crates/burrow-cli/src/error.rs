use thiserror::Error;
use ureq::http::StatusCode;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to perform HTTP request: {0}")]
    Http(#[from] ureq::Error),
    #[error("unexpected response status: {0}")]
    UnexpectedStatus(StatusCode),
    #[error("no URL found for the provided hash: {0}")]
    NotFound(String),
    #[error("redirect response carries no usable Location header")]
    MissingLocation,
}
