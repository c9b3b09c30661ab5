use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use burrow_core::{HashError, StorageError};
use thiserror::Error;
use tracing::{error, warn};

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("malformed request payload: {0}")]
    MalformedPayload(#[from] JsonRejection),
    #[error("failed to hash original url: {0}")]
    Hash(#[from] HashError),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("stored url is not a valid location: {0}")]
    InvalidLocation(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
            AppError::Storage(StorageError::KeyNotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Hash(_) | AppError::InvalidLocation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            warn!(error = %self, "request rejected");
        }
        status.into_response()
    }
}
