use crate::error::{AppError, Result};
use crate::model::{ShortenRequest, ShortenResponse};
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{HOST, LOCATION};
use axum::http::{HeaderMap, HeaderValue, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use burrow_core::ShortCode;
use tracing::{debug, info, instrument};

/// Stores the posted URL under a freshly generated code.
#[instrument(skip_all)]
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ShortenResponse>> {
    // decoded whatever the declared content type is
    let Json(request) = Json::<ShortenRequest>::from_bytes(&body)?;

    let code = state.hasher().hash(&request.original_url)?;
    state.storage().set(&code, &request.original_url)?;

    let short_url = code.to_url(&short_url_base(&state, &headers));
    info!(short_hash = %code, original_url = %request.original_url, "shortened url");

    Ok(Json(ShortenResponse {
        short_url,
        short_hash: code.into_inner(),
        original_url: request.original_url,
    }))
}

/// Redirects to the URL stored under the final segment of the request path.
#[instrument(skip_all, fields(path = %uri.path()))]
pub async fn redirect_handler(State(state): State<AppState>, uri: Uri) -> Result<Response> {
    let code = ShortCode::from_path(uri.path());

    let original_url = state.storage().get(&code)?;
    let location = HeaderValue::try_from(original_url.as_str())
        .map_err(|e| AppError::InvalidLocation(e.to_string()))?;

    debug!(short_hash = %code, location = %original_url, "redirecting");
    Ok((StatusCode::MOVED_PERMANENTLY, [(LOCATION, location)]).into_response())
}

/// Picks the host part of `short_url`: the configured public base URL, then
/// the request's `Host` header, then the address the server listens on.
fn short_url_base(state: &AppState, headers: &HeaderMap) -> String {
    if let Some(base) = state.public_base_url() {
        return base.to_owned();
    }

    headers
        .get(HOST)
        .and_then(|host| host.to_str().ok())
        .filter(|host| !host.is_empty())
        .unwrap_or_else(|| state.local_addr())
        .to_owned()
}
