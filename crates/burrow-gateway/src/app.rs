use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{redirect_handler, shorten_handler};
use crate::state::AppState;

/// Path of the shorten endpoint.
pub const SHORTEN_PATH: &str = "/api/v1/shorten";

pub struct App {}

impl App {
    /// Builds the gateway router.
    ///
    /// Any path other than [`SHORTEN_PATH`] is a redirect lookup keyed by its
    /// final segment. Methods not listed here answer 405.
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route(SHORTEN_PATH, post(shorten_handler))
            .route("/", get(redirect_handler))
            .route("/{*path}", get(redirect_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
