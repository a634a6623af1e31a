//! API route configuration.

use crate::api::handlers::{get_link_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten`       - Find or create the short link for a long URL
/// - `GET  /links/{code}`  - Look up the mapping for a short code
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/links/{code}", get(get_link_handler))
}
