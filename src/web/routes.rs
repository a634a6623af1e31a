//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::{create_page_handler, create_submit_handler};
use axum::{Router, routing::get};

/// Public HTML routes.
///
/// # Endpoints
///
/// - `GET  /` - Link creation form
/// - `POST /` - Link creation form submission
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(create_page_handler).post(create_submit_handler))
}
