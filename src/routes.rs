//! Top-level router configuration combining API, web and redirect routes.
//!
//! # Route Structure
//!
//! - `GET  /`            - Link creation form
//! - `POST /`            - Link creation form submission
//! - `GET  /health`      - Health check: storage and cache
//! - `/api/*`            - JSON API
//! - `GET  /{code}`      - Short link redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the application router with all routes and the tracing layer.
///
/// Static routes take precedence over `/{code}`, so `health` and `api`
/// can never be shadowed by a short code.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::routes())
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer())
}

/// Wraps [`router`] with trailing slash normalization, so `/{code}/`
/// redirects like `/{code}`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
