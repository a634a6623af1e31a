//! Handler for the link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the short link for a long URL, creating it on first submission.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "long_url": "https://www.wp.pl/" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "long_url": "https://www.wp.pl/",
///   "short_code": "aBcDe",
///   "short_url": "http://localhost:3000/aBcDe",
///   "created": true
/// }
/// ```
///
/// Resubmitting the same URL returns the same code with `"created": false`.
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is missing or invalid.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let outcome = state.link_service.shorten(&payload.long_url).await?;
    let short_url = state.link_service.short_url(&outcome.link().short_code);

    Ok(Json(ShortenResponse::new(outcome, short_url)))
}
