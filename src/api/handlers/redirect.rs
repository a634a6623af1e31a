//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, warn};
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its long URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Check the cache for the code
/// 2. On a miss or cache error, resolve through [`crate::application::services::LinkService`]
/// 3. Populate the cache in the background (fire-and-forget)
/// 4. Return `302 Found` with the encoded long URL in `Location`
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let long_url = match state.cache.get_long_url(&code).await {
        Ok(Some(cached)) => cached,
        Ok(None) => resolve_and_cache(&state, &code).await?,
        Err(e) => {
            warn!("Cache error: {}", e);
            resolve_and_cache(&state, &code).await?
        }
    };

    metrics::counter!("redirects_total").increment(1);

    let location = location_header(&long_url).ok_or_else(|| {
        AppError::internal(
            "Stored URL is not a valid Location header",
            json!({ "code": code }),
        )
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Encodes a stored URL for the `Location` header.
///
/// Stored URLs are kept verbatim, so spaces and non-ASCII text are
/// percent-encoded here and internationalized hosts are converted to punycode.
fn location_header(long_url: &str) -> Option<HeaderValue> {
    let url = Url::parse(long_url).ok()?;
    HeaderValue::from_str(url.as_str()).ok()
}

async fn resolve_and_cache(state: &AppState, code: &str) -> Result<String, AppError> {
    let link = match state.link_service.find_by_code(code).await {
        Ok(link) => link,
        Err(e) => {
            if matches!(e, AppError::NotFound { .. }) {
                metrics::counter!("redirect_not_found_total").increment(1);
                debug!(code, "Short code not found");
            }
            return Err(e);
        }
    };

    let cache = state.cache.clone();
    let short_code = link.short_code.clone();
    let long_url = link.long_url.clone();
    tokio::spawn(async move {
        if let Err(e) = cache.set_long_url(&short_code, &long_url).await {
            warn!("Failed to cache URL: {}", e);
        }
    });

    Ok(link.long_url)
}
