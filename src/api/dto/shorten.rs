//! DTOs for the link shortening endpoint.

use crate::domain::entities::Shortened;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a long URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The URL to shorten (absolute HTTP/HTTPS URL, at most 200 characters
    /// once surrounding whitespace is trimmed; the length is checked by the
    /// service).
    ///
    /// A missing field deserializes as empty and fails validation with 400.
    #[serde(default)]
    #[validate(url(message = "Invalid URL format"))]
    pub long_url: String,
}

/// Result of a shortening request.
///
/// `created` is `false` when the URL had already been shortened and the
/// existing mapping is returned.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub long_url: String,
    pub short_code: String,
    pub short_url: String,
    pub created: bool,
}

impl ShortenResponse {
    pub fn new(outcome: Shortened, short_url: String) -> Self {
        let created = outcome.is_created();
        let link = outcome.into_link();

        Self {
            long_url: link.long_url,
            short_code: link.short_code,
            short_url,
            created,
        }
    }
}
