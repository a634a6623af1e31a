//! DTO for link lookups.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ShortenedLink;

/// JSON representation of a stored mapping.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub long_url: String,
    pub short_code: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
}

impl LinkResponse {
    pub fn new(link: ShortenedLink, short_url: String) -> Self {
        Self {
            long_url: link.long_url,
            short_code: link.short_code,
            short_url,
            created_at: link.created_at,
        }
    }
}
