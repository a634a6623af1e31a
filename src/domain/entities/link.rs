//! Shortened link entity representing a long URL to short code mapping.

use chrono::{DateTime, Utc};

/// A persisted mapping between a long URL and its short code.
///
/// Both `long_url` and `short_code` are unique across the store. Records are
/// created once and never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedLink {
    pub id: i64,
    pub long_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
}

impl ShortenedLink {
    /// Creates a new ShortenedLink instance.
    pub fn new(
        id: i64,
        long_url: String,
        short_code: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            long_url,
            short_code,
            created_at,
        }
    }
}

/// Input data for inserting a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortenedLink {
    pub long_url: String,
    pub short_code: String,
}

/// Result of the find-or-create protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shortened {
    /// A new mapping was inserted for this request.
    Created(ShortenedLink),
    /// The long URL was already mapped; nothing was inserted.
    Existing(ShortenedLink),
}

impl Shortened {
    pub fn link(&self) -> &ShortenedLink {
        match self {
            Shortened::Created(link) | Shortened::Existing(link) => link,
        }
    }

    pub fn into_link(self) -> ShortenedLink {
        match self {
            Shortened::Created(link) | Shortened::Existing(link) => link,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Shortened::Created(_))
    }
}
