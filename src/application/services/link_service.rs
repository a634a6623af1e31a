//! Link creation and retrieval service.

use std::sync::Arc;

use crate::domain::entities::{NewShortenedLink, Shortened, ShortenedLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{CodeGenerator, is_reserved_code, is_storable_code};
use crate::utils::url_validator::validate_url;
use serde_json::json;
use tracing::{debug, info, warn};

/// Default number of code generation attempts per creation.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Service for creating and resolving shortened links.
///
/// Owns the uniqueness guarantees: one mapping per long URL, one long URL per
/// short code. Storage unique constraints are the final arbiter; this service
/// turns their violations into retries or into the existing mapping.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
    generator: Arc<dyn CodeGenerator>,
    base_url: String,
    max_attempts: u32,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// `base_url` is the public origin short links are served from, e.g.
    /// `https://s.example.com`. `max_attempts` is clamped to at least 1.
    pub fn new(
        repository: Arc<dyn LinkRepository>,
        generator: Arc<dyn CodeGenerator>,
        base_url: impl Into<String>,
        max_attempts: u32,
    ) -> Self {
        Self {
            repository,
            generator,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            max_attempts: max_attempts.max(1),
        }
    }

    /// Finds or creates the mapping for a submitted long URL.
    ///
    /// 1. Invalid URLs are rejected before storage is touched
    /// 2. An existing mapping for the same URL is returned as-is
    /// 3. Otherwise a new mapping with a fresh code is created
    ///
    /// A concurrent request creating the same URL first is resolved by
    /// returning its mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is invalid.
    ///
    /// Returns [`AppError::CapacityExhausted`] if no free code was found.
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn shorten(&self, long_url: &str) -> Result<Shortened, AppError> {
        let long_url = validate_url(long_url).map_err(|e| {
            AppError::bad_request("Invalid URL", json!({ "reason": e.to_string() }))
        })?;

        if let Some(existing) = self.repository.find_by_long_url(long_url).await? {
            debug!(short_code = %existing.short_code, "Long URL already shortened");
            return Ok(Shortened::Existing(existing));
        }

        match self.create_with_new_code(long_url).await {
            Ok(link) => Ok(Shortened::Created(link)),
            Err(AppError::Conflict { .. }) => {
                debug!("Lost creation race for long URL, returning the winner");
                self.repository
                    .find_by_long_url(long_url)
                    .await?
                    .map(Shortened::Existing)
                    .ok_or_else(|| {
                        AppError::internal(
                            "Long URL conflict without a stored mapping",
                            json!({ "long_url": long_url }),
                        )
                    })
            }
            Err(e) => Err(e),
        }
    }

    /// Persists `long_url` under a freshly generated, unique short code.
    ///
    /// Each attempt inserts atomically and relies on the storage unique
    /// constraint; a taken code triggers a new candidate. Codes that shadow a
    /// static route (see [`crate::utils::code_generator::RESERVED_CODES`])
    /// count as taken. There is no backoff between attempts.
    ///
    /// The caller is responsible for URL validation. Only emptiness is
    /// rechecked here.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `long_url` is empty.
    ///
    /// Returns [`AppError::Conflict`] if `long_url` is already mapped.
    ///
    /// Returns [`AppError::CapacityExhausted`] after `max_attempts` collisions.
    pub async fn create_with_new_code(&self, long_url: &str) -> Result<ShortenedLink, AppError> {
        if long_url.trim().is_empty() {
            return Err(AppError::bad_request(
                "Long URL must not be empty",
                json!({ "field": "long_url" }),
            ));
        }

        for attempt in 1..=self.max_attempts {
            let short_code = self.generator.generate();

            if is_reserved_code(&short_code) {
                metrics::counter!("short_code_collisions_total").increment(1);
                debug!(short_code = %short_code, attempt, "Reserved short code, retrying");
                continue;
            }

            let new_link = NewShortenedLink {
                long_url: long_url.to_string(),
                short_code,
            };

            match self.repository.insert(new_link).await {
                Ok(link) => {
                    metrics::counter!("links_created_total").increment(1);
                    info!(short_code = %link.short_code, attempt, "Short link created");
                    return Ok(link);
                }
                Err(AppError::CodeCollision { code }) => {
                    metrics::counter!("short_code_collisions_total").increment(1);
                    debug!(short_code = %code, attempt, "Short code collision, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        metrics::counter!("short_code_exhausted_total").increment(1);
        warn!(
            attempts = self.max_attempts,
            "Failed to find a free short code"
        );

        Err(AppError::CapacityExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Resolves a short code to its mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping uses `short_code`.
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn find_by_code(&self, short_code: &str) -> Result<ShortenedLink, AppError> {
        let not_found =
            || AppError::not_found("Short link not found", json!({ "code": short_code }));

        if !is_storable_code(short_code) {
            return Err(not_found());
        }

        self.repository
            .find_by_code(short_code)
            .await?
            .ok_or_else(not_found)
    }

    /// Counts stored mappings.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Builds the public short URL for a code: `<base_url>/<code>`.
    pub fn short_url(&self, short_code: &str) -> String {
        format!("{}/{}", self.base_url, short_code)
    }
}
