//! Repository trait for the mapping store.

use crate::domain::entities::{NewShortenedLink, ShortenedLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Persistence interface for shortened links.
///
/// Implementations must enforce uniqueness of both `long_url` and
/// `short_code` atomically with the insert; this is what makes concurrent
/// creation safe without a separate existence check.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process memory
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CodeCollision`] if the short code is already taken.
    ///
    /// Returns [`AppError::Conflict`] if the long URL is already mapped.
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert(&self, new_link: NewShortenedLink) -> Result<ShortenedLink, AppError>;

    /// Finds a mapping by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_code(&self, short_code: &str) -> Result<Option<ShortenedLink>, AppError>;

    /// Finds a mapping by its exact long URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<ShortenedLink>, AppError>;

    /// Counts stored mappings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self) -> Result<i64, AppError>;
}
