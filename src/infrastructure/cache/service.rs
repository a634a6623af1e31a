//! Cache service trait and error types.

use async_trait::async_trait;
use std::fmt;

/// Errors that can occur during cache operations.
#[derive(Debug)]
pub enum CacheError {
    ConnectionError(String),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ConnectionError(e) => write!(f, "Cache connection error: {}", e),
        }
    }
}

impl std::error::Error for CacheError {}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Read-through cache for short code to long URL lookups.
///
/// Mappings never change once created, so entries are only ever added and
/// left to expire. Failures must degrade to a storage lookup, never to an
/// error response.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Returns the cached long URL for a short code.
    ///
    /// `Ok(None)` on a miss. Implementations may also report a backend error,
    /// which callers treat like a miss.
    async fn get_long_url(&self, short_code: &str) -> CacheResult<Option<String>>;

    /// Caches a mapping with the implementation's default TTL.
    async fn set_long_url(&self, short_code: &str, long_url: &str) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    async fn health_check(&self) -> bool;

    /// Human-readable backend name for health reports.
    fn backend(&self) -> &'static str;
}
