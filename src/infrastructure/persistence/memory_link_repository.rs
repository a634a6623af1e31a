//! In-memory implementation of the link repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::entities::{NewShortenedLink, ShortenedLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use serde_json::json;

#[derive(Debug, Default)]
struct Tables {
    by_code: HashMap<String, ShortenedLink>,
    /// long_url -> short_code
    by_long_url: HashMap<String, String>,
    last_id: i64,
}

/// Process-local mapping store.
///
/// Both unique indexes live behind one mutex, so the uniqueness check and
/// the insert happen atomically. The lock is never held across an `.await`.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    tables: Mutex<Tables>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert(&self, new_link: NewShortenedLink) -> Result<ShortenedLink, AppError> {
        if new_link.long_url.is_empty() || new_link.short_code.is_empty() {
            return Err(AppError::bad_request(
                "Long URL and short code must not be empty",
                json!({}),
            ));
        }

        let mut tables = self.tables();

        if tables.by_code.contains_key(&new_link.short_code) {
            return Err(AppError::CodeCollision {
                code: new_link.short_code,
            });
        }

        if tables.by_long_url.contains_key(&new_link.long_url) {
            return Err(AppError::conflict(
                "Long URL is already shortened",
                json!({ "long_url": new_link.long_url }),
            ));
        }

        tables.last_id += 1;
        let link = ShortenedLink::new(
            tables.last_id,
            new_link.long_url,
            new_link.short_code,
            Utc::now(),
        );

        tables
            .by_long_url
            .insert(link.long_url.clone(), link.short_code.clone());
        tables.by_code.insert(link.short_code.clone(), link.clone());

        Ok(link)
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<ShortenedLink>, AppError> {
        Ok(self.tables().by_code.get(short_code).cloned())
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<ShortenedLink>, AppError> {
        let tables = self.tables();

        Ok(tables
            .by_long_url
            .get(long_url)
            .and_then(|code| tables.by_code.get(code))
            .cloned())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.tables().by_code.len() as i64)
    }
}
