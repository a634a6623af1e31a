//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortenedLink, ShortenedLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::db_error::{UniqueField, unique_violation_field};
use serde_json::json;

/// PostgreSQL repository for the `shortened_links` table.
///
/// Uniqueness is enforced by the table's named unique constraints, so
/// [`LinkRepository::insert`] is a single atomic statement.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    long_url: String,
    short_code: String,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for ShortenedLink {
    fn from(row: LinkRow) -> Self {
        ShortenedLink::new(row.id, row.long_url, row.short_code, row.created_at)
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert(&self, new_link: NewShortenedLink) -> Result<ShortenedLink, AppError> {
        let result = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO shortened_links (long_url, short_code)
            VALUES ($1, $2)
            RETURNING id, long_url, short_code, created_at
            "#,
        )
        .bind(&new_link.long_url)
        .bind(&new_link.short_code)
        .fetch_one(self.pool.as_ref())
        .await;

        match result {
            Ok(row) => Ok(row.into()),
            Err(e) => match unique_violation_field(&e) {
                Some(UniqueField::ShortCode) => Err(AppError::CodeCollision {
                    code: new_link.short_code,
                }),
                Some(UniqueField::LongUrl) => Err(AppError::conflict(
                    "Long URL is already shortened",
                    json!({ "long_url": new_link.long_url }),
                )),
                None => Err(e.into()),
            },
        }
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<ShortenedLink>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, long_url, short_code, created_at
            FROM shortened_links
            WHERE short_code = $1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<ShortenedLink>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, long_url, short_code, created_at
            FROM shortened_links
            WHERE long_url = $1
            "#,
        )
        .bind(long_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM shortened_links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
