//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Row shape shared by every link query.
#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    code: String,
    alias: Option<String>,
    destination: String,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(row.id, row.code, row.alias, row.destination, row.created_at)
    }
}

/// PostgreSQL repository for link storage and retrieval.
///
/// The schema carries no unique constraint on `code`; uniqueness is enforced
/// only by the service's read-before-write existence check, so the
/// check-then-insert race is possible and accepted.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn find_by_code_or_alias(&self, code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, code, alias, destination, created_at
            FROM links
            WHERE code = $1 OR alias = $1
            LIMIT 1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn find_by_destination(&self, destination: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, code, alias, destination, created_at
            FROM links
            WHERE destination = $1
            LIMIT 1
            "#,
        )
        .bind(destination)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (code, alias, destination)
            VALUES ($1, $2, $3)
            RETURNING id, code, alias, destination, created_at
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.alias)
        .bind(&new_link.destination)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(Link::from(row))
    }
}
