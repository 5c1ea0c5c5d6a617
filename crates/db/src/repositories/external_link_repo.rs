//! Repository for the `external_links` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::external_link::{CreateExternalLink, ExternalLink};

/// Column list for `external_links` queries.
const COLUMNS: &str = "id, title, url, category, kind, created_at";

/// Provides data access for external links.
pub struct ExternalLinkRepo;

impl ExternalLinkRepo {
    /// List all links, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ExternalLink>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM external_links ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, ExternalLink>(&query)
            .fetch_all(pool)
            .await
    }

    /// Insert a link, returning the stored row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateExternalLink,
    ) -> Result<ExternalLink, sqlx::Error> {
        let query = format!(
            "INSERT INTO external_links (title, url, category, kind) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ExternalLink>(&query)
            .bind(&input.title)
            .bind(&input.url)
            .bind(input.category.as_str())
            .bind(input.kind.as_str())
            .fetch_one(pool)
            .await
    }

    /// Delete a link. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM external_links WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
