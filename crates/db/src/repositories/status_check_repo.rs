//! Repository for the append-only `status_checks` table.

use sqlx::PgPool;

use crate::models::status_check::StatusCheckRow;

/// Provides data access for status checks.
pub struct StatusCheckRepo;

impl StatusCheckRepo {
    pub async fn insert(pool: &PgPool, row: &StatusCheckRow) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO status_checks (id, client_name, recorded_at) \
             VALUES ($1, $2, $3)",
        )
        .bind(&row.id)
        .bind(&row.client_name)
        .bind(&row.recorded_at)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// List checks in insertion order, at most `limit` rows.
    pub async fn list(pool: &PgPool, limit: i64) -> Result<Vec<StatusCheckRow>, sqlx::Error> {
        sqlx::query_as::<_, StatusCheckRow>(
            "SELECT id, client_name, recorded_at FROM status_checks \
             ORDER BY seq \
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
