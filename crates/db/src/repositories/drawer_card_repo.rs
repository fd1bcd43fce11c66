//! Repository for the `drawer_cards` table.

use drawer_core::drawer_card::DrawerCardPatch;
use sqlx::PgPool;

use crate::models::drawer_card::DrawerCardRow;

/// Column list for `drawer_cards` queries.
const COLUMNS: &str = "id, title, link, image_url, sort_order, created_at, updated_at";

/// Provides data access for drawer cards.
pub struct DrawerCardRepo;

impl DrawerCardRepo {
    pub async fn insert(pool: &PgPool, row: &DrawerCardRow) -> Result<(), sqlx::Error> {
        let query = format!(
            "INSERT INTO drawer_cards ({COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)"
        );
        sqlx::query(&query)
            .bind(&row.id)
            .bind(&row.title)
            .bind(&row.link)
            .bind(&row.image_url)
            .bind(row.sort_order)
            .bind(&row.created_at)
            .bind(&row.updated_at)
            .execute(pool)
            .await?;
        Ok(())
    }

    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<DrawerCardRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM drawer_cards WHERE id = $1");
        sqlx::query_as::<_, DrawerCardRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List cards ordered by `sort_order` ascending, at most `limit` rows.
    pub async fn list(pool: &PgPool, limit: i64) -> Result<Vec<DrawerCardRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM drawer_cards \
             ORDER BY sort_order ASC \
             LIMIT $1"
        );
        sqlx::query_as::<_, DrawerCardRow>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Partially update a card.
    ///
    /// Uses `COALESCE` so only provided fields are changed; `updated_at` is
    /// always set. Returns the number of rows matched.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        patch: &DrawerCardPatch,
        updated_at: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE drawer_cards SET \
                 title = COALESCE($2, title), \
                 link = COALESCE($3, link), \
                 image_url = COALESCE($4, image_url), \
                 sort_order = COALESCE($5, sort_order), \
                 updated_at = $6 \
             WHERE id = $1",
        )
        .bind(id)
        .bind(&patch.title)
        .bind(&patch.link)
        .bind(&patch.image_url)
        .bind(patch.order)
        .bind(updated_at)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete a card by ID. Returns the number of rows deleted.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM drawer_cards WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
