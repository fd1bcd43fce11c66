use async_trait::async_trait;
use drawer_core::drawer_card::{DrawerCard, DrawerCardPatch};
use drawer_core::status_check::StatusCheck;
use drawer_core::store::{DocumentStore, StoreError};
use drawer_core::timestamp::format_timestamp;
use drawer_core::types::Timestamp;

use crate::models::drawer_card::DrawerCardRow;
use crate::models::status_check::StatusCheckRow;
use crate::repositories::{DrawerCardRepo, StatusCheckRepo};
use crate::DbPool;

/// [`DocumentStore`] backed by a PostgreSQL connection pool.
#[derive(Debug, Clone)]
pub struct PgDocumentStore {
    pool: DbPool,
}

impl PgDocumentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Clamp a caller limit into the `BIGINT` bind range.
fn sql_limit(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert_card(&self, card: &DrawerCard) -> Result<(), StoreError> {
        DrawerCardRepo::insert(&self.pool, &DrawerCardRow::from(card))
            .await
            .map_err(StoreError::backend)
    }

    async fn find_card(&self, id: &str) -> Result<Option<DrawerCard>, StoreError> {
        DrawerCardRepo::find_by_id(&self.pool, id)
            .await
            .map_err(StoreError::backend)?
            .map(DrawerCard::try_from)
            .transpose()
    }

    async fn list_cards(&self, limit: usize) -> Result<Vec<DrawerCard>, StoreError> {
        DrawerCardRepo::list(&self.pool, sql_limit(limit))
            .await
            .map_err(StoreError::backend)?
            .into_iter()
            .map(DrawerCard::try_from)
            .collect()
    }

    async fn update_card(
        &self,
        id: &str,
        patch: &DrawerCardPatch,
        updated_at: Timestamp,
    ) -> Result<u64, StoreError> {
        DrawerCardRepo::update(&self.pool, id, patch, &format_timestamp(&updated_at))
            .await
            .map_err(StoreError::backend)
    }

    async fn delete_card(&self, id: &str) -> Result<u64, StoreError> {
        DrawerCardRepo::delete(&self.pool, id)
            .await
            .map_err(StoreError::backend)
    }

    async fn insert_status_check(&self, check: &StatusCheck) -> Result<(), StoreError> {
        StatusCheckRepo::insert(&self.pool, &StatusCheckRow::from(check))
            .await
            .map_err(StoreError::backend)
    }

    async fn list_status_checks(&self, limit: usize) -> Result<Vec<StatusCheck>, StoreError> {
        StatusCheckRepo::list(&self.pool, sql_limit(limit))
            .await
            .map_err(StoreError::backend)?
            .into_iter()
            .map(StatusCheck::try_from)
            .collect()
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool)
            .await
            .map_err(StoreError::backend)
    }

    async fn close(&self) {
        tracing::info!("Closing database connection pool");
        self.pool.close().await;
    }
}
