//! Persistence contract shared by every storage backend.
//!
//! The services in this crate only see [`DocumentStore`]. The PostgreSQL
//! backend lives in `drawer-db`; [`crate::memory_store::MemoryStore`] backs
//! local development and tests.

use async_trait::async_trait;

use crate::drawer_card::{DrawerCard, DrawerCardPatch};
use crate::status_check::StatusCheck;
use crate::types::Timestamp;

/// Errors raised by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend itself failed (connection lost, query rejected, ...).
    #[error("Storage backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A stored record could not be decoded into its native form.
    #[error("Stored {entity} {id} has an unreadable {field}: {value:?}")]
    Corrupt {
        entity: &'static str,
        id: String,
        field: &'static str,
        value: String,
    },
}

impl StoreError {
    /// Wrap any driver error as [`StoreError::Backend`].
    pub fn backend<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend(Box::new(err))
    }
}

/// Document-oriented storage for drawer cards and status checks.
///
/// Every method is a single independent operation; nothing here spans
/// multiple records atomically.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persist a new card.
    async fn insert_card(&self, card: &DrawerCard) -> Result<(), StoreError>;

    /// Point lookup by id.
    async fn find_card(&self, id: &str) -> Result<Option<DrawerCard>, StoreError>;

    /// Scan cards sorted ascending by `order`, returning at most `limit`.
    async fn list_cards(&self, limit: usize) -> Result<Vec<DrawerCard>, StoreError>;

    /// Apply the supplied fields of `patch` plus `updated_at` to one card.
    ///
    /// Returns the number of records matched (0 or 1).
    async fn update_card(
        &self,
        id: &str,
        patch: &DrawerCardPatch,
        updated_at: Timestamp,
    ) -> Result<u64, StoreError>;

    /// Remove one card. Returns the number of records deleted (0 or 1).
    async fn delete_card(&self, id: &str) -> Result<u64, StoreError>;

    /// Append a status check.
    async fn insert_status_check(&self, check: &StatusCheck) -> Result<(), StoreError>;

    /// Status checks in insertion order, at most `limit`.
    async fn list_status_checks(&self, limit: usize) -> Result<Vec<StatusCheck>, StoreError>;

    /// Cheap liveness probe used by the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Release backend resources. Called once on process shutdown.
    async fn close(&self);
}
