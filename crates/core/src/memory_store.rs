use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::drawer_card::{DrawerCard, DrawerCardPatch};
use crate::status_check::StatusCheck;
use crate::store::{DocumentStore, StoreError};
use crate::types::Timestamp;

/// In-process [`DocumentStore`] used when no database is configured.
///
/// Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    cards: RwLock<Vec<DrawerCard>>,
    status_checks: RwLock<Vec<StatusCheck>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_card(&self, card: &DrawerCard) -> Result<(), StoreError> {
        self.cards.write().await.push(card.clone());
        Ok(())
    }

    async fn find_card(&self, id: &str) -> Result<Option<DrawerCard>, StoreError> {
        let cards = self.cards.read().await;
        Ok(cards.iter().find(|c| c.id == id).cloned())
    }

    async fn list_cards(&self, limit: usize) -> Result<Vec<DrawerCard>, StoreError> {
        let mut cards = self.cards.read().await.clone();
        // Stable: ties keep insertion order.
        cards.sort_by_key(|c| c.order);
        cards.truncate(limit);
        Ok(cards)
    }

    async fn update_card(
        &self,
        id: &str,
        patch: &DrawerCardPatch,
        updated_at: Timestamp,
    ) -> Result<u64, StoreError> {
        let mut cards = self.cards.write().await;
        match cards.iter_mut().find(|c| c.id == id) {
            Some(card) => {
                card.apply(patch, updated_at);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_card(&self, id: &str) -> Result<u64, StoreError> {
        let mut cards = self.cards.write().await;
        let before = cards.len();
        cards.retain(|c| c.id != id);
        Ok((before - cards.len()) as u64)
    }

    async fn insert_status_check(&self, check: &StatusCheck) -> Result<(), StoreError> {
        self.status_checks.write().await.push(check.clone());
        Ok(())
    }

    async fn list_status_checks(&self, limit: usize) -> Result<Vec<StatusCheck>, StoreError> {
        let checks = self.status_checks.read().await;
        Ok(checks.iter().take(limit).cloned().collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn close(&self) {}
}
