//! Drawer card CRUD and ordering on top of a [`DocumentStore`].
//!
//! Update is check-then-write-then-read and is not atomic: a concurrent
//! delete between the steps surfaces as `NotFound`, and a concurrent write
//! after ours may be what the read-back returns. Reorder applies each item
//! as an independent write with no rollback.

use std::sync::Arc;

use crate::drawer_card::{self, DrawerCard, DrawerCardPatch, NewDrawerCard, ReorderItem};
use crate::error::CoreError;
use crate::store::DocumentStore;
use crate::timestamp;

/// Maximum number of cards returned by [`DrawerCardStore::list`].
pub const LIST_LIMIT: usize = 100;

/// Result of a reorder batch.
///
/// Items whose id matched nothing are not an error; they are reported here
/// so callers can log them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReorderSummary {
    pub requested: usize,
    pub matched: usize,
    pub unmatched_ids: Vec<String>,
}

/// Service owning the ordered drawer card collection.
#[derive(Clone)]
pub struct DrawerCardStore {
    store: Arc<dyn DocumentStore>,
}

impl DrawerCardStore {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// All cards sorted ascending by `order`, capped at [`LIST_LIMIT`].
    pub async fn list(&self) -> Result<Vec<DrawerCard>, CoreError> {
        Ok(self.store.list_cards(LIST_LIMIT).await?)
    }

    pub async fn get(&self, id: &str) -> Result<DrawerCard, CoreError> {
        self.store
            .find_card(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Create a card with a server-generated id and timestamps.
    pub async fn create(&self, input: NewDrawerCard) -> Result<DrawerCard, CoreError> {
        let card = DrawerCard::new(input);
        self.store.insert_card(&card).await?;
        Ok(card)
    }

    /// Apply the supplied fields and return the card as re-read afterwards.
    ///
    /// An empty patch is legal and only refreshes `updated_at`.
    pub async fn update(&self, id: &str, patch: DrawerCardPatch) -> Result<DrawerCard, CoreError> {
        if self.store.find_card(id).await?.is_none() {
            return Err(not_found(id));
        }

        self.store
            .update_card(id, &patch, timestamp::now())
            .await?;

        self.get(id).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), CoreError> {
        match self.store.delete_card(id).await? {
            0 => Err(not_found(id)),
            _ => Ok(()),
        }
    }

    /// Set `order` (and refresh `updated_at`) for every item in the batch.
    ///
    /// Unknown ids are skipped silently. A backend failure aborts the batch
    /// with earlier items already applied.
    pub async fn reorder(&self, items: &[ReorderItem]) -> Result<ReorderSummary, CoreError> {
        let mut summary = ReorderSummary {
            requested: items.len(),
            ..ReorderSummary::default()
        };

        for item in items {
            let patch = DrawerCardPatch::order_only(item.order);
            let matched = self
                .store
                .update_card(&item.id, &patch, timestamp::now())
                .await?;
            if matched > 0 {
                summary.matched += 1;
            } else {
                summary.unmatched_ids.push(item.id.clone());
            }
        }

        Ok(summary)
    }
}

fn not_found(id: &str) -> CoreError {
    CoreError::NotFound {
        entity: drawer_card::ENTITY,
        id: id.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use assert_matches::assert_matches;

    use super::*;
    use crate::memory_store::MemoryStore;

    fn service() -> DrawerCardStore {
        DrawerCardStore::new(Arc::new(MemoryStore::new()))
    }

    fn new_card(title: &str, order: i64) -> NewDrawerCard {
        NewDrawerCard {
            title: title.to_string(),
            link: format!("https://example.com/{title}"),
            image_url: format!("/uploads/{title}.png"),
            order,
        }
    }

    /// Guarantees the next `timestamp::now()` is strictly later.
    async fn tick() {
        tokio::time::sleep(Duration::from_millis(2)).await;
    }

    #[tokio::test]
    async fn create_defaults_and_timestamps() {
        let svc = service();
        let parsed: NewDrawerCard = serde_json::from_value(serde_json::json!({
            "title": "Home",
            "link": "/",
            "image_url": "/uploads/home.png",
        }))
        .unwrap();

        let card = svc.create(parsed).await.unwrap();

        assert_eq!(card.order, 0);
        assert_eq!(card.created_at, card.updated_at);
    }

    #[tokio::test]
    async fn create_then_get_round_trips_input_fields() {
        let svc = service();
        let created = svc.create(new_card("Blog", 4)).await.unwrap();

        let fetched = svc.get(&created.id).await.unwrap();

        assert_eq!(fetched.title, "Blog");
        assert_eq!(fetched.link, "https://example.com/Blog");
        assert_eq!(fetched.image_url, "/uploads/Blog.png");
        assert_eq!(fetched.order, 4);
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn list_sorts_by_order() {
        let svc = service();
        for (title, order) in [("three", 3), ("one", 1), ("two", 2)] {
            svc.create(new_card(title, order)).await.unwrap();
        }

        let orders: Vec<_> = svc.list().await.unwrap().iter().map(|c| c.order).collect();
        assert_eq!(orders, [1, 2, 3]);
    }

    #[tokio::test]
    async fn list_is_capped() {
        let svc = service();
        for i in 0..(LIST_LIMIT as i64 + 5) {
            svc.create(new_card("c", i)).await.unwrap();
        }
        assert_eq!(svc.list().await.unwrap().len(), LIST_LIMIT);
    }

    #[tokio::test]
    async fn get_unknown_is_not_found() {
        let err = service().get("missing").await.unwrap_err();
        assert_matches!(err, CoreError::NotFound { entity: "DrawerCard", ref id } if id == "missing");
    }

    #[tokio::test]
    async fn update_order_only_leaves_other_fields() {
        let svc = service();
        let card = svc.create(new_card("Shop", 0)).await.unwrap();
        tick().await;

        let updated = svc
            .update(&card.id, DrawerCardPatch::order_only(5))
            .await
            .unwrap();

        assert_eq!(updated.order, 5);
        assert_eq!(updated.title, card.title);
        assert_eq!(updated.link, card.link);
        assert_eq!(updated.image_url, card.image_url);
        assert_eq!(updated.created_at, card.created_at);
        assert!(updated.updated_at > card.updated_at);
    }

    #[tokio::test]
    async fn empty_update_refreshes_updated_at() {
        let svc = service();
        let card = svc.create(new_card("Shop", 0)).await.unwrap();
        tick().await;

        let updated = svc
            .update(&card.id, DrawerCardPatch::default())
            .await
            .unwrap();

        assert_eq!(updated.title, card.title);
        assert!(updated.updated_at > card.updated_at);
    }

    #[tokio::test]
    async fn update_unknown_is_not_found_and_writes_nothing() {
        let svc = service();
        let existing = svc.create(new_card("Keep", 1)).await.unwrap();

        let patch = DrawerCardPatch {
            title: Some("Changed".to_string()),
            ..DrawerCardPatch::default()
        };
        let err = svc.update("ghost", patch).await.unwrap_err();

        assert_matches!(err, CoreError::NotFound { .. });
        assert_eq!(svc.list().await.unwrap(), vec![existing]);
    }

    #[tokio::test]
    async fn delete_removes_card() {
        let svc = service();
        let card = svc.create(new_card("Gone", 0)).await.unwrap();

        svc.delete(&card.id).await.unwrap();

        assert_matches!(svc.get(&card.id).await, Err(CoreError::NotFound { .. }));
        assert_matches!(svc.delete(&card.id).await, Err(CoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn reorder_tolerates_unknown_ids() {
        let svc = service();
        let a = svc.create(new_card("A", 0)).await.unwrap();
        tick().await;

        let summary = svc
            .reorder(&[
                ReorderItem {
                    id: a.id.clone(),
                    order: 9,
                },
                ReorderItem {
                    id: "ghost".to_string(),
                    order: 1,
                },
            ])
            .await
            .unwrap();

        assert_eq!(summary.requested, 2);
        assert_eq!(summary.matched, 1);
        assert_eq!(summary.unmatched_ids, ["ghost"]);

        let moved = svc.get(&a.id).await.unwrap();
        assert_eq!(moved.order, 9);
        assert!(moved.updated_at > a.updated_at);
        assert_eq!(moved.created_at, a.created_at);
    }

    #[tokio::test]
    async fn empty_reorder_is_a_no_op() {
        let summary = service().reorder(&[]).await.unwrap();
        assert_eq!(summary, ReorderSummary::default());
    }
}
