//! Drawer card entity and its request payloads.

use serde::{Deserialize, Serialize};

use crate::timestamp;
use crate::types::{new_id, DbId, Timestamp};

/// Entity name used in `NotFound` errors.
pub const ENTITY: &str = "DrawerCard";

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A displayable tile in the ordered drawer list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawerCard {
    pub id: DbId,
    pub title: String,
    pub link: String,
    pub image_url: String,
    pub order: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl DrawerCard {
    /// Build a new card with a fresh id. Both timestamps are set to the same
    /// instant.
    pub fn new(input: NewDrawerCard) -> Self {
        let now = timestamp::now();
        Self {
            id: new_id(),
            title: input.title,
            link: input.link,
            image_url: input.image_url,
            order: input.order,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply the supplied fields of `patch` and stamp `updated_at`.
    ///
    /// `created_at` and `id` are never touched.
    pub fn apply(&mut self, patch: &DrawerCardPatch, updated_at: Timestamp) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(link) = &patch.link {
            self.link = link.clone();
        }
        if let Some(image_url) = &patch.image_url {
            self.image_url = image_url.clone();
        }
        if let Some(order) = patch.order {
            self.order = order;
        }
        self.updated_at = updated_at;
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Payload for creating a card. Unknown keys are dropped on deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct NewDrawerCard {
    pub title: String,
    pub link: String,
    pub image_url: String,
    #[serde(default)]
    pub order: i64,
}

/// Partial update. Omitted and `null` fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DrawerCardPatch {
    pub title: Option<String>,
    pub link: Option<String>,
    pub image_url: Option<String>,
    pub order: Option<i64>,
}

impl DrawerCardPatch {
    /// A patch that only moves a card to a new position.
    pub fn order_only(order: i64) -> Self {
        Self {
            order: Some(order),
            ..Self::default()
        }
    }
}

/// One entry of a reorder batch.
#[derive(Debug, Clone, Deserialize)]
pub struct ReorderItem {
    pub id: DbId,
    pub order: i64,
}
