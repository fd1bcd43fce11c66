use drawer_core::drawer_card::{self, DrawerCard};
use drawer_core::store::StoreError;
use drawer_core::timestamp::format_timestamp;
use sqlx::FromRow;

use super::decode_timestamp;

/// A row from the `drawer_cards` table.
#[derive(Debug, Clone, FromRow)]
pub struct DrawerCardRow {
    pub id: String,
    pub title: String,
    pub link: String,
    pub image_url: String,
    pub sort_order: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&DrawerCard> for DrawerCardRow {
    fn from(card: &DrawerCard) -> Self {
        Self {
            id: card.id.clone(),
            title: card.title.clone(),
            link: card.link.clone(),
            image_url: card.image_url.clone(),
            sort_order: card.order,
            created_at: format_timestamp(&card.created_at),
            updated_at: format_timestamp(&card.updated_at),
        }
    }
}

impl TryFrom<DrawerCardRow> for DrawerCard {
    type Error = StoreError;

    fn try_from(row: DrawerCardRow) -> Result<Self, Self::Error> {
        let created_at =
            decode_timestamp(drawer_card::ENTITY, &row.id, "created_at", &row.created_at)?;
        let updated_at =
            decode_timestamp(drawer_card::ENTITY, &row.id, "updated_at", &row.updated_at)?;

        Ok(DrawerCard {
            id: row.id,
            title: row.title,
            link: row.link,
            image_url: row.image_url,
            order: row.sort_order,
            created_at,
            updated_at,
        })
    }
}
