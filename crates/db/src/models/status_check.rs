use drawer_core::status_check::StatusCheck;
use drawer_core::store::StoreError;
use drawer_core::timestamp::format_timestamp;
use sqlx::FromRow;

use super::decode_timestamp;

/// A row from the `status_checks` table (without the internal `seq`).
#[derive(Debug, Clone, FromRow)]
pub struct StatusCheckRow {
    pub id: String,
    pub client_name: String,
    pub recorded_at: String,
}

impl From<&StatusCheck> for StatusCheckRow {
    fn from(check: &StatusCheck) -> Self {
        Self {
            id: check.id.clone(),
            client_name: check.client_name.clone(),
            recorded_at: format_timestamp(&check.timestamp),
        }
    }
}

impl TryFrom<StatusCheckRow> for StatusCheck {
    type Error = StoreError;

    fn try_from(row: StatusCheckRow) -> Result<Self, Self::Error> {
        let timestamp = decode_timestamp("StatusCheck", &row.id, "timestamp", &row.recorded_at)?;
        Ok(StatusCheck {
            id: row.id,
            client_name: row.client_name,
            timestamp,
        })
    }
}
