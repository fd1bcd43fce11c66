//! Row structs as stored in PostgreSQL, and their conversion to domain types.

pub mod drawer_card;
pub mod status_check;

use drawer_core::store::StoreError;
use drawer_core::timestamp::parse_timestamp;
use drawer_core::types::Timestamp;

/// Parse a stored text timestamp, reporting the offending record on failure.
pub(crate) fn decode_timestamp(
    entity: &'static str,
    id: &str,
    field: &'static str,
    raw: &str,
) -> Result<Timestamp, StoreError> {
    parse_timestamp(raw).map_err(|_| StoreError::Corrupt {
        entity,
        id: id.to_string(),
        field,
        value: raw.to_string(),
    })
}
