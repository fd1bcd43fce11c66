/// All record identifiers are UUIDv4 strings generated server-side.
pub type DbId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh record identifier.
pub fn new_id() -> DbId {
    uuid::Uuid::new_v4().to_string()
}
