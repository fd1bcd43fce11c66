use std::sync::Arc;

use crate::error::CoreError;
use crate::status_check::{NewStatusCheck, StatusCheck};
use crate::store::DocumentStore;

/// Maximum number of records returned by [`StatusLog::list_all`].
pub const LIST_LIMIT: usize = 1000;

/// Append-only log of status checks. No update or delete.
#[derive(Clone)]
pub struct StatusLog {
    store: Arc<dyn DocumentStore>,
}

impl StatusLog {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn append(&self, input: NewStatusCheck) -> Result<StatusCheck, CoreError> {
        let check = StatusCheck::new(input);
        self.store.insert_status_check(&check).await?;
        Ok(check)
    }

    /// Records in insertion order, capped at [`LIST_LIMIT`].
    pub async fn list_all(&self) -> Result<Vec<StatusCheck>, CoreError> {
        Ok(self.store.list_status_checks(LIST_LIMIT).await?)
    }
}
