//! Status check entity: an append-only log of client pings.

use serde::{Deserialize, Serialize};

use crate::timestamp;
use crate::types::{new_id, DbId, Timestamp};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: DbId,
    pub client_name: String,
    pub timestamp: Timestamp,
}

impl StatusCheck {
    pub fn new(input: NewStatusCheck) -> Self {
        Self {
            id: new_id(),
            client_name: input.client_name,
            timestamp: timestamp::now(),
        }
    }
}

/// Payload for appending a status check.
#[derive(Debug, Clone, Deserialize)]
pub struct NewStatusCheck {
    pub client_name: String,
}
