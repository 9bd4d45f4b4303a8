use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Profile entity - one per user, looked up before a post is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    #[serde(rename = "user")]
    pub user_id: Uuid,
    pub handle: String,
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Create a new profile for a user.
    pub fn new(user_id: Uuid, handle: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            handle,
            created_at,
        }
    }
}
