use crate::clock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A free-form remark attached to a project. Stored inline with the project row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub user_id: String,
    pub content: String,
    #[serde(default = "clock::now")]
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(user_id: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            content,
            created_at: clock::now(),
        }
    }
}
