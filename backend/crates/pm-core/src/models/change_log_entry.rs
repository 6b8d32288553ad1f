use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// One field-level modification of a project.
///
/// `field` holds the human-readable label, not the wire name. Old and new
/// values keep whatever JSON shape the field has (strings, role lists, dates).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeLogEntry {
    pub id: Uuid,
    pub user_id: String,
    pub field: String,
    pub old_value: Value,
    pub new_value: Value,
    pub changed_at: DateTime<Utc>,
}

impl ChangeLogEntry {
    pub fn new(
        user_id: impl Into<String>,
        field: impl Into<String>,
        old_value: Value,
        new_value: Value,
        changed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            field: field.into(),
            old_value,
            new_value,
            changed_at,
        }
    }
}
