//! Change-log construction for project updates.
//!
//! Entries are computed by comparing serialized values, so role lists and
//! other structured fields are compared by content. A batch produced for one
//! update is placed ahead of all older entries, keeping the log newest first.

use crate::{ChangeLogEntry, Project, ProjectField, ProjectPatch, Result as CoreErrorResult};
use crate::field_label;

use chrono::{DateTime, Utc};
use serde_json::Value;

/// Label of the synthetic entry written when a project is created.
pub const CREATED_FIELD: &str = "project";
/// New value of the synthetic creation entry.
pub const CREATED_VALUE: &str = "created";

/// Collects entries for fields whose value actually changed.
pub struct ChangeLogBuilder {
    actor: String,
    changed_at: DateTime<Utc>,
    entries: Vec<ChangeLogEntry>,
}

impl ChangeLogBuilder {
    pub fn new(actor: impl Into<String>, changed_at: DateTime<Utc>) -> Self {
        Self {
            actor: actor.into(),
            changed_at,
            entries: Vec::new(),
        }
    }

    /// Record a change to `key` unless the two values are deep-equal.
    pub fn track(&mut self, key: &str, old_value: &Value, new_value: &Value) {
        if old_value != new_value {
            self.entries.push(ChangeLogEntry::new(
                self.actor.clone(),
                field_label(key),
                old_value.clone(),
                new_value.clone(),
                self.changed_at,
            ));
        }
    }

    pub fn build(self) -> Vec<ChangeLogEntry> {
        self.entries
    }
}

/// Entries for every trackable field in `patch` that differs from `current`.
pub fn diff(
    current: &Project,
    patch: &ProjectPatch,
    actor: &str,
    changed_at: DateTime<Utc>,
) -> CoreErrorResult<Vec<ChangeLogEntry>> {
    let snapshot = serde_json::to_value(current)?;
    let mut builder = ChangeLogBuilder::new(actor, changed_at);

    for field in ProjectField::trackable() {
        if let Some(new_value) = patch.get(field) {
            let old_value = snapshot.get(field.key()).unwrap_or(&Value::Null);
            builder.track(field.key(), old_value, new_value);
        }
    }

    Ok(builder.build())
}

/// New batch first, then the existing log.
pub fn prepend(batch: Vec<ChangeLogEntry>, existing: &[ChangeLogEntry]) -> Vec<ChangeLogEntry> {
    let mut log = batch;
    log.extend_from_slice(existing);
    log
}

pub fn created_entry(actor: impl Into<String>, at: DateTime<Utc>) -> ChangeLogEntry {
    ChangeLogEntry::new(
        actor,
        CREATED_FIELD,
        Value::String(String::new()),
        Value::String(CREATED_VALUE.to_string()),
        at,
    )
}
