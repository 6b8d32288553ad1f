//! Partial project updates.

use crate::models::project_field::READ_ONLY_KEYS;
use crate::{CoreError, Project, ProjectField, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde_json::{Map, Value};

/// A validated partial update: each present field mapped to its normalized
/// new value, kept in field-table order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectPatch {
    values: Vec<(ProjectField, Value)>,
}

impl ProjectPatch {
    /// Parse a client field map.
    ///
    /// Read-only keys (`id`, `userId`, `changeLog`, timestamps) are dropped.
    /// Unknown keys and ill-typed values are rejected.
    #[track_caller]
    pub fn from_map(map: Map<String, Value>) -> CoreErrorResult<Self> {
        let mut values = Vec::with_capacity(map.len());

        for (key, value) in map {
            if READ_ONLY_KEYS.contains(&key.as_str()) {
                continue;
            }

            let field = ProjectField::from_key(&key).ok_or_else(|| CoreError::UnknownField {
                field: key.clone(),
                location: ErrorLocation::from(Location::caller()),
            })?;

            values.push((field, field.normalize(value)?));
        }

        values.sort_by_key(|(field, _)| *field as usize);

        Ok(Self { values })
    }

    pub fn get(&self, field: ProjectField) -> Option<&Value> {
        self.values
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v)
    }

    pub fn fields(&self) -> impl Iterator<Item = ProjectField> + '_ {
        self.values.iter().map(|(f, _)| *f)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Overlay the patch on `current`, producing the merged view.
    ///
    /// Identity, timestamps and the change log are carried over untouched.
    pub fn apply_to(&self, current: &Project) -> CoreErrorResult<Project> {
        let Value::Object(mut merged) = serde_json::to_value(current)? else {
            return Err(CoreError::validation(
                "project did not serialize to a JSON object",
                None,
            ));
        };

        for (field, value) in &self.values {
            merged.insert(field.key().to_string(), value.clone());
        }

        Ok(serde_json::from_value(Value::Object(merged))?)
    }
}
