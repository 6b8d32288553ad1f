use crate::tests::sample_project;
use crate::{CoreError, ProjectField, ProjectPatch, ProjectPriority, ProjectStatus};

use serde_json::{Map, Value, json};

fn patch(value: Value) -> Result<ProjectPatch, CoreError> {
    match value {
        Value::Object(map) => ProjectPatch::from_map(map),
        _ => panic!("test patches must be JSON objects"),
    }
}

#[test]
fn test_read_only_keys_are_dropped() {
    let patch = patch(json!({
        "id": "00000000-0000-0000-0000-000000000000",
        "userId": "alice",
        "changeLog": [],
        "createdAt": "2020-01-01T00:00:00Z",
        "updatedAt": "2020-01-01T00:00:00Z",
        "name": "Renamed"
    }))
    .unwrap();

    assert_eq!(patch.fields().collect::<Vec<_>>(), vec![ProjectField::Name]);
}

#[test]
fn test_unknown_key_is_rejected() {
    let err = patch(json!({ "colour": "red" })).unwrap_err();

    assert!(matches!(err, CoreError::UnknownField { ref field, .. } if field == "colour"));
}

#[test]
fn test_fields_are_kept_in_table_order() {
    let patch = patch(json!({
        "launchDate": "2026-11-01",
        "comments": [],
        "name": "X",
        "status": "design"
    }))
    .unwrap();

    assert_eq!(
        patch.fields().collect::<Vec<_>>(),
        vec![
            ProjectField::Name,
            ProjectField::Status,
            ProjectField::LaunchDate,
            ProjectField::Comments,
        ]
    );
}

#[test]
fn test_empty_map_gives_empty_patch() {
    let patch = ProjectPatch::from_map(Map::new()).unwrap();
    assert!(patch.is_empty());
    assert_eq!(patch.len(), 0);
}

#[test]
fn test_apply_to_overlays_only_patched_fields() {
    let current = sample_project();
    let patch = patch(json!({
        "priority": "dept_okr",
        "keyResultIds": ["kr1"],
        "weeklyUpdate": "Kickoff done",
        "status": "design"
    }))
    .unwrap();

    let merged = patch.apply_to(&current).unwrap();

    assert_eq!(merged.id, current.id);
    assert_eq!(merged.name, current.name);
    assert_eq!(merged.priority, ProjectPriority::DeptOkr);
    assert_eq!(merged.key_result_ids, vec!["kr1"]);
    assert_eq!(merged.weekly_update.as_deref(), Some("Kickoff done"));
    assert_eq!(merged.status, ProjectStatus::new("design"));
    assert_eq!(merged.change_log, current.change_log);
    assert_eq!(merged.created_at, current.created_at);
}

#[test]
fn test_apply_to_can_clear_optional_field() {
    let mut current = sample_project();
    current.weekly_update = Some("old".to_string());

    let merged = patch(json!({ "weeklyUpdate": null }))
        .unwrap()
        .apply_to(&current)
        .unwrap();

    assert_eq!(merged.weekly_update, None);
}
