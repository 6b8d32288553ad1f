use crate::{PROJECT_FIELDS, ProjectField, field_label};

use serde_json::json;

#[test]
fn test_field_variants_match_table_order() {
    for (index, spec) in PROJECT_FIELDS.iter().enumerate() {
        assert_eq!(spec.field as usize, index, "{} is out of order", spec.key);
        assert_eq!(ProjectField::from_key(spec.key), Some(spec.field));
    }
}

#[test]
fn test_trackable_fields_in_emission_order() {
    let keys: Vec<&str> = ProjectField::trackable().map(|f| f.key()).collect();

    assert_eq!(
        keys,
        vec![
            "name",
            "priority",
            "status",
            "weeklyUpdate",
            "productManagers",
            "backendDevelopers",
            "frontendDevelopers",
            "qaTesters",
            "launchDate",
        ]
    );
}

#[test]
fn test_field_label_falls_back_to_raw_name() {
    assert_eq!(field_label("weeklyUpdate"), "This week's update");
    assert_eq!(field_label("qaTesters"), "QA testers");
    assert_eq!(field_label("somethingElse"), "somethingElse");
}

#[test]
fn test_normalize_fills_role_defaults() {
    let value = ProjectField::ProductManagers
        .normalize(json!([{ "userId": "alice" }]))
        .unwrap();

    assert_eq!(
        value,
        json!([{
            "userId": "alice",
            "startDate": null,
            "endDate": null,
            "useSharedSchedule": false
        }])
    );
}

#[test]
fn test_normalize_dedups_id_sets() {
    let value = ProjectField::Followers
        .normalize(json!(["u1", "u2", "u1"]))
        .unwrap();

    assert_eq!(value, json!(["u1", "u2"]));
}

#[test]
fn test_normalize_rejects_wrong_shape() {
    let err = ProjectField::LaunchDate
        .normalize(json!("next tuesday"))
        .unwrap_err();
    assert_eq!(err.field(), Some("launchDate"));

    assert!(ProjectField::Priority.normalize(json!("critical")).is_err());
    assert!(ProjectField::Name.normalize(json!(42)).is_err());
}

#[test]
fn test_normalize_accepts_null_for_optional_text() {
    let value = ProjectField::WeeklyUpdate.normalize(json!(null)).unwrap();
    assert_eq!(value, json!(null));
}
