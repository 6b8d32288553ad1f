use crate::{CoreError, DEFAULT_STATUSES, ProjectStatus, StatusCatalog};

use googletest::prelude::*;

#[test]
fn given_default_catalog_when_inspected_then_has_nine_ordered_stages() {
    let catalog = StatusCatalog::default();

    assert_that!(catalog.stages().len(), eq(9));
    assert_that!(catalog.initial(), eq(&ProjectStatus::new("not_started")));
    assert_that!(
        catalog.position(&ProjectStatus::new("launched")),
        some(eq(8))
    );
}

#[test]
fn given_default_catalog_when_validating_unknown_status_then_invalid_status() {
    let catalog = StatusCatalog::default();

    let result = catalog.validate(&ProjectStatus::new("shipped"));

    assert!(matches!(result, Err(CoreError::InvalidStatus { .. })));
}

#[test]
fn given_relabeled_catalog_when_validating_then_only_new_labels_accepted() {
    let catalog = StatusCatalog::new(vec![
        "idea".to_string(),
        "building".to_string(),
        "live".to_string(),
    ])
    .unwrap();

    assert_that!(catalog.validate(&ProjectStatus::new("building")), ok(anything()));
    assert_that!(catalog.validate(&ProjectStatus::new("launched")), err(anything()));
    assert_that!(catalog.initial(), eq(&ProjectStatus::new("idea")));
}

#[test]
fn given_empty_stage_list_when_building_catalog_then_error() {
    assert_that!(StatusCatalog::new(Vec::new()), err(anything()));
}

#[test]
fn given_duplicate_stage_when_building_catalog_then_error() {
    let result = StatusCatalog::new(vec!["a".to_string(), "b".to_string(), "a".to_string()]);

    assert_that!(result, err(anything()));
}

#[test]
fn given_default_statuses_when_building_catalog_then_ok() {
    let stages = DEFAULT_STATUSES.iter().map(|s| s.to_string()).collect();

    assert_that!(StatusCatalog::new(stages), ok(eq(&StatusCatalog::default())));
}

#[test]
fn test_project_status_serializes_as_plain_string() {
    let json = serde_json::to_value(ProjectStatus::new("design")).unwrap();
    assert_eq!(json, serde_json::json!("design"));
}
