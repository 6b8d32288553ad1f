use crate::change_log::{CREATED_FIELD, CREATED_VALUE};
use crate::tests::sample_project;
use crate::{
    CoreError, NewProject, Project, ProjectPriority, ProjectStatus, RoleAssignment, SYSTEM_ACTOR,
    clock,
};

use chrono::NaiveDate;

#[test]
fn test_project_create_seeds_single_created_entry() {
    let project = sample_project();

    assert_eq!(project.change_log.len(), 1);
    let entry = &project.change_log[0];
    assert_eq!(entry.field, CREATED_FIELD);
    assert_eq!(entry.old_value, serde_json::json!(""));
    assert_eq!(entry.new_value, serde_json::json!(CREATED_VALUE));
    assert_eq!(entry.user_id, SYSTEM_ACTOR);
    assert_eq!(entry.changed_at, project.created_at);
    assert_eq!(project.created_at, project.updated_at);
}

#[test]
fn test_project_create_attributes_creation_to_first_product_manager() {
    let mut draft = NewProject::new("Search", ProjectPriority::Urgent);
    draft.product_managers = vec![RoleAssignment::new("alice"), RoleAssignment::new("bob")];

    let project = Project::create(draft, ProjectStatus::new("design"), clock::now());

    assert_eq!(project.change_log[0].user_id, "alice");
}

#[test]
fn test_project_create_uses_initial_status_unless_given() {
    let project = sample_project();
    assert_eq!(project.status, ProjectStatus::new("not_started"));

    let mut draft = NewProject::new("Search", ProjectPriority::Urgent);
    draft.status = Some(ProjectStatus::new("testing"));
    let project = Project::create(draft, ProjectStatus::new("not_started"), clock::now());
    assert_eq!(project.status, ProjectStatus::new("testing"));
}

#[test]
fn test_project_create_dedups_id_sets() {
    let mut draft = NewProject::new("Search", ProjectPriority::Routine);
    draft.key_result_ids = vec!["kr1".into(), "kr2".into(), "kr1".into()];
    draft.followers = vec!["u1".into(), "u1".into()];

    let project = Project::create(draft, ProjectStatus::new("design"), clock::now());

    assert_eq!(project.key_result_ids, vec!["kr1", "kr2"]);
    assert_eq!(project.followers, vec!["u1"]);
}

#[test]
fn test_dept_okr_project_without_key_results_is_invalid() {
    let mut project = sample_project();
    project.priority = ProjectPriority::DeptOkr;

    let err = project.validate().unwrap_err();
    assert!(matches!(err, CoreError::Validation { .. }));
    assert_eq!(err.field(), Some("keyResultIds"));

    project.key_result_ids.push("kr1".to_string());
    assert!(project.validate().is_ok());
}

#[test]
fn test_blank_name_is_invalid() {
    let mut project = sample_project();
    project.name = "   ".to_string();

    assert_eq!(project.validate().unwrap_err().field(), Some("name"));
}

#[test]
fn test_role_assignment_with_backwards_dates_is_invalid() {
    let mut project = sample_project();
    let mut dev = RoleAssignment::new("carol");
    dev.start_date = NaiveDate::from_ymd_opt(2026, 5, 10);
    dev.end_date = NaiveDate::from_ymd_opt(2026, 5, 1);
    project.backend_developers.push(dev);

    assert_eq!(
        project.validate().unwrap_err().field(),
        Some("backendDevelopers")
    );
}

#[test]
fn test_has_pending_weekly_update() {
    let mut project = sample_project();
    assert!(!project.has_pending_weekly_update());

    project.weekly_update = Some(String::new());
    assert!(!project.has_pending_weekly_update());

    project.weekly_update = Some("Finished the API".to_string());
    assert!(project.has_pending_weekly_update());
}

#[test]
fn test_project_json_round_trip_keeps_every_field() {
    let mut project = sample_project();
    project.launch_date = NaiveDate::from_ymd_opt(2026, 12, 1);
    project.weekly_update = Some("progress".to_string());

    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["launchDate"], "2026-12-01");
    assert_eq!(json["lastWeekUpdate"], serde_json::Value::Null);

    let back: Project = serde_json::from_value(json).unwrap();
    assert_eq!(back, project);
}
