use pm_core::{
    KeyResult, NewProject, Objective, OkrSet, Project, ProjectPriority, ProjectStatus,
    RoleAssignment, clock,
};

use chrono::{DateTime, Duration, Utc};

/// Creates a routine project in the first default stage
pub fn create_test_project(name: &str) -> Project {
    create_test_project_at(name, clock::now())
}

/// Creates a test project with a fixed creation time
pub fn create_test_project_at(name: &str, at: DateTime<Utc>) -> Project {
    Project::create(
        NewProject::new(name, ProjectPriority::Routine),
        ProjectStatus::new("not_started"),
        at,
    )
}

/// Creates a project with every optional field populated
pub fn create_full_test_project() -> Project {
    let mut draft = NewProject::new("Checkout redesign", ProjectPriority::DeptOkr);
    draft.business_problem = Some("Cart abandonment is high".to_string());
    draft.key_result_ids = vec!["kr-1".to_string(), "kr-2".to_string()];
    draft.product_managers = vec![RoleAssignment::new("alice")];
    draft.backend_developers = vec![RoleAssignment {
        user_id: "bob".to_string(),
        start_date: chrono::NaiveDate::from_ymd_opt(2026, 1, 5),
        end_date: chrono::NaiveDate::from_ymd_opt(2026, 3, 27),
        use_shared_schedule: true,
    }];
    draft.proposal_date = chrono::NaiveDate::from_ymd_opt(2025, 12, 1);
    draft.launch_date = chrono::NaiveDate::from_ymd_opt(2026, 4, 1);
    draft.followers = vec!["carol".to_string()];
    draft.weekly_update = Some("Wireframes approved".to_string());

    Project::create(draft, ProjectStatus::new("design"), clock::now())
}

/// Creates projects spaced one second apart, oldest first
pub fn create_test_projects(count: usize) -> Vec<Project> {
    let base = clock::now() - Duration::seconds(count as i64);
    (0..count)
        .map(|i| create_test_project_at(&format!("Project {}", i), base + Duration::seconds(i as i64)))
        .collect()
}

/// Creates an OKR period with one objective and two key results
pub fn create_test_okr_set(period_id: &str) -> OkrSet {
    OkrSet::new(
        period_id.to_string(),
        format!("Period {}", period_id),
        vec![Objective {
            id: "obj-1".to_string(),
            text: "Grow revenue".to_string(),
            key_results: vec![
                KeyResult {
                    id: "kr-1".to_string(),
                    text: "Ship checkout".to_string(),
                },
                KeyResult {
                    id: "kr-2".to_string(),
                    text: "Cut churn".to_string(),
                },
            ],
        }],
    )
}
