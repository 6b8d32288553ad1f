use crate::{KeyResult, Objective, OkrSet};

fn sample_set() -> OkrSet {
    OkrSet::new(
        "2026-Q3".to_string(),
        "2026 Q3".to_string(),
        vec![
            Objective {
                id: "o1".to_string(),
                text: "Grow revenue".to_string(),
                key_results: vec![
                    KeyResult {
                        id: "kr1".to_string(),
                        text: "Ship billing v2".to_string(),
                    },
                    KeyResult {
                        id: "kr2".to_string(),
                        text: "Cut churn by 5%".to_string(),
                    },
                ],
            },
            Objective {
                id: "o2".to_string(),
                text: "Stabilize platform".to_string(),
                key_results: vec![KeyResult {
                    id: "kr3".to_string(),
                    text: "99.9% uptime".to_string(),
                }],
            },
        ],
    )
}

#[test]
fn test_okr_set_validate_accepts_complete_set() {
    assert!(sample_set().validate().is_ok());
}

#[test]
fn test_okr_set_validate_rejects_blank_period_fields() {
    let mut set = sample_set();
    set.period_id = "  ".to_string();
    assert!(set.validate().is_err());

    let mut set = sample_set();
    set.period_name = String::new();
    assert!(set.validate().is_err());
}

#[test]
fn test_okr_set_key_result_ids_in_objective_order() {
    let set = sample_set();
    let ids: Vec<&str> = set.key_result_ids().collect();
    assert_eq!(ids, vec!["kr1", "kr2", "kr3"]);
}

#[test]
fn test_okr_set_json_uses_camel_case() {
    let json = serde_json::to_value(sample_set()).unwrap();
    assert_eq!(json["periodId"], "2026-Q3");
    assert_eq!(json["okrs"][0]["keyResults"][1]["id"], "kr2");
}
