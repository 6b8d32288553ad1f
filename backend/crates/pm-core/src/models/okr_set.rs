//! OKR periods: each period holds an ordered list of objectives, each with
//! its key results. Projects reference key results by id.

use crate::{CoreError, Result as CoreErrorResult};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyResult {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Objective {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub key_results: Vec<KeyResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OkrSet {
    pub period_id: String,
    pub period_name: String,
    #[serde(default)]
    pub okrs: Vec<Objective>,
}

impl OkrSet {
    pub fn new(period_id: String, period_name: String, okrs: Vec<Objective>) -> Self {
        Self {
            period_id,
            period_name,
            okrs,
        }
    }

    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.period_id.trim().is_empty() {
            return Err(CoreError::validation(
                "periodId must not be empty",
                Some("periodId"),
            ));
        }
        if self.period_name.trim().is_empty() {
            return Err(CoreError::validation(
                "periodName must not be empty",
                Some("periodName"),
            ));
        }
        Ok(())
    }

    /// Every key result id in the period, in objective order.
    pub fn key_result_ids(&self) -> impl Iterator<Item = &str> {
        self.okrs
            .iter()
            .flat_map(|o| o.key_results.iter().map(|kr| kr.id.as_str()))
    }
}
