use pm_core::Objective;

use serde::Deserialize;

/// Full replacement: both fields are required.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOkrSetRequest {
    pub period_name: String,
    pub okrs: Vec<Objective>,
}
