use pm_core::{Objective, OkrSet};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOkrSetRequest {
    pub period_id: String,
    pub period_name: String,
    #[serde(default)]
    pub okrs: Vec<Objective>,
}

impl From<CreateOkrSetRequest> for OkrSet {
    fn from(req: CreateOkrSetRequest) -> Self {
        OkrSet::new(req.period_id, req.period_name, req.okrs)
    }
}
