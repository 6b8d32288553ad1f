//! Administrative endpoints for server management.

use crate::{ApiResult, AppState, RolloverReport, rollover::job};

use axum::{Json, extract::State};
use log::info;

/// POST /api/admin/rollover
///
/// Run the weekly rollover now instead of waiting for the schedule.
pub async fn rollover_handler(State(state): State<AppState>) -> ApiResult<Json<RolloverReport>> {
    info!("Manual rollover requested");

    let report = job::run_once(&state.pool).await?;

    Ok(Json(report))
}
