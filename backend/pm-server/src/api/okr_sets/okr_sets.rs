//! OKR set REST API handlers

use crate::{ApiResult, AppState, CreateOkrSetRequest, OkrSetService, UpdateOkrSetRequest};

use pm_core::OkrSet;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

/// GET /api/okr-sets
pub async fn list_okr_sets(State(state): State<AppState>) -> ApiResult<Json<Vec<OkrSet>>> {
    let service = OkrSetService::new(state.pool.clone());
    Ok(Json(service.list().await?))
}

/// GET /api/okr-sets/{period_id}
pub async fn get_okr_set(
    State(state): State<AppState>,
    Path(period_id): Path<String>,
) -> ApiResult<Json<OkrSet>> {
    let service = OkrSetService::new(state.pool.clone());
    Ok(Json(service.get(&period_id).await?))
}

/// POST /api/okr-sets
///
/// 409 if the period already exists; the stored set is left as is.
pub async fn create_okr_set(
    State(state): State<AppState>,
    payload: Result<Json<CreateOkrSetRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<OkrSet>)> {
    let Json(req) = payload?;

    let service = OkrSetService::new(state.pool.clone());
    let okr_set = service.create(req.into()).await?;

    Ok((StatusCode::CREATED, Json(okr_set)))
}

/// PUT /api/okr-sets/{period_id}
pub async fn update_okr_set(
    State(state): State<AppState>,
    Path(period_id): Path<String>,
    payload: Result<Json<UpdateOkrSetRequest>, JsonRejection>,
) -> ApiResult<Json<OkrSet>> {
    let Json(req) = payload?;

    let service = OkrSetService::new(state.pool.clone());
    let okr_set = service
        .update(&period_id, req.period_name, req.okrs)
        .await?;

    Ok(Json(okr_set))
}
