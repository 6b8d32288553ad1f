//! Project REST API handlers
//!
//! An id that is not a valid UUID cannot name a stored project, so it is
//! answered with 404 like any other unknown id.

use crate::{ApiError, ApiResult, AppState, DeleteResponse, ProjectService, UserId};

use pm_core::{NewProject, Project};

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::{Map, Value};
use uuid::Uuid;

/// GET /api/projects
///
/// Newest first.
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<Vec<Project>>> {
    let service = service(&state);
    Ok(Json(service.list().await?))
}

/// GET /api/projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Project>> {
    let project_id = parse_project_id(&id)?;
    Ok(Json(service(&state).get(project_id).await?))
}

/// POST /api/projects
pub async fn create_project(
    State(state): State<AppState>,
    payload: Result<Json<NewProject>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Project>)> {
    let Json(draft) = payload?;
    let project = service(&state).create(draft).await?;

    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/projects/{id}
///
/// Partial update. A `userId` in the body names the actor for the change
/// log and wins over the `X-User-Id` header.
pub async fn update_project(
    State(state): State<AppState>,
    UserId(header_user): UserId,
    Path(id): Path<String>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> ApiResult<Json<Project>> {
    let project_id = parse_project_id(&id)?;
    let Json(fields) = payload?;

    let actor = match fields.get("userId") {
        Some(Value::String(user)) if !user.trim().is_empty() => user.trim().to_string(),
        _ => header_user,
    };

    let project = service(&state).update(project_id, fields, &actor).await?;
    Ok(Json(project))
}

/// DELETE /api/projects/{id}
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let project_id = parse_project_id(&id)?;
    service(&state).delete(project_id).await?;

    Ok(Json(DeleteResponse { success: true, id }))
}

fn service(state: &AppState) -> ProjectService {
    ProjectService::new(state.pool.clone(), state.statuses.clone())
}

#[track_caller]
fn parse_project_id(id: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| ApiError::not_found(format!("Project {} not found", id)))
}
