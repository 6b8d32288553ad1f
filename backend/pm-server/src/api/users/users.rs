//! User REST API handlers
//!
//! Users are reference data. Login only checks that the id is known.

use crate::{ApiError, ApiResult, AppState, LoginRequest};

use pm_core::User;
use pm_db::UserRepository;

use axum::{Json, extract::State, extract::rejection::JsonRejection};

/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let repo = UserRepository::new(state.pool.clone());
    let users = repo.find_all().await?;

    Ok(Json(users))
}

/// POST /api/login
///
/// Resolve a user id to its record. There is no credential check.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<User>> {
    let Json(req) = payload?;
    let user_id = req
        .user_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::validation("userId is required", Some("userId")))?;

    let repo = UserRepository::new(state.pool.clone());
    let user = repo
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User {} not found", user_id)))?;

    log::info!("User {} logged in", user.id);
    Ok(Json(user))
}
