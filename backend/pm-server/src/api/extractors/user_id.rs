//! Caller identity for audit purposes.

use crate::{ApiError, AppState};

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

pub const USER_ID_HEADER: &str = "X-User-Id";

/// The acting user taken from the `X-User-Id` header.
///
/// Falls back to the configured system user when the header is missing or
/// blank. A `userId` in a request body takes precedence over this; see the
/// project update handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserId(pub String);

impl FromRequestParts<AppState> for UserId {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            if let Some(value) = parts.headers.get(USER_ID_HEADER) {
                match value.to_str().map(str::trim) {
                    Ok(user_id) if !user_id.is_empty() => {
                        log::debug!("Using user ID from {} header: {}", USER_ID_HEADER, user_id);
                        return Ok(UserId(user_id.to_string()));
                    }
                    _ => log::warn!("Ignoring unusable {} header", USER_ID_HEADER),
                }
            }

            let system = &state.api_config.system_user_id;
            log::debug!("Using system user ID: {}", system);
            Ok(UserId(system.clone()))
        }
    }
}
