pub mod admin;
pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod rollover;
pub mod routes;
pub mod services;
pub mod shutdown;

#[cfg(test)]
mod tests;

pub use api::{
    delete_response::DeleteResponse,
    error::ApiError,
    error::ApiErrorBody,
    error::Result as ApiResult,
    extractors::user_id::{USER_ID_HEADER, UserId},
    okr_sets::{
        create_okr_set_request::CreateOkrSetRequest,
        okr_sets::{create_okr_set, get_okr_set, list_okr_sets, update_okr_set},
        update_okr_set_request::UpdateOkrSetRequest,
    },
    projects::projects::{
        create_project, delete_project, get_project, list_projects, update_project,
    },
    users::{
        login_request::LoginRequest,
        users::{list_users, login},
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerErrorResult, ServerError};
pub use rollover::job::RolloverReport;
pub use rollover::schedule::WeeklySchedule;
pub use routes::build_router;
pub use services::error::{Result as ServiceResult, ServiceError};
pub use services::okr_set_service::OkrSetService;
pub use services::project_service::ProjectService;
pub use shutdown::shutdown_coordinator::ShutdownCoordinator;
pub use shutdown::shutdown_guard::ShutdownGuard;
