use crate::{
    AppState, admin, create_okr_set, create_project, delete_project, get_okr_set, get_project,
    health, list_okr_sets, list_projects, list_users, login, update_okr_set, update_project,
};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
///
/// Health probes live at the root; everything else sits under the
/// configured API base path.
pub fn build_router(state: AppState) -> Router {
    let api = api_routes();
    let base_path = state.api_config.base_path.clone();

    let router = Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check));

    // An empty base path mounts the API at the root.
    let router = if base_path.is_empty() {
        router.merge(api)
    } else {
        router.nest(&base_path, api)
    };

    router
        // Add shared state
        .with_state(state)
        // CORS middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

fn api_routes() -> Router<AppState> {
    Router::new()
        // Users
        .route("/users", get(list_users))
        .route("/login", post(login))
        // OKR sets
        .route("/okr-sets", get(list_okr_sets).post(create_okr_set))
        .route(
            "/okr-sets/{period_id}",
            get(get_okr_set).put(update_okr_set),
        )
        // Projects
        .route("/projects", get(list_projects).post(create_project))
        .route(
            "/projects/{id}",
            get(get_project)
                .put(update_project)
                .delete(delete_project),
        )
        // Admin
        .route("/admin/rollover", post(admin::rollover_handler))
}
