mod api;
mod rollover;

use crate::{AppState, ShutdownCoordinator};

use pm_config::ApiConfig;
use pm_core::StatusCatalog;
use pm_db::Database;

async fn create_test_state() -> AppState {
    let db = Database::in_memory()
        .await
        .expect("Failed to create test database");

    AppState::new(
        db.pool().clone(),
        StatusCatalog::default(),
        ApiConfig::default(),
        ShutdownCoordinator::new(),
    )
}
