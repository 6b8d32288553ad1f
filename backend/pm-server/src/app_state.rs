use crate::ShutdownCoordinator;

use pm_config::ApiConfig;
use pm_core::StatusCatalog;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub statuses: Arc<StatusCatalog>,
    pub api_config: ApiConfig,
    pub shutdown: ShutdownCoordinator,
}

impl AppState {
    pub fn new(
        pool: SqlitePool,
        statuses: StatusCatalog,
        api_config: ApiConfig,
        shutdown: ShutdownCoordinator,
    ) -> Self {
        Self {
            pool,
            statuses: Arc::new(statuses),
            api_config,
            shutdown,
        }
    }
}
