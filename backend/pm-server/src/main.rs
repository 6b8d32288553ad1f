use pm_server::{
    AppState, ServerError, ServerErrorResult, ShutdownCoordinator, WeeklySchedule, build_router,
    logger::{self, LogTarget},
    rollover::scheduler,
};

use pm_db::Database;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // A missing .env is normal.
    let _ = dotenvy::dotenv();

    // Load and validate configuration
    let config = pm_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    let target = LogTarget::from_config(&config)?;
    logger::initialize(config.logging.level, &target)?;

    info!("Starting pm-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Open the database and run migrations
    let database_path = config.database_path()?;
    let db = Database::open(&database_path, config.database.max_connections).await?;

    let statuses = config.project.status_catalog()?;
    let shutdown = ShutdownCoordinator::new();

    let app_state = AppState::new(
        db.pool().clone(),
        statuses,
        config.api.clone(),
        shutdown.clone(),
    );

    // Weekly rollover
    let rollover_task = if config.rollover.enabled {
        let schedule = WeeklySchedule::from_config(&config.rollover)?;
        Some(scheduler::spawn(
            db.pool().clone(),
            schedule,
            shutdown.subscribe_guard(),
        ))
    } else {
        warn!("Weekly rollover DISABLED");
        None
    };

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: bind_addr.clone(),
            source,
        })?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener
        .local_addr()
        .map_err(|source| ServerError::Bind {
            addr: bind_addr.clone(),
            source,
        })?;
    info!("Server listening on {}", actual_addr);

    // Spawn signal handler for graceful shutdown
    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    // Start server with graceful shutdown
    info!("Server ready to accept connections");
    let mut guard = shutdown.subscribe_guard();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            guard.wait().await;
            info!("Graceful shutdown started");
        })
        .await
        .map_err(|source| ServerError::Serve { source })?;

    if let Some(task) = rollover_task
        && let Err(e) = task.await
    {
        error!("Rollover scheduler ended abnormally: {}", e);
    }

    db.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}
