use crate::ShutdownGuard;
use crate::rollover::{job, schedule::WeeklySchedule};

use chrono::Utc;
use log::{error, info};
use sqlx::SqlitePool;
use tokio::task::JoinHandle;

/// Spawn the weekly rollover loop. It runs until `shutdown` fires.
pub fn spawn(pool: SqlitePool, schedule: WeeklySchedule, shutdown: ShutdownGuard) -> JoinHandle<()> {
    tokio::spawn(run(pool, schedule, shutdown))
}

pub async fn run(pool: SqlitePool, schedule: WeeklySchedule, mut shutdown: ShutdownGuard) {
    info!("Weekly rollover scheduled {}", schedule);

    let mut after = Utc::now();

    loop {
        let next = schedule.next_after(after);
        let wait = (next - Utc::now()).to_std().unwrap_or_default();
        info!("Next weekly rollover at {}", next.to_rfc3339());

        tokio::select! {
            _ = shutdown.wait() => {
                info!("Rollover scheduler stopping");
                break;
            }
            _ = tokio::time::sleep(wait) => {
                match job::run_once(&pool).await {
                    Ok(report) => info!("Scheduled rollover finished: {} moved", report.rolled_over),
                    Err(e) => error!("Scheduled rollover failed: {}", e),
                }
                // Never fire twice for the same slot, even if the clock lags.
                after = next.max(Utc::now());
            }
        }
    }
}
