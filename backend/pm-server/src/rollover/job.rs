use pm_core::clock;
use pm_db::{ProjectRepository, Result as DbErrorResult};

use log::info;
use serde::Serialize;
use sqlx::SqlitePool;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RolloverReport {
    pub rolled_over: usize,
}

/// Roll every pending weekly update over to last week's slot.
///
/// Projects are handled one statement at a time with no enclosing
/// transaction. The first storage error stops the run; projects already
/// rolled over stay rolled over. Running twice in a row is harmless because
/// each statement re-checks that there is something to move.
pub async fn run_once(pool: &SqlitePool) -> DbErrorResult<RolloverReport> {
    let repo = ProjectRepository::new(pool.clone());
    let pending = repo.find_pending_weekly_updates().await?;

    let mut rolled_over = 0;
    for id in pending {
        if repo.roll_over_weekly_update(id, clock::now()).await? {
            rolled_over += 1;
        }
    }

    info!("Weekly rollover moved {} update(s)", rolled_over);
    Ok(RolloverReport { rolled_over })
}
