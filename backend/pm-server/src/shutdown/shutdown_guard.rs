use crate::ShutdownCoordinator;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::broadcast;

/// Per-task handle for waiting on shutdown.
///
/// A guard created after shutdown was triggered still observes it.
pub struct ShutdownGuard {
    shutdown_rx: broadcast::Receiver<()>,
    triggered: Arc<AtomicBool>,
}

impl ShutdownGuard {
    pub fn new(coordinator: &ShutdownCoordinator) -> Self {
        Self {
            shutdown_rx: coordinator.subscribe(),
            triggered: coordinator.triggered_flag(),
        }
    }

    /// Wait for shutdown signal
    pub async fn wait(&mut self) {
        if self.triggered.load(Ordering::SeqCst) {
            return;
        }
        let _ = self.shutdown_rx.recv().await;
    }

    /// Non-blocking check
    pub fn poll_shutdown(&mut self) -> bool {
        self.triggered.load(Ordering::SeqCst) || self.shutdown_rx.try_recv().is_ok()
    }
}
