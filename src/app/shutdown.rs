//! Graceful shutdown handling for the application.
//!
//! Provides signal handling so a run interrupted with Ctrl+C still finishes
//! its current operation and prints a report.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Manages graceful shutdown of the application.
#[derive(Clone)]
pub struct ShutdownManager {
    shutdown_requested: Arc<AtomicBool>,
}

impl Default for ShutdownManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownManager {
    /// Creates a new shutdown manager.
    pub fn new() -> Self {
        Self {
            shutdown_requested: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Spawns a task flagging shutdown on Ctrl+C. Must be called from
    /// inside a Tokio runtime.
    pub fn install_ctrl_c_handler(&self) {
        let manager = self.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Ctrl+C received, initiating graceful shutdown...");
                manager.request_shutdown();
            }
        });
    }

    /// Requests shutdown.
    pub fn request_shutdown(&self) {
        self.shutdown_requested.store(true, Ordering::SeqCst);
        tracing::info!("Shutdown requested");
    }

    /// Checks if shutdown has been requested.
    pub fn is_shutdown_requested(&self) -> bool {
        self.shutdown_requested.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shutdown_request_is_shared() {
        let manager = ShutdownManager::new();
        let clone = manager.clone();
        assert!(!manager.is_shutdown_requested());
        clone.request_shutdown();
        assert!(manager.is_shutdown_requested());
    }
}
