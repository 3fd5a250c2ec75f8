//! Pull-to-refresh coordination
//!
//! A screen owns one [`RefreshController`]. Starting a refresh raises the
//! "refreshing" flag; the flag drops when the returned [`RefreshGuard`] goes
//! away. While a refresh is in flight the trigger is disabled and further
//! requests are rejected rather than queued.

use std::future::Future;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;

/// Refresh errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RefreshError {
    /// Another refresh has not finished yet
    #[error("Refresh already in progress")]
    InProgress,
}

/// Result type for refresh operations
pub type Result<T> = std::result::Result<T, RefreshError>;

/// Tracks whether a refresh is running
#[derive(Debug, Clone)]
pub struct RefreshController {
    refreshing: Arc<watch::Sender<bool>>,
}

impl RefreshController {
    /// Create an idle controller
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { refreshing: Arc::new(tx) }
    }

    /// Whether a refresh is in flight
    pub fn is_refreshing(&self) -> bool {
        *self.refreshing.borrow()
    }

    /// Whether the refresh trigger should be enabled
    pub fn can_refresh(&self) -> bool {
        !self.is_refreshing()
    }

    /// Watch the refreshing flag (drives the spinner)
    pub fn watch(&self) -> watch::Receiver<bool> {
        self.refreshing.subscribe()
    }

    /// Mark a refresh as started
    ///
    /// Fails with [`RefreshError::InProgress`] if one is already running.
    pub fn begin(&self) -> Result<RefreshGuard> {
        let started = self.refreshing.send_if_modified(|refreshing| {
            if *refreshing {
                false
            } else {
                *refreshing = true;
                true
            }
        });

        if !started {
            tracing::debug!("Ignoring refresh request while one is in flight");
            return Err(RefreshError::InProgress);
        }

        tracing::debug!("Refresh started");
        Ok(RefreshGuard { refreshing: Arc::clone(&self.refreshing) })
    }

    /// Run `reload` as a refresh
    ///
    /// The flag is cleared when `reload` completes, including on error.
    pub async fn run<F, Fut, T>(&self, reload: F) -> Result<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let _guard = self.begin()?;
        Ok(reload().await)
    }
}

impl Default for RefreshController {
    fn default() -> Self {
        Self::new()
    }
}

/// Clears the refreshing flag on drop
#[derive(Debug)]
pub struct RefreshGuard {
    refreshing: Arc<watch::Sender<bool>>,
}

impl Drop for RefreshGuard {
    fn drop(&mut self) {
        self.refreshing.send_replace(false);
        tracing::debug!("Refresh finished");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_and_finish() {
        let controller = RefreshController::new();
        assert!(controller.can_refresh());

        let guard = controller.begin().unwrap();
        assert!(controller.is_refreshing());
        assert!(!controller.can_refresh());

        drop(guard);
        assert!(!controller.is_refreshing());
    }

    #[test]
    fn test_overlapping_refresh_rejected() {
        let controller = RefreshController::new();
        let _guard = controller.begin().unwrap();

        assert_eq!(controller.begin().unwrap_err(), RefreshError::InProgress);
        assert!(controller.is_refreshing());
    }

    #[tokio::test]
    async fn test_run_clears_flag() {
        let controller = RefreshController::new();
        let probe = controller.clone();

        let value = controller
            .run(|| async move {
                assert!(probe.is_refreshing());
                42
            })
            .await
            .unwrap();

        assert_eq!(value, 42);
        assert!(controller.can_refresh());
    }

    #[tokio::test]
    async fn test_run_rejects_while_in_flight() {
        let controller = RefreshController::new();
        let _guard = controller.begin().unwrap();

        let result = controller.run(|| async { 1 }).await;
        assert_eq!(result, Err(RefreshError::InProgress));
    }

    #[tokio::test]
    async fn test_watch_sees_flag_changes() {
        let controller = RefreshController::new();
        let mut rx = controller.watch();

        let guard = controller.begin().unwrap();
        rx.changed().await.unwrap();
        assert!(*rx.borrow_and_update());

        drop(guard);
        rx.changed().await.unwrap();
        assert!(!*rx.borrow());
    }
}
