//! The auth provider seam
//!
//! The app never talks to the hosted auth SDK directly. It receives an
//! [`AuthProvider`] at construction time, subscribes to its state stream and
//! triggers login/logout through it.

use async_trait::async_trait;
use std::fmt;

use crate::types::AuthState;
use crate::Result;

/// Callback invoked for every provider state emission
pub type AuthListener = Box<dyn Fn(AuthState) + Send + Sync>;

/// Abstract authentication provider
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Register a listener for state changes
    ///
    /// Implementations may replay the current state to the new listener.
    /// The listener stays registered until the returned [`Subscription`] is
    /// unsubscribed or dropped.
    fn subscribe(&self, listener: AuthListener) -> Subscription;

    /// Start the sign-in flow
    ///
    /// Completion is reported through the state stream, not the return value.
    async fn login(&self) -> Result<()>;

    /// Sign the current user out
    async fn logout(&self) -> Result<()>;
}

/// Handle to a registered listener
///
/// Detaches the listener exactly once, either through [`Subscription::unsubscribe`]
/// or on drop, whichever happens first.
pub struct Subscription {
    detach: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    /// Wrap a detach action
    pub fn new<F>(detach: F) -> Self
    where
        F: FnOnce() + Send + Sync + 'static,
    {
        Self { detach: Some(Box::new(detach)) }
    }

    /// A subscription with nothing to detach
    pub fn noop() -> Self {
        Self { detach: None }
    }

    /// Whether the listener is still attached
    pub fn is_active(&self) -> bool {
        self.detach.is_some()
    }

    /// Detach the listener now
    ///
    /// Returns `true` if this call performed the detach.
    pub fn unsubscribe(&mut self) -> bool {
        match self.detach.take() {
            Some(detach) => {
                detach();
                true
            }
            None => false,
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("active", &self.is_active()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_subscription() -> (Subscription, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let sub = Subscription::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (sub, calls)
    }

    #[test]
    fn test_unsubscribe_runs_once() {
        let (mut sub, calls) = counting_subscription();
        assert!(sub.is_active());

        assert!(sub.unsubscribe());
        assert!(!sub.unsubscribe());
        drop(sub);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let (sub, calls) = counting_subscription();
        drop(sub);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_noop_subscription() {
        let mut sub = Subscription::noop();
        assert!(!sub.is_active());
        assert!(!sub.unsubscribe());
    }

    #[tokio::test]
    async fn test_mock_provider_login_error() {
        let mut provider = MockAuthProvider::new();
        provider
            .expect_login()
            .times(1)
            .returning(|| Err(crate::AuthError::Cancelled));

        assert_eq!(provider.login().await, Err(crate::AuthError::Cancelled));
    }
}
