//! In-memory auth provider
//!
//! `LocalAuthProvider` behaves like the hosted SDK from the app's point of
//! view: it starts out loading, replays its current state to new listeners
//! and emits on every change. It keeps everything in process, which makes it
//! suitable for demos, previews and tests.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::{Arc, Weak};

use crate::provider::{AuthListener, AuthProvider, Subscription};
use crate::types::{AuthState, AuthUser};
use crate::{AuthError, Result};

struct Inner {
    state: AuthState,
    listeners: BTreeMap<u64, Arc<AuthListener>>,
    next_listener_id: u64,
    login_user: Option<AuthUser>,
    login_error: Option<AuthError>,
}

/// Process-local implementation of [`AuthProvider`]
#[derive(Clone)]
pub struct LocalAuthProvider {
    inner: Arc<Mutex<Inner>>,
}

impl LocalAuthProvider {
    /// Create a provider in the initial loading state
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: AuthState::loading(),
                listeners: BTreeMap::new(),
                next_listener_id: 0,
                login_user: None,
                login_error: None,
            })),
        }
    }

    /// Create a provider that signs in `user` when `login()` is called
    pub fn with_login_user(user: AuthUser) -> Self {
        let provider = Self::new();
        provider.inner.lock().login_user = Some(user);
        provider
    }

    /// Current provider state
    pub fn state(&self) -> AuthState {
        self.inner.lock().state.clone()
    }

    /// Number of attached listeners
    pub fn listener_count(&self) -> usize {
        self.inner.lock().listeners.len()
    }

    /// Finish initialization without a user
    pub fn finish_loading(&self) {
        self.emit(AuthState::signed_out());
    }

    /// Report `user` as signed in
    pub fn sign_in(&self, user: AuthUser) {
        self.emit(AuthState::signed_in(user));
    }

    /// Report that no user is signed in
    pub fn sign_out(&self) {
        self.emit(AuthState::signed_out());
    }

    /// Emit an arbitrary state
    pub fn emit(&self, state: AuthState) {
        let listeners: Vec<Arc<AuthListener>> = {
            let mut inner = self.inner.lock();
            inner.state = state.clone();
            inner.listeners.values().cloned().collect()
        };

        tracing::debug!(
            listeners = listeners.len(),
            is_loading = state.is_loading,
            signed_in = state.user.is_some(),
            "Emitting auth state"
        );

        // Listeners run outside the lock so they may call back into the provider
        for listener in listeners {
            listener(state.clone());
        }
    }

    /// Make the next `login()` call fail with `error`
    pub fn fail_next_login(&self, error: AuthError) {
        self.inner.lock().login_error = Some(error);
    }

    fn detach(inner: &Weak<Mutex<Inner>>, id: u64) {
        if let Some(inner) = inner.upgrade() {
            inner.lock().listeners.remove(&id);
            tracing::debug!(listener = id, "Auth listener detached");
        }
    }
}

impl Default for LocalAuthProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthProvider for LocalAuthProvider {
    fn subscribe(&self, listener: AuthListener) -> Subscription {
        let listener = Arc::new(listener);
        let (id, current) = {
            let mut inner = self.inner.lock();
            let id = inner.next_listener_id;
            inner.next_listener_id += 1;
            inner.listeners.insert(id, Arc::clone(&listener));
            (id, inner.state.clone())
        };

        listener(current);

        let weak = Arc::downgrade(&self.inner);
        Subscription::new(move || Self::detach(&weak, id))
    }

    async fn login(&self) -> Result<()> {
        let user = {
            let mut inner = self.inner.lock();
            if let Some(error) = inner.login_error.take() {
                return Err(error);
            }
            inner.login_user.clone()
        };

        match user {
            Some(user) => {
                self.sign_in(user);
                Ok(())
            }
            None => Err(AuthError::Provider("no account available for sign-in".to_string())),
        }
    }

    async fn logout(&self) -> Result<()> {
        self.sign_out();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recording_listener() -> (AuthListener, Arc<Mutex<Vec<AuthState>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let listener: AuthListener = Box::new(move |state: AuthState| sink.lock().push(state));
        (listener, seen)
    }

    #[test]
    fn test_subscribe_replays_current_state() {
        let provider = LocalAuthProvider::new();
        let (listener, seen) = recording_listener();

        let _sub = provider.subscribe(listener);

        assert_eq!(*seen.lock(), vec![AuthState::loading()]);
        assert_eq!(provider.listener_count(), 1);
    }

    #[test]
    fn test_emissions_reach_listeners_until_unsubscribed() {
        let provider = LocalAuthProvider::new();
        let (listener, seen) = recording_listener();

        let mut sub = provider.subscribe(listener);
        provider.finish_loading();
        sub.unsubscribe();
        provider.sign_in(AuthUser::new("u1"));

        assert_eq!(*seen.lock(), vec![AuthState::loading(), AuthState::signed_out()]);
        assert_eq!(provider.listener_count(), 0);
    }

    #[test]
    fn test_detach_after_provider_dropped() {
        let provider = LocalAuthProvider::new();
        let (listener, _seen) = recording_listener();
        let sub = provider.subscribe(listener);

        drop(provider);
        drop(sub);
    }

    #[tokio::test]
    async fn test_login_signs_in_configured_user() {
        let user = AuthUser::new("u1").with_email("a@b.com");
        let provider = LocalAuthProvider::with_login_user(user.clone());
        provider.finish_loading();

        provider.login().await.unwrap();
        assert_eq!(provider.state(), AuthState::signed_in(user));

        provider.logout().await.unwrap();
        assert_eq!(provider.state(), AuthState::signed_out());
    }

    #[tokio::test]
    async fn test_login_failures() {
        let provider = LocalAuthProvider::new();
        assert!(matches!(provider.login().await, Err(AuthError::Provider(_))));

        let provider = LocalAuthProvider::with_login_user(AuthUser::new("u1"));
        provider.fail_next_login(AuthError::Cancelled);
        assert_eq!(provider.login().await, Err(AuthError::Cancelled));

        // Only the next attempt fails
        assert!(provider.login().await.is_ok());
    }
}
