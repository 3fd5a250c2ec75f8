//! Authentication-gated session state
//!
//! [`SessionGate`] listens to an [`AuthProvider`] and reduces each emission to
//! one of three [`Session`] variants. The root view renders from the gate's
//! watch channel, so a new emission is the only thing that moves the session.
//!
//! Login and logout are fire-and-forget: the gate spawns the provider call and
//! returns immediately. Failures are logged and forwarded on the error channel
//! for the consuming screen to display.

use auth_client::{AuthError, AuthProvider, AuthState, AuthUser, Subscription};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;

/// Capacity of the auth error channel
const ERROR_CHANNEL_CAPACITY: usize = 16;

/// Authentication-derived UI state
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Session {
    /// The provider has not finished resolving
    #[default]
    Loading,
    /// No user is signed in
    Unauthenticated,
    /// A user is signed in
    Authenticated {
        /// The signed-in user
        user: AuthUser,
    },
}

impl Session {
    /// Derive the session from a provider emission
    ///
    /// A loading provider always yields [`Session::Loading`], even if it
    /// already reports a user.
    pub fn resolve(state: &AuthState) -> Self {
        if state.is_loading {
            return Session::Loading;
        }

        match &state.user {
            Some(user) => Session::Authenticated { user: user.clone() },
            None => Session::Unauthenticated,
        }
    }

    /// Whether the provider is still loading
    pub fn is_loading(&self) -> bool {
        matches!(self, Session::Loading)
    }

    /// Whether a user is signed in
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    /// The signed-in user, if any
    pub fn user(&self) -> Option<&AuthUser> {
        match self {
            Session::Authenticated { user } => Some(user),
            _ => None,
        }
    }

    /// Name shown for the signed-in user
    pub fn display_name(&self) -> Option<&str> {
        self.user().map(AuthUser::display_label)
    }

    fn label(&self) -> &'static str {
        match self {
            Session::Loading => "loading",
            Session::Unauthenticated => "unauthenticated",
            Session::Authenticated { .. } => "authenticated",
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy)]
enum AuthAction {
    Login,
    Logout,
}

impl AuthAction {
    fn as_str(self) -> &'static str {
        match self {
            AuthAction::Login => "login",
            AuthAction::Logout => "logout",
        }
    }
}

/// Gate between the auth provider and the root view
///
/// The gate subscribes on construction and detaches on [`SessionGate::detach`]
/// or drop. Cloning is not supported; share it behind an `Arc`.
///
/// # Example
///
/// ```
/// use app_state::session::{Session, SessionGate};
/// use auth_client::{AuthUser, LocalAuthProvider};
/// use std::sync::Arc;
///
/// let provider = LocalAuthProvider::new();
/// let gate = SessionGate::new(Arc::new(provider.clone()));
/// assert_eq!(gate.session(), Session::Loading);
///
/// provider.sign_in(AuthUser::new("u1").with_email("a@b.com"));
/// assert_eq!(gate.session().display_name(), Some("a"));
/// ```
pub struct SessionGate {
    provider: Arc<dyn AuthProvider>,
    session_tx: Arc<watch::Sender<Session>>,
    errors_tx: broadcast::Sender<AuthError>,
    subscription: Mutex<Option<Subscription>>,
}

impl SessionGate {
    /// Create a gate and attach it to `provider`
    pub fn new(provider: Arc<dyn AuthProvider>) -> Self {
        let (session_tx, _) = watch::channel(Session::Loading);
        let session_tx = Arc::new(session_tx);
        let (errors_tx, _) = broadcast::channel(ERROR_CHANNEL_CAPACITY);

        let listener_tx = Arc::clone(&session_tx);
        let subscription = provider.subscribe(Box::new(move |state: AuthState| {
            apply_event(&listener_tx, &state);
        }));

        tracing::debug!("Session gate attached to auth provider");

        Self {
            provider,
            session_tx,
            errors_tx,
            subscription: Mutex::new(Some(subscription)),
        }
    }

    /// Feed a provider emission into the gate
    ///
    /// Identical consecutive emissions leave the session untouched and do not
    /// wake watchers.
    pub fn on_auth_event(&self, state: &AuthState) -> Session {
        apply_event(&self.session_tx, state)
    }

    /// Current session
    pub fn session(&self) -> Session {
        self.session_tx.borrow().clone()
    }

    /// The signed-in user, if any
    pub fn user(&self) -> Option<AuthUser> {
        self.session_tx.borrow().user().cloned()
    }

    /// Watch session changes
    pub fn watch(&self) -> watch::Receiver<Session> {
        self.session_tx.subscribe()
    }

    /// Receive login/logout failures reported by the provider
    pub fn subscribe_errors(&self) -> broadcast::Receiver<AuthError> {
        self.errors_tx.subscribe()
    }

    /// Ask the provider to start sign-in
    ///
    /// Must be called from within a tokio runtime. The session only changes
    /// once the provider emits.
    pub fn request_login(&self) -> JoinHandle<()> {
        self.spawn_action(AuthAction::Login)
    }

    /// Ask the provider to sign out
    pub fn request_logout(&self) -> JoinHandle<()> {
        self.spawn_action(AuthAction::Logout)
    }

    /// Whether the provider listener is still attached
    pub fn is_attached(&self) -> bool {
        self.subscription
            .lock()
            .as_ref()
            .is_some_and(Subscription::is_active)
    }

    /// Detach from the provider
    ///
    /// Returns `true` the first time and `false` afterwards.
    pub fn detach(&self) -> bool {
        let subscription = self.subscription.lock().take();
        match subscription {
            Some(mut subscription) => {
                let detached = subscription.unsubscribe();
                tracing::debug!("Session gate detached from auth provider");
                detached
            }
            None => false,
        }
    }

    fn spawn_action(&self, action: AuthAction) -> JoinHandle<()> {
        let provider = Arc::clone(&self.provider);
        let errors = self.errors_tx.clone();

        tokio::spawn(async move {
            let result = match action {
                AuthAction::Login => provider.login().await,
                AuthAction::Logout => provider.logout().await,
            };

            if let Err(err) = result {
                tracing::warn!(action = action.as_str(), error = %err, "Auth request failed");
                // No receivers just means no screen is showing errors right now
                let _ = errors.send(err);
            }
        })
    }
}

impl Drop for SessionGate {
    fn drop(&mut self) {
        self.detach();
    }
}

impl fmt::Debug for SessionGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionGate")
            .field("session", &*self.session_tx.borrow())
            .field("attached", &self.is_attached())
            .finish()
    }
}

fn apply_event(tx: &watch::Sender<Session>, state: &AuthState) -> Session {
    let next = Session::resolve(state);

    tx.send_if_modified(|current| {
        if *current == next {
            return false;
        }
        tracing::debug!(from = %current, to = %next, "Session changed");
        *current = next.clone();
        true
    });

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth_client::{LocalAuthProvider, MockAuthProvider};

    fn gate_with_local() -> (SessionGate, LocalAuthProvider) {
        let provider = LocalAuthProvider::new();
        let gate = SessionGate::new(Arc::new(provider.clone()));
        (gate, provider)
    }

    #[test]
    fn test_resolve_precedence() {
        let user = AuthUser::new("u1");

        assert_eq!(Session::resolve(&AuthState::loading()), Session::Loading);
        assert_eq!(
            Session::resolve(&AuthState { user: Some(user.clone()), is_loading: true }),
            Session::Loading
        );
        assert_eq!(Session::resolve(&AuthState::signed_out()), Session::Unauthenticated);
        assert_eq!(
            Session::resolve(&AuthState::signed_in(user.clone())),
            Session::Authenticated { user }
        );
    }

    #[test]
    fn test_gate_starts_loading() {
        let (gate, provider) = gate_with_local();
        assert_eq!(gate.session(), Session::Loading);
        assert!(gate.is_attached());
        assert_eq!(provider.listener_count(), 1);
    }

    #[test]
    fn test_gate_follows_provider() {
        let (gate, provider) = gate_with_local();

        provider.finish_loading();
        assert_eq!(gate.session(), Session::Unauthenticated);

        provider.sign_in(AuthUser::new("u1").with_email("a@b.com"));
        assert!(gate.session().is_authenticated());
        assert_eq!(gate.session().display_name(), Some("a"));

        provider.sign_out();
        assert_eq!(gate.session(), Session::Unauthenticated);
        assert!(gate.user().is_none());
    }

    #[test]
    fn test_session_depends_only_on_latest_event() {
        let (gate, _provider) = gate_with_local();
        let user = AuthUser::new("u1");

        let histories = [
            vec![AuthState::signed_in(user.clone()), AuthState::signed_out()],
            vec![AuthState::loading(), AuthState::signed_out()],
            vec![AuthState::signed_out(), AuthState::signed_out()],
        ];

        for history in histories {
            for event in &history {
                gate.on_auth_event(event);
            }
            assert_eq!(gate.session(), Session::Unauthenticated);
        }
    }

    #[tokio::test]
    async fn test_identical_events_do_not_notify() {
        let (gate, provider) = gate_with_local();
        let mut rx = gate.watch();

        provider.finish_loading();
        assert!(rx.has_changed().unwrap());
        rx.borrow_and_update();

        provider.finish_loading();
        assert!(!rx.has_changed().unwrap());
        assert_eq!(*rx.borrow(), Session::Unauthenticated);
    }

    #[test]
    fn test_detach_exactly_once() {
        let (gate, provider) = gate_with_local();

        assert!(gate.detach());
        assert!(!gate.detach());
        assert!(!gate.is_attached());
        assert_eq!(provider.listener_count(), 0);

        provider.finish_loading();
        assert_eq!(gate.session(), Session::Loading);
    }

    #[test]
    fn test_drop_detaches() {
        let (gate, provider) = gate_with_local();
        drop(gate);
        assert_eq!(provider.listener_count(), 0);
        provider.finish_loading();
    }

    #[tokio::test]
    async fn test_login_does_not_change_session_until_emission() {
        let mut provider = MockAuthProvider::new();
        provider
            .expect_subscribe()
            .times(1)
            .returning(|listener| {
                listener(AuthState::signed_out());
                Subscription::noop()
            });
        provider.expect_login().times(1).returning(|| Ok(()));

        let gate = SessionGate::new(Arc::new(provider));
        gate.request_login().await.unwrap();

        assert_eq!(gate.session(), Session::Unauthenticated);
    }

    #[tokio::test]
    async fn test_login_failure_is_reported_not_raised() {
        let mut provider = MockAuthProvider::new();
        provider
            .expect_subscribe()
            .returning(|_| Subscription::noop());
        provider
            .expect_login()
            .times(1)
            .returning(|| Err(AuthError::Network("offline".to_string())));

        let gate = SessionGate::new(Arc::new(provider));
        let mut errors = gate.subscribe_errors();

        gate.request_login().await.unwrap();

        assert_eq!(errors.recv().await.unwrap(), AuthError::Network("offline".to_string()));
        assert_eq!(gate.session(), Session::Loading);
    }

    #[tokio::test]
    async fn test_logout_failure_without_listeners() {
        let mut provider = MockAuthProvider::new();
        provider
            .expect_subscribe()
            .returning(|_| Subscription::noop());
        provider
            .expect_logout()
            .times(1)
            .returning(|| Err(AuthError::Provider("boom".to_string())));

        let gate = SessionGate::new(Arc::new(provider));
        gate.request_logout().await.unwrap();
    }

    #[tokio::test]
    async fn test_login_round_trip_with_local_provider() {
        let provider = LocalAuthProvider::with_login_user(AuthUser::new("u1"));
        let gate = SessionGate::new(Arc::new(provider.clone()));
        provider.finish_loading();

        gate.request_login().await.unwrap();
        assert!(gate.session().is_authenticated());

        gate.request_logout().await.unwrap();
        assert_eq!(gate.session(), Session::Unauthenticated);
    }
}
