//! Application root

use anyhow::Context;
use app_core::{AppConfig, DataSource};
use app_state::{Session, SessionGate, UnreadTracker};
use app_ui::{
    DiscoverScreen, MessagesScreen, ProfileScreen, RootScreen, SearchScreen, Tab, TabItem,
    TabNavigator, VenuesScreen,
};
use auth_client::AuthProvider;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Root of the running app
///
/// Owns the session gate for the lifetime of the root view. Dropping the app
/// or calling [`App::shutdown`] detaches from the auth provider, even if
/// screens still hold the gate.
pub struct App {
    config: AppConfig,
    gate: Arc<SessionGate>,
    source: Arc<dyn DataSource>,
    unread: Arc<UnreadTracker>,
    tabs: TabNavigator,
    session_rx: watch::Receiver<Session>,
}

impl App {
    /// Wire the app to an auth provider and a data source
    pub fn new(
        config: AppConfig,
        provider: Arc<dyn AuthProvider>,
        source: Arc<dyn DataSource>,
    ) -> Self {
        let gate = Arc::new(SessionGate::new(provider));
        let session_rx = gate.watch();

        tracing::info!(app = %config.app_name, version = %config.app_version, "App started");

        Self {
            config,
            gate,
            source,
            unread: Arc::new(UnreadTracker::new()),
            tabs: TabNavigator::new(),
            session_rx,
        }
    }

    /// Load the config file at `path` and wire the app
    pub fn from_config_file(
        path: impl AsRef<Path>,
        provider: Arc<dyn AuthProvider>,
        source: Arc<dyn DataSource>,
    ) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let config = AppConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?;
        Ok(Self::new(config, provider, source))
    }

    /// Active configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The session gate
    pub fn gate(&self) -> &Arc<SessionGate> {
        &self.gate
    }

    /// Current session
    pub fn session(&self) -> Session {
        self.gate.session()
    }

    /// Top-level screen for the current session
    pub fn root_screen(&self) -> RootScreen {
        RootScreen::for_session(&self.gate.session(), &self.config)
    }

    /// Apply a pending session change
    ///
    /// Leaving the authenticated state resets the tab bar and the unread
    /// badge so the next user starts clean. Returns whether anything changed.
    pub fn sync_session(&mut self) -> bool {
        if !self.session_rx.has_changed().unwrap_or(false) {
            return false;
        }

        let session = self.session_rx.borrow_and_update().clone();
        self.apply_session(&session);
        true
    }

    /// Wait for the next session change and apply it
    pub async fn next_session(&mut self) -> Option<Session> {
        self.session_rx.changed().await.ok()?;
        let session = self.session_rx.borrow_and_update().clone();
        self.apply_session(&session);
        Some(session)
    }

    fn apply_session(&mut self, session: &Session) {
        if !session.is_authenticated() {
            self.tabs.reset();
            self.unread.reset();
        }

        tracing::debug!(session = %session, "Root view updated");
    }

    /// "Sign In / Sign Up"
    pub fn sign_in(&self) -> JoinHandle<()> {
        self.gate.request_login()
    }

    /// Active tab
    pub fn active_tab(&self) -> Tab {
        self.tabs.active()
    }

    /// Switch tabs
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        self.tabs.select(tab)
    }

    /// Tab bar contents
    pub fn tab_items(&self) -> Vec<TabItem> {
        self.tabs.items(self.unread.badge())
    }

    /// Unread badge shared with the messages screen
    pub fn unread(&self) -> &Arc<UnreadTracker> {
        &self.unread
    }

    /// New discover screen instance
    pub fn discover_screen(&self) -> DiscoverScreen {
        DiscoverScreen::new(Arc::clone(&self.source))
    }

    /// New search screen instance
    pub fn search_screen(&self) -> SearchScreen {
        SearchScreen::new(Arc::clone(&self.source), &self.config)
    }

    /// New venues screen instance
    pub fn venues_screen(&self) -> VenuesScreen {
        VenuesScreen::new(Arc::clone(&self.source))
    }

    /// New messages screen instance
    pub fn messages_screen(&self) -> MessagesScreen {
        MessagesScreen::new(Arc::clone(&self.source), Arc::clone(&self.unread))
    }

    /// New profile screen instance
    pub fn profile_screen(&self) -> ProfileScreen {
        ProfileScreen::new(Arc::clone(&self.gate), &self.config)
    }

    /// Tear down the root view
    pub fn shutdown(&self) -> bool {
        self.gate.detach()
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.gate.detach();
    }
}
