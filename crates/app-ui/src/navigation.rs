//! Navigation for Link Up
//!
//! This module decides what the user sees at the top level:
//! - Root screen selection from the authentication session
//! - Tab navigation inside the main app
//! - Tab bar items with their badges

use app_core::AppConfig;
use app_state::{Session, UnreadBadge};
use serde::{Deserialize, Serialize};

// =============================================================================
// Root Screen
// =============================================================================

/// Content of the sign-in screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInContent {
    /// Logo text
    pub logo: String,
    /// One-line pitch
    pub tagline: String,
    /// Longer description
    pub description: String,
    /// Label of the sign-in button
    pub action_label: String,
    /// Terms notice under the button
    pub disclaimer: String,
}

impl SignInContent {
    /// Sign-in content for the configured app
    pub fn new(config: &AppConfig) -> Self {
        Self {
            logo: config.app_name.clone(),
            tagline: "Connect with creators in real life".to_string(),
            description: "Book meetups with your favorite creators, discover new experiences, \
                          and build meaningful connections."
                .to_string(),
            action_label: "Sign In / Sign Up".to_string(),
            disclaimer: "By continuing, you agree to our Terms of Service and Privacy Policy"
                .to_string(),
        }
    }
}

/// The three mutually exclusive top-level screens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "camelCase")]
pub enum RootScreen {
    /// Auth is still initializing
    Loading {
        /// Text under the spinner
        message: String,
    },
    /// Nobody is signed in
    SignIn(SignInContent),
    /// The tabbed main app
    Main,
}

impl RootScreen {
    /// Screen for the given session
    pub fn for_session(session: &Session, config: &AppConfig) -> Self {
        match session {
            Session::Loading => RootScreen::Loading { message: config.loading_label() },
            Session::Unauthenticated => RootScreen::SignIn(SignInContent::new(config)),
            Session::Authenticated { .. } => RootScreen::Main,
        }
    }

    /// Whether this is the main app
    pub fn is_main(&self) -> bool {
        matches!(self, RootScreen::Main)
    }
}

// =============================================================================
// Tabs
// =============================================================================

/// Tabs of the main app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tab {
    /// Creator discovery
    #[default]
    Discover,
    /// Search with filters
    Search,
    /// Venue directory
    Venues,
    /// Inbox
    Messages,
    /// The signed-in user's profile
    Profile,
}

impl Tab {
    /// Get all tabs in order
    pub fn all() -> [Tab; 5] {
        [Tab::Discover, Tab::Search, Tab::Venues, Tab::Messages, Tab::Profile]
    }

    /// Get label for this tab
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Discover => "Discover",
            Tab::Search => "Search",
            Tab::Venues => "Venues",
            Tab::Messages => "Messages",
            Tab::Profile => "Profile",
        }
    }

    /// Get icon name for this tab
    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Discover => "home",
            Tab::Search => "search",
            Tab::Venues => "map-pin",
            Tab::Messages => "message-circle",
            Tab::Profile => "user",
        }
    }
}

/// One entry in the tab bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem {
    /// The tab
    pub tab: Tab,
    /// Whether it is the active tab
    pub is_active: bool,
    /// Badge to draw on the icon
    pub badge: UnreadBadge,
}

/// Active tab state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabNavigator {
    active: Tab,
}

impl TabNavigator {
    /// Start on the default tab
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently active tab
    pub fn active(&self) -> Tab {
        self.active
    }

    /// Switch tabs; returns `false` if `tab` was already active
    pub fn select(&mut self, tab: Tab) -> bool {
        if self.active == tab {
            return false;
        }
        tracing::debug!(from = self.active.label(), to = tab.label(), "Tab selected");
        self.active = tab;
        true
    }

    /// Go back to the default tab
    pub fn reset(&mut self) {
        self.active = Tab::default();
    }

    /// Tab bar contents; only the messages tab carries a badge
    pub fn items(&self, messages_badge: UnreadBadge) -> Vec<TabItem> {
        Tab::all()
            .into_iter()
            .map(|tab| TabItem {
                tab,
                is_active: tab == self.active,
                badge: if tab == Tab::Messages { messages_badge } else { UnreadBadge::Hidden },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth_client::AuthUser;

    #[test]
    fn test_root_screen_for_each_session() {
        let config = AppConfig::default();

        assert_eq!(
            RootScreen::for_session(&Session::Loading, &config),
            RootScreen::Loading { message: "Loading Link Up...".to_string() }
        );

        match RootScreen::for_session(&Session::Unauthenticated, &config) {
            RootScreen::SignIn(content) => {
                assert_eq!(content.logo, "Link Up");
                assert_eq!(content.action_label, "Sign In / Sign Up");
            }
            other => panic!("Expected sign-in screen, got {:?}", other),
        }

        let session = Session::Authenticated { user: AuthUser::new("u1") };
        assert!(RootScreen::for_session(&session, &config).is_main());
    }

    #[test]
    fn test_tab_navigation() {
        let mut nav = TabNavigator::new();
        assert_eq!(nav.active(), Tab::Discover);

        assert!(nav.select(Tab::Venues));
        assert!(!nav.select(Tab::Venues));
        assert_eq!(nav.active(), Tab::Venues);

        nav.reset();
        assert_eq!(nav.active(), Tab::Discover);
    }

    #[test]
    fn test_tab_items_badge_only_on_messages() {
        let mut nav = TabNavigator::new();
        nav.select(Tab::Search);

        let items = nav.items(UnreadBadge::Count(2));
        assert_eq!(items.len(), 5);

        for item in &items {
            assert_eq!(item.is_active, item.tab == Tab::Search);
            if item.tab == Tab::Messages {
                assert_eq!(item.badge, UnreadBadge::Count(2));
            } else {
                assert!(!item.badge.is_visible());
            }
        }
    }
}
