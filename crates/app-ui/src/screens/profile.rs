//! Profile screen
//!
//! Shows the signed-in user's header, stats and settings menu, and offers
//! sign-out. The screen reads the user from the session gate; without one it
//! renders its own loading placeholder.

use app_core::profiles::{ProfileHeader, ProfileStats};
use app_core::AppConfig;
use app_state::SessionGate;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Entries of the settings menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    /// Upcoming and past sessions
    MyBookings,
    /// Creator earnings
    Earnings,
    /// Reviews received
    Reviews,
    /// Cards and payouts
    PaymentMethods,
    /// Verification and safety tools
    SafetyCenter,
    /// Notification preferences (has an inline toggle)
    Notifications,
    /// Help and contact
    HelpAndSupport,
    /// App preferences and privacy
    Settings,
}

impl MenuItem {
    /// All items in display order
    pub const ALL: [MenuItem; 8] = [
        MenuItem::MyBookings,
        MenuItem::Earnings,
        MenuItem::Reviews,
        MenuItem::PaymentMethods,
        MenuItem::SafetyCenter,
        MenuItem::Notifications,
        MenuItem::HelpAndSupport,
        MenuItem::Settings,
    ];

    /// Title line
    pub fn title(self) -> &'static str {
        match self {
            MenuItem::MyBookings => "My Bookings",
            MenuItem::Earnings => "Earnings",
            MenuItem::Reviews => "Reviews",
            MenuItem::PaymentMethods => "Payment Methods",
            MenuItem::SafetyCenter => "Safety Center",
            MenuItem::Notifications => "Notifications",
            MenuItem::HelpAndSupport => "Help & Support",
            MenuItem::Settings => "Settings",
        }
    }

    /// Subtitle line
    pub fn subtitle(self) -> &'static str {
        match self {
            MenuItem::MyBookings => "View upcoming and past sessions",
            MenuItem::Earnings => "Track your creator earnings",
            MenuItem::Reviews => "See what fans say about you",
            MenuItem::PaymentMethods => "Manage cards and payouts",
            MenuItem::SafetyCenter => "Verification and safety tools",
            MenuItem::Notifications => "Manage your preferences",
            MenuItem::HelpAndSupport => "Get help or contact us",
            MenuItem::Settings => "App preferences and privacy",
        }
    }

    /// Whether the row shows a switch instead of a chevron
    pub fn has_toggle(self) -> bool {
        matches!(self, MenuItem::Notifications)
    }
}

/// Profile screen state
pub struct ProfileScreen {
    gate: Arc<SessionGate>,
    config: AppConfig,
    stats: ProfileStats,
    notifications_enabled: bool,
}

impl ProfileScreen {
    /// Create the screen for whoever the gate reports
    pub fn new(gate: Arc<SessionGate>, config: &AppConfig) -> Self {
        Self {
            gate,
            config: config.clone(),
            stats: ProfileStats { sessions_booked: 0, average_rating: None },
            notifications_enabled: config.notifications_enabled,
        }
    }

    /// Header for the signed-in user, `None` while there is none
    pub fn header(&self) -> Option<ProfileHeader> {
        self.gate.user().map(|user| ProfileHeader::for_user(&user, &self.config))
    }

    /// Whether the loading placeholder is shown instead of the profile
    pub fn is_loading(&self) -> bool {
        self.gate.user().is_none()
    }

    /// Summary numbers
    pub fn stats(&self) -> ProfileStats {
        self.stats
    }

    /// Replace the summary numbers
    pub fn set_stats(&mut self, stats: ProfileStats) {
        self.stats = stats;
    }

    /// Settings menu entries
    pub fn menu(&self) -> &'static [MenuItem] {
        &MenuItem::ALL
    }

    /// State of the notifications switch
    pub fn notifications_enabled(&self) -> bool {
        self.notifications_enabled
    }

    /// Flip the notifications switch
    pub fn set_notifications_enabled(&mut self, enabled: bool) {
        self.notifications_enabled = enabled;
    }

    /// "Sign Out"
    ///
    /// Returns as soon as the request is issued; the root view switches to
    /// the sign-in screen once the provider reports the logout.
    pub fn sign_out(&self) -> JoinHandle<()> {
        tracing::info!("User requested sign-out");
        self.gate.request_logout()
    }

    /// Footer label (e.g., "Link Up v1.0.0")
    pub fn version_label(&self) -> String {
        self.config.version_label()
    }
}
