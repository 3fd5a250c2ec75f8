//! User interface layer for Link Up
//!
//! This crate turns application state into what each screen shows. It does
//! not draw anything itself; a rendering shell reads these view models.
//!
//! # Modules
//!
//! - [`navigation`] - Root screen selection and tab navigation
//! - [`screens`] - Per-screen view models (discover, search, venues, messages, profile)
//!
//! # Example
//!
//! ```rust
//! use app_core::AppConfig;
//! use app_state::Session;
//! use app_ui::navigation::RootScreen;
//!
//! let screen = RootScreen::for_session(&Session::Loading, &AppConfig::default());
//! assert!(!screen.is_main());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod navigation;
pub mod screens;

pub use navigation::{RootScreen, SignInContent, Tab, TabItem, TabNavigator};
pub use screens::{
    DiscoverScreen, EmptyState, MessagesScreen, ProfileScreen, ScreenError, SearchScreen,
    VenuesScreen,
};
