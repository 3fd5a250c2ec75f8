//! Link Up
//!
//! Client shell of a marketplace connecting fans with creators for in-person
//! sessions. This crate wires the workspace together: an auth provider feeds
//! the session gate, the gate picks the root screen, and the tab screens read
//! from the data source.
//!
//! # Example
//!
//! ```
//! use app_core::{AppConfig, MockCatalog};
//! use app_ui::RootScreen;
//! use auth_client::{AuthUser, LocalAuthProvider};
//! use link_up::App;
//! use std::sync::Arc;
//!
//! let provider = LocalAuthProvider::new();
//! let mut app = App::new(
//!     AppConfig::default(),
//!     Arc::new(provider.clone()),
//!     Arc::new(MockCatalog::sample()),
//! );
//! assert!(matches!(app.root_screen(), RootScreen::Loading { .. }));
//!
//! provider.sign_in(AuthUser::new("u1"));
//! app.sync_session();
//! assert!(app.root_screen().is_main());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod telemetry;

pub use app::App;

pub use app_core::{AppConfig, DataSource, MockCatalog};
pub use app_state::{FilterSet, Session, SessionGate};
pub use app_ui::{RootScreen, Tab};
pub use auth_client::{AuthProvider, AuthState, AuthUser, LocalAuthProvider};
