//! Client-side state management for Link Up
//!
//! This crate owns the small pieces of state the screens react to: the
//! authentication-derived session, per-screen filter selections, the
//! pull-to-refresh flag and the unread-message badge.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod filters;
pub mod refresh;
pub mod session;
pub mod unread;

pub use filters::{Categorized, CategorySelection, FilterSet, ALL_CATEGORIES};
pub use refresh::{RefreshController, RefreshError, RefreshGuard};
pub use session::{Session, SessionGate};
pub use unread::{UnreadBadge, UnreadTracker};
