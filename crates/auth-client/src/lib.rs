//! Authentication provider client for Link Up
//!
//! This crate defines the seam between the app and the hosted auth SDK:
//! the user/state types it emits, the [`AuthProvider`] trait the app consumes,
//! and an in-memory [`LocalAuthProvider`] for demos and tests.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod local;
pub mod provider;
pub mod types;

pub use local::LocalAuthProvider;
pub use provider::{AuthListener, AuthProvider, Subscription};
pub use types::{AuthState, AuthUser};

#[cfg(any(test, feature = "mock"))]
pub use provider::MockAuthProvider;

/// Result type for auth provider operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// Errors reported by an auth provider's login/logout actions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The user dismissed the sign-in flow
    #[error("Sign-in cancelled")]
    Cancelled,

    /// The provider could not be reached
    #[error("Network error: {0}")]
    Network(String),

    /// Any other failure reported by the provider
    #[error("Auth provider error: {0}")]
    Provider(String),
}
