//! User and state types emitted by the auth provider

use serde::{Deserialize, Serialize};

/// Label used when a user has neither a display name nor a usable email
pub const DEFAULT_USER_LABEL: &str = "User";

/// An authenticated user as reported by the provider
///
/// Only `id` is guaranteed; everything else is filled in by the provider
/// when the account has it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    /// Stable provider-assigned identifier
    pub id: String,

    /// Name chosen by the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Avatar image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl AuthUser {
    /// Create a user with only an identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: None,
            email: None,
            avatar_url: None,
        }
    }

    /// Set the display name
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Set the email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the avatar URL
    pub fn with_avatar_url(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }

    /// Name to show for this user
    ///
    /// Falls back from the display name to the local part of the email and
    /// finally to [`DEFAULT_USER_LABEL`]. Empty values count as missing.
    pub fn display_label(&self) -> &str {
        if let Some(name) = self.display_name.as_deref().filter(|n| !n.is_empty()) {
            return name;
        }

        self.email
            .as_deref()
            .and_then(|email| email.split('@').next())
            .filter(|local| !local.is_empty())
            .unwrap_or(DEFAULT_USER_LABEL)
    }

    /// Avatar URL if the provider supplied a non-empty one
    pub fn avatar(&self) -> Option<&str> {
        self.avatar_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// A single emission from the auth provider's state stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    /// The signed-in user, if any
    pub user: Option<AuthUser>,

    /// Whether the provider is still resolving its state
    pub is_loading: bool,
}

impl AuthState {
    /// Provider still initializing
    pub fn loading() -> Self {
        Self { user: None, is_loading: true }
    }

    /// Provider ready with no user
    pub fn signed_out() -> Self {
        Self { user: None, is_loading: false }
    }

    /// Provider ready with a user
    pub fn signed_in(user: AuthUser) -> Self {
        Self { user: Some(user), is_loading: false }
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::loading()
    }
}
