//! Profile display rules
//!
//! The auth provider may hand us a user with nothing but an id. Missing
//! fields are never an error: the header falls back to the email's local
//! part for the name and to a placeholder image for the avatar.

use auth_client::AuthUser;
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;

/// What the profile header shows for the signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileHeader {
    /// Name line
    pub display_name: String,
    /// Email line, empty when unknown
    pub email: String,
    /// Avatar URL, placeholder when the user has none
    pub avatar_url: String,
    /// Whether the user's own avatar is being shown
    pub has_custom_avatar: bool,
}

impl ProfileHeader {
    /// Build the header for `user`
    pub fn for_user(user: &AuthUser, config: &AppConfig) -> Self {
        let (avatar_url, has_custom_avatar) = match user.avatar() {
            Some(url) => (url.to_string(), true),
            None => (config.placeholder_avatar_url.clone(), false),
        };

        Self {
            display_name: user.display_label().to_string(),
            email: user.email.clone().unwrap_or_default(),
            avatar_url,
            has_custom_avatar,
        }
    }
}

/// Summary numbers on the profile screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    /// Sessions the user has booked
    pub sessions_booked: u32,
    /// Average rating received, if any
    pub average_rating: Option<f32>,
}

impl ProfileStats {
    /// Rating label, "–" when there are no ratings yet
    pub fn rating_label(&self) -> String {
        match self.average_rating {
            Some(rating) => format!("{rating:.1}"),
            None => "–".to_string(),
        }
    }
}
