//! Creator listings
//!
//! A creator is a service provider fans can book for an in-person session.

use app_state::Categorized;
use serde::{Deserialize, Serialize};

/// Highest possible creator rating
pub const MAX_RATING: f32 = 5.0;

/// A bookable creator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Avatar image URL
    pub avatar_url: String,
    /// Category label (e.g., "Fitness Coach")
    pub category: String,
    /// Average rating, 0 to 5
    pub rating: f32,
    /// Price per session in whole dollars
    pub price: u32,
    /// Neighborhood or area
    pub location: String,
    /// Whether identity has been verified
    pub is_verified: bool,
    /// Next open slot, as shown to the user
    pub next_available: String,
    /// Short pitch
    pub description: String,
}

impl Creator {
    /// Rating clamped to the 0..=5 range
    pub fn clamped_rating(&self) -> f32 {
        self.rating.clamp(0.0, MAX_RATING)
    }

    /// Price label shown on the card (e.g., "$45")
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }

    /// Rating and location line (e.g., "4.9 • Downtown SF")
    pub fn rating_line(&self) -> String {
        format!("{} • {}", self.clamped_rating(), self.location)
    }

    /// Whether the free-text `needle` appears in name, category or description
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn mentions(&self, needle: &str) -> bool {
        [&self.name, &self.category, &self.description]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

impl Categorized for Creator {
    fn category(&self) -> &str {
        &self.category
    }
}
