//! Venue directory
//!
//! Venues are public places suggested as safe meetup spots for a booked
//! session. Partner venues have an agreement with Link Up and get a badge.

use app_state::Categorized;
use serde::{Deserialize, Serialize};

/// Category chips on the venues screen, "All" first
pub const VENUE_CATEGORIES: [&str; 6] =
    ["All", "Coffee Shop", "Fitness Studio", "Cafe", "Coworking", "Restaurant"];

/// A meetup venue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    /// Unique identifier
    pub id: String,
    /// Venue name
    pub name: String,
    /// Cover image URL
    pub image_url: String,
    /// Category label (e.g., "Cafe")
    pub category: String,
    /// Average rating, 0 to 5
    pub rating: f32,
    /// Distance from the user, as shown (e.g., "0.3 miles")
    pub distance: String,
    /// Street address
    pub address: String,
    /// Amenity tags (e.g., "WiFi")
    #[serde(default)]
    pub amenities: Vec<String>,
    /// Price tier ("$" to "$$$")
    pub price_range: String,
    /// Whether the venue is a Link Up partner
    pub is_partner: bool,
}

impl Venue {
    /// Whether the venue lists `amenity` (exact match)
    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities.iter().any(|a| a == amenity)
    }

    /// Address and distance line (e.g., "66 Mint St, San Francisco • 0.3 miles")
    pub fn location_line(&self) -> String {
        format!("{} • {}", self.address, self.distance)
    }
}

impl Categorized for Venue {
    fn category(&self) -> &str {
        &self.category
    }
}
