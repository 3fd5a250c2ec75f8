//! Marketplace data source
//!
//! Screens read creators, venues and inbox messages through [`DataSource`].
//! Until a backend exists the app runs on [`MockCatalog`], which serves a
//! fixed in-memory sample.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;

use crate::creators::Creator;
use crate::messages::Message;
use crate::venues::Venue;

/// Data source errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The backing store could not be reached
    #[error("Data source unavailable: {0}")]
    Unavailable(String),
}

/// Result type for data source reads
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Read-only access to marketplace records
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Creators listed on the discover screen
    async fn creators(&self) -> Result<Vec<Creator>>;

    /// Venues in the directory
    async fn venues(&self) -> Result<Vec<Venue>>;

    /// Inbox conversations for the signed-in user
    async fn messages(&self) -> Result<Vec<Message>>;
}

/// In-memory data source
#[derive(Debug, Default)]
pub struct MockCatalog {
    creators: Vec<Creator>,
    venues: Vec<Venue>,
    messages: Vec<Message>,
    reads: AtomicUsize,
}

impl MockCatalog {
    /// Catalog with explicit contents
    pub fn new(creators: Vec<Creator>, venues: Vec<Venue>, messages: Vec<Message>) -> Self {
        Self { creators, venues, messages, reads: AtomicUsize::new(0) }
    }

    /// Catalog with no records at all
    pub fn empty() -> Self {
        Self::default()
    }

    /// Catalog populated with the sample marketplace
    pub fn sample() -> Self {
        Self::new(sample_creators(), sample_venues(), sample_messages())
    }

    /// Number of reads served so far
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn record_read(&self, what: &'static str, len: usize) {
        self.reads.fetch_add(1, Ordering::SeqCst);
        tracing::trace!(what, len, "Served mock catalog read");
    }
}

#[async_trait]
impl DataSource for MockCatalog {
    async fn creators(&self) -> Result<Vec<Creator>> {
        self.record_read("creators", self.creators.len());
        Ok(self.creators.clone())
    }

    async fn venues(&self) -> Result<Vec<Venue>> {
        self.record_read("venues", self.venues.len());
        Ok(self.venues.clone())
    }

    async fn messages(&self) -> Result<Vec<Message>> {
        self.record_read("messages", self.messages.len());
        Ok(self.messages.clone())
    }
}

#[allow(clippy::too_many_arguments)]
fn creator(
    id: &str,
    name: &str,
    avatar_url: &str,
    category: &str,
    rating: f32,
    price: u32,
    location: &str,
    is_verified: bool,
    next_available: &str,
    description: &str,
) -> Creator {
    Creator {
        id: id.to_string(),
        name: name.to_string(),
        avatar_url: avatar_url.to_string(),
        category: category.to_string(),
        rating,
        price,
        location: location.to_string(),
        is_verified,
        next_available: next_available.to_string(),
        description: description.to_string(),
    }
}

/// Sample creators
pub fn sample_creators() -> Vec<Creator> {
    vec![
        creator(
            "1",
            "Sarah Chen",
            "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=150&h=150&fit=crop&crop=face",
            "Fitness Coach",
            4.9,
            45,
            "Downtown SF",
            true,
            "Today 3:00 PM",
            "Personal training & wellness coaching",
        ),
        creator(
            "2",
            "Marcus Johnson",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150&fit=crop&crop=face",
            "Music Producer",
            4.8,
            75,
            "Mission District",
            true,
            "Tomorrow 10:00 AM",
            "Beat making & music production tips",
        ),
        creator(
            "3",
            "Emma Rodriguez",
            "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150&h=150&fit=crop&crop=face",
            "Content Creator",
            4.7,
            35,
            "SOMA",
            false,
            "Today 6:00 PM",
            "Social media strategy & content creation",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn venue(
    id: &str,
    name: &str,
    image_url: &str,
    category: &str,
    rating: f32,
    distance: &str,
    address: &str,
    amenities: &[&str],
    price_range: &str,
    is_partner: bool,
) -> Venue {
    Venue {
        id: id.to_string(),
        name: name.to_string(),
        image_url: image_url.to_string(),
        category: category.to_string(),
        rating,
        distance: distance.to_string(),
        address: address.to_string(),
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
        price_range: price_range.to_string(),
        is_partner,
    }
}

/// Sample venues
pub fn sample_venues() -> Vec<Venue> {
    vec![
        venue(
            "1",
            "Blue Bottle Coffee",
            "https://images.unsplash.com/photo-1501339847302-ac426a4a7cbb?w=300&h=200&fit=crop",
            "Coffee Shop",
            4.8,
            "0.3 miles",
            "66 Mint St, San Francisco",
            &["WiFi", "Quiet Space", "Outdoor Seating"],
            "$",
            true,
        ),
        venue(
            "2",
            "Equinox SOMA",
            "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=300&h=200&fit=crop",
            "Fitness Studio",
            4.9,
            "0.5 miles",
            "1 Post St, San Francisco",
            &["Equipment", "Changing Rooms", "Showers"],
            "$$$",
            true,
        ),
        venue(
            "3",
            "The Mill",
            "https://images.unsplash.com/photo-1554118811-1e0d58224f24?w=300&h=200&fit=crop",
            "Cafe",
            4.6,
            "0.8 miles",
            "736 Divisadero St, San Francisco",
            &["WiFi", "Large Tables", "Pastries"],
            "$$",
            false,
        ),
        venue(
            "4",
            "WeWork SOMA",
            "https://images.unsplash.com/photo-1497366216548-37526070297c?w=300&h=200&fit=crop",
            "Coworking",
            4.7,
            "0.4 miles",
            "535 Mission St, San Francisco",
            &["Meeting Rooms", "WiFi", "Printing"],
            "$$",
            true,
        ),
    ]
}

/// Sample inbox
pub fn sample_messages() -> Vec<Message> {
    vec![
        Message {
            id: "1".to_string(),
            creator_name: "Sarah Chen".to_string(),
            creator_avatar_url: "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=150&h=150&fit=crop&crop=face".to_string(),
            last_message: "Looking forward to our session tomorrow! I'll bring some extra equipment.".to_string(),
            timestamp: "2m ago".to_string(),
            is_read: false,
            is_online: true,
            meetup_date: Some("Tomorrow 3:00 PM".to_string()),
        },
        Message {
            id: "2".to_string(),
            creator_name: "Marcus Johnson".to_string(),
            creator_avatar_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150&fit=crop&crop=face".to_string(),
            last_message: "Thanks for the great session! Hope the beats help with your project.".to_string(),
            timestamp: "1h ago".to_string(),
            is_read: true,
            is_online: false,
            meetup_date: Some("Completed".to_string()),
        },
        Message {
            id: "3".to_string(),
            creator_name: "Emma Rodriguez".to_string(),
            creator_avatar_url: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150&h=150&fit=crop&crop=face".to_string(),
            last_message: "Hey! Just confirmed our meetup for Friday. See you at Blue Bottle!".to_string(),
            timestamp: "3h ago".to_string(),
            is_read: true,
            is_online: true,
            meetup_date: Some("Friday 6:00 PM".to_string()),
        },
    ]
}
