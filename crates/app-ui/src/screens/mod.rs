//! Screen view models
//!
//! Each screen owns its own state (loaded records, filter selection, flags)
//! and reads data through an injected [`app_core::DataSource`]. Nothing here
//! is shared between screen instances.

pub mod discover;
pub mod messages;
pub mod profile;
pub mod search;
pub mod venues;

pub use discover::DiscoverScreen;
pub use messages::MessagesScreen;
pub use profile::ProfileScreen;
pub use search::SearchScreen;
pub use venues::VenuesScreen;

use app_core::CatalogError;
use app_state::RefreshError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Screen-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScreenError {
    /// Reading from the data source failed
    #[error("Failed to load data: {0}")]
    Catalog(#[from] CatalogError),

    /// The refresh trigger was used while disabled
    #[error(transparent)]
    Refresh(#[from] RefreshError),
}

/// Result type for screen operations
pub type Result<T> = std::result::Result<T, ScreenError>;

/// Placeholder content for an empty list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmptyState {
    /// Headline
    pub title: String,
    /// Explanation under the headline
    pub body: String,
    /// Optional call to action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_label: Option<String>,
}
