//! Venues screen
//!
//! Directory of safe meetup spots, filtered by a single category chip.

use app_core::venues::VENUE_CATEGORIES;
use app_core::{DataSource, Venue};
use app_state::CategorySelection;
use std::sync::Arc;

use super::{EmptyState, Result};

/// Venues screen state
pub struct VenuesScreen {
    source: Arc<dyn DataSource>,
    venues: Vec<Venue>,
    selection: CategorySelection,
}

impl VenuesScreen {
    /// Create the screen with "All" selected
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self { source, venues: Vec::new(), selection: CategorySelection::new() }
    }

    /// Load venues from the data source
    pub async fn load(&mut self) -> Result<()> {
        self.venues = self.source.venues().await?;
        tracing::debug!(count = self.venues.len(), "Loaded venues");
        Ok(())
    }

    /// Chip labels in display order
    pub fn categories(&self) -> &'static [&'static str] {
        &VENUE_CATEGORIES
    }

    /// Select a category chip
    pub fn select_category(&mut self, category: &str) {
        self.selection.select(category);
    }

    /// Whether a chip is highlighted
    pub fn is_selected(&self, category: &str) -> bool {
        self.selection.is_selected(category)
    }

    /// Venues under the selected chip
    pub fn visible_venues(&self) -> Vec<&Venue> {
        self.selection.apply(&self.venues)
    }

    /// Placeholder when no venue matches
    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.visible_venues().is_empty() {
            return None;
        }
        Some(EmptyState {
            title: "No venues found".to_string(),
            body: format!("There are no {} venues nearby yet.", self.selection.selected()),
            action_label: Some("Become a Partner".to_string()),
        })
    }
}
