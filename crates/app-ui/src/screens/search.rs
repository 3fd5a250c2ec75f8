//! Search screen

use app_core::search::{POPULAR_SEARCHES, PRICE_RANGES, SEARCH_CATEGORIES, TIME_SLOTS};
use app_core::{AppConfig, Creator, DataSource, SearchCriteria};
use std::sync::Arc;

use super::Result;

/// A titled group of filter chips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterGroup {
    /// Section title
    pub title: &'static str,
    /// Chip labels
    pub tags: &'static [&'static str],
}

/// Filter sections in display order
pub const FILTER_GROUPS: [FilterGroup; 3] = [
    FilterGroup { title: "Categories", tags: &SEARCH_CATEGORIES },
    FilterGroup { title: "Price Range", tags: &PRICE_RANGES },
    FilterGroup { title: "Availability", tags: &TIME_SLOTS },
];

/// Search screen state
pub struct SearchScreen {
    source: Arc<dyn DataSource>,
    creators: Vec<Creator>,
    criteria: SearchCriteria,
    search_radius_miles: u32,
}

impl SearchScreen {
    /// Create the screen with an empty query and no filters
    pub fn new(source: Arc<dyn DataSource>, config: &AppConfig) -> Self {
        Self {
            source,
            creators: Vec::new(),
            criteria: SearchCriteria::new(),
            search_radius_miles: config.search_radius_miles,
        }
    }

    /// Load searchable creators
    pub async fn load(&mut self) -> Result<()> {
        self.creators = self.source.creators().await?;
        Ok(())
    }

    /// Update the query text
    pub fn set_query(&mut self, query: &str) {
        self.criteria.set_query(query);
    }

    /// Current query text
    pub fn query(&self) -> &str {
        self.criteria.query()
    }

    /// Tap a filter chip
    pub fn toggle_filter(&mut self, tag: &str) -> bool {
        self.criteria.toggle_filter(tag)
    }

    /// Whether a chip is highlighted
    pub fn is_filter_active(&self, tag: &str) -> bool {
        self.criteria.filters().is_active(tag)
    }

    /// "Clear All Filters"
    pub fn clear_filters(&mut self) {
        self.criteria.clear_filters();
    }

    /// Number on the filter button badge
    pub fn badge_count(&self) -> usize {
        self.criteria.filter_count()
    }

    /// Whether the clear button is shown
    pub fn shows_clear_all(&self) -> bool {
        self.badge_count() > 0
    }

    /// Filter sections
    pub fn filter_groups(&self) -> &'static [FilterGroup] {
        &FILTER_GROUPS
    }

    /// Suggested queries
    pub fn popular_searches(&self) -> &'static [&'static str] {
        &POPULAR_SEARCHES
    }

    /// Location filter label (e.g., "Current location (5 miles)")
    pub fn location_label(&self) -> String {
        let unit = if self.search_radius_miles == 1 { "mile" } else { "miles" };
        format!("Current location ({} {unit})", self.search_radius_miles)
    }

    /// Creators matching the query and filters
    pub fn results(&self) -> Vec<&Creator> {
        self.criteria.apply(&self.creators)
    }
}
