//! Creator search
//!
//! The search screen combines a free-text query with toggled filter tags
//! from three groups: categories, price ranges and time slots. Tags from all
//! groups share one [`FilterSet`] so the filter badge can show a single count.
//!
//! Matching rules:
//! - the query matches name, category or description, case-insensitively
//! - active category tags must equal the creator's category exactly
//! - active price tags must include the creator's price
//! - time-slot tags do not narrow results; availability is free text

use app_state::FilterSet;
use serde::{Deserialize, Serialize};

use crate::creators::Creator;

/// Category filter tags
pub const SEARCH_CATEGORIES: [&str; 12] = [
    "Fitness",
    "Music",
    "Content Creation",
    "Business",
    "Art",
    "Cooking",
    "Photography",
    "Writing",
    "Tech",
    "Fashion",
    "Gaming",
    "Wellness",
];

/// Price filter tags
pub const PRICE_RANGES: [&str; 4] = ["$0-25", "$25-50", "$50-100", "$100+"];

/// Availability filter tags
pub const TIME_SLOTS: [&str; 4] = ["Morning", "Afternoon", "Evening", "Weekend"];

/// Suggested queries shown under the filters
pub const POPULAR_SEARCHES: [&str; 5] = [
    "Fitness coaching near me",
    "Music production lessons",
    "Content creation tips",
    "Business mentoring",
    "Photography workshops",
];

/// A price filter bucket, bounds inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceRange {
    /// $0 to $25
    UpTo25,
    /// $25 to $50
    From25To50,
    /// $50 to $100
    From50To100,
    /// $100 and up
    Over100,
}

impl PriceRange {
    /// All buckets in display order
    pub const ALL: [PriceRange; 4] = [
        PriceRange::UpTo25,
        PriceRange::From25To50,
        PriceRange::From50To100,
        PriceRange::Over100,
    ];

    /// Parse a filter tag
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|range| range.label() == label)
    }

    /// Filter tag for this bucket
    pub fn label(self) -> &'static str {
        match self {
            PriceRange::UpTo25 => PRICE_RANGES[0],
            PriceRange::From25To50 => PRICE_RANGES[1],
            PriceRange::From50To100 => PRICE_RANGES[2],
            PriceRange::Over100 => PRICE_RANGES[3],
        }
    }

    /// Whether `price` falls in this bucket
    pub fn contains(self, price: u32) -> bool {
        match self {
            PriceRange::UpTo25 => price <= 25,
            PriceRange::From25To50 => (25..=50).contains(&price),
            PriceRange::From50To100 => (50..=100).contains(&price),
            PriceRange::Over100 => price >= 100,
        }
    }
}

/// Query text plus active filter tags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    query: String,
    filters: FilterSet,
}

impl SearchCriteria {
    /// Empty criteria; every creator matches
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the query text
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Current query text
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Active filter tags
    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// Toggle a filter tag; returns whether it is now active
    pub fn toggle_filter(&mut self, tag: &str) -> bool {
        self.filters.toggle(tag)
    }

    /// Drop every filter tag (the query is kept)
    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    /// Count shown on the filter badge
    pub fn filter_count(&self) -> usize {
        self.filters.count()
    }

    /// Whether `creator` satisfies the query and filters
    pub fn matches(&self, creator: &Creator) -> bool {
        let needle = self.query.trim().to_lowercase();
        if !needle.is_empty() && !creator.mentions(&needle) {
            return false;
        }

        let categories = self.filters.active_in(&SEARCH_CATEGORIES);
        if !categories.is_empty() && !categories.iter().any(|c| *c == creator.category) {
            return false;
        }

        let prices: Vec<PriceRange> = self
            .filters
            .active_in(&PRICE_RANGES)
            .into_iter()
            .filter_map(PriceRange::from_label)
            .collect();
        if !prices.is_empty() && !prices.iter().any(|range| range.contains(creator.price)) {
            return false;
        }

        true
    }

    /// Creators matching the criteria, in input order
    pub fn apply<'a>(&self, creators: &'a [Creator]) -> Vec<&'a Creator> {
        creators.iter().filter(|c| self.matches(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_creators;

    fn creator(category: &str, price: u32) -> Creator {
        let mut creator = sample_creators().remove(0);
        creator.category = category.to_string();
        creator.price = price;
        creator
    }

    #[test]
    fn test_price_range_labels_round_trip() {
        for range in PriceRange::ALL {
            assert_eq!(PriceRange::from_label(range.label()), Some(range));
        }
        assert_eq!(PriceRange::from_label("$1-2"), None);
    }

    #[test]
    fn test_price_range_bounds() {
        assert!(PriceRange::UpTo25.contains(0));
        assert!(PriceRange::UpTo25.contains(25));
        assert!(!PriceRange::UpTo25.contains(26));
        assert!(PriceRange::From25To50.contains(45));
        assert!(PriceRange::From50To100.contains(75));
        assert!(PriceRange::Over100.contains(100));
        assert!(!PriceRange::Over100.contains(99));
    }

    #[test]
    fn test_empty_criteria_match_everything() {
        let creators = sample_creators();
        assert_eq!(SearchCriteria::new().apply(&creators).len(), creators.len());
    }

    #[test]
    fn test_query_matching() {
        let creators = sample_creators();
        let mut criteria = SearchCriteria::new();

        criteria.set_query("  MUSIC ");
        let found = criteria.apply(&creators);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Marcus Johnson");

        criteria.set_query("pottery");
        assert!(criteria.apply(&creators).is_empty());
    }

    #[test]
    fn test_category_filter_is_exact() {
        let mut criteria = SearchCriteria::new();
        criteria.toggle_filter("Fitness");

        assert!(criteria.matches(&creator("Fitness", 40)));
        assert!(!criteria.matches(&creator("Fitness Coach", 40)));
        assert!(!criteria.matches(&creator("fitness", 40)));

        criteria.toggle_filter("Art");
        assert!(criteria.matches(&creator("Art", 40)));
    }

    #[test]
    fn test_price_filter() {
        let creators = sample_creators();
        let mut criteria = SearchCriteria::new();

        criteria.toggle_filter("$50-100");
        let found = criteria.apply(&creators);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].price, 75);

        criteria.toggle_filter("$25-50");
        assert_eq!(criteria.apply(&creators).len(), 3);
    }

    #[test]
    fn test_time_slots_only_affect_badge() {
        let creators = sample_creators();
        let mut criteria = SearchCriteria::new();

        criteria.toggle_filter("Weekend");
        assert_eq!(criteria.filter_count(), 1);
        assert_eq!(criteria.apply(&creators).len(), creators.len());
    }

    #[test]
    fn test_clear_filters_keeps_query() {
        let mut criteria = SearchCriteria::new();
        criteria.set_query("sarah");
        criteria.toggle_filter("Music");
        criteria.toggle_filter("$100+");

        criteria.clear_filters();
        assert_eq!(criteria.filter_count(), 0);
        assert_eq!(criteria.query(), "sarah");
    }
}
