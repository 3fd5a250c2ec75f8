//! Filter selection for browse and search screens
//!
//! Two shapes of selection show up in the app:
//! - [`FilterSet`]: any number of tags toggled on and off (search filters)
//! - [`CategorySelection`]: exactly one category chip, with "All" as the
//!   catch-all (venue and creator browsing)
//!
//! Every screen owns its own instance; nothing here is shared across screens.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Label of the catch-all category chip
pub const ALL_CATEGORIES: &str = "All";

/// A record that belongs to exactly one category
pub trait Categorized {
    /// Category name, compared by exact string equality
    fn category(&self) -> &str;
}

/// Set of active filter tags
///
/// Tags are opaque strings; any string is a valid tag, including the empty
/// string. Membership is exact and case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    active: BTreeSet<String>,
}

impl FilterSet {
    /// Create an empty filter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `tag`
    ///
    /// Returns whether the tag is active afterwards.
    pub fn toggle(&mut self, tag: &str) -> bool {
        if self.active.remove(tag) {
            tracing::trace!(tag, "Filter deactivated");
            false
        } else {
            self.active.insert(tag.to_string());
            tracing::trace!(tag, "Filter activated");
            true
        }
    }

    /// Remove every tag
    pub fn clear(&mut self) {
        self.active.clear();
    }

    /// Whether `tag` is active
    pub fn is_active(&self, tag: &str) -> bool {
        self.active.contains(tag)
    }

    /// Number of active tags
    pub fn count(&self) -> usize {
        self.active.len()
    }

    /// Whether no tag is active
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Active tags in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.active.iter().map(String::as_str)
    }

    /// Active tags that belong to `group`, in group order
    pub fn active_in<'g>(&self, group: &[&'g str]) -> Vec<&'g str> {
        group.iter().copied().filter(|tag| self.is_active(tag)).collect()
    }
}

/// Single-select category chip state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySelection {
    selected: String,
}

impl CategorySelection {
    /// Start with "All" selected
    pub fn new() -> Self {
        Self { selected: ALL_CATEGORIES.to_string() }
    }

    /// Select a category chip
    pub fn select(&mut self, category: &str) {
        if self.selected != category {
            tracing::trace!(from = %self.selected, to = category, "Category selected");
            self.selected = category.to_string();
        }
    }

    /// Currently selected chip
    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Whether `category` is the selected chip
    pub fn is_selected(&self, category: &str) -> bool {
        self.selected == category
    }

    /// Whether the catch-all chip is selected
    pub fn is_all(&self) -> bool {
        self.selected == ALL_CATEGORIES
    }

    /// Whether a record in `category` is visible
    pub fn admits(&self, category: &str) -> bool {
        self.is_all() || self.selected == category
    }

    /// Records visible under the current selection, in input order
    pub fn apply<'a, T: Categorized>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.admits(item.category())).collect()
    }
}

impl Default for CategorySelection {
    fn default() -> Self {
        Self::new()
    }
}
