//! Discover screen
//!
//! Lists creators near the user with category chips and pull-to-refresh.

use app_core::{Creator, DataSource};
use app_state::{CategorySelection, RefreshController};
use std::sync::Arc;

use super::{EmptyState, Result};

/// Category chips on the discover screen, "All" first
pub const DISCOVER_CATEGORIES: [&str; 6] = ["All", "Fitness", "Music", "Content", "Business", "Art"];

/// Discover screen state
pub struct DiscoverScreen {
    source: Arc<dyn DataSource>,
    creators: Vec<Creator>,
    selection: CategorySelection,
    refresh: RefreshController,
}

impl DiscoverScreen {
    /// Create an empty screen backed by `source`
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self {
            source,
            creators: Vec::new(),
            selection: CategorySelection::new(),
            refresh: RefreshController::new(),
        }
    }

    /// Load creators from the data source
    pub async fn load(&mut self) -> Result<()> {
        self.creators = self.source.creators().await?;
        tracing::debug!(count = self.creators.len(), "Loaded creators");
        Ok(())
    }

    /// Pull-to-refresh
    ///
    /// Rejected with [`app_state::RefreshError::InProgress`] while another
    /// refresh holds the flag. On a failed reload the previous list stays.
    pub async fn refresh(&mut self) -> Result<()> {
        let controller = self.refresh.clone();
        let _guard = controller.begin()?;
        self.load().await
    }

    /// Handle shared with the refresh control so it can disable itself
    pub fn refresh_controller(&self) -> RefreshController {
        self.refresh.clone()
    }

    /// Whether the spinner is showing
    pub fn is_refreshing(&self) -> bool {
        self.refresh.is_refreshing()
    }

    /// Select a category chip
    pub fn select_category(&mut self, category: &str) {
        self.selection.select(category);
    }

    /// Currently selected chip
    pub fn selected_category(&self) -> &str {
        self.selection.selected()
    }

    /// Chip labels in display order
    pub fn categories(&self) -> &'static [&'static str] {
        &DISCOVER_CATEGORIES
    }

    /// All loaded creators
    pub fn creators(&self) -> &[Creator] {
        &self.creators
    }

    /// Creators under the selected chip
    pub fn visible_creators(&self) -> Vec<&Creator> {
        self.selection.apply(&self.creators)
    }

    /// Placeholder when no creator is visible
    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.visible_creators().is_empty() {
            return None;
        }
        Some(EmptyState {
            title: "No creators found".to_string(),
            body: "Try another category or pull down to refresh.".to_string(),
            action_label: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::ScreenError;
    use app_core::catalog::{sample_creators, MockCatalog};
    use app_state::RefreshError;

    fn screen_with(catalog: MockCatalog) -> (DiscoverScreen, Arc<MockCatalog>) {
        let catalog = Arc::new(catalog);
        let source: Arc<dyn DataSource> = catalog.clone();
        (DiscoverScreen::new(source), catalog)
    }

    #[tokio::test]
    async fn test_load_and_all_chip() {
        let (mut screen, _) = screen_with(MockCatalog::sample());
        assert!(screen.creators().is_empty());

        screen.load().await.unwrap();
        assert_eq!(screen.selected_category(), "All");
        assert_eq!(screen.visible_creators().len(), 3);
        assert!(screen.empty_state().is_none());
    }

    #[tokio::test]
    async fn test_chip_uses_exact_category() {
        let mut creators = sample_creators();
        creators[0].category = "Fitness".to_string();
        let (mut screen, _) = screen_with(MockCatalog::new(creators, vec![], vec![]));
        screen.load().await.unwrap();

        screen.select_category("Fitness");
        let visible = screen.visible_creators();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Sarah Chen");

        screen.select_category("Art");
        assert!(screen.empty_state().is_some());
    }

    #[tokio::test]
    async fn test_refresh_reloads_and_clears_flag() {
        let (mut screen, catalog) = screen_with(MockCatalog::sample());
        screen.load().await.unwrap();

        screen.refresh().await.unwrap();
        assert_eq!(catalog.read_count(), 2);
        assert!(!screen.is_refreshing());
    }

    #[tokio::test]
    async fn test_refresh_rejected_while_in_flight() {
        let (mut screen, catalog) = screen_with(MockCatalog::sample());
        let control = screen.refresh_controller();
        let _held = control.begin().unwrap();

        assert!(screen.is_refreshing());
        let err = screen.refresh().await.unwrap_err();
        assert_eq!(err, ScreenError::Refresh(RefreshError::InProgress));
        assert_eq!(catalog.read_count(), 0);
    }
}
