//! Unread message badge
//!
//! The messages tab shows how many conversations have unread messages. The
//! badge caps out at [`MAX_DISPLAY_COUNT`] and renders as "30+" beyond it.

use std::fmt;
use tokio::sync::watch;

/// Count at which the badge stops showing an exact number
pub const MAX_DISPLAY_COUNT: usize = 30;

/// What the unread badge shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnreadBadge {
    /// Nothing unread; the badge is hidden
    #[default]
    Hidden,
    /// Exact count below the cap
    Count(usize),
    /// At or above the cap
    Many,
}

impl UnreadBadge {
    /// Badge for `count` unread items
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => UnreadBadge::Hidden,
            n if n >= MAX_DISPLAY_COUNT => UnreadBadge::Many,
            n => UnreadBadge::Count(n),
        }
    }

    /// Whether the badge is visible
    pub fn is_visible(&self) -> bool {
        !matches!(self, UnreadBadge::Hidden)
    }
}

impl fmt::Display for UnreadBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnreadBadge::Hidden => Ok(()),
            UnreadBadge::Count(n) => write!(f, "{n}"),
            UnreadBadge::Many => write!(f, "{MAX_DISPLAY_COUNT}+"),
        }
    }
}

/// Shares the messages badge between the inbox and the tab bar
#[derive(Debug)]
pub struct UnreadTracker {
    badge_tx: watch::Sender<UnreadBadge>,
}

impl UnreadTracker {
    /// Create a tracker with nothing unread
    pub fn new() -> Self {
        let (badge_tx, _) = watch::channel(UnreadBadge::Hidden);
        Self { badge_tx }
    }

    /// Current badge
    pub fn badge(&self) -> UnreadBadge {
        *self.badge_tx.borrow()
    }

    /// Record a new unread count
    ///
    /// Watchers are only woken when the visible badge changes.
    pub fn set_unread_count(&self, count: usize) {
        let badge = UnreadBadge::from_count(count);
        self.badge_tx.send_if_modified(|current| {
            if *current == badge {
                false
            } else {
                *current = badge;
                true
            }
        });
    }

    /// Clear the badge (e.g., on logout)
    pub fn reset(&self) {
        self.set_unread_count(0);
    }

    /// Watch badge changes
    pub fn subscribe(&self) -> watch::Receiver<UnreadBadge> {
        self.badge_tx.subscribe()
    }
}

impl Default for UnreadTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_from_count() {
        assert_eq!(UnreadBadge::from_count(0), UnreadBadge::Hidden);
        assert_eq!(UnreadBadge::from_count(1), UnreadBadge::Count(1));
        assert_eq!(UnreadBadge::from_count(29), UnreadBadge::Count(29));
        assert_eq!(UnreadBadge::from_count(30), UnreadBadge::Many);
        assert_eq!(UnreadBadge::from_count(250), UnreadBadge::Many);
    }

    #[test]
    fn test_badge_display() {
        assert_eq!(UnreadBadge::Hidden.to_string(), "");
        assert_eq!(UnreadBadge::Count(3).to_string(), "3");
        assert_eq!(UnreadBadge::Many.to_string(), "30+");
        assert!(!UnreadBadge::Hidden.is_visible());
        assert!(UnreadBadge::Count(1).is_visible());
    }

    #[tokio::test]
    async fn test_tracker_notifies_on_change_only() {
        let tracker = UnreadTracker::new();
        let mut rx = tracker.subscribe();

        tracker.set_unread_count(2);
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), UnreadBadge::Count(2));

        tracker.set_unread_count(2);
        assert!(!rx.has_changed().unwrap());

        tracker.set_unread_count(31);
        tracker.set_unread_count(45);
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), UnreadBadge::Many);

        tracker.reset();
        assert_eq!(tracker.badge(), UnreadBadge::Hidden);
    }
}
