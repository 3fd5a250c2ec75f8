//! Messages screen

use app_core::messages::unread_count;
use app_core::{DataSource, Message};
use app_state::UnreadTracker;
use std::sync::Arc;

use super::{EmptyState, Result};

/// Notice shown under the inbox
pub const CHAT_POLICY_NOTICE: &str = "You can only message creators after booking a session. \
     This keeps everyone safe and ensures meaningful connections.";

/// Inbox state
pub struct MessagesScreen {
    source: Arc<dyn DataSource>,
    unread: Arc<UnreadTracker>,
    messages: Vec<Message>,
}

impl MessagesScreen {
    /// Create the inbox; `unread` feeds the tab bar badge
    pub fn new(source: Arc<dyn DataSource>, unread: Arc<UnreadTracker>) -> Self {
        Self { source, unread, messages: Vec::new() }
    }

    /// Load conversations and update the unread badge
    pub async fn load(&mut self) -> Result<()> {
        self.messages = self.source.messages().await?;
        let unread = unread_count(&self.messages);
        self.unread.set_unread_count(unread);
        tracing::debug!(count = self.messages.len(), unread, "Loaded inbox");
        Ok(())
    }

    /// Conversations in inbox order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Conversations with an unread latest message
    pub fn unread_count(&self) -> usize {
        unread_count(&self.messages)
    }

    /// Placeholder for an empty inbox
    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.messages.is_empty() {
            return None;
        }
        Some(EmptyState {
            title: "No messages yet".to_string(),
            body: "Book a session with a creator to start chatting!".to_string(),
            action_label: Some("Discover Creators".to_string()),
        })
    }
}
