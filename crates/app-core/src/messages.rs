//! Inbox conversations
//!
//! Fans can only message a creator after booking, so every inbox entry is
//! tied to a meetup. Each entry carries the latest message preview and the
//! meetup's status.

use serde::{Deserialize, Serialize};

/// Meetup label used once a session has taken place
pub const COMPLETED_MEETUP: &str = "Completed";

/// Latest message in a conversation with a creator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Conversation identifier
    pub id: String,
    /// Name of the creator on the other side
    pub creator_name: String,
    /// Creator avatar URL
    pub creator_avatar_url: String,
    /// Preview of the most recent message
    pub last_message: String,
    /// Relative time label (e.g., "2m ago")
    pub timestamp: String,
    /// Whether the user has read the latest message
    pub is_read: bool,
    /// Whether the creator is currently online
    pub is_online: bool,
    /// Meetup date label, or "Completed"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meetup_date: Option<String>,
}

/// Status of the meetup attached to a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeetupStatus<'a> {
    /// The session already happened
    Completed,
    /// The session is scheduled for the given label
    Upcoming(&'a str),
}

impl Message {
    /// Meetup status, if the conversation has one
    pub fn meetup_status(&self) -> Option<MeetupStatus<'_>> {
        match self.meetup_date.as_deref() {
            None | Some("") => None,
            Some(COMPLETED_MEETUP) => Some(MeetupStatus::Completed),
            Some(date) => Some(MeetupStatus::Upcoming(date)),
        }
    }
}

/// Number of conversations with an unread latest message
pub fn unread_count(messages: &[Message]) -> usize {
    messages.iter().filter(|m| !m.is_read).count()
}
