//! Message store
//!
//! Chat messages keyed by match, append-only. Empty sends (after trimming)
//! are silently rejected.

use chrono::{DateTime, Utc};
use etincelle_domain::Message;
use uuid::Uuid;

/// Append-only collection of messages.
#[derive(Debug, Clone, Default)]
pub struct MessageStore {
    messages: Vec<Message>,
}

impl MessageStore {
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Messages of a match, ascending by timestamp.
    pub fn messages_for(&self, match_id: Uuid) -> Vec<Message> {
        let mut result: Vec<Message> =
            self.messages.iter().filter(|m| m.match_id == match_id).cloned().collect();
        result.sort_by(|a, b| a.sent_at.cmp(&b.sent_at));
        result
    }

    /// Most recent message of a match, if any.
    pub fn last_message(&self, match_id: Uuid) -> Option<Message> {
        self.messages_for(match_id).pop()
    }

    /// Append a message. Text is trimmed; an empty result is rejected and
    /// `None` is returned (validation rejection, not an error).
    pub fn send_message(
        &mut self,
        match_id: Uuid,
        sender_id: Uuid,
        text: &str,
        at: DateTime<Utc>,
    ) -> Option<Message> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        let message = Message::new(match_id, sender_id, trimmed.to_string(), at);
        self.messages.push(message.clone());
        Some(message)
    }
}
