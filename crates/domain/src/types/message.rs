//! Chat messages
//!
//! Messages are keyed by match and append-only. Text validation (non-empty
//! after trim) is enforced by the message store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A chat message within a match. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub id: Uuid,
    pub match_id: Uuid,
    pub sender_id: Uuid,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

impl Message {
    /// Create a new message with a fresh id.
    pub fn new(match_id: Uuid, sender_id: Uuid, text: String, sent_at: DateTime<Utc>) -> Self {
        Self { id: Uuid::new_v4(), match_id, sender_id, text, sent_at }
    }
}
