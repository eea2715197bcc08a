//! Mutual matches
//!
//! A match is a confirmed bidirectional like between exactly two users. The
//! pair is canonicalized by sorting the IDs' string form so lookups are
//! direction-independent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Canonical unordered pair: sorted by the IDs' string form, guaranteeing
/// `canonical_pair(a, b) == canonical_pair(b, a)`.
pub fn canonical_pair(a: Uuid, b: Uuid) -> [Uuid; 2] {
    if a.to_string() <= b.to_string() {
        [a, b]
    } else {
        [b, a]
    }
}

/// A mutual match between exactly two distinct users.
///
/// Matches are append-only; there is no deletion path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Match {
    pub id: Uuid,
    /// Canonical pair, sorted by string form.
    pub user_ids: [Uuid; 2],
    pub created_at: DateTime<Utc>,
}

impl Match {
    /// Create a match for the canonical pair of `a` and `b`.
    ///
    /// # Panics
    /// Panics if `a == b`: constructing a match without exactly two distinct
    /// user IDs is a caller bug, not a recoverable runtime condition.
    pub fn new(a: Uuid, b: Uuid, created_at: DateTime<Utc>) -> Self {
        assert!(a != b, "a match must contain exactly two distinct user ids");
        Self { id: Uuid::new_v4(), user_ids: canonical_pair(a, b), created_at }
    }

    /// Whether `user_id` is one of the two matched users.
    pub fn includes(&self, user_id: Uuid) -> bool {
        self.user_ids.contains(&user_id)
    }

    /// The counterpart of `user_id`, or `None` if `user_id` is not part of
    /// this match.
    pub fn other_user(&self, user_id: Uuid) -> Option<Uuid> {
        if !self.includes(user_id) {
            return None;
        }
        self.user_ids.iter().copied().find(|&id| id != user_id)
    }
}
