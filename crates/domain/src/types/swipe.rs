//! Swipe decisions
//!
//! A swipe is a one-directional accept/reject decision. Uniqueness per
//! (source, target) pair is enforced by the swipe store, not here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a swipe decision.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    /// Reject.
    Left,
    /// Like.
    Right,
}

/// A recorded swipe. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Swipe {
    pub id: Uuid,
    pub from_user_id: Uuid,
    pub to_user_id: Uuid,
    pub direction: SwipeDirection,
    pub created_at: DateTime<Utc>,
}

impl Swipe {
    /// Create a new swipe with a fresh id.
    pub fn new(
        from_user_id: Uuid,
        to_user_id: Uuid,
        direction: SwipeDirection,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self { id: Uuid::new_v4(), from_user_id, to_user_id, direction, created_at }
    }
}
