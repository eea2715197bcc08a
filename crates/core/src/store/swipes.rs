//! Swipe store
//!
//! Records one-directional swipe decisions and enforces the at-most-one-swipe
//! invariant per (source, target) ordered pair.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use etincelle_domain::{Swipe, SwipeDirection};
use uuid::Uuid;

/// Append-only collection of swipes.
#[derive(Debug, Clone, Default)]
pub struct SwipeStore {
    swipes: Vec<Swipe>,
}

impl SwipeStore {
    pub fn new(swipes: Vec<Swipe>) -> Self {
        Self { swipes }
    }

    pub fn len(&self) -> usize {
        self.swipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.swipes.is_empty()
    }

    /// All target IDs this user has swiped, any direction.
    pub fn swiped_profile_ids(&self, user_id: Uuid) -> HashSet<Uuid> {
        self.swipes
            .iter()
            .filter(|s| s.from_user_id == user_id)
            .map(|s| s.to_user_id)
            .collect()
    }

    /// Whether a swipe from `from` to `to` exists.
    pub fn has_swipe(&self, from: Uuid, to: Uuid) -> bool {
        self.swipes.iter().any(|s| s.from_user_id == from && s.to_user_id == to)
    }

    /// Record a swipe, unless one already exists for this ordered pair.
    ///
    /// Returns `None` on the duplicate (idempotent no-op).
    pub fn record_swipe(
        &mut self,
        from: Uuid,
        to: Uuid,
        direction: SwipeDirection,
        at: DateTime<Utc>,
    ) -> Option<Swipe> {
        if self.has_swipe(from, to) {
            return None;
        }

        let swipe = Swipe::new(from, to, direction, at);
        self.swipes.push(swipe.clone());
        Some(swipe)
    }
}
