//! Event store
//!
//! Local events with attendee rosters. Participation is toggled per user,
//! idempotently and deduplicated.

use chrono::{DateTime, Duration, Utc};
use etincelle_domain::constants::UPCOMING_GRACE_HOURS;
use etincelle_domain::LocalEvent;
use uuid::Uuid;

/// All local events.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<LocalEvent>,
}

impl EventStore {
    pub fn new(events: Vec<LocalEvent>) -> Self {
        Self { events }
    }

    /// Events that have not ended yet (a short grace window keeps events that
    /// started recently visible), sorted by start time ascending.
    pub fn upcoming(&self, now: DateTime<Utc>) -> Vec<LocalEvent> {
        let cutoff = now - Duration::hours(UPCOMING_GRACE_HOURS);
        let mut result: Vec<LocalEvent> =
            self.events.iter().filter(|e| e.starts_at >= cutoff).cloned().collect();
        result.sort_by(|a, b| a.starts_at.cmp(&b.starts_at));
        result
    }

    /// Look up an event by id.
    pub fn event(&self, id: Uuid) -> Option<&LocalEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Whether `user_id` is on the roster of `event_id`.
    pub fn is_participating(&self, user_id: Uuid, event_id: Uuid) -> bool {
        self.event(event_id).is_some_and(|e| e.attendee_user_ids.contains(&user_id))
    }

    /// Toggle a single user's roster membership. Adding is deduplicated;
    /// unknown event IDs are ignored. Returns the new membership state.
    pub fn toggle_participation(&mut self, user_id: Uuid, event_id: Uuid) -> bool {
        let Some(event) = self.events.iter_mut().find(|e| e.id == event_id) else {
            return false;
        };

        if event.attendee_user_ids.contains(&user_id) {
            event.attendee_user_ids.retain(|&id| id != user_id);
            false
        } else {
            event.attendee_user_ids.push(user_id);
            true
        }
    }
}
