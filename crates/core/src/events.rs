//! Event browsing
//!
//! Upcoming-event queries with category and near-me filters, participation
//! toggling, and candidate matching at an event. Distance comes from the
//! geolocation port when a fix exists; otherwise near-me falls back to
//! city-string equality.

use std::sync::Arc;

use etincelle_domain::constants::NEARBY_RADIUS_KM;
use etincelle_domain::{EventCategory, LocalEvent, UserProfile};
use uuid::Uuid;

use crate::ports::{Clock, LocationProvider};
use crate::store::{SharedEvents, SharedMatches, SharedProfiles, SharedSwipes};

/// Read/toggle service over the event store.
pub struct EventBrowser {
    current_user_id: Uuid,
    profiles: SharedProfiles,
    swipes: SharedSwipes,
    matches: SharedMatches,
    events: SharedEvents,
    location: Arc<dyn LocationProvider>,
    clock: Arc<dyn Clock>,
}

impl EventBrowser {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        current_user_id: Uuid,
        profiles: SharedProfiles,
        swipes: SharedSwipes,
        matches: SharedMatches,
        events: SharedEvents,
        location: Arc<dyn LocationProvider>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { current_user_id, profiles, swipes, matches, events, location, clock }
    }

    /// All upcoming events, soonest first.
    pub fn upcoming(&self) -> Vec<LocalEvent> {
        // Nudge the provider when we are authorized but have no fix yet.
        if self.location.is_authorized() && self.location.last_known().is_none() {
            self.location.request_location();
        }
        self.events.read().upcoming(self.clock.now())
    }

    /// Upcoming events narrowed by category and the near-me toggle.
    ///
    /// Near-me keeps events within [`NEARBY_RADIUS_KM`] of the last known
    /// coordinate; without a fix it keeps events in the current user's city.
    /// With a fix, results are sorted nearest first (ties by start time);
    /// otherwise the upcoming order (soonest first) is preserved.
    pub fn filtered(&self, category: Option<EventCategory>, near_me_only: bool) -> Vec<LocalEvent> {
        let city = self.profiles.read().current_user().map(|me| me.city.clone());

        let mut result: Vec<LocalEvent> = self
            .upcoming()
            .into_iter()
            .filter(|event| {
                if let Some(category) = category {
                    if event.category != category {
                        return false;
                    }
                }
                if near_me_only {
                    match self.distance_km(event) {
                        Some(km) => {
                            if km > NEARBY_RADIUS_KM {
                                return false;
                            }
                        }
                        None => {
                            if let Some(city) = &city {
                                if &event.city != city {
                                    return false;
                                }
                            }
                        }
                    }
                }
                true
            })
            .collect();

        if self.location.last_known().is_some() {
            result.sort_by(|a, b| {
                let da = self.distance_km(a).unwrap_or(f64::INFINITY);
                let db = self.distance_km(b).unwrap_or(f64::INFINITY);
                da.partial_cmp(&db)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| a.starts_at.cmp(&b.starts_at))
            });
        }

        result
    }

    /// Distance from the last known coordinate to the event, in kilometers.
    pub fn distance_km(&self, event: &LocalEvent) -> Option<f64> {
        Some(self.location.last_known()?.distance_km(&event.coordinate))
    }

    /// "3.4 km" under ten kilometers, whole kilometers above.
    pub fn distance_label(&self, event: &LocalEvent) -> Option<String> {
        let km = self.distance_km(event)?;
        if km < 10.0 {
            Some(format!("{km:.1} km"))
        } else {
            Some(format!("{} km", km.round() as i64))
        }
    }

    /// Toggle the current user's roster membership; returns the new state.
    pub fn toggle_participation(&self, event_id: Uuid) -> bool {
        self.events.write().toggle_participation(self.current_user_id, event_id)
    }

    pub fn is_participating(&self, event_id: Uuid) -> bool {
        self.events.read().is_participating(self.current_user_id, event_id)
    }

    /// Attendees of the event the current user could still match: not
    /// themselves, not already swiped or matched, and mutually compatible.
    /// Sorted by first name.
    pub fn match_candidates(&self, event_id: Uuid) -> Vec<UserProfile> {
        let Some(event) = self.events.read().event(event_id).cloned() else {
            return Vec::new();
        };

        let profiles = self.profiles.read();
        let Some(me) = profiles.current_user() else {
            return Vec::new();
        };

        let swiped = self.swipes.read().swiped_profile_ids(self.current_user_id);
        let matched = self.matches.read().matched_user_ids(self.current_user_id);

        let mut candidates: Vec<UserProfile> = profiles
            .all()
            .iter()
            .filter(|p| {
                event.attendee_user_ids.contains(&p.id)
                    && p.id != self.current_user_id
                    && !swiped.contains(&p.id)
                    && !matched.contains(&p.id)
                    && me.can_mutually_match(p)
            })
            .cloned()
            .collect();
        candidates.sort_by(|a, b| a.first_name.cmp(&b.first_name));
        candidates
    }

    /// The candidate's interests the current user shares, in the candidate's
    /// display order.
    pub fn shared_interests(&self, profile: &UserProfile) -> Vec<String> {
        let profiles = self.profiles.read();
        let Some(me) = profiles.current_user() else {
            return Vec::new();
        };
        profile.interests.iter().filter(|tag| me.interests.contains(tag)).cloned().collect()
    }
}
