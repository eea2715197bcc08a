//! Swipe/match decision engine
//!
//! Orchestrates a swipe on the current top-of-deck candidate: quota gating
//! for likes, swipe recording, mutual-match detection, and the synthesized
//! opening message. Left swipes never touch the quota.

use std::sync::Arc;

use etincelle_domain::{Result, SwipeDirection, UserProfile};
use tracing::{debug, info};
use uuid::Uuid;

use crate::filter::CandidateFilters;
use crate::ports::Clock;
use crate::quota::{ConsumeOutcome, LikeQuotaTracker};
use crate::store::{SharedMatches, SharedMessages, SharedProfiles, SharedSwipes};

/// What a swipe on the top-of-deck candidate did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// No candidate left to swipe.
    DeckEmpty,
    /// Left swipe recorded.
    Rejected,
    /// Right swipe recorded; no mutual like (or the match already existed).
    Liked,
    /// Right swipe completed a brand-new mutual match. `greeting_id` is the
    /// synthesized opening message authored by the candidate.
    Matched { match_id: Uuid, greeting_id: Uuid },
    /// Daily like limit exhausted; nothing was recorded and the candidate
    /// stays on top of the deck.
    LimitReached,
}

/// Decision engine over the current user's deck.
pub struct SwipeEngine {
    current_user_id: Uuid,
    profiles: SharedProfiles,
    swipes: SharedSwipes,
    matches: SharedMatches,
    messages: SharedMessages,
    quota: Arc<LikeQuotaTracker>,
    clock: Arc<dyn Clock>,
    filters: CandidateFilters,
    deck: Vec<UserProfile>,
    latest_match: Option<UserProfile>,
    like_limit_hits: u32,
}

impl SwipeEngine {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        current_user_id: Uuid,
        profiles: SharedProfiles,
        swipes: SharedSwipes,
        matches: SharedMatches,
        messages: SharedMessages,
        quota: Arc<LikeQuotaTracker>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let mut engine = Self {
            current_user_id,
            profiles,
            swipes,
            matches,
            messages,
            quota,
            clock,
            filters: CandidateFilters::default(),
            deck: Vec::new(),
            latest_match: None,
            like_limit_hits: 0,
        };
        engine.reload_deck();
        engine
    }

    /// The ordered queue of not-yet-decided candidates.
    pub fn deck(&self) -> &[UserProfile] {
        &self.deck
    }

    /// The candidate a swipe would apply to.
    pub fn top_profile(&self) -> Option<&UserProfile> {
        self.deck.first()
    }

    /// Active filter selection.
    pub fn filters(&self) -> CandidateFilters {
        self.filters
    }

    /// Replace the filter selection and recompute the deck.
    pub fn set_filters(&mut self, filters: CandidateFilters) {
        self.filters = filters;
        self.reload_deck();
    }

    /// The candidate of the most recent new match, until dismissed.
    pub fn latest_match(&self) -> Option<&UserProfile> {
        self.latest_match.as_ref()
    }

    /// Clear the "it's a match" banner state.
    pub fn dismiss_match_banner(&mut self) {
        self.latest_match = None;
    }

    /// How many right swipes were refused because the daily limit was
    /// reached. The presentation layer observes this counter.
    pub fn like_limit_hits(&self) -> u32 {
        self.like_limit_hits
    }

    /// Recompute candidates minus swiped/matched IDs, filters applied.
    pub fn reload_deck(&mut self) {
        let swiped = self.swipes.read().swiped_profile_ids(self.current_user_id);
        let matched = self.matches.read().matched_user_ids(self.current_user_id);

        let profiles = self.profiles.read();
        let candidates = profiles.candidate_profiles(&swiped, &matched);
        self.deck = match profiles.current_user() {
            Some(me) => self.filters.apply(me, &candidates),
            None => candidates,
        };
    }

    /// Reject the top-of-deck candidate.
    pub fn swipe_left(&mut self) -> Result<SwipeOutcome> {
        self.swipe_top(SwipeDirection::Left)
    }

    /// Like the top-of-deck candidate (quota-gated).
    pub fn swipe_right(&mut self) -> Result<SwipeOutcome> {
        self.swipe_top(SwipeDirection::Right)
    }

    fn swipe_top(&mut self, direction: SwipeDirection) -> Result<SwipeOutcome> {
        let Some(candidate) = self.top_profile().cloned() else {
            return Ok(SwipeOutcome::DeckEmpty);
        };

        if direction == SwipeDirection::Right {
            // Quota failure must leave state exactly as before the call: no
            // swipe, no match side effects, candidate stays on top.
            if let ConsumeOutcome::Exhausted(snapshot) = self.quota.consume_if_available()? {
                self.like_limit_hits += 1;
                info!(
                    candidate = %candidate.id,
                    reset_at = %snapshot.reset_at,
                    hits = self.like_limit_hits,
                    "daily like limit reached"
                );
                return Ok(SwipeOutcome::LimitReached);
            }
        }

        let now = self.clock.now();
        self.swipes.write().record_swipe(self.current_user_id, candidate.id, direction, now);
        debug!(candidate = %candidate.id, ?direction, "swipe recorded");

        let mut outcome = match direction {
            SwipeDirection::Left => SwipeOutcome::Rejected,
            SwipeDirection::Right => SwipeOutcome::Liked,
        };

        if direction == SwipeDirection::Right
            && candidate.liked_user_ids.contains(&self.current_user_id)
        {
            // They already liked us: this right swipe completes the match.
            let already_matched =
                self.matches.read().find_match(self.current_user_id, candidate.id).is_some();
            let matched =
                self.matches.write().create_match(self.current_user_id, candidate.id, now);

            if !already_matched {
                let first_name = self
                    .profiles
                    .read()
                    .current_user()
                    .map(|me| me.first_name.clone())
                    .unwrap_or_else(|| "toi".to_string());
                let greeting = self.messages.write().send_message(
                    matched.id,
                    candidate.id,
                    &greeting_for(&first_name),
                    now,
                );

                self.latest_match = Some(candidate.clone());
                info!(match_id = %matched.id, candidate = %candidate.id, "new mutual match");

                if let Some(greeting) = greeting {
                    outcome =
                        SwipeOutcome::Matched { match_id: matched.id, greeting_id: greeting.id };
                }
            }
        }

        self.reload_deck();
        Ok(outcome)
    }
}

/// Canned opening line authored by the matched candidate.
fn greeting_for(first_name: &str) -> String {
    format!("Salut {first_name}, contente qu'on ait matché.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_references_first_name() {
        let text = greeting_for("Jules");
        assert!(text.contains("Jules"));
        assert!(text.starts_with("Salut"));
    }
}
