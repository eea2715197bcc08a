//! Match and incoming-like browsing
//!
//! Read-only views over the stores: the matches list (with counterpart and
//! last message), the incoming-likes list, and preference-category browsing.
//! The candidate filter set applies to every list, always against the other
//! user.

use chrono::{DateTime, Utc};
use etincelle_domain::{Message, UserProfile};
use uuid::Uuid;

use crate::filter::CandidateFilters;
use crate::store::{SharedMatches, SharedMessages, SharedProfiles, SharedSwipes};

/// One row of the matches list.
#[derive(Debug, Clone)]
pub struct MatchListItem {
    pub match_id: Uuid,
    pub matched_at: DateTime<Utc>,
    pub other_user: UserProfile,
    pub last_message: Option<Message>,
}

/// Read-only browsing service for matches and likes.
pub struct MatchBrowser {
    current_user_id: Uuid,
    profiles: SharedProfiles,
    swipes: SharedSwipes,
    matches: SharedMatches,
    messages: SharedMessages,
}

impl MatchBrowser {
    pub fn new(
        current_user_id: Uuid,
        profiles: SharedProfiles,
        swipes: SharedSwipes,
        matches: SharedMatches,
        messages: SharedMessages,
    ) -> Self {
        Self { current_user_id, profiles, swipes, matches, messages }
    }

    /// The matches list, newest first. `filters` applies to the other user of
    /// each match.
    pub fn items(&self, filters: &CandidateFilters) -> Vec<MatchListItem> {
        let profiles = self.profiles.read();
        let Some(me) = profiles.current_user() else {
            return Vec::new();
        };
        let messages = self.messages.read();

        self.matches
            .read()
            .matches_for(self.current_user_id)
            .into_iter()
            .filter_map(|m| {
                let other_id = m.other_user(self.current_user_id)?;
                let other_user = profiles.profile(other_id)?.clone();
                if !filters.matches(me, &other_user) {
                    return None;
                }
                Some(MatchListItem {
                    match_id: m.id,
                    matched_at: m.created_at,
                    other_user,
                    last_message: messages.last_message(m.id),
                })
            })
            .collect()
    }

    /// Profiles whose pre-seeded likes contain the current user, minus
    /// already-swiped and already-matched candidates, gated by mutual
    /// preference and sorted by first name.
    pub fn incoming_likes(&self, filters: &CandidateFilters) -> Vec<UserProfile> {
        let profiles = self.profiles.read();
        let Some(me) = profiles.current_user() else {
            return Vec::new();
        };

        let swiped = self.swipes.read().swiped_profile_ids(self.current_user_id);
        let matched = self.matches.read().matched_user_ids(self.current_user_id);

        let mut likers: Vec<UserProfile> = profiles
            .all()
            .iter()
            .filter(|p| {
                p.id != self.current_user_id
                    && p.liked_user_ids.contains(&self.current_user_id)
                    && !swiped.contains(&p.id)
                    && !matched.contains(&p.id)
                    && me.can_mutually_match(p)
                    && filters.matches(me, p)
            })
            .cloned()
            .collect();
        likers.sort_by(|a, b| a.first_name.cmp(&b.first_name));
        likers
    }

    /// The current user's interest tags, used as browsing categories.
    pub fn preference_categories(&self) -> Vec<String> {
        self.profiles
            .read()
            .current_user()
            .map(|me| me.interests.clone())
            .unwrap_or_default()
    }

    /// Profiles tagged with `category` that the current user could mutually
    /// match, sorted by first name.
    pub fn profiles_for_category(&self, category: &str) -> Vec<UserProfile> {
        let profiles = self.profiles.read();
        let Some(me) = profiles.current_user() else {
            return Vec::new();
        };

        let mut result: Vec<UserProfile> = profiles
            .all()
            .iter()
            .filter(|p| {
                p.id != self.current_user_id
                    && p.interests.iter().any(|tag| tag == category)
                    && me.can_mutually_match(p)
            })
            .cloned()
            .collect();
        result.sort_by(|a, b| a.first_name.cmp(&b.first_name));
        result
    }
}
