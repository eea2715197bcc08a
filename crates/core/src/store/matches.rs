//! Match store
//!
//! Derives and records mutual matches. Each match is canonicalized to an
//! unordered pair so lookups are direction-independent.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use etincelle_domain::{canonical_pair, Match};
use uuid::Uuid;

/// Append-only collection of matches.
#[derive(Debug, Clone, Default)]
pub struct MatchStore {
    matches: Vec<Match>,
}

impl MatchStore {
    pub fn new(matches: Vec<Match>) -> Self {
        Self { matches }
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// All matches containing `user_id`, newest first.
    pub fn matches_for(&self, user_id: Uuid) -> Vec<Match> {
        let mut result: Vec<Match> =
            self.matches.iter().filter(|m| m.includes(user_id)).cloned().collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        result
    }

    /// Counterpart IDs across all matches for `user_id`.
    pub fn matched_user_ids(&self, user_id: Uuid) -> HashSet<Uuid> {
        self.matches.iter().filter_map(|m| m.other_user(user_id)).collect()
    }

    /// Existing match for the canonical pair, if any.
    pub fn find_match(&self, a: Uuid, b: Uuid) -> Option<&Match> {
        let pair = canonical_pair(a, b);
        self.matches.iter().find(|m| m.user_ids == pair)
    }

    /// Create a match for the pair, or return the existing one unchanged.
    pub fn create_match(&mut self, a: Uuid, b: Uuid, at: DateTime<Utc>) -> Match {
        if let Some(existing) = self.find_match(a, b) {
            return existing.clone();
        }

        let created = Match::new(a, b, at);
        self.matches.push(created.clone());
        created
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn create_match_is_idempotent_and_commutative() {
        let mut store = MatchStore::default();
        let a = Uuid::from_u128(1);
        let b = Uuid::from_u128(2);
        let now = Utc::now();

        let first = store.create_match(a, b, now);
        let second = store.create_match(b, a, now + Duration::minutes(1));
        let third = store.create_match(a, b, now + Duration::minutes(2));

        assert_eq!(first.id, second.id);
        assert_eq!(first.id, third.id);
        assert_eq!(first.created_at, third.created_at);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn find_match_is_direction_independent() {
        let mut store = MatchStore::default();
        let a = Uuid::from_u128(1);
        let b = Uuid::from_u128(2);
        store.create_match(a, b, Utc::now());

        assert_eq!(store.find_match(a, b).map(|m| m.id), store.find_match(b, a).map(|m| m.id));
        assert!(store.find_match(a, Uuid::from_u128(3)).is_none());
    }

    #[test]
    fn matches_for_sorted_newest_first() {
        let mut store = MatchStore::default();
        let me = Uuid::from_u128(1);
        let now = Utc::now();

        let older = store.create_match(me, Uuid::from_u128(2), now);
        let newer = store.create_match(me, Uuid::from_u128(3), now + Duration::hours(1));

        let matches = store.matches_for(me);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].id, newer.id);
        assert_eq!(matches[1].id, older.id);

        let counterparts = store.matched_user_ids(me);
        assert!(counterparts.contains(&Uuid::from_u128(2)));
        assert!(counterparts.contains(&Uuid::from_u128(3)));
        assert_eq!(counterparts.len(), 2);
    }
}
