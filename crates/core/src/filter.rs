//! Candidate filter engine
//!
//! A composable predicate set applied uniformly to the discovery deck, the
//! matches list, and the incoming-likes list. `apply` filters; it never
//! re-sorts.

use etincelle_domain::{Orientation, Sex, UserProfile};

/// Active filter selection. `Default` is the neutral selection that lets
/// every candidate through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CandidateFilters {
    pub sex: Option<Sex>,
    pub orientation: Option<Orientation>,
    /// Keep only candidates sharing at least one interest with the current
    /// user.
    pub shared_interests_only: bool,
    /// Keep only candidates the current user is interested in.
    pub my_preferences_only: bool,
}

impl CandidateFilters {
    /// Whether no filter is active.
    pub fn is_neutral(&self) -> bool {
        *self == Self::default()
    }

    /// Predicate for a single candidate; all active filters must pass.
    pub fn matches(&self, current_user: &UserProfile, candidate: &UserProfile) -> bool {
        if let Some(sex) = self.sex {
            if candidate.sex != sex {
                return false;
            }
        }
        if let Some(orientation) = self.orientation {
            if candidate.orientation != orientation {
                return false;
            }
        }
        if self.shared_interests_only && !shares_interest(current_user, candidate) {
            return false;
        }
        if self.my_preferences_only && !current_user.is_interested_in(candidate) {
            return false;
        }
        true
    }

    /// Filter `candidates`, preserving input order.
    pub fn apply(&self, current_user: &UserProfile, candidates: &[UserProfile]) -> Vec<UserProfile> {
        candidates.iter().filter(|c| self.matches(current_user, c)).cloned().collect()
    }
}

/// Whether the two profiles share at least one interest tag.
pub fn shares_interest(a: &UserProfile, b: &UserProfile) -> bool {
    a.interests.iter().any(|tag| b.interests.contains(tag))
}
