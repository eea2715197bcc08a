//! Profile store
//!
//! Holds all user profiles and exposes lookup, candidate-filtering queries,
//! and the single mutation: editing the current user's profile.

use std::collections::HashSet;

use etincelle_domain::constants::{MAX_PROFILE_PHOTOS, MAX_SELECTED_INTERESTS};
use etincelle_domain::{Orientation, Sex, UserProfile};
use uuid::Uuid;

/// Replacement values for the current user's mutable fields.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub first_name: String,
    pub age: i32,
    pub city: String,
    pub bio: String,
    pub sex: Sex,
    pub orientation: Orientation,
    pub interests: Vec<String>,
    /// Legacy single-photo fallback, used when the gallery is empty.
    pub photo: Option<Vec<u8>>,
    pub photo_gallery: Vec<Vec<u8>>,
    /// Placeholder glyph; `None` keeps the existing one.
    pub photo_symbol: Option<String>,
}

/// All user profiles plus the designated session owner.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    profiles: Vec<UserProfile>,
    current_user_id: Uuid,
}

impl ProfileStore {
    pub fn new(profiles: Vec<UserProfile>, current_user_id: Uuid) -> Self {
        Self { profiles, current_user_id }
    }

    pub fn current_user_id(&self) -> Uuid {
        self.current_user_id
    }

    /// Look up a profile by id.
    pub fn profile(&self, id: Uuid) -> Option<&UserProfile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    /// The profile of the designated session owner.
    pub fn current_user(&self) -> Option<&UserProfile> {
        self.profile(self.current_user_id)
    }

    /// All profiles, in seed order.
    pub fn all(&self) -> &[UserProfile] {
        &self.profiles
    }

    /// All profiles except the current user, `excluded` (already swiped) and
    /// `matched` IDs, sorted ascending by first name. The sort is stable:
    /// equal names keep seed order.
    pub fn candidate_profiles(
        &self,
        excluded: &HashSet<Uuid>,
        matched: &HashSet<Uuid>,
    ) -> Vec<UserProfile> {
        let mut candidates: Vec<UserProfile> = self
            .profiles
            .iter()
            .filter(|p| {
                p.id != self.current_user_id
                    && !excluded.contains(&p.id)
                    && !matched.contains(&p.id)
            })
            .cloned()
            .collect();
        candidates.sort_by(|a, b| a.first_name.cmp(&b.first_name));
        candidates
    }

    /// Replace the current user's mutable fields.
    ///
    /// Interests are capped at the UI selection limit. The photo gallery is
    /// deduplicated by byte identity and capped; an empty gallery falls back
    /// to the single legacy photo when one was supplied. The primary photo is
    /// always the gallery head after normalization.
    ///
    /// Returns `false` when there is no current user to update.
    pub fn update_current_user(&mut self, update: ProfileUpdate) -> bool {
        let Some(index) = self.profiles.iter().position(|p| p.id == self.current_user_id) else {
            return false;
        };

        let gallery = normalized_photo_gallery(update.photo_gallery, update.photo);

        let current = &mut self.profiles[index];
        current.first_name = update.first_name;
        current.age = update.age;
        current.city = update.city;
        current.bio = update.bio;
        current.sex = update.sex;
        current.orientation = update.orientation;
        current.interests = update.interests;
        current.interests.truncate(MAX_SELECTED_INTERESTS);
        current.photo = gallery.first().cloned();
        current.photo_gallery = gallery;
        if let Some(symbol) = update.photo_symbol {
            current.photo_symbol = symbol;
        }
        true
    }
}

/// Deduplicate by byte identity (keeping first occurrence), fall back to the
/// legacy photo when empty, and cap at the gallery limit.
fn normalized_photo_gallery(gallery: Vec<Vec<u8>>, fallback: Option<Vec<u8>>) -> Vec<Vec<u8>> {
    let mut unique: Vec<Vec<u8>> = Vec::new();
    for photo in gallery {
        if !unique.contains(&photo) {
            unique.push(photo);
        }
    }

    if unique.is_empty() {
        if let Some(fallback) = fallback {
            unique.push(fallback);
        }
    }

    unique.truncate(MAX_PROFILE_PHOTOS);
    unique
}
