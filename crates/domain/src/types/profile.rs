//! User profile types
//!
//! Profiles are held fully in memory and seeded from fixtures; only the
//! current user's profile is ever edited.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Biological sex used by the compatibility predicate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Display label (French UI copy).
    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Homme",
            Self::Female => "Femme",
        }
    }
}

/// Sexual orientation used by the compatibility predicate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Heterosexual,
    Bisexual,
    Homosexual,
}

impl Orientation {
    /// Display label (French UI copy).
    pub fn label(self) -> &'static str {
        match self {
            Self::Heterosexual => "Hetero",
            Self::Bisexual => "Bi",
            Self::Homosexual => "Homo",
        }
    }
}

/// A user profile.
///
/// `id` is immutable after creation. `interests` keeps display order; the UI
/// caps selection at [`crate::constants::MAX_SELECTED_INTERESTS`] but seed
/// data is unconstrained.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub id: Uuid,
    pub first_name: String,
    pub age: i32,
    pub city: String,
    pub bio: String,
    pub sex: Sex,
    pub orientation: Orientation,
    /// Ordered interest tags; semantically a small set, display order matters.
    pub interests: Vec<String>,
    /// Placeholder glyph shown when no photo is set.
    pub photo_symbol: String,
    /// Legacy single-photo fallback; the gallery head wins when present.
    pub photo: Option<Vec<u8>>,
    /// Photo gallery; the first entry is the primary image.
    pub photo_gallery: Vec<Vec<u8>>,
    /// Users who liked this profile before the session started. Never
    /// reconciled with the live swipe store: simulated users do not swipe
    /// during a session, so this stays the only incoming-like source.
    pub liked_user_ids: HashSet<Uuid>,
}

impl UserProfile {
    /// "Name, age" headline used by card views.
    pub fn headline(&self) -> String {
        format!("{}, {}", self.first_name, self.age)
    }

    /// Primary photo: gallery head, falling back to the legacy single photo.
    pub fn primary_photo(&self) -> Option<&[u8]> {
        self.photo_gallery.first().or(self.photo.as_ref()).map(Vec::as_slice)
    }

    /// Whether this user is interested in `other` given their orientation.
    ///
    /// Bisexual users are interested in anyone but themselves; heterosexual
    /// users in the opposite sex; homosexual users in the same sex.
    pub fn is_interested_in(&self, other: &UserProfile) -> bool {
        match self.orientation {
            Orientation::Bisexual => other.id != self.id,
            Orientation::Heterosexual => self.sex != other.sex,
            Orientation::Homosexual => self.sex == other.sex,
        }
    }

    /// Symmetric compatibility: both sides must be interested.
    ///
    /// Gates every candidate list in the system (deck, incoming likes, event
    /// matching, preference-category browsing).
    pub fn can_mutually_match(&self, other: &UserProfile) -> bool {
        self.is_interested_in(other) && other.is_interested_in(self)
    }
}
