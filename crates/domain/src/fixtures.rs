//! Seed fixtures for the demo session
//!
//! All state is in memory; every session starts from these fixtures. IDs are
//! stable so tests and the demo binary can reference them directly.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::types::{
    Coordinate, EventCategory, LocalEvent, Match, Message, Orientation, Sex, Swipe, UserProfile,
};

/// Everything a session is seeded with.
#[derive(Debug, Clone)]
pub struct Seed {
    pub current_user_id: Uuid,
    pub profiles: Vec<UserProfile>,
    pub swipes: Vec<Swipe>,
    pub matches: Vec<Match>,
    pub messages: Vec<Message>,
    pub events: Vec<LocalEvent>,
}

/// The designated session owner.
pub fn current_user_id() -> Uuid {
    Uuid::from_u128(0x0001)
}

pub fn lea_id() -> Uuid {
    Uuid::from_u128(0x0010)
}

pub fn camille_id() -> Uuid {
    Uuid::from_u128(0x0011)
}

pub fn chloe_id() -> Uuid {
    Uuid::from_u128(0x0012)
}

pub fn ines_id() -> Uuid {
    Uuid::from_u128(0x0013)
}

pub fn sarah_id() -> Uuid {
    Uuid::from_u128(0x0014)
}

fn profile(
    id: Uuid,
    first_name: &str,
    age: i32,
    city: &str,
    bio: &str,
    sex: Sex,
    orientation: Orientation,
    interests: &[&str],
    photo_symbol: &str,
    liked_user_ids: &[Uuid],
) -> UserProfile {
    UserProfile {
        id,
        first_name: first_name.to_string(),
        age,
        city: city.to_string(),
        bio: bio.to_string(),
        sex,
        orientation,
        interests: interests.iter().map(|s| s.to_string()).collect(),
        photo_symbol: photo_symbol.to_string(),
        photo: None,
        photo_gallery: Vec::new(),
        liked_user_ids: liked_user_ids.iter().copied().collect::<HashSet<_>>(),
    }
}

/// Demo seed: one current user, five candidates (three of whom already liked
/// the current user), no live swipes/matches/messages, and a handful of
/// upcoming events around Bordeaux. Event times are offsets from `now` so the
/// upcoming-events query always has content.
pub fn demo_seed(now: DateTime<Utc>) -> Seed {
    let me = current_user_id();

    let profiles = vec![
        profile(
            me,
            "Jules",
            26,
            "Bordeaux",
            "Je construis des produits et je cherche les meilleurs spots ramen.",
            Sex::Male,
            Orientation::Heterosexual,
            &["Cafe", "Musique", "Voyages"],
            "person.crop.square.fill",
            &[],
        ),
        profile(
            lea_id(),
            "Lea",
            24,
            "Bordeaux",
            "Running, musees et espresso a toute heure.",
            Sex::Female,
            Orientation::Heterosexual,
            &["Running", "Art", "Cafe"],
            "figure.run",
            &[me],
        ),
        profile(
            camille_id(),
            "Camille",
            27,
            "Toulouse",
            "Cuisine du week-end et photos au coucher du soleil.",
            Sex::Female,
            Orientation::Heterosexual,
            &["Cuisine", "Photographie", "Sport"],
            "camera.fill",
            &[],
        ),
        profile(
            chloe_id(),
            "Chloe",
            25,
            "Lille",
            "Librairies, concerts et voyages improvises.",
            Sex::Female,
            Orientation::Bisexual,
            &["Lecture", "Concerts", "Voyages"],
            "book.fill",
            &[me],
        ),
        profile(
            ines_id(),
            "Ines",
            23,
            "Nantes",
            "Team chiens, startups et brunch du dimanche.",
            Sex::Female,
            Orientation::Heterosexual,
            &["Animaux", "Tech", "Brunch"],
            "dog.fill",
            &[],
        ),
        profile(
            sarah_id(),
            "Sarah",
            28,
            "Paris",
            "Passionnee de langues et collectionneuse de vinyles.",
            Sex::Female,
            Orientation::Heterosexual,
            &["Musique", "Randonnee", "Voyages"],
            "music.note",
            &[me],
        ),
    ];

    let events = vec![
        LocalEvent {
            id: Uuid::from_u128(0x0020),
            title: "Afterwork quai des Chartrons".to_string(),
            category: EventCategory::Afterwork,
            city: "Bordeaux".to_string(),
            venue: "Halle Boca".to_string(),
            coordinate: Coordinate { latitude: 44.8254, longitude: -0.5562 },
            starts_at: now + Duration::hours(6),
            summary: "Verres au bord de l'eau pour rencontrer du monde apres le travail."
                .to_string(),
            attendee_user_ids: vec![lea_id(), camille_id()],
        },
        LocalEvent {
            id: Uuid::from_u128(0x0021),
            title: "Expo photo argentique".to_string(),
            category: EventCategory::Expo,
            city: "Bordeaux".to_string(),
            venue: "Base sous-marine".to_string(),
            coordinate: Coordinate { latitude: 44.8724, longitude: -0.5630 },
            starts_at: now + Duration::days(1),
            summary: "Vernissage et visite guidee de la nouvelle collection.".to_string(),
            attendee_user_ids: vec![sarah_id()],
        },
        LocalEvent {
            id: Uuid::from_u128(0x0022),
            title: "Run du dimanche matin".to_string(),
            category: EventCategory::Sport,
            city: "Bordeaux".to_string(),
            venue: "Parc bordelais".to_string(),
            coordinate: Coordinate { latitude: 44.8561, longitude: -0.6046 },
            starts_at: now + Duration::days(2),
            summary: "10 km tranquilles suivis d'un cafe en terrasse.".to_string(),
            attendee_user_ids: vec![lea_id()],
        },
        LocalEvent {
            id: Uuid::from_u128(0x0023),
            title: "Marche nocturne street food".to_string(),
            category: EventCategory::Food,
            city: "Toulouse".to_string(),
            venue: "Place du Capitole".to_string(),
            coordinate: Coordinate { latitude: 43.6045, longitude: 1.4440 },
            starts_at: now + Duration::days(3),
            summary: "Stands du monde entier et concerts acoustiques.".to_string(),
            attendee_user_ids: vec![camille_id(), ines_id()],
        },
        LocalEvent {
            id: Uuid::from_u128(0x0024),
            title: "Concert indie au fleuve".to_string(),
            category: EventCategory::Music,
            city: "Paris".to_string(),
            venue: "Petit Bain".to_string(),
            coordinate: Coordinate { latitude: 48.8338, longitude: 2.3765 },
            starts_at: now + Duration::days(5),
            summary: "Trois groupes emergents sur une peniche.".to_string(),
            attendee_user_ids: vec![sarah_id(), chloe_id()],
        },
    ];

    Seed {
        current_user_id: me,
        profiles,
        swipes: Vec::new(),
        matches: Vec::new(),
        messages: Vec::new(),
        events,
    }
}
