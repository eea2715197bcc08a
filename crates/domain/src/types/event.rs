//! Local events
//!
//! Events carry a mutable attendee roster toggled by the event store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Event category shown as a filter chip.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    Afterwork,
    Expo,
    Sport,
    Food,
    Music,
}

impl EventCategory {
    /// Display label (French UI copy).
    pub fn label(self) -> &'static str {
        match self {
            Self::Afterwork => "Afterwork",
            Self::Expo => "Expo",
            Self::Sport => "Sport",
            Self::Food => "Food",
            Self::Music => "Musique",
        }
    }

    /// All categories, in chip display order.
    pub fn all() -> [Self; 5] {
        [Self::Afterwork, Self::Expo, Self::Sport, Self::Food, Self::Music]
    }
}

/// A geographic coordinate (decimal degrees).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Great-circle distance to `other` in kilometers (haversine).
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        const EARTH_RADIUS_KM: f64 = 6371.0;

        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = (other.latitude - self.latitude).to_radians();
        let dlon = (other.longitude - self.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
    }
}

/// A local event with an attendee roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocalEvent {
    pub id: Uuid,
    pub title: String,
    pub category: EventCategory,
    pub city: String,
    pub venue: String,
    pub coordinate: Coordinate,
    pub starts_at: DateTime<Utc>,
    pub summary: String,
    /// Attendee user IDs; mutated only through the event store's idempotent
    /// toggle.
    pub attendee_user_ids: Vec<Uuid>,
}
