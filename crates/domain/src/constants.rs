//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Like quota configuration
pub const DAILY_LIKE_LIMIT: u32 = 6;
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

// Profile editing limits
pub const MAX_PROFILE_PHOTOS: usize = 6;
pub const MAX_SELECTED_INTERESTS: usize = 5;
pub const MIN_AGE: i32 = 18;
pub const MAX_AGE: i32 = 99;

// Event browsing
pub const NEARBY_RADIUS_KM: f64 = 120.0;
pub const UPCOMING_GRACE_HOURS: i64 = 2;
