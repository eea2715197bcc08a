//! Daily like-quota snapshot pushed to the live status notifier.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current state of the daily like quota.
///
/// `reset_at` is the start of the next calendar day, when the counter rolls
/// over.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuotaSnapshot {
    pub remaining: u32,
    pub daily_limit: u32,
    pub reset_at: DateTime<Utc>,
}
