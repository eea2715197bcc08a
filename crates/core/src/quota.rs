//! Daily like-quota tracker
//!
//! A rolling daily counter persisted as a (day key, used count) pair in the
//! settings store. The tracker gates the decision engine's right-swipe path;
//! it is not keyed by swipe identity. Every refresh or consume pushes the
//! current snapshot to the live status notifier.

use std::sync::Arc;

use chrono::{DateTime, NaiveTime, Utc};
use etincelle_domain::constants::{DAILY_LIKE_LIMIT, DAY_KEY_FORMAT};
use etincelle_domain::{QuotaSnapshot, Result};
use tracing::debug;

use crate::ports::{Clock, QuotaStatusNotifier, SettingsStore};

/// Settings key holding the calendar day the counter belongs to.
pub const DAY_KEY_SETTING: &str = "likes.day_key";
/// Settings key holding the number of likes used on that day.
pub const USED_COUNT_SETTING: &str = "likes.used_count";

/// Outcome of a consume attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumeOutcome {
    /// One quota unit was consumed.
    Consumed(QuotaSnapshot),
    /// The daily limit is exhausted; nothing was consumed.
    Exhausted(QuotaSnapshot),
}

/// State machine over the persisted (day key, used count) pair.
pub struct LikeQuotaTracker {
    settings: Arc<dyn SettingsStore>,
    notifier: Arc<dyn QuotaStatusNotifier>,
    clock: Arc<dyn Clock>,
}

impl LikeQuotaTracker {
    pub fn new(
        settings: Arc<dyn SettingsStore>,
        notifier: Arc<dyn QuotaStatusNotifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { settings, notifier, clock }
    }

    /// Roll the counter over if the stored day key is stale, then publish and
    /// return the current snapshot.
    pub fn refresh(&self) -> Result<QuotaSnapshot> {
        let now = self.clock.now();
        let today = now.format(DAY_KEY_FORMAT).to_string();

        if self.settings.get_string(DAY_KEY_SETTING)?.as_deref() != Some(today.as_str()) {
            debug!(day_key = %today, "like quota day rollover");
            self.settings.set_string(DAY_KEY_SETTING, &today)?;
            self.settings.set_u32(USED_COUNT_SETTING, 0)?;
        }

        let used = self.settings.get_u32(USED_COUNT_SETTING)?;
        let snapshot = self.snapshot(used, now);
        self.notifier.publish(snapshot);
        Ok(snapshot)
    }

    /// Consume one quota unit if any remains.
    ///
    /// On exhaustion nothing is persisted and the caller sees
    /// [`ConsumeOutcome::Exhausted`]; this is an expected user-facing
    /// condition, not an error.
    pub fn consume_if_available(&self) -> Result<ConsumeOutcome> {
        let snapshot = self.refresh()?;
        if snapshot.remaining == 0 {
            return Ok(ConsumeOutcome::Exhausted(snapshot));
        }

        let used = self.settings.get_u32(USED_COUNT_SETTING)? + 1;
        self.settings.set_u32(USED_COUNT_SETTING, used)?;

        let snapshot = self.snapshot(used, self.clock.now());
        self.notifier.publish(snapshot);
        Ok(ConsumeOutcome::Consumed(snapshot))
    }

    fn snapshot(&self, used: u32, now: DateTime<Utc>) -> QuotaSnapshot {
        QuotaSnapshot {
            remaining: DAILY_LIKE_LIMIT.saturating_sub(used),
            daily_limit: DAILY_LIKE_LIMIT,
            reset_at: start_of_next_day(now),
        }
    }
}

/// Start of the next calendar day, when the counter resets.
fn start_of_next_day(now: DateTime<Utc>) -> DateTime<Utc> {
    let next = now.date_naive() + chrono::Days::new(1);
    next.and_time(NaiveTime::MIN).and_utc()
}
