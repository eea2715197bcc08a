//! Wall-clock adapter.

use chrono::{DateTime, Utc};
use etincelle_core::Clock;

/// Production clock reading the system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
