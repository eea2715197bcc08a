//! Mock port implementations for integration tests
//!
//! In-memory settings, a manually driven clock, and a recording quota
//! notifier, enabling deterministic tests without infrastructure.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use etincelle_core::{
    AppSession, Clock, LocationAuthorization, LocationChangeCallback, LocationProvider,
    QuotaStatusNotifier, SettingsStore,
};
use etincelle_domain::fixtures::{self, Seed};
use etincelle_domain::{Coordinate, Orientation, QuotaSnapshot, Result, Sex, UserProfile};
use parking_lot::Mutex;
use uuid::Uuid;

/// In-memory `SettingsStore`, a plain string map.
#[derive(Default)]
pub struct MemorySettings {
    values: Mutex<HashMap<String, String>>,
}

impl SettingsStore for MemorySettings {
    fn get_string(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set_string(&self, key: &str, value: &str) -> Result<()> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Manually driven clock for day-rollover tests.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self { now: Mutex::new(start) }
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock() += by;
    }

    pub fn set(&self, to: DateTime<Utc>) {
        *self.now.lock() = to;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}

/// Records every published quota snapshot.
#[derive(Default)]
pub struct RecordingNotifier {
    snapshots: Mutex<Vec<QuotaSnapshot>>,
}

impl RecordingNotifier {
    pub fn last(&self) -> Option<QuotaSnapshot> {
        self.snapshots.lock().last().copied()
    }

    pub fn count(&self) -> usize {
        self.snapshots.lock().len()
    }
}

impl QuotaStatusNotifier for RecordingNotifier {
    fn publish(&self, snapshot: QuotaSnapshot) {
        self.snapshots.lock().push(snapshot);
    }
}

/// Location stub with a fixed authorization state and optional fix.
pub struct FixedLocation {
    authorization: LocationAuthorization,
    fix: Option<Coordinate>,
    requests: Mutex<u32>,
}

impl FixedLocation {
    pub fn authorized_at(fix: Coordinate) -> Self {
        Self {
            authorization: LocationAuthorization::Authorized,
            fix: Some(fix),
            requests: Mutex::new(0),
        }
    }

    pub fn authorized_without_fix() -> Self {
        Self {
            authorization: LocationAuthorization::Authorized,
            fix: None,
            requests: Mutex::new(0),
        }
    }

    pub fn denied() -> Self {
        Self { authorization: LocationAuthorization::Denied, fix: None, requests: Mutex::new(0) }
    }

    pub fn location_requests(&self) -> u32 {
        *self.requests.lock()
    }
}

impl LocationProvider for FixedLocation {
    fn authorization(&self) -> LocationAuthorization {
        self.authorization
    }

    fn last_known(&self) -> Option<Coordinate> {
        self.fix
    }

    fn request_authorization(&self) {}

    fn request_location(&self) {
        *self.requests.lock() += 1;
    }

    fn set_on_change(&self, _callback: LocationChangeCallback) {}
}

/// A fixed, boring Sunday morning.
pub fn fixed_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).single().expect("valid fixed start")
}

/// Everything an integration test needs.
pub struct TestContext {
    pub session: AppSession,
    pub settings: Arc<MemorySettings>,
    pub clock: Arc<ManualClock>,
    pub notifier: Arc<RecordingNotifier>,
}

/// Session over the demo seed with mocked ports.
pub fn setup() -> TestContext {
    setup_with_seed(fixtures::demo_seed(fixed_start()))
}

/// Session over an explicit seed with mocked ports.
pub fn setup_with_seed(seed: Seed) -> TestContext {
    let settings = Arc::new(MemorySettings::default());
    let clock = Arc::new(ManualClock::new(fixed_start()));
    let notifier = Arc::new(RecordingNotifier::default());

    let session = AppSession::new(
        seed,
        Arc::clone(&settings) as Arc<dyn SettingsStore>,
        Arc::clone(&notifier) as Arc<dyn QuotaStatusNotifier>,
        Arc::clone(&clock) as Arc<dyn Clock>,
    )
    .expect("session built");

    TestContext { session, settings, clock, notifier }
}

/// Bare profile builder for scenario seeds.
pub fn profile(
    id: u128,
    name: &str,
    sex: Sex,
    orientation: Orientation,
    liked_user_ids: &[Uuid],
) -> UserProfile {
    UserProfile {
        id: Uuid::from_u128(id),
        first_name: name.to_string(),
        age: 26,
        city: "Bordeaux".to_string(),
        bio: String::new(),
        sex,
        orientation,
        interests: vec!["Cafe".to_string()],
        photo_symbol: "person".to_string(),
        photo: None,
        photo_gallery: Vec::new(),
        liked_user_ids: liked_user_ids.iter().copied().collect::<HashSet<_>>(),
    }
}

/// The spec's reference scenario: current user A (heterosexual male) and one
/// candidate B (heterosexual female) who already liked A.
pub fn two_person_seed() -> Seed {
    let a = Uuid::from_u128(0xA);
    Seed {
        current_user_id: a,
        profiles: vec![
            profile(0xA, "Jules", Sex::Male, Orientation::Heterosexual, &[]),
            profile(0xB, "Lea", Sex::Female, Orientation::Heterosexual, &[a]),
        ],
        swipes: Vec::new(),
        matches: Vec::new(),
        messages: Vec::new(),
        events: Vec::new(),
    }
}
