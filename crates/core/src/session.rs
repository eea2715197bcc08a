//! Per-session container
//!
//! Owns the shared stores and the injected ports, carries the
//! account-created flag, and builds the engine/browser services. One
//! `AppSession` per app launch, seeded from fixtures.

use std::sync::Arc;

use etincelle_domain::constants::{MAX_AGE, MIN_AGE};
use etincelle_domain::fixtures::Seed;
use etincelle_domain::{Orientation, Result, Sex, UserProfile};
use parking_lot::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::browse::MatchBrowser;
use crate::engine::SwipeEngine;
use crate::events::EventBrowser;
use crate::ports::{Clock, LocationProvider, QuotaStatusNotifier, SettingsStore};
use crate::quota::LikeQuotaTracker;
use crate::store::{
    EventStore, MatchStore, MessageStore, ProfileStore, ProfileUpdate, SharedEvents,
    SharedMatches, SharedMessages, SharedProfiles, SharedSwipes, SwipeStore,
};

/// Settings key for the onboarding flag.
const ACCOUNT_CREATED_SETTING: &str = "account.created";

/// Raw onboarding form values; everything is normalized here.
#[derive(Debug, Clone)]
pub struct AccountInput {
    pub first_name: String,
    pub age_text: String,
    pub city: String,
    pub bio: String,
    pub sex: Sex,
    pub orientation: Orientation,
    /// Comma-separated interest tags.
    pub interests_text: String,
    pub photo_symbol: String,
}

/// The per-app-session container owning all stores.
pub struct AppSession {
    current_user_id: Uuid,
    pub profiles: SharedProfiles,
    pub swipes: SharedSwipes,
    pub matches: SharedMatches,
    pub messages: SharedMessages,
    pub events: SharedEvents,
    settings: Arc<dyn SettingsStore>,
    clock: Arc<dyn Clock>,
    quota: Arc<LikeQuotaTracker>,
    has_created_account: bool,
}

impl AppSession {
    /// Build a session from seed fixtures and the injected ports.
    pub fn new(
        seed: Seed,
        settings: Arc<dyn SettingsStore>,
        notifier: Arc<dyn QuotaStatusNotifier>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let has_created_account = settings.get_bool(ACCOUNT_CREATED_SETTING)?;
        let quota =
            Arc::new(LikeQuotaTracker::new(Arc::clone(&settings), notifier, Arc::clone(&clock)));

        info!(
            profiles = seed.profiles.len(),
            events = seed.events.len(),
            has_created_account,
            "session seeded"
        );

        Ok(Self {
            current_user_id: seed.current_user_id,
            profiles: Arc::new(RwLock::new(ProfileStore::new(
                seed.profiles,
                seed.current_user_id,
            ))),
            swipes: Arc::new(RwLock::new(SwipeStore::new(seed.swipes))),
            matches: Arc::new(RwLock::new(MatchStore::new(seed.matches))),
            messages: Arc::new(RwLock::new(MessageStore::new(seed.messages))),
            events: Arc::new(RwLock::new(EventStore::new(seed.events))),
            settings,
            clock,
            quota,
            has_created_account,
        })
    }

    pub fn current_user_id(&self) -> Uuid {
        self.current_user_id
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        self.profiles.read().current_user().cloned()
    }

    pub fn quota(&self) -> Arc<LikeQuotaTracker> {
        Arc::clone(&self.quota)
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }

    /// Build the swipe/match decision engine over this session's stores.
    pub fn swipe_engine(&self) -> SwipeEngine {
        SwipeEngine::new(
            self.current_user_id,
            Arc::clone(&self.profiles),
            Arc::clone(&self.swipes),
            Arc::clone(&self.matches),
            Arc::clone(&self.messages),
            Arc::clone(&self.quota),
            Arc::clone(&self.clock),
        )
    }

    /// Build the match/incoming-likes browser.
    pub fn match_browser(&self) -> MatchBrowser {
        MatchBrowser::new(
            self.current_user_id,
            Arc::clone(&self.profiles),
            Arc::clone(&self.swipes),
            Arc::clone(&self.matches),
            Arc::clone(&self.messages),
        )
    }

    /// Build the event browser with the given geolocation collaborator.
    pub fn event_browser(&self, location: Arc<dyn LocationProvider>) -> EventBrowser {
        EventBrowser::new(
            self.current_user_id,
            Arc::clone(&self.profiles),
            Arc::clone(&self.swipes),
            Arc::clone(&self.matches),
            Arc::clone(&self.events),
            location,
            Arc::clone(&self.clock),
        )
    }

    /// Whether onboarding has completed on this device.
    pub fn has_created_account(&self) -> bool {
        self.has_created_account
    }

    /// Complete onboarding: normalize the form values, update the current
    /// user's profile, and persist the flag.
    ///
    /// Malformed values are normalized to defaults, never rejected: an
    /// unparseable age becomes the minimum, blank fields get placeholder
    /// copy, and interests fall back to a single default tag.
    pub fn create_account(&mut self, input: AccountInput) -> Result<()> {
        let first_name = non_empty_or(input.first_name.trim(), "Toi");
        let city = non_empty_or(input.city.trim(), "Ville inconnue");
        let bio = non_empty_or(input.bio.trim(), "Pas encore de bio.");
        let photo_symbol = non_empty_or(input.photo_symbol.trim(), "person.crop.square.fill");

        let mut interests: Vec<String> = input
            .interests_text
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect();
        if interests.is_empty() {
            interests.push("Cafe".to_string());
        }

        self.profiles.write().update_current_user(ProfileUpdate {
            first_name,
            age: parse_age(&input.age_text),
            city,
            bio,
            sex: input.sex,
            orientation: input.orientation,
            interests,
            photo: None,
            photo_gallery: Vec::new(),
            photo_symbol: Some(photo_symbol),
        });

        self.settings.set_bool(ACCOUNT_CREATED_SETTING, true)?;
        self.has_created_account = true;
        info!("account created");
        Ok(())
    }

    /// Edit the current user's profile. Returns `false` when no current user
    /// exists.
    pub fn update_profile(&self, update: ProfileUpdate) -> bool {
        self.profiles.write().update_current_user(update)
    }
}

/// Parse an age string, defaulting to the minimum and clamping to the
/// allowed range.
pub fn parse_age(text: &str) -> i32 {
    text.trim().parse().unwrap_or(MIN_AGE).clamp(MIN_AGE, MAX_AGE)
}

fn non_empty_or(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}
