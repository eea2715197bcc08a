//! # Étincelle Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The five in-memory stores (profiles, swipes, matches, messages, events)
//! - The swipe/match decision engine and the daily like-quota tracker
//! - The candidate filter engine and the browsing services
//! - Port/adapter interfaces (traits) for settings, clock, geolocation, and
//!   the live quota status channel
//!
//! ## Architecture Principles
//! - Only depends on `etincelle-domain`
//! - No database, network, or platform code
//! - All external dependencies via traits
//! - Single logical actor: stores are synchronous in-memory collections
//!   shared by handle

pub mod browse;
pub mod engine;
pub mod events;
pub mod filter;
pub mod ports;
pub mod quota;
pub mod session;
pub mod store;

// Re-export specific items to avoid ambiguity
pub use browse::{MatchBrowser, MatchListItem};
pub use engine::{SwipeEngine, SwipeOutcome};
pub use events::EventBrowser;
pub use filter::CandidateFilters;
pub use ports::{
    Clock, LocationAuthorization, LocationChangeCallback, LocationProvider, QuotaStatusNotifier,
    SettingsStore,
};
pub use quota::{ConsumeOutcome, LikeQuotaTracker};
pub use session::{AccountInput, AppSession};
pub use store::{
    EventStore, MatchStore, MessageStore, ProfileStore, ProfileUpdate, SharedEvents,
    SharedMatches, SharedMessages, SharedProfiles, SharedSwipes, SwipeStore,
};
