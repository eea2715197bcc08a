//! In-memory state containers
//!
//! Each store owns a growable collection plus the queries the services need.
//! Stores are synchronous and single-owner; services share them as
//! `Arc<RwLock<...>>` handles. Mutations take explicit timestamps so the
//! stores stay pure and deterministic under test.

pub mod events;
pub mod matches;
pub mod messages;
pub mod profiles;
pub mod swipes;

use std::sync::Arc;

use parking_lot::RwLock;

pub use events::EventStore;
pub use matches::MatchStore;
pub use messages::MessageStore;
pub use profiles::{ProfileStore, ProfileUpdate};
pub use swipes::SwipeStore;

pub type SharedProfiles = Arc<RwLock<ProfileStore>>;
pub type SharedSwipes = Arc<RwLock<SwipeStore>>;
pub type SharedMatches = Arc<RwLock<MatchStore>>;
pub type SharedMessages = Arc<RwLock<MessageStore>>;
pub type SharedEvents = Arc<RwLock<EventStore>>;
