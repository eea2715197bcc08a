//! Domain types and models

pub mod event;
pub mod matching;
pub mod message;
pub mod profile;
pub mod quota;
pub mod swipe;

pub use event::{Coordinate, EventCategory, LocalEvent};
pub use matching::{canonical_pair, Match};
pub use message::Message;
pub use profile::{Orientation, Sex, UserProfile};
pub use quota::QuotaSnapshot;
pub use swipe::{Swipe, SwipeDirection};
