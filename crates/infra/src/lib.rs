//! # Étincelle Infra
//!
//! Infrastructure adapters behind the core ports:
//! - SQLite and in-memory settings stores
//! - System clock
//! - Simulated geolocation provider for the demo binary
//! - Live quota status publisher (watch channel)
//! - Auto-dismiss timer for transient banners

pub mod clock;
pub mod dismiss;
pub mod location;
pub mod settings;
pub mod status;

pub use clock::SystemClock;
pub use dismiss::AutoDismiss;
pub use location::SimulatedLocationProvider;
pub use settings::{MemorySettingsStore, SqliteSettingsStore};
pub use status::LiveQuotaPublisher;
