//! Port interfaces for external collaborators
//!
//! These traits define the boundaries between core business logic and
//! infrastructure implementations. The core is a single-threaded in-memory
//! engine, so all ports are synchronous.

use chrono::{DateTime, Utc};
use etincelle_domain::{Coordinate, QuotaSnapshot, Result};

/// Wall-clock abstraction so quota day keys and timestamps are testable.
pub trait Clock: Send + Sync {
    /// Current wall clock time.
    fn now(&self) -> DateTime<Utc>;
}

/// Key-value settings storage (the only persistence in the system).
///
/// Adapters implement the string accessors; the typed helpers are derived so
/// every backend stays a plain string table. Missing keys read as defaults,
/// never as errors.
pub trait SettingsStore: Send + Sync {
    /// Get a string value, or `None` if the key has never been written.
    fn get_string(&self, key: &str) -> Result<Option<String>>;

    /// Set a string value (upsert).
    fn set_string(&self, key: &str, value: &str) -> Result<()>;

    /// Get a boolean flag; missing or unparseable values read as `false`.
    fn get_bool(&self, key: &str) -> Result<bool> {
        Ok(self.get_string(key)?.as_deref() == Some("true"))
    }

    /// Set a boolean flag.
    fn set_bool(&self, key: &str, value: bool) -> Result<()> {
        self.set_string(key, if value { "true" } else { "false" })
    }

    /// Get a counter; missing or unparseable values read as `0`.
    fn get_u32(&self, key: &str) -> Result<u32> {
        Ok(self.get_string(key)?.and_then(|v| v.parse().ok()).unwrap_or(0))
    }

    /// Set a counter.
    fn set_u32(&self, key: &str, value: u32) -> Result<()> {
        self.set_string(key, &value.to_string())
    }
}

/// Push-only channel receiving the current like-quota snapshot.
///
/// No acknowledgment; the quota tracker pushes on every refresh and consume.
pub trait QuotaStatusNotifier: Send + Sync {
    fn publish(&self, snapshot: QuotaSnapshot);
}

/// Geolocation authorization state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationAuthorization {
    NotDetermined,
    Authorized,
    /// Denied or restricted; authorization can no longer be requested.
    Denied,
}

/// Callback fired when authorization or the known coordinate changes.
pub type LocationChangeCallback = Box<dyn Fn() + Send + Sync>;

/// Geolocation collaborator, treated as a black box returning an optional
/// coordinate and an authorization state.
pub trait LocationProvider: Send + Sync {
    /// Current authorization state.
    fn authorization(&self) -> LocationAuthorization;

    /// Last known coordinate, if any fix was delivered.
    fn last_known(&self) -> Option<Coordinate>;

    /// Ask the user for authorization. No-op unless the state is
    /// not-determined.
    fn request_authorization(&self);

    /// Request a location fix. A newer request supersedes a pending one.
    fn request_location(&self);

    /// Register the change notification callback (replaces any previous one).
    fn set_on_change(&self, callback: LocationChangeCallback);

    /// Convenience: whether location reads are currently allowed.
    fn is_authorized(&self) -> bool {
        self.authorization() == LocationAuthorization::Authorized
    }

    /// Convenience: whether an authorization prompt is still possible.
    fn can_request_authorization(&self) -> bool {
        self.authorization() == LocationAuthorization::NotDetermined
    }
}
