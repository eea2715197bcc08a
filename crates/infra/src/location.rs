//! Simulated geolocation provider.
//!
//! Stands in for a platform location service in the demo binary and in
//! tests: authorization is granted (or refused) on request, and location
//! fixes are delivered from a scripted queue. Change callbacks fire outside
//! the state lock.

use etincelle_core::{LocationAuthorization, LocationChangeCallback, LocationProvider};
use etincelle_domain::Coordinate;
use parking_lot::Mutex;
use tracing::debug;

struct State {
    authorization: LocationAuthorization,
    current: Option<Coordinate>,
    /// Fixes delivered one per `request_location` call, front first.
    scripted: Vec<Coordinate>,
    /// Whether `request_authorization` resolves to authorized or denied.
    grant_on_request: bool,
    on_change: Option<LocationChangeCallback>,
}

/// Scriptable [`LocationProvider`] implementation.
pub struct SimulatedLocationProvider {
    state: Mutex<State>,
}

impl SimulatedLocationProvider {
    /// Provider that grants authorization when asked but has no fixes.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                authorization: LocationAuthorization::NotDetermined,
                current: None,
                scripted: Vec::new(),
                grant_on_request: true,
                on_change: None,
            }),
        }
    }

    /// Provider that grants authorization and serves `fixes` in order, one
    /// per location request.
    pub fn with_scripted_fixes(fixes: Vec<Coordinate>) -> Self {
        let provider = Self::new();
        provider.state.lock().scripted = fixes;
        provider
    }

    /// Provider that refuses the authorization prompt.
    pub fn denying() -> Self {
        let provider = Self::new();
        provider.state.lock().grant_on_request = false;
        provider
    }

    /// Already-authorized provider positioned at `fix`.
    pub fn authorized_at(fix: Coordinate) -> Self {
        let provider = Self::new();
        {
            let mut state = provider.state.lock();
            state.authorization = LocationAuthorization::Authorized;
            state.current = Some(fix);
        }
        provider
    }

    /// Push a fix from outside, as if the device moved.
    pub fn deliver_fix(&self, fix: Coordinate) {
        {
            let mut state = self.state.lock();
            state.current = Some(fix);
        }
        self.notify();
    }

    fn notify(&self) {
        // Take the callback out so it runs without the lock held.
        let callback = self.state.lock().on_change.take();
        if let Some(callback) = callback {
            callback();
            self.state.lock().on_change = Some(callback);
        }
    }
}

impl Default for SimulatedLocationProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationProvider for SimulatedLocationProvider {
    fn authorization(&self) -> LocationAuthorization {
        self.state.lock().authorization
    }

    fn last_known(&self) -> Option<Coordinate> {
        self.state.lock().current
    }

    fn request_authorization(&self) {
        {
            let mut state = self.state.lock();
            if state.authorization != LocationAuthorization::NotDetermined {
                return;
            }
            state.authorization = if state.grant_on_request {
                LocationAuthorization::Authorized
            } else {
                LocationAuthorization::Denied
            };
            debug!(authorization = ?state.authorization, "location authorization resolved");
        }
        self.notify();
    }

    fn request_location(&self) {
        let delivered = {
            let mut state = self.state.lock();
            if state.authorization != LocationAuthorization::Authorized {
                return;
            }
            if state.scripted.is_empty() {
                false
            } else {
                state.current = Some(state.scripted.remove(0));
                true
            }
        };
        if delivered {
            self.notify();
        }
    }

    fn set_on_change(&self, callback: LocationChangeCallback) {
        self.state.lock().on_change = Some(callback);
    }
}
