//! Live quota status publisher.
//!
//! Fans the quota tracker's snapshots out over a watch channel, so any
//! surface (status bar, widget, demo output) can observe the latest state
//! without polling the tracker. Also logs each update.

use etincelle_core::QuotaStatusNotifier;
use etincelle_domain::QuotaSnapshot;
use tokio::sync::watch;
use tracing::info;

/// Watch-channel backed [`QuotaStatusNotifier`].
pub struct LiveQuotaPublisher {
    tx: watch::Sender<Option<QuotaSnapshot>>,
}

impl LiveQuotaPublisher {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }

    /// Subscribe to snapshot updates. The receiver starts at the latest
    /// published value (or `None` before the first publish).
    pub fn subscribe(&self) -> watch::Receiver<Option<QuotaSnapshot>> {
        self.tx.subscribe()
    }
}

impl Default for LiveQuotaPublisher {
    fn default() -> Self {
        Self::new()
    }
}

impl QuotaStatusNotifier for LiveQuotaPublisher {
    fn publish(&self, snapshot: QuotaSnapshot) {
        info!(
            remaining = snapshot.remaining,
            daily_limit = snapshot.daily_limit,
            reset_at = %snapshot.reset_at,
            "likes_quota_updated"
        );
        // send_replace never fails, even with no subscribers.
        self.tx.send_replace(Some(snapshot));
    }
}
