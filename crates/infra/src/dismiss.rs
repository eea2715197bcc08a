//! Auto-dismiss timer for transient banners.
//!
//! The match banner disappears on its own after a delay; showing a newer
//! banner cancels the pending dismissal of the previous one.

use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// One-shot dismissal timer where the newest show wins.
pub struct AutoDismiss {
    delay: Duration,
    current: Mutex<Option<CancellationToken>>,
}

impl AutoDismiss {
    pub fn new(delay: Duration) -> Self {
        Self { delay, current: Mutex::new(None) }
    }

    /// Arm the timer; `on_dismiss` runs after the delay unless a newer
    /// `show` or a `cancel` supersedes this one.
    pub fn show<F>(&self, on_dismiss: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let token = CancellationToken::new();
        if let Some(previous) = self.current.lock().replace(token.clone()) {
            previous.cancel();
        }

        let delay = self.delay;
        tokio::spawn(async move {
            tokio::select! {
                _ = sleep(delay) => {
                    debug!("banner auto-dismissed");
                    on_dismiss();
                }
                _ = token.cancelled() => {}
            }
        });
    }

    /// Cancel the pending dismissal, if any.
    pub fn cancel(&self) {
        if let Some(token) = self.current.lock().take() {
            token.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn dismisses_after_the_delay() {
        let dismiss = AutoDismiss::new(Duration::from_secs(3));
        let fired = Arc::new(AtomicU32::new(0));

        let counter = Arc::clone(&fired);
        dismiss.show(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_secs(4)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn a_newer_show_supersedes_the_pending_one() {
        let dismiss = AutoDismiss::new(Duration::from_secs(3));
        let first = Arc::new(AtomicU32::new(0));
        let second = Arc::new(AtomicU32::new(0));

        let counter = Arc::clone(&first);
        dismiss.show(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_secs(1)).await;
        let counter = Arc::clone(&second);
        dismiss.show(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_the_timer() {
        let dismiss = AutoDismiss::new(Duration::from_secs(3));
        let fired = Arc::new(AtomicU32::new(0));

        let counter = Arc::clone(&fired);
        dismiss.show(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        dismiss.cancel();

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
