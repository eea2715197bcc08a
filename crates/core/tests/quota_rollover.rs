//! Daily like-quota persistence and rollover tests

mod support;

use std::sync::Arc;

use chrono::Duration;
use etincelle_core::{AppSession, Clock, ConsumeOutcome, QuotaStatusNotifier, SettingsStore};
use etincelle_domain::constants::DAILY_LIKE_LIMIT;
use etincelle_domain::fixtures;
use support::{fixed_start, setup};

#[test]
fn limit_is_exhausted_after_six_consumes() {
    let ctx = setup();
    let quota = ctx.session.quota();

    for expected_remaining in (0..DAILY_LIKE_LIMIT).rev() {
        match quota.consume_if_available().expect("consume succeeded") {
            ConsumeOutcome::Consumed(snapshot) => {
                assert_eq!(snapshot.remaining, expected_remaining);
                assert_eq!(snapshot.daily_limit, DAILY_LIKE_LIMIT);
            }
            ConsumeOutcome::Exhausted(snapshot) => {
                panic!("exhausted early at remaining {}", snapshot.remaining)
            }
        }
    }

    let outcome = quota.consume_if_available().expect("consume attempted");
    let ConsumeOutcome::Exhausted(snapshot) = outcome else {
        panic!("expected exhaustion, got {outcome:?}");
    };
    assert_eq!(snapshot.remaining, 0);
}

#[test]
fn counter_resets_on_the_next_day() {
    let ctx = setup();
    let quota = ctx.session.quota();

    for _ in 0..DAILY_LIKE_LIMIT {
        quota.consume_if_available().expect("consume succeeded");
    }
    assert!(matches!(
        quota.consume_if_available().expect("consume attempted"),
        ConsumeOutcome::Exhausted(_)
    ));

    ctx.clock.advance(Duration::days(1));

    let outcome = quota.consume_if_available().expect("consume succeeded");
    let ConsumeOutcome::Consumed(snapshot) = outcome else {
        panic!("expected a fresh counter, got {outcome:?}");
    };
    assert_eq!(snapshot.remaining, DAILY_LIKE_LIMIT - 1);
}

#[test]
fn reset_at_points_to_the_next_utc_midnight() {
    let ctx = setup();
    let snapshot = ctx.session.quota().refresh().expect("refresh succeeded");

    // fixed_start() is 2025-06-01 09:00 UTC.
    let expected = fixed_start() + Duration::hours(15);
    assert_eq!(snapshot.reset_at, expected);
}

#[test]
fn refresh_publishes_without_consuming() {
    let ctx = setup();
    let quota = ctx.session.quota();

    let first = quota.refresh().expect("refresh succeeded");
    let second = quota.refresh().expect("refresh succeeded");

    assert_eq!(first.remaining, DAILY_LIKE_LIMIT);
    assert_eq!(second.remaining, DAILY_LIKE_LIMIT);
    assert_eq!(ctx.notifier.count(), 2);
    assert_eq!(ctx.notifier.last().map(|s| s.remaining), Some(DAILY_LIKE_LIMIT));
}

#[test]
fn used_count_survives_a_session_restart() {
    // Two sessions sharing the same settings store stand in for an app
    // relaunch: the counter is persisted state, not session state.
    let ctx = setup();
    let quota = ctx.session.quota();
    quota.consume_if_available().expect("consume succeeded");
    quota.consume_if_available().expect("consume succeeded");

    let settings = Arc::clone(&ctx.settings);
    let relaunched = AppSession::new(
        fixtures::demo_seed(fixed_start()),
        settings as Arc<dyn SettingsStore>,
        Arc::clone(&ctx.notifier) as Arc<dyn QuotaStatusNotifier>,
        Arc::clone(&ctx.clock) as Arc<dyn Clock>,
    )
    .expect("session rebuilt");

    let snapshot = relaunched.quota().refresh().expect("refresh succeeded");
    assert_eq!(snapshot.remaining, DAILY_LIKE_LIMIT - 2);
}

#[test]
fn stale_stored_day_key_rolls_over_on_first_refresh() {
    let ctx = setup();

    // Simulate state left behind by a previous day.
    ctx.settings.set_string("likes.day_key", "2025-05-31").expect("seeded");
    ctx.settings.set_string("likes.used_count", "6").expect("seeded");

    let snapshot = ctx.session.quota().refresh().expect("refresh succeeded");
    assert_eq!(snapshot.remaining, DAILY_LIKE_LIMIT);
    assert_eq!(
        ctx.settings.get_string("likes.day_key").expect("read"),
        Some("2025-06-01".to_string())
    );
}
