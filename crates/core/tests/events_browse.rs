//! Event browsing tests: upcoming ordering, near-me, participation, and
//! event match candidates

mod support;

use std::sync::Arc;

use chrono::Duration;
use etincelle_core::LocationProvider;
use etincelle_domain::{fixtures, Coordinate, EventCategory};
use support::{setup, FixedLocation};

/// City-center fix for the current user's home town.
fn bordeaux() -> Coordinate {
    Coordinate { latitude: 44.8378, longitude: -0.5792 }
}

#[test]
fn upcoming_events_sort_soonest_first() {
    let ctx = setup();
    let location = Arc::new(FixedLocation::denied());
    let browser = ctx.session.event_browser(location);

    let events = browser.upcoming();
    let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Afterwork quai des Chartrons",
            "Expo photo argentique",
            "Run du dimanche matin",
            "Marche nocturne street food",
            "Concert indie au fleuve",
        ]
    );
}

#[test]
fn recently_started_events_stay_visible_within_the_grace_window() {
    let ctx = setup();
    let location = Arc::new(FixedLocation::denied());
    let browser = ctx.session.event_browser(location);

    // The first event starts six hours in; one hour past its start it is
    // still inside the two-hour grace window, three hours past it is gone.
    ctx.clock.advance(Duration::hours(7));
    assert_eq!(browser.upcoming().len(), 5);

    ctx.clock.advance(Duration::hours(2));
    assert_eq!(browser.upcoming().len(), 4);
}

#[test]
fn near_me_uses_the_radius_when_a_fix_exists() {
    let ctx = setup();
    let location = Arc::new(FixedLocation::authorized_at(bordeaux()));
    let browser = ctx.session.event_browser(location);

    let nearby = browser.filtered(None, true);
    // Toulouse and Paris are far outside the radius.
    assert_eq!(nearby.len(), 3);
    assert!(nearby.iter().all(|e| e.city == "Bordeaux"));

    // Nearest first: Halle Boca, then Parc bordelais, then the submarine base.
    let titles: Vec<&str> = nearby.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Afterwork quai des Chartrons",
            "Run du dimanche matin",
            "Expo photo argentique",
        ]
    );

    for event in &nearby {
        let km = browser.distance_km(event).expect("fix available");
        assert!(km < 10.0, "{} unexpectedly far: {km} km", event.title);
    }
}

#[test]
fn near_me_falls_back_to_the_city_without_a_fix() {
    let ctx = setup();
    let location = Arc::new(FixedLocation::denied());
    let browser = ctx.session.event_browser(location);

    let nearby = browser.filtered(None, true);
    assert_eq!(nearby.len(), 3);
    assert!(nearby.iter().all(|e| e.city == "Bordeaux"));
    // Without a fix the upcoming order (soonest first) is preserved.
    assert_eq!(nearby[0].title, "Afterwork quai des Chartrons");
    assert!(browser.distance_km(&nearby[0]).is_none());
    assert!(browser.distance_label(&nearby[0]).is_none());
}

#[test]
fn category_and_near_me_filters_compose() {
    let ctx = setup();
    let location = Arc::new(FixedLocation::authorized_at(bordeaux()));
    let browser = ctx.session.event_browser(location);

    let food = browser.filtered(Some(EventCategory::Food), false);
    assert_eq!(food.len(), 1);
    assert_eq!(food[0].city, "Toulouse");

    // Food near Bordeaux: nothing within the radius.
    assert!(browser.filtered(Some(EventCategory::Food), true).is_empty());

    let sport = browser.filtered(Some(EventCategory::Sport), true);
    assert_eq!(sport.len(), 1);
    assert_eq!(sport[0].title, "Run du dimanche matin");
}

#[test]
fn authorized_browsing_without_a_fix_requests_one() {
    let ctx = setup();
    let location = Arc::new(FixedLocation::authorized_without_fix());
    let browser = ctx.session.event_browser(Arc::clone(&location) as Arc<dyn LocationProvider>);

    browser.upcoming();
    assert_eq!(location.location_requests(), 1);

    // A denied provider is never nudged.
    let denied = Arc::new(FixedLocation::denied());
    let browser = ctx.session.event_browser(Arc::clone(&denied) as Arc<dyn LocationProvider>);
    browser.upcoming();
    assert_eq!(denied.location_requests(), 0);
}

#[test]
fn participation_toggles_and_round_trips() {
    let ctx = setup();
    let location = Arc::new(FixedLocation::denied());
    let browser = ctx.session.event_browser(location);
    let event_id = browser.upcoming()[0].id;

    assert!(!browser.is_participating(event_id));
    assert!(browser.toggle_participation(event_id));
    assert!(browser.is_participating(event_id));
    assert!(!browser.toggle_participation(event_id));
    assert!(!browser.is_participating(event_id));
}

#[test]
fn event_match_candidates_exclude_swiped_attendees() {
    let ctx = setup();
    let location = Arc::new(FixedLocation::denied());
    let browser = ctx.session.event_browser(location);
    let afterwork = browser.upcoming()[0].id;

    // Lea and Camille attend the afterwork; both are viable candidates.
    let candidates = browser.match_candidates(afterwork);
    let names: Vec<&str> = candidates.iter().map(|p| p.first_name.as_str()).collect();
    assert_eq!(names, vec!["Camille", "Lea"]);

    // Rejecting Camille removes her from the event's candidate list.
    let mut engine = ctx.session.swipe_engine();
    assert_eq!(engine.top_profile().map(|p| p.id), Some(fixtures::camille_id()));
    engine.swipe_left().expect("reject");

    let candidates = browser.match_candidates(afterwork);
    let names: Vec<&str> = candidates.iter().map(|p| p.first_name.as_str()).collect();
    assert_eq!(names, vec!["Lea"]);
}

#[test]
fn shared_interests_follow_the_candidates_order() {
    let ctx = setup();
    let location = Arc::new(FixedLocation::denied());
    let browser = ctx.session.event_browser(location);

    let profiles = ctx.session.profiles.read();
    // Sarah: ["Musique", "Randonnee", "Voyages"]; Jules shares two of them.
    let sarah = profiles.profile(fixtures::sarah_id()).expect("seeded").clone();
    drop(profiles);

    assert_eq!(browser.shared_interests(&sarah), vec!["Musique", "Voyages"]);
}
