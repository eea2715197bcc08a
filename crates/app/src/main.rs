//! Étincelle demo binary.
//!
//! Drives one scripted session end to end on the seed fixtures: onboarding,
//! the swipe deck, the matches list, incoming likes, and event browsing with
//! a simulated location around Bordeaux. The only state that survives a run
//! is the settings database (onboarding flag and daily like counter).

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use etincelle_core::{
    AccountInput, AppSession, CandidateFilters, Clock, LocationProvider, ProfileUpdate,
    QuotaStatusNotifier, SettingsStore, SwipeOutcome,
};
use etincelle_domain::fixtures::demo_seed;
use etincelle_domain::{interests, Coordinate, Orientation, Sex};
use etincelle_infra::{
    AutoDismiss, LiveQuotaPublisher, SimulatedLocationProvider, SqliteSettingsStore, SystemClock,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn settings_path() -> PathBuf {
    std::env::var_os("ETINCELLE_SETTINGS")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("etincelle-settings.db"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let path = settings_path();
    let settings: Arc<dyn SettingsStore> = Arc::new(
        SqliteSettingsStore::open(&path)
            .with_context(|| format!("opening settings database at {}", path.display()))?,
    );
    let clock = Arc::new(SystemClock);
    let publisher = Arc::new(LiveQuotaPublisher::new());
    let quota_updates = publisher.subscribe();

    let mut session = AppSession::new(
        demo_seed(clock.now()),
        settings,
        Arc::clone(&publisher) as Arc<dyn QuotaStatusNotifier>,
        Arc::clone(&clock) as Arc<dyn Clock>,
    )?;

    if !session.has_created_account() {
        session.create_account(AccountInput {
            first_name: "Jules".into(),
            age_text: "26".into(),
            city: "Bordeaux".into(),
            bio: "Ramen, produits, et playlists trop longues.".into(),
            sex: Sex::Male,
            orientation: Orientation::Heterosexual,
            interests_text: "Cafe, Musique, Voyages".into(),
            photo_symbol: "person.crop.square.fill".into(),
        })?;
        edit_interests(&session);
    }

    run_swipe_deck(&session).await?;
    show_matches(&session);
    browse_events(&session);

    if let Some(snapshot) = quota_updates.borrow().as_ref() {
        println!(
            "\nLikes restants aujourd'hui : {}/{} (reset {})",
            snapshot.remaining, snapshot.daily_limit, snapshot.reset_at
        );
    }

    Ok(())
}

/// Re-pick interests the way the edit screen does: a set selection ordered
/// through the catalog before it lands on the profile.
fn edit_interests(session: &AppSession) {
    let Some(me) = session.current_user() else {
        return;
    };

    let mut selection: std::collections::HashSet<String> =
        me.interests.iter().cloned().collect();
    selection.insert("Randonnee".to_string());

    session.update_profile(ProfileUpdate {
        first_name: me.first_name,
        age: me.age,
        city: me.city,
        bio: me.bio,
        sex: me.sex,
        orientation: me.orientation,
        interests: interests::ordered_selection(&selection),
        photo: me.photo,
        photo_gallery: me.photo_gallery,
        photo_symbol: None,
    });
    info!("profile interests updated");
}

/// Swipe through the whole deck: reject the first candidate, like the rest.
async fn run_swipe_deck(session: &AppSession) -> anyhow::Result<()> {
    let mut engine = session.swipe_engine();
    let banner = AutoDismiss::new(Duration::from_millis(500));

    println!("-- Deck ({} profils) --", engine.deck().len());
    let mut first = true;
    while let Some(candidate) = engine.top_profile().cloned() {
        let outcome =
            if first { engine.swipe_left()? } else { engine.swipe_right()? };
        first = false;

        match outcome {
            SwipeOutcome::Rejected => println!("  ✗ {}", candidate.headline()),
            SwipeOutcome::Liked => println!("  ♥ {}", candidate.headline()),
            SwipeOutcome::Matched { .. } => {
                println!("  ♥ {} — c'est un match !", candidate.headline());
                banner.show(move || info!(candidate = %candidate.first_name, "banner hidden"));
            }
            SwipeOutcome::LimitReached => {
                println!("  limite de likes atteinte, réessayez demain");
                break;
            }
            SwipeOutcome::DeckEmpty => break,
        }
    }

    // Let the last banner timer fire before moving on.
    tokio::time::sleep(Duration::from_millis(600)).await;
    Ok(())
}

fn show_matches(session: &AppSession) {
    let browser = session.match_browser();
    let filters = CandidateFilters::default();

    println!("\n-- Matches --");
    for item in browser.items(&filters) {
        let last = item
            .last_message
            .map(|m| m.text)
            .unwrap_or_else(|| "(pas encore de message)".to_string());
        println!("  {} : {last}", item.other_user.first_name);
    }

    let likers = browser.incoming_likes(&filters);
    if !likers.is_empty() {
        println!("\n-- Elles vous ont liké --");
        for profile in likers {
            println!("  {}", profile.headline());
        }
    }
}

fn browse_events(session: &AppSession) {
    let bordeaux = Coordinate { latitude: 44.8378, longitude: -0.5792 };
    let location = Arc::new(SimulatedLocationProvider::with_scripted_fixes(vec![bordeaux]));
    location.request_authorization();
    location.request_location();

    let browser = session.event_browser(location as Arc<dyn LocationProvider>);

    println!("\n-- Événements près de vous --");
    for event in browser.filtered(None, true) {
        let distance = browser
            .distance_label(&event)
            .map(|label| format!(" ({label})"))
            .unwrap_or_default();
        println!("  {} · {}{distance}", event.title, event.venue);

        for candidate in browser.match_candidates(event.id) {
            println!("    participante : {}", candidate.first_name);
        }
    }

    if let Some(next) = browser.upcoming().first() {
        browser.toggle_participation(next.id);
        info!(event = %next.title, "participation confirmed");
    }
}
