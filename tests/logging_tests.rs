//! What the state machine logs, and what it keeps quiet about.
//!
//! Each test installs its own capturing subscriber for the duration of a
//! closure, so these do not use the shared test logger.

use std::sync::{Arc, Mutex};

use knockout_scorer::{Event, GameError, GameState, PlayerId};
use tracing::field::{Field, Visit};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Records the level and message of every event it sees.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<(Level, String)>>>);

struct MessageVisitor<'a>(&'a mut String);

impl Visit for MessageVisitor<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            *self.0 = format!("{value:?}");
        }
    }
}

impl<S: Subscriber> Layer<S> for Captured {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut message = String::new();
        event.record(&mut MessageVisitor(&mut message));
        self.0
            .lock()
            .unwrap()
            .push((*event.metadata().level(), message));
    }
}

/// Run `f` with a capturing subscriber and return what it logged.
fn capture(f: impl FnOnce()) -> Vec<(Level, String)> {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::registry().with(captured.clone());
    tracing::subscriber::with_default(subscriber, f);

    let logs = captured.0.lock().unwrap().clone();
    logs
}

fn messages(logs: &[(Level, String)]) -> Vec<&str> {
    logs.iter().map(|(_, m)| m.as_str()).collect()
}

/// Validation failures are returned, never logged.
#[test]
fn test_rejections_are_silent() {
    let mut state = GameState::new();
    state.add_player("A").unwrap();

    let logs = capture(|| {
        assert_eq!(state.add_player("  "), Err(GameError::EmptyName));
        assert!(state.start_game().is_err());
        assert!(state.end_round().is_err());
        assert!(!state.set_round_score(PlayerId::new(1), "5"));
        assert!(state.apply(Event::add_player("\u{FEFF}")).is_err());
        assert!(state.apply(Event::EndRound).is_err());
    });

    assert!(logs.is_empty(), "unexpected logs: {logs:?}");
}

/// A full roster and an ignored score entry mid-game are just as quiet.
#[test]
fn test_rejections_in_game_are_silent() {
    let mut state = GameState::new();
    for name in ["A", "B", "C", "D", "E"] {
        state.add_player(name).unwrap();
    }

    let logs = capture(|| {
        assert_eq!(state.add_player("F"), Err(GameError::RosterFull { max: 5 }));
    });
    assert!(logs.is_empty(), "unexpected logs: {logs:?}");

    state.start_game().unwrap();
    let logs = capture(|| {
        assert!(!state.set_round_score(PlayerId::new(42), "3"));
        assert!(state.add_player("F").is_err());
        assert!(state.start_game().is_err());
    });
    assert!(logs.is_empty(), "unexpected logs: {logs:?}");
}

/// Phase changes and eliminations are logged at info.
#[test]
fn test_game_progress_is_logged() {
    let mut state = GameState::new();
    let a = state.add_player("A").unwrap();
    state.add_player("B").unwrap();

    let logs = capture(|| {
        state.start_game().unwrap();
        state.set_round_score(a, "31");
        state.end_round().unwrap();
    });

    let info: Vec<_> = logs
        .iter()
        .filter(|(level, _)| *level == Level::INFO)
        .map(|(_, m)| m.as_str())
        .collect();
    assert_eq!(info, ["game started", "player eliminated", "game finished"]);
}

/// Accepted events get a debug trace.
#[test]
fn test_applied_events_are_traced() {
    let mut state = GameState::new();

    let logs = capture(|| {
        state.apply(Event::add_player("A")).unwrap();
    });

    let messages = messages(&logs);
    assert!(messages.contains(&"player added"));
    assert!(messages.contains(&"event applied"));
}
