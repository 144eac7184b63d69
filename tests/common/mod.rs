//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Once;

use knockout_scorer::{GameState, PlayerId};
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Install a test log subscriber once per test binary.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_logging() {
    INIT.call_once(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Build a started game with the given player names.
pub fn started_game(names: &[&str]) -> (GameState, Vec<PlayerId>) {
    init_logging();
    let mut state = GameState::new();
    let ids = names
        .iter()
        .map(|name| state.add_player(name).expect("valid name"))
        .collect();
    state.start_game().expect("enough players");
    (state, ids)
}

/// Enter scores for the listed players and commit the round.
pub fn play_round(state: &mut GameState, scores: &[(PlayerId, &str)]) {
    for &(player, raw) in scores {
        state.set_round_score(player, raw);
    }
    state.end_round().expect("game in progress");
}
