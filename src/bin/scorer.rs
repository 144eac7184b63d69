//! Interactive terminal score keeper.
//!
//! Reads one command per line from stdin and redraws the current screen
//! after each one. All game logic lives in the library; this file only
//! turns text into events.

use std::io::{self, BufRead, Write};

use clap::Parser;
use knockout_scorer::view::render;
use knockout_scorer::{
    Event, GameState, PlayerId, RoundOutcome, ScoringConfig, Transition, MAX_PLAYERS, MAX_SCORE,
    MIN_PLAYERS,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scorer")]
#[command(about = "Keep score for an elimination card game")]
struct Args {
    /// Maximum number of players
    #[arg(long, default_value_t = MAX_PLAYERS)]
    max_players: usize,

    /// Minimum number of players to start
    #[arg(long, default_value_t = MIN_PLAYERS)]
    min_players: usize,

    /// A total above this is eliminated
    #[arg(long, default_value_t = MAX_SCORE, allow_negative_numbers = true)]
    max_score: i64,

    /// Print the full state as JSON after every command
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

const HELP: &str = "\
Commands:
  add <name>          add a player (setup only)
  start               start the game
  score <id> <value>  enter a round score for a player
  end                 end the round
  restart             start over
  show                redraw the screen
  help                show this help
  quit                exit";

#[derive(Debug, PartialEq)]
enum Command {
    Apply(Event),
    Show,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(w, r)| (w, r.trim()));

    match word.to_ascii_lowercase().as_str() {
        "add" => Ok(Command::Apply(Event::add_player(rest))),
        "start" => Ok(Command::Apply(Event::StartGame)),
        "score" => {
            let (id, value) = rest
                .split_once(char::is_whitespace)
                .map_or((rest, ""), |(i, v)| (i, v.trim()));
            let player: PlayerId = id
                .parse()
                .map_err(|_| format!("not a player id: {id:?}"))?;
            Ok(Command::Apply(Event::set_round_score(player, value)))
        }
        "end" => Ok(Command::Apply(Event::EndRound)),
        "restart" | "again" => Ok(Command::Apply(Event::Restart)),
        "show" | "" => Ok(Command::Show),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command: {other} (try `help`)")),
    }
}

/// One-line recap of a committed round, e.g. `Round 1: Ada +12, Bob +35 (out)`.
fn round_summary(state: &GameState, outcome: &RoundOutcome) -> String {
    let record = &outcome.record;
    let scores: Vec<String> = state
        .players()
        .iter()
        .filter_map(|p| record.points_for(p.id).map(|points| (p, points)))
        .map(|(p, points)| {
            let out = if record.eliminated(p.id) { " (out)" } else { "" };
            format!("{} {points:+}{out}", p.name)
        })
        .collect();

    let mut summary = format!("Round {}: {}", record.round, scores.join(", "));
    if outcome.is_final() {
        summary.push_str(". Game over");
    }
    summary
}

fn print_state(out: &mut impl Write, state: &GameState, json: bool) -> io::Result<()> {
    writeln!(out)?;
    write!(out, "{}", render(state))?;
    if json {
        let encoded = serde_json::to_string(state).map_err(io::Error::other)?;
        writeln!(out, "{encoded}")?;
    }
    out.flush()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if args.verbose { "debug" } else { "warn" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = ScoringConfig::default()
        .with_max_players(args.max_players)
        .with_min_players(args.min_players)
        .with_max_score(args.max_score);
    let mut state = GameState::with_config(config)?;
    info!(config = ?state.config(), "scorer ready");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{HELP}")?;
    print_state(&mut out, &state, args.json)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "{message}")?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Show => print_state(&mut out, &state, args.json)?,
            Command::Apply(event) => match state.apply(event) {
                Ok(Transition::ScoreEntered { player, stored: false }) => {
                    writeln!(out, "{player} is not an active player")?;
                }
                Ok(Transition::RoundEnded(outcome)) => {
                    writeln!(out, "{}", round_summary(&state, &outcome))?;
                    print_state(&mut out, &state, args.json)?;
                }
                Ok(transition) => {
                    debug!(?transition, "applied");
                    print_state(&mut out, &state, args.json)?;
                }
                Err(err) => {
                    let notice = err.notice();
                    writeln!(out, "{}: {}", notice.title, notice.message)?;
                }
            },
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_keeps_full_name() {
        assert_eq!(
            parse_command("add  Mary Ann "),
            Ok(Command::Apply(Event::add_player("Mary Ann")))
        );
    }

    #[test]
    fn test_parse_score() {
        assert_eq!(
            parse_command("score 2 15"),
            Ok(Command::Apply(Event::set_round_score(PlayerId::new(2), "15")))
        );
        assert_eq!(
            parse_command("score #3"),
            Ok(Command::Apply(Event::set_round_score(PlayerId::new(3), "")))
        );
        assert!(parse_command("score x 15").is_err());
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(parse_command("START"), Ok(Command::Apply(Event::StartGame)));
        assert_eq!(parse_command("end"), Ok(Command::Apply(Event::EndRound)));
        assert_eq!(parse_command("again"), Ok(Command::Apply(Event::Restart)));
        assert_eq!(parse_command(""), Ok(Command::Show));
        assert_eq!(parse_command("?"), Ok(Command::Help));
        assert_eq!(parse_command("exit"), Ok(Command::Quit));
        assert!(parse_command("dance").is_err());
    }

    #[test]
    fn test_round_summary() {
        let mut state = GameState::new();
        let ada = state.add_player("Ada").unwrap();
        let bob = state.add_player("Bob").unwrap();
        state.add_player("Cy").unwrap();
        state.start_game().unwrap();

        state.set_round_score(ada, "12");
        state.set_round_score(bob, "35");
        let outcome = state.end_round().unwrap();
        assert_eq!(
            round_summary(&state, &outcome),
            "Round 1: Ada +12, Bob +35 (out), Cy +0"
        );

        state.set_round_score(ada, "-4");
        let outcome = state.end_round().unwrap();
        assert_eq!(round_summary(&state, &outcome), "Round 2: Ada -4, Cy +0");
    }

    #[test]
    fn test_round_summary_final() {
        let mut state = GameState::new();
        let ada = state.add_player("Ada").unwrap();
        state.add_player("Bob").unwrap();
        state.start_game().unwrap();

        state.set_round_score(ada, "31");
        let outcome = state.end_round().unwrap();
        assert_eq!(
            round_summary(&state, &outcome),
            "Round 1: Ada +31 (out), Bob +0. Game over"
        );
    }
}
