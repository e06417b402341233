//! CLI Seven and a Half example.
//!
//! Run with `RUST_LOG=info` (or `debug`) to follow the deal card by card.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use clap::{Parser, ValueEnum};
use seven_half::{
    Game, GameOptions, GameReport, MAX_PLAYERS, MIN_PLAYERS, PlayerStatus, Realization, Standings,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Locked shared state and a condition variable.
    Shared,
    /// One channel pair per player, nothing shared.
    Channel,
}

impl From<Mode> for Realization {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Shared => Self::SharedState,
            Mode::Channel => Self::MessagePassing,
        }
    }
}

#[derive(Debug, Parser)]
#[command(about = "Play a game of Seven and a Half between threaded players")]
struct Args {
    /// Number of players; prompted for when omitted.
    #[arg(short, long)]
    players: Option<u8>,
    /// Random seed; defaults to the current time.
    #[arg(short, long)]
    seed: Option<u64>,
    /// How the dealer talks to the players.
    #[arg(short, long, value_enum, default_value_t = Mode::Shared)]
    mode: Mode,
    /// Pause after each card, in milliseconds.
    #[arg(long, default_value_t = 100)]
    delay_ms: u64,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    println!("=== Seven and a Half ===");

    let players = match args.players {
        Some(players) => players,
        None => match prompt_players() {
            Some(players) => players,
            None => return ExitCode::SUCCESS,
        },
    };

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let options = GameOptions::default()
        .with_players(players)
        .with_seed(seed)
        .with_turn_delay(Duration::from_millis(args.delay_ms));

    let game = match Game::new(options) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("Invalid game: {err}");
            return ExitCode::FAILURE;
        }
    };

    match game.play(args.mode.into()) {
        Ok(report) => {
            print_report(&report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Game aborted: {err}");
            ExitCode::FAILURE
        }
    }
}

fn prompt_players() -> Option<u8> {
    loop {
        print!("\nEnter number of players ({MIN_PLAYERS}-{MAX_PLAYERS}): ");
        let _ = io::stdout().flush();

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) | Err(_) => return None,
            Ok(_) => {}
        }

        match input.trim().parse::<u8>() {
            Ok(count) if (MIN_PLAYERS..=MAX_PLAYERS).contains(&count) => return Some(count),
            _ => println!("Invalid number."),
        }
    }
}

fn print_report(report: &GameReport) {
    println!("\n=== Results ===");
    println!("Player | Score  | Status");
    println!("-----------------------------");
    for player in &report.players {
        let status = match player.status {
            PlayerStatus::Busted => "Busted",
            PlayerStatus::Standing => "Standing",
            PlayerStatus::Active => "Active",
        };
        println!(
            "{:>6} | {:>6} | {status}",
            player.player_id,
            player.score.to_string()
        );
    }

    match &report.standings {
        Standings::Winner { player_id, score } => {
            println!("\nPlayer {player_id} wins with {score} points!");
        }
        Standings::Tie { player_ids, score } => {
            let ids: Vec<String> = player_ids.iter().map(ToString::to_string).collect();
            println!("\nTie at {score} points between players {}.", ids.join(", "));
        }
        Standings::NoWinner => println!("\nNo winner."),
    }
}
