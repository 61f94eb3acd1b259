//! Durak simulator - plays all-computer games in memory and reports who
//! ended up the durak.

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use durak_engine::core::{GameConfig, PlayerId, SeatConfig, ShuffleMode};
use durak_engine::decision::RandomDecider;
use durak_engine::game::{Game, Phase};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "durak-sim")]
#[command(about = "Play Durak games between random computer players")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "100")]
    games: u32,

    /// Seats at the table (ignored with --config)
    #[arg(short, long, default_value = "4")]
    players: usize,

    /// Base seed; game i uses seed + i
    #[arg(long, default_value = "0")]
    seed: u64,

    /// JSON game configuration; every seat is played by the computer
    #[arg(long)]
    config: Option<PathBuf>,

    /// Deck shuffle
    #[arg(long, default_value = "uniform")]
    shuffle: Shuffle,

    /// Chance a random attacker adds a matching card to a running attack
    #[arg(long, default_value = "0.5")]
    follow_up: f64,

    /// Step limit per game before it is reported unfinished
    #[arg(long, default_value = "100000")]
    max_steps: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Shuffle {
    Uniform,
    Legacy,
}

impl From<Shuffle> for ShuffleMode {
    fn from(shuffle: Shuffle) -> Self {
        match shuffle {
            Shuffle::Uniform => ShuffleMode::Uniform,
            Shuffle::Legacy => ShuffleMode::Legacy,
        }
    }
}

fn load_config(args: &Args) -> Result<GameConfig, Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            let mut config: GameConfig = serde_json::from_str(&text)?;
            if config.seats.iter().any(|seat| seat.human) {
                warn!("human seats in {} are played by the computer", path.display());
            }
            config.seats = config
                .seats
                .into_iter()
                .map(|seat| SeatConfig::computer(seat.name))
                .collect();
            config
        }
        None => GameConfig::all_computer(args.players),
    };
    let config = config.with_shuffle(args.shuffle.into());
    config.validate()?;
    Ok(config)
}

/// `--verbose` wins; otherwise `RUST_LOG`, falling back to `warn`.
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt().with_env_filter(log_filter(args.verbose)).init();

    let config = load_config(&args)?;
    let seats = config.seat_count();
    info!(games = args.games, seats, seed = args.seed, "starting simulation");

    let mut durak_counts = vec![0u32; seats];
    let mut no_durak = 0u32;
    let mut unfinished = 0u32;
    let start = Instant::now();

    for i in 0..args.games {
        let seed = args.seed.wrapping_add(u64::from(i));
        let mut game = Game::new(config.clone(), seed)?;
        game.deal()?;
        let mut decider =
            RandomDecider::from_rng(game.fork_rng()).with_follow_up_chance(args.follow_up);

        match game.run_until_input(&mut decider, args.max_steps)? {
            Phase::GameOver { durak: Some(PlayerId(seat)) } => durak_counts[usize::from(seat)] += 1,
            Phase::GameOver { durak: None } => no_durak += 1,
            phase => {
                warn!(game = i, seed, ?phase, "game did not finish");
                unfinished += 1;
            }
        }
    }

    let elapsed = start.elapsed();
    println!("Played {} games in {:.2?}", args.games, elapsed);
    for (seat, count) in config.seats.iter().zip(&durak_counts) {
        let share = if args.games == 0 {
            0.0
        } else {
            f64::from(*count) * 100.0 / f64::from(args.games)
        };
        println!("  {:<12} durak {:>6} times ({:5.1}%)", seat.name, count, share);
    }
    println!("  no durak     {:>6}", no_durak);
    if unfinished > 0 {
        println!("  unfinished   {:>6}", unfinished);
    }
    Ok(())
}
