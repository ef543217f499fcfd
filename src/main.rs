use anyhow::Context;
use clap::Parser;
use thousands::Separable;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use maze_chase::app::{App, Autopilot};
use maze_chase::config::SimulationConfig;
use maze_chase::constants::{PURSUER_SPAWNS, RAW_BOARD};
use maze_chase::formatter::TickFormatter;
use maze_chase::game::Game;
use maze_chase::map::Map;

/// Headless maze-chase runner.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Seed for pursuer decisions and autopilot input. Seeded from the OS when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Stop after this many ticks.
    #[arg(long, default_value_t = 60 * 60 * 5)]
    max_ticks: u64,
    /// Starting lives.
    #[arg(long)]
    lives: Option<u8>,
    /// Per-tick pursuer re-decision chance.
    #[arg(long)]
    decision_chance: Option<f64>,
    /// Ticks between autopilot direction changes.
    #[arg(long, default_value_t = 45)]
    autopilot_interval: u64,
    /// Pace ticks at 60 per second instead of running flat out.
    #[arg(long)]
    realtime: bool,
    /// Print the final snapshot as JSON.
    #[arg(long)]
    snapshot: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().event_format(TickFormatter))
        .with(ErrorLayer::default())
        .init();
}

pub fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let mut config = SimulationConfig::default();
    if let Some(lives) = cli.lives {
        config.starting_lives = lives;
    }
    if let Some(chance) = cli.decision_chance {
        config.decision_chance = chance;
    }

    let map = Map::new(&RAW_BOARD, &PURSUER_SPAWNS).context("Could not load the reference maze")?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(seed, "Creating game");
    let game = Game::with_seed(map, config, seed).context("Could not create game")?;

    let mut app = App::new(game, Autopilot::new(seed, cli.autopilot_interval), cli.max_ticks, cli.realtime);
    let summary = app.run();

    info!(
        state = %summary.state,
        ticks = summary.ticks,
        score = %summary.score.separate_with_commas(),
        lives = summary.lives,
        "Run finished"
    );

    if cli.snapshot {
        let json = serde_json::to_string_pretty(&app.game.snapshot()).context("Could not serialize snapshot")?;
        println!("{json}");
    }

    Ok(())
}
