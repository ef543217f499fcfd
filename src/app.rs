//! A headless host: drives [`Game`] from a fixed-timestep loop with scripted input.

use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::constants::LOOP_TIME;
use crate::events::{GameCommand, GameEvent};
use crate::formatter;
use crate::game::Game;
use crate::map::direction::Direction;
use crate::systems::GameState;

/// Converts elapsed wall time into whole logical ticks.
///
/// Leftover time carries over to the next frame. At most `max_steps` ticks are released per
/// call; any backlog beyond that is dropped so a slow frame cannot snowball.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step: Duration,
    max_steps: u32,
    accumulator: Duration,
}

impl FixedTimestep {
    pub fn new(step: Duration, max_steps: u32) -> Self {
        Self {
            step,
            max_steps,
            accumulator: Duration::ZERO,
        }
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Adds `elapsed` and returns how many ticks are due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.step.is_zero() {
            return 0;
        }

        self.accumulator += elapsed;
        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_steps {
            self.accumulator -= self.step;
            steps += 1;
        }
        if steps == self.max_steps && self.accumulator >= self.step {
            debug!(dropped = ?self.accumulator, "Tick backlog dropped");
            self.accumulator = Duration::ZERO;
        }
        steps
    }

    /// Time left over toward the next tick.
    pub fn remainder(&self) -> Duration {
        self.accumulator
    }
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(LOOP_TIME, 5)
    }
}

/// Pseudo-random directional input for unattended runs.
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: SmallRng,
    /// Ticks between direction changes.
    interval: u64,
}

impl Autopilot {
    pub fn new(seed: u64, interval: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            interval: interval.max(1),
        }
    }

    /// The command to issue before `tick`, if any.
    pub fn command_for(&mut self, tick: u64) -> Option<GameCommand> {
        if tick % self.interval != 0 {
            return None;
        }
        let index = self.rng.random_range(0..Direction::DIRECTIONS.len());
        Some(GameCommand::MoveAgent(Direction::DIRECTIONS[index]))
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub state: GameState,
    pub ticks: u64,
    pub score: u32,
    pub lives: u8,
}

/// Owns the game and the host-side loop state.
pub struct App {
    pub game: Game,
    autopilot: Autopilot,
    timestep: FixedTimestep,
    max_ticks: u64,
    realtime: bool,
}

impl App {
    pub fn new(game: Game, autopilot: Autopilot, max_ticks: u64, realtime: bool) -> Self {
        Self {
            game,
            autopilot,
            timestep: FixedTimestep::default(),
            max_ticks,
            realtime,
        }
    }

    /// Runs until the game ends or the tick limit is reached.
    ///
    /// In realtime mode ticks are paced by the fixed timestep; otherwise they run back to back.
    pub fn run(&mut self) -> RunSummary {
        info!(max_ticks = self.max_ticks, realtime = self.realtime, "Starting run");
        self.game.push_command(GameCommand::Start);

        let mut last_frame = Instant::now();
        while self.game.tick_count() < self.max_ticks && !self.game.state().is_terminal() {
            let due = if self.realtime {
                let now = Instant::now();
                let due = self.timestep.advance(now - last_frame);
                last_frame = now;
                due
            } else {
                1
            };

            for _ in 0..due {
                self.step();
                if self.game.state().is_terminal() {
                    break;
                }
            }

            if self.realtime {
                spin_sleep::sleep(self.timestep.step().saturating_sub(self.timestep.remainder()));
            }
        }

        let session = self.game.session();
        RunSummary {
            state: session.state,
            ticks: self.game.tick_count(),
            score: session.score,
            lives: session.lives,
        }
    }

    fn step(&mut self) {
        if let Some(command) = self.autopilot.command_for(self.game.tick_count()) {
            self.game.push_command(command);
        }

        self.game.tick();
        formatter::set_tick(self.game.tick_count());

        for event in self.game.events() {
            match event {
                GameEvent::LifeLost { lives_remaining } => info!(lives_remaining, "Life lost"),
                GameEvent::PursuerCaught { pursuer } => info!(pursuer, "Pursuer caught"),
                GameEvent::ModeActivated { ticks } => info!(ticks, "Reversed mode"),
                _ => {}
            }
        }
    }
}
