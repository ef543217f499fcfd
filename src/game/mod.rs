//! This module contains the simulation loop and its read-only snapshot.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, trace};

use crate::config::SimulationConfig;
use crate::events::{GameCommand, GameEvent};
use crate::error::GameResult;
use crate::map::Map;
use crate::systems::{
    agent_movement_system, apply_command, item_collision_system, pursuer_collision_system, pursuer_decision_system,
    pursuer_movement_system, CommandQueue, GameState, Session,
};

pub use self::snapshot::{AgentView, ItemView, PursuerView, Snapshot};

pub mod snapshot;

/// The `Game` struct is the main entry point for the simulation.
///
/// It owns the map, the session and the pursuer RNG. The host pushes commands, calls
/// [`Game::tick`] once per frame and reads a [`Snapshot`] afterwards.
pub struct Game {
    map: Map,
    config: SimulationConfig,
    session: Session,
    commands: CommandQueue,
    events: Vec<GameEvent>,
    rng: SmallRng,
    tick: u64,
}

impl Game {
    /// Creates a game whose pursuer decisions are seeded from the operating system.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails validation.
    pub fn new(map: Map, config: SimulationConfig) -> GameResult<Game> {
        Self::with_rng(map, config, SmallRng::from_os_rng())
    }

    /// Creates a game with a fixed seed, making every tick reproducible.
    pub fn with_seed(map: Map, config: SimulationConfig, seed: u64) -> GameResult<Game> {
        Self::with_rng(map, config, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(map: Map, config: SimulationConfig, rng: SmallRng) -> GameResult<Game> {
        config.validate()?;
        let session = Session::new(&map, config.starting_lives);
        debug!(
            items = session.items.len(),
            pursuers = session.pursuers.len(),
            lives = session.lives,
            "Game created"
        );

        Ok(Game {
            map,
            config,
            session,
            commands: CommandQueue::default(),
            events: Vec::new(),
            rng,
            tick: 0,
        })
    }

    /// Queues a command for the next tick.
    pub fn push_command(&mut self, command: GameCommand) {
        self.commands.push(command);
    }

    /// Runs one discrete step and returns the resulting state.
    ///
    /// Pending commands are always applied. The simulation phases only run while playing, in
    /// this order: agent movement, pursuer decision and movement, mode decay, collision,
    /// life and win checks.
    pub fn tick(&mut self) -> GameState {
        self.tick += 1;
        self.events.clear();

        for command in self.commands.drain() {
            apply_command(&mut self.session, command, &mut self.events);
        }

        if !self.session.state.is_simulating() {
            return self.session.state;
        }

        let grid = &self.map.grid;
        let config = &self.config;
        let session = &mut self.session;

        agent_movement_system(grid, &mut session.agent, config.agent_speed);

        let target = session.agent.mover.position;
        for pursuer in session.pursuers.iter_mut() {
            pursuer_decision_system(grid, pursuer, target, config.decision_chance, &mut self.rng);
            let speed = config.pursuer_speed_for(pursuer.reversed);
            pursuer_movement_system(grid, &mut pursuer.mover, speed);
        }

        if session.mode.tick(&mut session.pursuers) {
            self.events.push(GameEvent::ModeExpired);
        }

        item_collision_system(session, config, &mut self.events);
        pursuer_collision_system(session, config, &mut self.events);

        if session.state.is_simulating() {
            session.check_win(&mut self.events);
        }

        trace!(tick = self.tick, score = session.score, events = self.events.len(), "Tick complete");
        session.state
    }

    pub fn state(&self) -> GameState {
        self.session.state
    }

    /// Number of ticks run since creation. Restarts do not reset it.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Direct session access for test harnesses. Presentation code should go through commands.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Events produced by the most recent tick.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Captures the presentation-facing state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.session, self.tick)
    }
}
