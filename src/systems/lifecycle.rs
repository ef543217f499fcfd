//! Session ownership: score, lives, items, entities and win/loss evaluation.

use smallvec::SmallVec;
use tracing::{debug, info};

use crate::constants::MapTile;
use crate::events::GameEvent;
use crate::map::Map;
use crate::systems::components::{Agent, Item, ItemKind, Pursuer};
use crate::systems::mode::ModeState;
use crate::systems::state::GameState;

/// All mutable simulation state of one playthrough.
///
/// Built once from the [`Map`]; restarts reposition and reset in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub state: GameState,
    pub score: u32,
    pub lives: u8,
    pub starting_lives: u8,
    pub mode: ModeState,
    pub agent: Agent,
    pub pursuers: SmallVec<[Pursuer; 4]>,
    /// Every collectible in row-major order.
    pub items: Vec<Item>,
}

impl Session {
    pub fn new(map: &Map, starting_lives: u8) -> Self {
        let items = map
            .grid
            .items()
            .map(|(cell, tile)| match tile {
                MapTile::PowerPellet => Item::new(ItemKind::PowerPellet, cell),
                _ => Item::new(ItemKind::Pellet, cell),
            })
            .collect();

        let pursuers = map
            .pursuer_spawns
            .iter()
            .enumerate()
            .map(|(id, home)| Pursuer::new(id, *home))
            .collect();

        Self {
            state: GameState::Start,
            score: 0,
            lives: starting_lives,
            starting_lives,
            mode: ModeState::Inactive,
            agent: Agent::new(map.agent_spawn),
            pursuers,
            items,
        }
    }

    /// Restores score, lives, mode, item flags and positions to their initial values.
    ///
    /// The game state is left to the caller.
    pub fn reset(&mut self) {
        self.score = 0;
        self.lives = self.starting_lives;
        self.mode = ModeState::Inactive;
        self.agent.respawn();
        for pursuer in self.pursuers.iter_mut() {
            *pursuer = Pursuer::new(pursuer.id, pursuer.home);
        }
        for item in self.items.iter_mut() {
            item.collected = false;
        }
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub fn remaining_items(&self) -> usize {
        self.items.iter().filter(|item| !item.collected).count()
    }

    /// Moves to `to`, recording the change.
    pub fn set_state(&mut self, to: GameState, events: &mut Vec<GameEvent>) {
        let from = self.state;
        if from == to {
            return;
        }
        self.state = to;
        info!(%from, %to, score = self.score, lives = self.lives, "Game state changed");
        events.push(GameEvent::StateChanged { from, to });
    }

    /// Takes one life. At zero lives the game is over; otherwise every entity returns home.
    ///
    /// Score, items and the mode timer are untouched.
    pub fn lose_life(&mut self, events: &mut Vec<GameEvent>) {
        self.lives = self.lives.saturating_sub(1);
        events.push(GameEvent::LifeLost {
            lives_remaining: self.lives,
        });

        if self.lives == 0 {
            self.set_state(GameState::GameOver, events);
            return;
        }

        debug!(lives = self.lives, "Life lost, respawning");
        self.agent.respawn();
        for pursuer in self.pursuers.iter_mut() {
            pursuer.send_home();
        }
    }

    /// Whether every pellet and every power pellet has been collected.
    pub fn all_items_collected(&self) -> bool {
        self.items.iter().all(|item| item.collected)
    }

    /// Enters [`GameState::Won`] once every item is collected.
    pub fn check_win(&mut self, events: &mut Vec<GameEvent>) -> bool {
        if !self.all_items_collected() {
            return false;
        }
        self.set_state(GameState::Won, events);
        true
    }
}
