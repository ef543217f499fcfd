#![allow(dead_code)]

use glam::{IVec2, Vec2};
use maze_chase::config::SimulationConfig;
use maze_chase::game::Game;
use maze_chase::map::Map;
use maze_chase::systems::GameState;

/// A single corridor: spawn, six pellets, an empty cell, then a power pellet.
pub const CORRIDOR: [&str; 3] = [
    "###########",
    "#P...... o#",
    "###########",
];

pub const CORRIDOR_PURSUERS: [IVec2; 2] = [IVec2::new(3, 1), IVec2::new(6, 1)];

/// An open 5x5 room with a single pellet in the corner.
pub const ROOM: [&str; 7] = [
    "#######",
    "#    .#",
    "#     #",
    "#  P  #",
    "#     #",
    "#     #",
    "#######",
];

pub const ROOM_PURSUERS: [IVec2; 1] = [IVec2::new(1, 5)];

pub fn corridor_map() -> Map {
    Map::new(&CORRIDOR, &CORRIDOR_PURSUERS).unwrap()
}

pub fn room_map() -> Map {
    Map::new(&ROOM, &ROOM_PURSUERS).unwrap()
}

/// Pursuers stand still and never re-decide on their own.
pub fn quiet_config() -> SimulationConfig {
    SimulationConfig {
        pursuer_speed: 0.0,
        decision_chance: 0.0,
        ..Default::default()
    }
}

pub fn test_game(map: Map, config: SimulationConfig) -> Game {
    Game::with_seed(map, config, 0xC0FFEE).unwrap()
}

/// A corridor game already in [`GameState::Playing`].
pub fn playing_corridor(config: SimulationConfig) -> Game {
    let mut game = test_game(corridor_map(), config);
    game.session_mut().state = GameState::Playing;
    game
}

pub fn approx_eq(a: Vec2, b: Vec2) -> bool {
    a.distance(b) < 1e-4
}
