//! This module contains all the constants used in the simulation.

use std::time::Duration;

use glam::IVec2;

/// The host's target tick period (60 ticks per second).
pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// Agent movement per tick, in cells.
pub const AGENT_SPEED: f32 = 0.05;
/// Pursuer movement per tick, in cells.
pub const PURSUER_SPEED: f32 = 0.03;
/// Pursuer speed factor while reversed.
pub const REVERSED_SPEED_MULTIPLIER: f32 = 0.7;

/// Per-tick chance that a pursuer re-evaluates its direction.
pub const DECISION_CHANCE: f64 = 0.02;
/// How far ahead a candidate direction is probed for walkability.
pub const DECISION_PROBE_DISTANCE: f32 = 0.5;

/// Reversed mode duration granted by a power pellet, in ticks.
pub const POWER_DURATION_TICKS: u32 = 300;

pub const STARTING_LIVES: u8 = 3;

/// Agent-item pickup distance (strict).
pub const ITEM_RADIUS: f32 = 0.4;
/// Agent-pursuer contact distance (strict).
pub const CONTACT_RADIUS: f32 = 0.6;

pub mod score {
    pub const PELLET: u32 = 10;
    pub const POWER_PELLET: u32 = 50;
    pub const PURSUER_CAUGHT: u32 = 200;
}

/// An enum representing the different types of tiles on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapTile {
    /// A wall tile.
    Wall,
    /// An empty, walkable tile.
    Path,
    /// A regular pellet.
    Pellet,
    /// A power pellet.
    PowerPellet,
    /// The agent's starting position (walkable, carries no item).
    Spawn,
}

impl MapTile {
    pub const fn is_walkable(self) -> bool {
        !matches!(self, MapTile::Wall)
    }
}

/// The reference maze, one string per row. See [`crate::map::parser`] for the character codes.
pub const RAW_BOARD: [&str; 21] = [
    "#####################",
    "#.........#.........#",
    "#o##.####.#.####.##o#",
    "#...................#",
    "#.##.#.#######.#.##.#",
    "#....#....#....#....#",
    "####.#### # ####.####",
    "####.#         #.####",
    "####.# ##   ## #.####",
    "    .  #     #  .    ",
    "####.# ####### #.####",
    "####.#         #.####",
    "####.# ####### #.####",
    "#.........#.........#",
    "#.##.####.#.####.##.#",
    "#o.#......P......#.o#",
    "##.#.#.#######.#.#.##",
    "#....#....#....#....#",
    "#.#######.#.#######.#",
    "#...................#",
    "#####################",
];

/// Pursuer home cells for the reference maze, as (column, row).
pub const PURSUER_SPAWNS: [IVec2; 4] = [IVec2::new(9, 8), IVec2::new(10, 8), IVec2::new(11, 8), IVec2::new(10, 9)];
