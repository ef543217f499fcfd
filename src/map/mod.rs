//! The maze: an immutable grid of tiles plus the spawn points read from it.

use glam::{IVec2, Vec2};
use smallvec::SmallVec;
use tracing::debug;

use crate::constants::MapTile;
use crate::error::{GameResult, MapError};
use crate::map::parser::MapTileParser;

pub mod direction;
pub mod parser;

/// Immutable maze layout with cell-type lookup.
#[derive(Debug, Clone)]
pub struct Grid {
    tiles: Vec<MapTile>,
    width: usize,
    height: usize,
}

impl Grid {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the tile at `cell`, or `None` when it lies outside the board.
    pub fn tile(&self, cell: IVec2) -> Option<MapTile> {
        if cell.x < 0 || cell.y < 0 {
            return None;
        }
        let (x, y) = (cell.x as usize, cell.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.tiles[y * self.width + x])
    }

    /// Converts a continuous position to the cell it addresses.
    ///
    /// Each axis is rounded half away from zero, so `2.5` maps to `3` and `-0.5` to `-1`.
    pub fn cell_of(position: Vec2) -> IVec2 {
        position.round().as_ivec2()
    }

    /// Whether the cell addressing `position` exists and is not a wall.
    pub fn is_walkable(&self, position: Vec2) -> bool {
        self.tile(Self::cell_of(position)).is_some_and(MapTile::is_walkable)
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (IVec2, MapTile)> + '_ {
        self.tiles.iter().enumerate().map(|(index, tile)| {
            let cell = IVec2::new((index % self.width) as i32, (index / self.width) as i32);
            (cell, *tile)
        })
    }

    /// Iterates over the Pellet and PowerPellet cells in row-major order.
    pub fn items(&self) -> impl Iterator<Item = (IVec2, MapTile)> + '_ {
        self.cells().filter(|(_, tile)| matches!(tile, MapTile::Pellet | MapTile::PowerPellet))
    }
}

/// The parsed maze together with validated start positions.
#[derive(Debug, Clone)]
pub struct Map {
    pub grid: Grid,
    /// Cell of the spawn marker.
    pub agent_spawn: IVec2,
    /// Home cell of each pursuer, indexed by pursuer id.
    pub pursuer_spawns: SmallVec<[IVec2; 4]>,
}

impl Map {
    /// Parses `raw_board` and validates `pursuer_spawns` against it.
    ///
    /// # Errors
    ///
    /// Fails on any [`crate::error::ParseError`], when no pursuer spawn is given, or when a
    /// pursuer spawn is outside the board or on a wall.
    pub fn new(raw_board: &[&str], pursuer_spawns: &[IVec2]) -> GameResult<Map> {
        let parsed = MapTileParser::parse_board(raw_board)?;
        let grid = Grid {
            tiles: parsed.tiles,
            width: parsed.width,
            height: parsed.height,
        };

        if pursuer_spawns.is_empty() {
            return Err(MapError::NoPursuers.into());
        }
        for &spawn in pursuer_spawns {
            match grid.tile(spawn) {
                None => return Err(MapError::PursuerSpawnOutOfBounds(spawn).into()),
                Some(MapTile::Wall) => return Err(MapError::PursuerSpawnOnWall(spawn).into()),
                Some(_) => {}
            }
        }

        debug!(
            width = grid.width,
            height = grid.height,
            spawn = %parsed.spawn,
            pursuers = pursuer_spawns.len(),
            "Map loaded"
        );

        Ok(Map {
            grid,
            agent_spawn: parsed.spawn,
            pursuer_spawns: SmallVec::from_slice(pursuer_spawns),
        })
    }
}
