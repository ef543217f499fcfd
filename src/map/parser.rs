//! Map parsing functionality for converting raw board layouts into structured data.
//!
//! | Character | Tile |
//! |-----------|------|
//! | `#` | [`MapTile::Wall`] |
//! | ` ` | [`MapTile::Path`] |
//! | `.` | [`MapTile::Pellet`] |
//! | `o` | [`MapTile::PowerPellet`] |
//! | `P` | [`MapTile::Spawn`] |

use glam::IVec2;

use crate::constants::MapTile;
use crate::error::ParseError;

/// Represents the parsed data from a raw board layout.
#[derive(Debug)]
pub struct ParsedMap {
    /// Row-major tiles, `width * height` long.
    pub tiles: Vec<MapTile>,
    pub width: usize,
    pub height: usize,
    /// The single spawn marker cell.
    pub spawn: IVec2,
}

/// Parser for converting raw board layouts into structured map data.
pub struct MapTileParser;

impl MapTileParser {
    /// Parses a single character into a map tile.
    pub fn parse_character(c: char) -> Result<MapTile, ParseError> {
        match c {
            '#' => Ok(MapTile::Wall),
            ' ' => Ok(MapTile::Path),
            '.' => Ok(MapTile::Pellet),
            'o' => Ok(MapTile::PowerPellet),
            'P' => Ok(MapTile::Spawn),
            _ => Err(ParseError::UnknownCharacter(c)),
        }
    }

    /// Parses a raw board layout into structured map data.
    ///
    /// # Errors
    ///
    /// Returns an error if the board is empty, its rows differ in length, it contains
    /// unknown characters, or it does not contain exactly one spawn marker.
    pub fn parse_board(raw_board: &[&str]) -> Result<ParsedMap, ParseError> {
        let width = raw_board.first().map(|row| row.chars().count()).ok_or(ParseError::EmptyBoard)?;
        if width == 0 {
            return Err(ParseError::EmptyBoard);
        }

        let mut tiles = Vec::with_capacity(width * raw_board.len());
        let mut spawn: Option<IVec2> = None;

        for (y, line) in raw_board.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(ParseError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }

            for (x, character) in line.chars().enumerate() {
                let tile = Self::parse_character(character)?;
                if tile == MapTile::Spawn {
                    let position = IVec2::new(x as i32, y as i32);
                    if let Some(first) = spawn {
                        return Err(ParseError::MultipleSpawns { first, second: position });
                    }
                    spawn = Some(position);
                }
                tiles.push(tile);
            }
        }

        Ok(ParsedMap {
            tiles,
            width,
            height: raw_board.len(),
            spawn: spawn.ok_or(ParseError::MissingSpawn)?,
        })
    }
}
