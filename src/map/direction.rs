use glam::{IVec2, Vec2};
use serde::Serialize;
use strum::EnumCount;
use strum_macros::{AsRefStr, EnumCount};

/// The four cardinal directions. Up is toward row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumCount, Serialize)]
#[repr(usize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The four cardinal directions in canonical order.
    /// Decision tie-breaking depends on this order.
    pub const DIRECTIONS: [Direction; Direction::COUNT] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Returns the opposite direction. Constant time.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns the direction as a unit IVec2.
    pub fn as_ivec2(self) -> IVec2 {
        self.into()
    }

    /// Returns the direction as a unit Vec2.
    pub fn as_vec2(self) -> Vec2 {
        self.as_ivec2().as_vec2()
    }

    /// Returns the direction as a usize (0-3). Constant time.
    pub const fn as_usize(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

impl From<Direction> for IVec2 {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => -IVec2::Y,
            Direction::Down => IVec2::Y,
            Direction::Left => -IVec2::X,
            Direction::Right => IVec2::X,
        }
    }
}
