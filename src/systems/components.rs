use glam::{IVec2, Vec2};
use serde::Serialize;

use crate::map::direction::Direction;

/// Index of a pursuer in the session's pursuer list.
pub type PursuerId = usize;

/// Continuous grid-constrained motion shared by the agent and pursuers.
///
/// `direction` of `None` is the zero direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mover {
    pub position: Vec2,
    pub direction: Option<Direction>,
}

impl Mover {
    pub fn at(cell: IVec2, direction: Option<Direction>) -> Self {
        Self {
            position: cell.as_vec2(),
            direction,
        }
    }

    /// Where this mover would be after travelling `distance` along `direction`.
    pub fn ahead(&self, direction: Direction, distance: f32) -> Vec2 {
        self.position + direction.as_vec2() * distance
    }
}

/// The player-controlled entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    pub mover: Mover,
    /// Queued direction, adopted as soon as the grid allows it.
    pub next_direction: Option<Direction>,
    pub home: IVec2,
}

impl Agent {
    pub fn new(home: IVec2) -> Self {
        Self {
            mover: Mover::at(home, None),
            next_direction: None,
            home,
        }
    }

    /// Returns to the spawn cell with no active or queued direction.
    pub fn respawn(&mut self) {
        self.mover = Mover::at(self.home, None);
        self.next_direction = None;
    }
}

/// A computer-controlled chaser.
#[derive(Debug, Clone, PartialEq)]
pub struct Pursuer {
    pub id: PursuerId,
    pub mover: Mover,
    pub home: IVec2,
    /// True while reversed mode is active and this pursuer has not been caught.
    pub reversed: bool,
}

impl Pursuer {
    /// Direction every pursuer faces at the start of a session.
    pub const INITIAL_DIRECTION: Direction = Direction::Up;

    pub fn new(id: PursuerId, home: IVec2) -> Self {
        Self {
            id,
            mover: Mover::at(home, Some(Self::INITIAL_DIRECTION)),
            home,
            reversed: false,
        }
    }

    /// Moves back to the home cell. Direction and reversal status are untouched.
    pub fn send_home(&mut self) {
        self.mover.position = self.home.as_vec2();
    }
}

/// The kind of a collectible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ItemKind {
    Pellet,
    PowerPellet,
}

/// A collectible sitting on a grid cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub kind: ItemKind,
    pub cell: IVec2,
    pub collected: bool,
}

impl Item {
    pub fn new(kind: ItemKind, cell: IVec2) -> Self {
        Self {
            kind,
            cell,
            collected: false,
        }
    }
}
