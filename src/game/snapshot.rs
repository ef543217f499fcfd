use glam::{IVec2, Vec2};
use serde::Serialize;
use smallvec::SmallVec;

use crate::map::direction::Direction;
use crate::systems::{GameState, ItemKind, ModeState, PursuerId, Session};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentView {
    pub position: Vec2,
    /// Facing direction, `None` until a direction is adopted after (re)spawning.
    pub direction: Option<Direction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PursuerView {
    pub id: PursuerId,
    pub position: Vec2,
    pub reversed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemView {
    pub cell: IVec2,
    pub kind: ItemKind,
    pub collected: bool,
}

/// Read-only copy of everything presentation needs after a tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub state: GameState,
    pub score: u32,
    pub lives: u8,
    pub mode: ModeState,
    pub agent: AgentView,
    pub pursuers: SmallVec<[PursuerView; 4]>,
    pub items: Vec<ItemView>,
}

impl Snapshot {
    pub fn capture(session: &Session, tick: u64) -> Self {
        Self {
            tick,
            state: session.state,
            score: session.score,
            lives: session.lives,
            mode: session.mode,
            agent: AgentView {
                position: session.agent.mover.position,
                direction: session.agent.mover.direction,
            },
            pursuers: session
                .pursuers
                .iter()
                .map(|pursuer| PursuerView {
                    id: pursuer.id,
                    position: pursuer.mover.position,
                    reversed: pursuer.reversed,
                })
                .collect(),
            items: session
                .items
                .iter()
                .map(|item| ItemView {
                    cell: item.cell,
                    kind: item.kind,
                    collected: item.collected,
                })
                .collect(),
        }
    }
}
