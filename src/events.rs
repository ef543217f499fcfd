use serde::Serialize;

use crate::map::direction::Direction;
use crate::systems::components::{ItemKind, PursuerId};
use crate::systems::state::GameState;

/// A discrete command from the host. Commands are queued and drained at the start of a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum GameCommand {
    MoveAgent(Direction),
    TogglePause,
    Restart,
    Start,
}

/// Something observable that happened during a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    /// A command that was accepted by the current state.
    Command(GameCommand),
    ItemCollected { index: usize, kind: ItemKind },
    /// The agent touched a reversed pursuer.
    PursuerCaught { pursuer: PursuerId },
    /// A non-reversed pursuer touched the agent.
    AgentCaught { pursuer: PursuerId },
    LifeLost { lives_remaining: u8 },
    ModeActivated { ticks: u32 },
    ModeExpired,
    StateChanged { from: GameState, to: GameState },
}

impl From<GameCommand> for GameEvent {
    fn from(command: GameCommand) -> Self {
        GameEvent::Command(command)
    }
}
