use std::collections::HashMap;

use tracing::debug;

use crate::events::{GameCommand, GameEvent};
use crate::map::direction::Direction;
use crate::systems::lifecycle::Session;
use crate::systems::state::{GameState, Transition};

/// Maps host key names to commands.
#[derive(Debug, Clone)]
pub struct Bindings {
    key_bindings: HashMap<&'static str, GameCommand>,
}

impl Default for Bindings {
    fn default() -> Self {
        let mut key_bindings = HashMap::new();

        // Agent movement
        for key in ["ArrowUp", "w", "W"] {
            key_bindings.insert(key, GameCommand::MoveAgent(Direction::Up));
        }
        for key in ["ArrowDown", "s", "S"] {
            key_bindings.insert(key, GameCommand::MoveAgent(Direction::Down));
        }
        for key in ["ArrowLeft", "a", "A"] {
            key_bindings.insert(key, GameCommand::MoveAgent(Direction::Left));
        }
        for key in ["ArrowRight", "d", "D"] {
            key_bindings.insert(key, GameCommand::MoveAgent(Direction::Right));
        }

        // Game actions
        key_bindings.insert(" ", GameCommand::TogglePause);
        key_bindings.insert("r", GameCommand::Restart);
        key_bindings.insert("R", GameCommand::Restart);
        key_bindings.insert("Enter", GameCommand::Start);

        Self { key_bindings }
    }
}

impl Bindings {
    pub fn command_for(&self, key: &str) -> Option<GameCommand> {
        self.key_bindings.get(key).copied()
    }

    pub fn bind(&mut self, key: &'static str, command: GameCommand) {
        self.key_bindings.insert(key, command);
    }
}

/// FIFO of commands pushed by the host and drained by the tick.
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    pending: Vec<GameCommand>,
}

impl CommandQueue {
    pub fn push(&mut self, command: GameCommand) {
        self.pending.push(command);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Removes and returns every pending command in arrival order.
    pub fn drain(&mut self) -> std::vec::Drain<'_, GameCommand> {
        self.pending.drain(..)
    }
}

/// Applies one command to the session according to the current state.
///
/// Directional commands overwrite the queued direction and are only accepted while playing.
/// Rejected commands are dropped without effect.
pub fn apply_command(session: &mut Session, command: GameCommand, events: &mut Vec<GameEvent>) {
    let transition = match command {
        GameCommand::MoveAgent(direction) => {
            if session.state == GameState::Playing {
                session.agent.next_direction = Some(direction);
                events.push(command.into());
            }
            return;
        }
        GameCommand::TogglePause => session.state.on_toggle_pause(),
        GameCommand::Restart => session.state.on_restart(),
        GameCommand::Start => session.state.on_start(),
    };

    let Some(transition) = transition else {
        debug!(?command, state = %session.state, "Command ignored");
        return;
    };

    events.push(command.into());
    match transition {
        Transition::To(state) => session.set_state(state, events),
        Transition::ResetAndPlay => {
            session.reset();
            session.set_state(GameState::Playing, events);
        }
    }
}
