use serde::Serialize;
use strum_macros::{AsRefStr, Display};

/// Top-level mode gating whether a tick simulates anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, AsRefStr, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    /// Initial state; nothing moves until a start command.
    #[default]
    Start,
    Playing,
    /// Frozen; resumes exactly where it left off.
    Paused,
    GameOver,
    Won,
}

/// What a lifecycle command asks of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Switch to the given state, keeping the session.
    To(GameState),
    /// Reset the session to its initial values, then enter `Playing`.
    ResetAndPlay,
}

impl GameState {
    /// Whether a tick in this state runs the simulation.
    pub const fn is_simulating(self) -> bool {
        matches!(self, GameState::Playing)
    }

    /// Whether this state only leaves through a restart.
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameState::GameOver | GameState::Won)
    }

    /// `Start → Playing`. Ignored in every other state.
    pub fn on_start(self) -> Option<Transition> {
        match self {
            GameState::Start => Some(Transition::ResetAndPlay),
            _ => None,
        }
    }

    /// `Playing ⇄ Paused`. Ignored in every other state.
    pub fn on_toggle_pause(self) -> Option<Transition> {
        match self {
            GameState::Playing => Some(Transition::To(GameState::Paused)),
            GameState::Paused => Some(Transition::To(GameState::Playing)),
            _ => None,
        }
    }

    /// Accepted from every state except `Start`.
    pub fn on_restart(self) -> Option<Transition> {
        match self {
            GameState::Start => None,
            GameState::Playing | GameState::Paused | GameState::GameOver | GameState::Won => {
                Some(Transition::ResetAndPlay)
            }
        }
    }
}
