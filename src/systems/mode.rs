//! Timer-driven reversed mode.

use serde::Serialize;
use tracing::debug;

use crate::systems::components::Pursuer;

/// Global reversed-mode timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ModeState {
    #[default]
    Inactive,
    /// `remaining_ticks` is always greater than zero.
    Active { remaining_ticks: u32 },
}

impl ModeState {
    pub fn is_active(&self) -> bool {
        matches!(self, ModeState::Active { .. })
    }

    pub fn remaining_ticks(&self) -> u32 {
        match self {
            ModeState::Active { remaining_ticks } => *remaining_ticks,
            ModeState::Inactive => 0,
        }
    }

    /// Starts (or restarts) the countdown and reverses every pursuer.
    ///
    /// A zero duration leaves the state untouched.
    pub fn activate(&mut self, duration: u32, pursuers: &mut [Pursuer]) {
        if duration == 0 {
            return;
        }
        *self = ModeState::Active {
            remaining_ticks: duration,
        };
        for pursuer in pursuers.iter_mut() {
            pursuer.reversed = true;
        }
        debug!(duration, "Reversed mode activated");
    }

    /// Advances the countdown by one tick.
    ///
    /// # Returns
    /// `true` on the tick the mode expires. Expiry clears `reversed` on every pursuer still holding it.
    pub fn tick(&mut self, pursuers: &mut [Pursuer]) -> bool {
        let ModeState::Active { remaining_ticks } = self else {
            return false;
        };

        *remaining_ticks = remaining_ticks.saturating_sub(1);
        if *remaining_ticks > 0 {
            return false;
        }

        *self = ModeState::Inactive;
        for pursuer in pursuers.iter_mut() {
            pursuer.reversed = false;
        }
        debug!("Reversed mode expired");
        true
    }
}
