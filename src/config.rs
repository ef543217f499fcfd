//! Tunable simulation parameters.

use crate::constants::{self, score};
use crate::error::ConfigError;
use crate::systems::components::ItemKind;

/// Every tunable of the simulation. [`Default`] is the reference configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub agent_speed: f32,
    pub pursuer_speed: f32,
    pub reversed_speed_multiplier: f32,
    /// Per-tick chance in [0, 1] that a pursuer re-evaluates its direction.
    pub decision_chance: f64,
    pub power_duration_ticks: u32,
    pub starting_lives: u8,
    pub item_radius: f32,
    pub contact_radius: f32,
    pub pellet_score: u32,
    pub power_pellet_score: u32,
    pub pursuer_caught_score: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            agent_speed: constants::AGENT_SPEED,
            pursuer_speed: constants::PURSUER_SPEED,
            reversed_speed_multiplier: constants::REVERSED_SPEED_MULTIPLIER,
            decision_chance: constants::DECISION_CHANCE,
            power_duration_ticks: constants::POWER_DURATION_TICKS,
            starting_lives: constants::STARTING_LIVES,
            item_radius: constants::ITEM_RADIUS,
            contact_radius: constants::CONTACT_RADIUS,
            pellet_score: score::PELLET,
            power_pellet_score: score::POWER_PELLET,
            pursuer_caught_score: score::PURSUER_CAUGHT,
        }
    }
}

impl SimulationConfig {
    /// Checks that every value is usable by the simulation.
    ///
    /// # Errors
    ///
    /// Returns the first offending value as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.decision_chance) {
            return Err(ConfigError::InvalidChance(self.decision_chance));
        }

        let magnitudes = [
            ("agent_speed", self.agent_speed),
            ("pursuer_speed", self.pursuer_speed),
            ("reversed_speed_multiplier", self.reversed_speed_multiplier),
            ("item_radius", self.item_radius),
            ("contact_radius", self.contact_radius),
        ];
        for (name, value) in magnitudes {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidMagnitude { name, value });
            }
        }

        if self.power_duration_ticks == 0 {
            return Err(ConfigError::ZeroPowerDuration);
        }
        if self.starting_lives == 0 {
            return Err(ConfigError::ZeroLives);
        }
        Ok(())
    }

    /// Points awarded for collecting an item of `kind`.
    pub fn score_for(&self, kind: ItemKind) -> u32 {
        match kind {
            ItemKind::Pellet => self.pellet_score,
            ItemKind::PowerPellet => self.power_pellet_score,
        }
    }

    /// Pursuer speed for the given reversal status.
    pub fn pursuer_speed_for(&self, reversed: bool) -> f32 {
        if reversed {
            self.pursuer_speed * self.reversed_speed_multiplier
        } else {
            self.pursuer_speed
        }
    }
}
