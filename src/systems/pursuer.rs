//! Greedy chase/flee decisions for pursuers.
//!
//! This is a one-step heuristic, not pathfinding. Pursuers pick whichever open direction brings
//! them closest to (or, while reversed, farthest from) the agent by Manhattan distance, and may
//! oscillate in dead ends or around walls.

use std::cmp::Ordering;

use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;
use strum::EnumCount;
use tracing::trace;

use crate::constants::DECISION_PROBE_DISTANCE;
use crate::map::direction::Direction;
use crate::map::Grid;
use crate::systems::components::Pursuer;

fn manhattan(a: Vec2, b: Vec2) -> f32 {
    let delta = (a - b).abs();
    delta.x + delta.y
}

/// Chooses a direction for a pursuer at `position`, or `None` if every direction is blocked.
///
/// Candidates are the directions whose half-step probe is walkable, taken in canonical order.
/// They are ranked by the Manhattan distance from `position + direction` to `target`, ascending
/// when chasing and descending when `reversed`. The sort is stable, so ties go to the candidate
/// listed first.
pub fn choose_direction(grid: &Grid, position: Vec2, target: Vec2, reversed: bool) -> Option<Direction> {
    let mut candidates: SmallVec<[(Direction, f32); Direction::COUNT]> = Direction::DIRECTIONS
        .iter()
        .copied()
        .filter(|direction| grid.is_walkable(position + direction.as_vec2() * DECISION_PROBE_DISTANCE))
        .map(|direction| (direction, manhattan(position + direction.as_vec2(), target)))
        .collect();

    candidates.sort_by(|(_, a), (_, b)| {
        let order: Ordering = a.total_cmp(b);
        if reversed {
            order.reverse()
        } else {
            order
        }
    });

    candidates.first().map(|(direction, _)| *direction)
}

/// Lets `pursuer` re-evaluate its direction if it is due.
///
/// A pursuer without a direction always re-decides. Otherwise it re-decides with probability
/// `chance`. When no direction is open the previous one is kept.
pub fn pursuer_decision_system<R: Rng>(
    grid: &Grid,
    pursuer: &mut Pursuer,
    target: Vec2,
    chance: f64,
    rng: &mut R,
) -> bool {
    let due = pursuer.mover.direction.is_none() || rng.random_bool(chance);
    if !due {
        return false;
    }

    if let Some(direction) = choose_direction(grid, pursuer.mover.position, target, pursuer.reversed) {
        trace!(pursuer = pursuer.id, direction = direction.as_ref(), reversed = pursuer.reversed, "Pursuer re-decided");
        pursuer.mover.direction = Some(direction);
    }
    true
}
