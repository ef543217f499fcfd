use crate::map::Grid;
use crate::systems::components::{Agent, Mover};

/// Outcome of a single forward step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The mover advanced.
    Moved,
    /// The step would have entered a wall; the mover stayed in place.
    Blocked,
    /// The mover has no direction.
    Idle,
}

/// Advances `mover` by `distance` along its current direction if the destination is walkable.
pub fn step_forward(grid: &Grid, mover: &mut Mover, distance: f32) -> Step {
    let Some(direction) = mover.direction else {
        return Step::Idle;
    };

    let candidate = mover.ahead(direction, distance);
    if grid.is_walkable(candidate) {
        mover.position = candidate;
        Step::Moved
    } else {
        Step::Blocked
    }
}

/// Executes one tick of agent movement.
///
/// The queued direction replaces the active one when a step of `speed` along it is walkable.
/// The turn is tested one step ahead rather than at cell centers, so the agent can corner a
/// little early. A blocked forward step keeps both position and direction; the move is retried
/// next tick.
pub fn agent_movement_system(grid: &Grid, agent: &mut Agent, speed: f32) -> Step {
    if let Some(next) = agent.next_direction {
        if agent.mover.direction != Some(next) && grid.is_walkable(agent.mover.ahead(next, speed)) {
            agent.mover.direction = Some(next);
        }
    }

    step_forward(grid, &mut agent.mover, speed)
}

/// Executes one tick of pursuer movement.
///
/// A blocked step zeroes the direction so the pursuer re-decides on its next tick.
pub fn pursuer_movement_system(grid: &Grid, mover: &mut Mover, speed: f32) -> Step {
    let step = step_forward(grid, mover, speed);
    if step == Step::Blocked {
        mover.direction = None;
    }
    step
}
