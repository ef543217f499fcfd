use tracing::debug;

use crate::config::SimulationConfig;
use crate::events::GameEvent;
use crate::systems::components::ItemKind;
use crate::systems::lifecycle::Session;

/// Collects every uncollected item within pickup range of the agent.
///
/// Power pellets additionally start reversed mode. The `collected` flag makes pickup idempotent.
pub fn item_collision_system(session: &mut Session, config: &SimulationConfig, events: &mut Vec<GameEvent>) {
    let agent = session.agent.mover.position;
    let mut points = 0;
    let mut power_pellets = 0;

    for (index, item) in session.items.iter_mut().enumerate() {
        if item.collected || agent.distance(item.cell.as_vec2()) >= config.item_radius {
            continue;
        }

        item.collected = true;
        points += config.score_for(item.kind);
        if item.kind == ItemKind::PowerPellet {
            power_pellets += 1;
        }
        debug!(index, kind = ?item.kind, cell = %item.cell, "Item collected");
        events.push(GameEvent::ItemCollected { index, kind: item.kind });
    }

    session.add_score(points);
    if power_pellets > 0 {
        session.mode.activate(config.power_duration_ticks, &mut session.pursuers);
        events.push(GameEvent::ModeActivated {
            ticks: config.power_duration_ticks,
        });
    }
}

/// Resolves agent contact with each pursuer in list order.
///
/// A reversed pursuer is caught: it scores, returns home and stops being reversed on its own.
/// A non-reversed pursuer costs a life, which ends contact resolution for this tick.
pub fn pursuer_collision_system(session: &mut Session, config: &SimulationConfig, events: &mut Vec<GameEvent>) {
    let agent = session.agent.mover.position;

    for index in 0..session.pursuers.len() {
        let pursuer = &mut session.pursuers[index];
        if agent.distance(pursuer.mover.position) >= config.contact_radius {
            continue;
        }

        if pursuer.reversed {
            pursuer.reversed = false;
            pursuer.send_home();
            let id = pursuer.id;
            debug!(pursuer = id, "Pursuer caught");
            session.add_score(config.pursuer_caught_score);
            events.push(GameEvent::PursuerCaught { pursuer: id });
        } else {
            let id = pursuer.id;
            debug!(pursuer = id, "Agent caught");
            events.push(GameEvent::AgentCaught { pursuer: id });
            session.lose_life(events);
            return;
        }
    }
}
