//! The simulation phases. Each phase is a plain function over borrowed session state,
//! run by [`crate::game::Game::tick`] in a fixed order.

pub mod collision;
pub mod components;
pub mod input;
pub mod lifecycle;
pub mod mode;
pub mod movement;
pub mod pursuer;
pub mod state;

pub use self::collision::{item_collision_system, pursuer_collision_system};
pub use self::components::{Agent, Item, ItemKind, Mover, Pursuer, PursuerId};
pub use self::input::{apply_command, Bindings, CommandQueue};
pub use self::lifecycle::Session;
pub use self::mode::ModeState;
pub use self::movement::{agent_movement_system, pursuer_movement_system, Step};
pub use self::pursuer::{choose_direction, pursuer_decision_system};
pub use self::state::{GameState, Transition};
