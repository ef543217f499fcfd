use glam::{IVec2, Vec2};
use maze_chase::app::Autopilot;
use maze_chase::config::SimulationConfig;
use maze_chase::constants::{PURSUER_SPAWNS, RAW_BOARD};
use maze_chase::error::{ConfigError, GameError};
use maze_chase::events::{GameCommand, GameEvent};
use maze_chase::game::{Game, Snapshot};
use maze_chase::map::direction::Direction;
use maze_chase::map::{Grid, Map};
use maze_chase::systems::{apply_command, GameState, ModeState, Session};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

/// Snapshot with the tick counter zeroed, for comparing frozen states.
fn still(game: &Game) -> Snapshot {
    let mut snapshot = game.snapshot();
    snapshot.tick = 0;
    snapshot
}

#[test]
fn test_nothing_moves_before_start() {
    let mut game = common::test_game(common::corridor_map(), SimulationConfig::default());
    let before = still(&game);

    for _ in 0..10 {
        assert_eq!(game.tick(), GameState::Start);
    }

    assert_eq!(still(&game), before);
    assert_eq!(game.tick_count(), 10);
}

#[test]
fn test_start_command_begins_play() {
    let mut game = common::test_game(common::corridor_map(), common::quiet_config());
    game.push_command(GameCommand::Start);
    game.push_command(GameCommand::MoveAgent(Direction::Right));

    assert_eq!(game.tick(), GameState::Playing);
    assert_that(&game.events().contains(&GameEvent::StateChanged {
        from: GameState::Start,
        to: GameState::Playing,
    }))
    .is_true();
    assert_that(&common::approx_eq(game.session().agent.mover.position, Vec2::new(1.05, 1.0))).is_true();
}

#[test]
fn test_pellet_pickup() {
    let mut game = common::playing_corridor(common::quiet_config());
    game.session_mut().agent.mover.position = Vec2::new(1.61, 1.0);

    game.tick();

    let session = game.session();
    assert_eq!(session.score, 10);
    assert_that(&session.items[0].collected).is_true();
    assert_eq!(session.remaining_items(), session.items.len() - 1);
}

#[test]
fn test_pursuer_contact_costs_life() {
    let mut game = common::playing_corridor(common::quiet_config());
    game.session_mut().agent.mover.position = Vec2::new(8.0, 1.0);
    game.session_mut().pursuers[0].mover.position = Vec2::new(8.5, 1.0);

    game.tick();

    let session = game.session();
    assert_eq!(session.lives, 2);
    assert_eq!(session.state, GameState::Playing);
    assert_eq!(session.score, 0);
    assert_eq!(session.agent.mover.position, Vec2::new(1.0, 1.0));
    for (pursuer, home) in session.pursuers.iter().zip(common::CORRIDOR_PURSUERS) {
        assert_eq!(pursuer.mover.position, home.as_vec2());
    }
    assert_that(&session.items.iter().any(|item| item.collected)).is_false();
}

#[test]
fn test_power_pellet_then_catch() {
    let mut game = common::playing_corridor(common::quiet_config());
    game.session_mut().agent.mover.position = Vec2::new(9.0, 1.0);
    game.session_mut().pursuers[0].mover.position = Vec2::new(8.5, 1.0);

    game.tick();

    let session = game.session();
    assert_eq!(session.score, 250);
    assert_eq!(session.lives, 3);
    assert_eq!(session.mode, ModeState::Active { remaining_ticks: 300 });
    assert_eq!(session.pursuers[0].mover.position, Vec2::new(3.0, 1.0));
    assert_that(&session.pursuers[0].reversed).is_false();
    assert_that(&session.pursuers[1].reversed).is_true();
    assert_that(&game.events().contains(&GameEvent::PursuerCaught { pursuer: 0 })).is_true();
}

#[test]
fn test_mode_expires_after_duration() {
    let config = SimulationConfig {
        power_duration_ticks: 3,
        ..common::quiet_config()
    };
    let mut game = common::playing_corridor(config);
    game.session_mut().agent.mover.position = Vec2::new(9.0, 1.0);

    game.tick();
    assert_that(&game.events().contains(&GameEvent::ModeActivated { ticks: 3 })).is_true();

    for remaining in [2, 1] {
        game.tick();
        assert_eq!(game.session().mode, ModeState::Active { remaining_ticks: remaining });
    }

    game.tick();
    assert_eq!(game.session().mode, ModeState::Inactive);
    assert_that(&game.events().contains(&GameEvent::ModeExpired)).is_true();
    assert_that(&game.session().pursuers.iter().any(|pursuer| pursuer.reversed)).is_false();
    assert_eq!(game.session().score, 50);
}

#[test]
fn test_reversed_pursuers_are_slower() {
    let config = SimulationConfig {
        decision_chance: 0.0,
        ..Default::default()
    };
    let mut game = common::test_game(common::room_map(), config);
    game.session_mut().state = GameState::Playing;
    let home = game.session().pursuers[0].mover.position;

    game.tick();
    let normal = home.distance(game.session().pursuers[0].mover.position);

    game.session_mut().pursuers[0].mover.position = home;
    game.session_mut().pursuers[0].reversed = true;
    game.tick();
    let reversed = home.distance(game.session().pursuers[0].mover.position);

    assert_that(&(normal - 0.03).abs()).is_less_than(1e-5_f32);
    assert_that(&(reversed - 0.021).abs()).is_less_than(1e-5_f32);
}

#[test]
fn test_game_over_freezes_until_restart() {
    let config = SimulationConfig {
        starting_lives: 1,
        ..common::quiet_config()
    };
    let mut game = common::playing_corridor(config);
    game.session_mut().score = 70;
    game.session_mut().agent.mover.position = Vec2::new(8.0, 1.0);
    game.session_mut().pursuers[1].mover.position = Vec2::new(8.4, 1.0);

    assert_eq!(game.tick(), GameState::GameOver);
    assert_eq!(game.session().lives, 0);
    let frozen = still(&game);

    game.push_command(GameCommand::MoveAgent(Direction::Left));
    game.push_command(GameCommand::TogglePause);
    for _ in 0..5 {
        assert_eq!(game.tick(), GameState::GameOver);
    }
    assert_eq!(still(&game), frozen);

    game.push_command(GameCommand::Restart);
    assert_eq!(game.tick(), GameState::Playing);
    assert_eq!(game.session().lives, 1);
    assert_eq!(game.session().score, 0);
}

#[test]
fn test_pause_freezes_and_resumes() {
    let mut game = common::playing_corridor(common::quiet_config());
    game.push_command(GameCommand::MoveAgent(Direction::Right));
    game.tick();
    let moved = game.session().agent.mover.position;

    game.push_command(GameCommand::TogglePause);
    assert_eq!(game.tick(), GameState::Paused);
    let paused = still(&game);
    for _ in 0..20 {
        game.tick();
    }
    assert_eq!(still(&game), paused);
    assert_eq!(game.session().agent.mover.position, moved);

    game.push_command(GameCommand::TogglePause);
    assert_eq!(game.tick(), GameState::Playing);
    assert_that(&common::approx_eq(game.session().agent.mover.position, Vec2::new(1.1, 1.0))).is_true();
}

#[test]
fn test_commands_apply_in_arrival_order() {
    let mut game = common::playing_corridor(common::quiet_config());
    game.push_command(GameCommand::TogglePause);
    game.push_command(GameCommand::TogglePause);
    game.push_command(GameCommand::MoveAgent(Direction::Right));

    assert_eq!(game.tick(), GameState::Playing);
    assert_eq!(game.session().agent.next_direction, Some(Direction::Right));
}

#[test]
fn test_win_requires_power_pellets() {
    let mut game = common::playing_corridor(common::quiet_config());
    for item in game.session_mut().items.iter_mut().take(6) {
        item.collected = true;
    }

    assert_eq!(game.tick(), GameState::Playing);

    game.session_mut().agent.mover.position = Vec2::new(9.0, 1.0);
    assert_eq!(game.tick(), GameState::Won);
    assert_that(&game.events().contains(&GameEvent::StateChanged {
        from: GameState::Playing,
        to: GameState::Won,
    }))
    .is_true();

    let won = still(&game);
    game.tick();
    assert_eq!(still(&game), won);
}

#[test]
fn test_board_without_items_is_won_immediately() {
    let map = Map::new(&["#####", "#P  #", "#####"], &[IVec2::new(3, 1)]).unwrap();
    let mut game = common::test_game(map, SimulationConfig::default());
    game.push_command(GameCommand::Start);

    assert_eq!(game.tick(), GameState::Won);
}

#[test]
fn test_events_are_per_tick() {
    let mut game = common::playing_corridor(common::quiet_config());
    game.session_mut().agent.mover.position = Vec2::new(2.0, 1.0);

    game.tick();
    assert_that(&game.events().is_empty()).is_false();

    game.tick();
    assert_that(&game.events().is_empty()).is_true();
}

#[test]
fn test_restart_is_idempotent() {
    let map = Map::new(&RAW_BOARD, &PURSUER_SPAWNS).unwrap();
    let mut game = common::test_game(map.clone(), SimulationConfig::default());
    let mut autopilot = Autopilot::new(3, 20);
    game.push_command(GameCommand::Start);
    for tick in 0..500 {
        if let Some(command) = autopilot.command_for(tick) {
            game.push_command(command);
        }
        game.tick();
    }

    let mut once = game.session().clone();
    apply_command(&mut once, GameCommand::Restart, &mut Vec::new());
    let mut twice = once.clone();
    apply_command(&mut twice, GameCommand::Restart, &mut Vec::new());

    let mut fresh = Session::new(&map, game.config().starting_lives);
    fresh.state = GameState::Playing;
    assert_eq!(once, twice);
    assert_eq!(once, fresh);
}

#[test]
fn test_long_run_invariants() {
    let map = Map::new(&RAW_BOARD, &PURSUER_SPAWNS).unwrap();
    let mut game = common::test_game(map, SimulationConfig::default());
    let mut autopilot = Autopilot::new(11, 30);
    game.push_command(GameCommand::Start);

    let mut score = 0;
    let mut lives = game.config().starting_lives;

    for tick in 0..8000 {
        if game.state().is_terminal() {
            game.push_command(GameCommand::Restart);
            score = 0;
            lives = game.config().starting_lives;
        } else if let Some(command) = autopilot.command_for(tick) {
            game.push_command(command);
        }
        game.tick();

        let session = game.session();
        let grid = &game.map().grid;
        assert_that(&grid.is_walkable(session.agent.mover.position)).is_true();
        for pursuer in &session.pursuers {
            assert!(
                grid.is_walkable(pursuer.mover.position),
                "pursuer {} in {} at tick {tick}",
                pursuer.id,
                Grid::cell_of(pursuer.mover.position)
            );
        }

        assert_that(&session.score).is_greater_than_or_equal_to(score);
        assert_that(&session.lives).is_less_than_or_equal_to(lives);
        assert_that(&(lives - session.lives)).is_less_than_or_equal_to(1);
        score = session.score;
        lives = session.lives;
    }

    assert_eq!(game.tick_count(), 8000);
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = SimulationConfig {
        decision_chance: 2.0,
        ..Default::default()
    };
    let result = Game::with_seed(common::corridor_map(), config, 1);

    assert!(matches!(result, Err(GameError::Config(ConfigError::InvalidChance(chance))) if chance == 2.0));
}
