//! Maze-chase simulation library crate.
//!
//! The crate is headless: a host pushes [`events::GameCommand`]s into a [`game::Game`], calls
//! [`game::Game::tick`] once per frame and renders from [`game::Game::snapshot`].
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[cfg_attr(coverage_nightly, coverage(off))]
pub mod app;
#[cfg_attr(coverage_nightly, coverage(off))]
pub mod formatter;

pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod game;
pub mod map;
pub mod systems;
