//! Flappy - terminal Flappy Bird library
//!
//! This module exposes the simulation and the balance simulator for testing
//! and external hosts.

pub mod build_info;
pub mod core;
pub mod simulator;

// The terminal UI and input handling live in the `flappy` binary (src/main.rs)

pub use crate::core::{
    ConfigError, GameOverCause, Phase, Session, Simulation, TickOutcome, WorldConfig,
    TICK_INTERVAL_MS,
};
