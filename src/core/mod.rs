//! Core game state and logic.
//!
//! Nothing in here touches a terminal. Hosts feed flaps in, call `tick()` on
//! a fixed cadence and read state back out through the render contract.

pub mod config;
pub mod constants;
pub mod render;
pub mod session;
pub mod simulation;
pub mod types;

pub use config::*;
pub use constants::*;
pub use render::*;
pub use session::*;
pub use simulation::*;
pub use types::*;
