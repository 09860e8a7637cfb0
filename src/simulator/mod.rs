//! Headless balance simulator.
//!
//! Plays many sessions of the real [`Simulation`](crate::core::Simulation)
//! with a scripted autopilot and aggregates how they end:
//! - Score distribution (ticks survived)
//! - Which collision ends runs most often
//! - How many runs outlive the tick budget
//!
//! Runs are reproducible from a seed, so a report can be compared across
//! changes to the world constants.

mod autopilot;
mod config;
mod report;
mod runner;

pub use autopilot::Autopilot;
pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
