//! Simulation configuration.

use crate::core::config::WorldConfig;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of sessions to play
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Ticks after which a still-alive session is stopped and counted as timed out
    pub max_ticks_per_run: u64,

    /// Pixels above the gap's lower edge at which the autopilot flaps
    pub flap_margin: i32,

    /// World the sessions are played in
    pub world: WorldConfig,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            max_ticks_per_run: 10_000,
            flap_margin: 20,
            world: WorldConfig::default(),
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for a fast sanity pass
    pub fn quick() -> Self {
        Self {
            num_runs: 100,
            max_ticks_per_run: 2_000,
            ..Default::default()
        }
    }

    /// Long runs to see whether anything eventually ends a session
    pub fn endurance(num_runs: u32) -> Self {
        Self {
            num_runs,
            max_ticks_per_run: 100_000,
            ..Default::default()
        }
    }
}
