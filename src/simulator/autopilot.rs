//! Scripted player used by the simulator.

use crate::core::simulation::Simulation;
use crate::core::types::PipePair;

/// Flaps whenever the bird is falling and its bottom edge has sunk below
/// the next gap's lower edge minus a safety margin.
#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    pub margin: i32,
}

impl Autopilot {
    pub fn new(margin: i32) -> Self {
        Self { margin }
    }

    /// The nearest pair the bird has not fully passed yet.
    pub fn next_pipe(sim: &Simulation) -> Option<PipePair> {
        let config = sim.config();
        let bird_x = config.bird_x();
        sim.pipes()
            .iter()
            .filter(|p| p.right_edge(config) >= bird_x)
            .min_by_key(|p| p.x)
            .copied()
    }

    /// Lower edge the bird should stay above.
    fn target_floor(&self, sim: &Simulation) -> i32 {
        let config = sim.config();
        match Self::next_pipe(sim) {
            Some(pipe) => pipe.gap_end(config) - self.margin,
            None => (config.height + config.pipe_gap) / 2,
        }
    }

    pub fn should_flap(&self, sim: &Simulation) -> bool {
        let bird = sim.bird();
        let bottom = bird.y + sim.config().bird_size;
        bird.velocity >= 0 && bottom > self.target_floor(sim)
    }
}
