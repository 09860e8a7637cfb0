//! Main simulation runner using the real `Simulation` for every session.

use super::autopilot::Autopilot;
use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::core::simulation::Simulation;
use crate::core::types::TickOutcome;
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    // One seed per run so a single run can be replayed on its own
    let mut seeds = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    for run_idx in 0..config.num_runs {
        let run_seed: u64 = seeds.gen();
        let run_stats = simulate_single_run(config, run_idx, run_seed);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Score {}, Flaps {}, Ended by {}",
                run_idx + 1,
                config.num_runs,
                run_stats.score,
                run_stats.flaps,
                run_stats.end_reason()
            );
        }
        all_runs.push(run_stats);
    }

    let report = SimReport::from_runs(all_runs, config.max_ticks_per_run);
    info!(
        "simulated {} runs, avg score {:.1}",
        report.num_runs, report.avg_score
    );
    report
}

/// Play one session until it ends or exceeds the tick budget.
pub fn simulate_single_run(config: &SimConfig, run_index: u32, seed: u64) -> RunStats {
    let mut stats = RunStats {
        run_index,
        seed,
        score: 0,
        ticks: 0,
        flaps: 0,
        cause: None,
    };

    let mut sim = match Simulation::new(config.world, seed) {
        Ok(sim) => sim,
        Err(e) => {
            debug!("run {} skipped: {}", run_index, e);
            return stats;
        }
    };
    let pilot = Autopilot::new(config.flap_margin);

    while stats.ticks < config.max_ticks_per_run {
        if pilot.should_flap(&sim) && sim.on_flap() {
            stats.flaps += 1;
        }

        stats.ticks += 1;
        match sim.tick() {
            TickOutcome::Alive { score } => stats.score = score,
            TickOutcome::GameOver { cause, final_score } => {
                stats.score = final_score;
                stats.cause = Some(cause);
                break;
            }
            TickOutcome::Idle => break,
        }
    }

    debug!(
        "run {} (seed {}) ended by {} after {} ticks",
        run_index,
        seed,
        stats.end_reason(),
        stats.ticks
    );
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::WorldConfig;
    use crate::core::types::GameOverCause;

    #[test]
    fn test_tick_budget_is_respected() {
        let config = SimConfig {
            max_ticks_per_run: 50,
            ..Default::default()
        };
        let stats = simulate_single_run(&config, 0, 9);
        assert!(stats.ticks <= 50);
        if stats.cause.is_none() {
            assert_eq!(stats.ticks, 50);
            assert_eq!(stats.score, 50);
        }
    }

    #[test]
    fn test_bird_that_never_flaps_hits_ground() {
        // A margin larger than the world means the autopilot never wants to flap
        // before the bird is already on the ground.
        let config = SimConfig {
            flap_margin: -10_000,
            ..Default::default()
        };
        let stats = simulate_single_run(&config, 0, 5);
        assert_eq!(stats.flaps, 0);
        assert_eq!(stats.cause, Some(GameOverCause::Ground));
        // 300 -> 520 under gravity 1/tick takes 21 ticks; the crash tick scores nothing.
        assert_eq!(stats.ticks, 21);
        assert_eq!(stats.score, 20);
    }

    #[test]
    fn test_invalid_world_yields_empty_run() {
        let config = SimConfig {
            world: WorldConfig {
                pipe_pairs: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        let stats = simulate_single_run(&config, 3, 1);
        assert_eq!(stats.ticks, 0);
        assert_eq!(stats.score, 0);
    }

    #[test]
    fn test_seeded_simulation_is_reproducible() {
        let config = SimConfig {
            num_runs: 5,
            seed: Some(42),
            max_ticks_per_run: 500,
            verbosity: 0,
            ..Default::default()
        };
        let a = run_simulation(&config);
        let b = run_simulation(&config);
        assert_eq!(a.run_stats, b.run_stats);
    }
}
