//! Long-running property checks for the simulation.
//!
//! These drive `Simulation` for thousands of ticks and assert the invariants
//! that must hold on every step: score bookkeeping, bird bounds, pipe
//! recycling and the canonical reset layout.
//!
//! Uses seeded ChaCha8Rng for deterministic behavior.

use flappy::core::{Bird, GameOverCause, PipePair, Simulation, TickOutcome, WorldConfig};
use flappy::simulator::Autopilot;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn new_sim(seed: u64) -> Simulation {
    Simulation::new(WorldConfig::default(), seed).unwrap()
}

/// Park the bird at rest in the middle of the next gap so it survives the
/// coming tick no matter where the pipes are.
fn hover(sim: &mut Simulation) {
    if let Some(pipe) = Autopilot::next_pipe(sim) {
        sim.set_bird(Bird::new(pipe.gap_start + 85, 0));
    }
}

#[test]
fn test_score_counts_ticks_survived() {
    let mut sim = new_sim(42);
    for expected in 1..=2_000u32 {
        hover(&mut sim);
        assert_eq!(sim.tick(), TickOutcome::Alive { score: expected });
    }
    assert_eq!(sim.score(), 2_000);
}

#[test]
fn test_recycled_pipes_stay_in_bounds() {
    let config = WorldConfig::default();
    let (gap_min, gap_max) = config.gap_range();
    let mut sim = new_sim(7);
    let mut recycled = 0;

    for _ in 0..5_000 {
        hover(&mut sim);
        let before: Vec<PipePair> = sim.pipes().to_vec();
        sim.tick();
        assert!(!sim.is_game_over());
        assert_eq!(sim.pipes().len(), config.pipe_pairs);

        for (old, new) in before.iter().zip(sim.pipes()) {
            if new.x > old.x {
                recycled += 1;
                assert_eq!(new.x, config.width);
                assert!(old.x + config.pipe_width - config.pipe_speed < 0);
            } else {
                assert_eq!(new.x, old.x - config.pipe_speed);
                assert_eq!(new.gap_start, old.gap_start);
            }
            assert!(new.right_edge(&config) >= 0);
            assert!(new.gap_start >= gap_min && new.gap_start <= gap_max);
        }
    }

    // 5000 ticks scroll 20000 px, far more than one lap per slot.
    assert!(recycled >= 20, "only {} recycles", recycled);
}

#[test]
fn test_random_flapping_respects_world_bounds() {
    let floor = WorldConfig::default().floor_line();

    for seed in 0..25u64 {
        let mut sim = new_sim(seed);
        let mut player = ChaCha8Rng::seed_from_u64(seed ^ 0xF1A9);
        let mut last_score = 0;
        let mut ended = None;

        for _ in 0..3_000 {
            if player.gen_range(0..8) == 0 {
                sim.on_flap();
            }
            match sim.tick() {
                TickOutcome::Alive { score } => {
                    assert_eq!(score, last_score + 1);
                    last_score = score;
                    let y = sim.bird().y;
                    assert!(y > 0 && y <= floor, "seed {} y {}", seed, y);
                }
                TickOutcome::GameOver { cause, final_score } => {
                    assert_eq!(final_score, last_score);
                    let y = sim.bird().y;
                    assert!((0..=floor).contains(&y), "seed {} y {}", seed, y);
                    ended = Some(cause);
                    break;
                }
                TickOutcome::Idle => panic!("idle before game over"),
            }
        }

        if let Some(cause) = ended {
            assert_eq!(sim.game_over_cause(), Some(cause));
            assert_eq!(sim.tick(), TickOutcome::Idle);
            assert_eq!(sim.score(), last_score);
        }
    }
}

#[test]
fn test_never_flapping_always_hits_ground() {
    for seed in 0..10u64 {
        let mut sim = new_sim(seed);
        let outcome = loop {
            let outcome = sim.tick();
            if outcome.is_game_over() {
                break outcome;
            }
        };
        assert_eq!(
            outcome,
            TickOutcome::GameOver {
                cause: GameOverCause::Ground,
                final_score: 20
            }
        );
        assert_eq!(sim.bird().y, 520);
    }
}

#[test]
fn test_reset_restores_canonical_layout() {
    let config = WorldConfig::default();
    let mut sim = new_sim(99);
    let mut player = ChaCha8Rng::seed_from_u64(3);

    for _ in 0..3 {
        while !sim.tick().is_game_over() {
            if player.gen_bool(0.1) {
                sim.on_flap();
            }
        }
        sim.reset();

        assert!(!sim.is_game_over());
        assert_eq!(sim.score(), 0);
        assert_eq!(sim.bird(), Bird::new(config.height / 2, 0));
        let xs: Vec<i32> = sim.pipes().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![config.width, config.width + config.width / 2]);
        assert!(sim.on_flap());
    }
}

#[test]
fn test_same_seed_same_game() {
    let mut a = new_sim(1234);
    let mut b = new_sim(1234);
    for tick in 0..1_000 {
        if tick % 17 == 0 {
            a.on_flap();
            b.on_flap();
        }
        assert_eq!(a.tick(), b.tick());
        assert_eq!(a.pipes(), b.pipes());
        assert_eq!(a.bird(), b.bird());
    }
}

#[test]
fn test_wider_world_keeps_pipes_staggered() {
    let config = WorldConfig {
        width: 1000,
        pipe_pairs: 3,
        ..Default::default()
    };
    let sim = Simulation::new(config, 5).unwrap();
    let xs: Vec<i32> = sim.pipes().iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![1000, 1500, 2000]);
    assert_eq!(sim.bird().y, 300);
}
