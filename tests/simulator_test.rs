//! End-to-end tests for the balance simulator.

use flappy::core::GameOverCause;
use flappy::simulator::{run_simulation, simulate_single_run, SimConfig};

fn small_config(seed: u64) -> SimConfig {
    SimConfig {
        num_runs: 20,
        seed: Some(seed),
        max_ticks_per_run: 1_500,
        verbosity: 0,
        ..Default::default()
    }
}

#[test]
fn test_every_run_is_accounted_for() {
    let report = run_simulation(&small_config(42));
    assert_eq!(report.num_runs, 20);
    assert_eq!(report.run_stats.len(), 20);

    let ended: u32 = GameOverCause::ALL.iter().map(|&c| report.crashes(c)).sum();
    assert_eq!(ended + report.runs_timed_out, report.num_runs);
    assert!(report.min_score <= report.median_score);
    assert!(report.median_score <= report.max_score);
}

#[test]
fn test_single_run_can_be_replayed_from_report() {
    let config = small_config(7);
    let report = run_simulation(&config);
    for stats in &report.run_stats {
        let replay = simulate_single_run(&config, stats.run_index, stats.seed);
        assert_eq!(&replay, stats);
    }
}

#[test]
fn test_seeded_reports_are_identical() {
    let config = small_config(2024);
    let a = run_simulation(&config).to_json();
    let b = run_simulation(&config).to_json();
    assert_eq!(a, b);
}

#[test]
fn test_json_report_shape() {
    let report = run_simulation(&small_config(1));
    let value: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
    assert_eq!(value["num_runs"], 20);
    assert_eq!(value["run_stats"].as_array().map(Vec::len), Some(20));
    assert!(value["avg_score"].is_number());
}

#[test]
fn test_score_never_exceeds_ticks() {
    let report = run_simulation(&small_config(5));
    for stats in &report.run_stats {
        assert!(stats.ticks <= 1_500);
        assert!(u64::from(stats.score) <= stats.ticks);
        if stats.cause.is_none() {
            assert_eq!(u64::from(stats.score), stats.ticks);
        }
    }
}
