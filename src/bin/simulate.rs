//! Balance simulator CLI.
//!
//! Play many headless sessions with an autopilot and report how they end.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                    # Default: 1000 runs
//!   cargo run --bin simulate -- -n 100 -t 5000 # 100 runs, 5000-tick budget
//!   cargo run --bin simulate -- --seed 42      # Reproducible run

use flappy::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let (config, write_json) = parse_args(&args);

    let default_filter = if config.verbosity >= 2 { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              FLAPPY BALANCE SIMULATOR                         ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Max Ticks:      {}", config.max_ticks_per_run);
    println!("  Flap Margin:    {}", config.flap_margin);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if write_json {
        let filename = match config.seed {
            Some(seed) => format!("sim_report_seed{}.json", seed),
            None => "sim_report.json".to_string(),
        };
        match std::fs::write(&filename, report.to_json()) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => {
                eprintln!("Failed to write JSON report: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn parse_args(args: &[String]) -> (SimConfig, bool) {
    let mut config = SimConfig::default();
    let mut write_json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-t" | "--ticks" => {
                if i + 1 < args.len() {
                    config.max_ticks_per_run = args[i + 1].parse().unwrap_or(10_000);
                    i += 1;
                }
            }
            "-m" | "--margin" => {
                if i + 1 < args.len() {
                    config.flap_margin = args[i + 1].parse().unwrap_or(20);
                    i += 1;
                }
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "--json" => {
                write_json = true;
            }
            "--quick" => {
                config = SimConfig {
                    seed: config.seed,
                    ..SimConfig::quick()
                };
            }
            "--endurance" => {
                config = SimConfig {
                    seed: config.seed,
                    ..SimConfig::endurance(config.num_runs.min(100))
                };
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    (config, write_json)
}

fn print_help() {
    println!("Flappy Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>      Number of simulated sessions (default: 1000)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    -t, --ticks <T>     Tick budget per session (default: 10,000)");
    println!("    -m, --margin <M>    Autopilot flap margin in pixels (default: 20)");
    println!("    -v, --verbose       Per-run output and info logging");
    println!("    --json              Save JSON report");
    println!("    --quick             Quick check (100 runs, 2,000 ticks)");
    println!("    --endurance         Long sessions (100,000 ticks)");
    println!("    -h, --help          Show this help");
    println!();
    println!("Logging follows RUST_LOG (default: warn).");
}
