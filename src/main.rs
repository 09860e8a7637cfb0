mod input;
mod ui;

use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::build_info;
use flappy::core::{Session, Simulation, WorldConfig};
use input::{handle_game_input, InputResult};
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::time::{Duration, Instant};
use ui::draw_ui;

/// How long to wait for input while the clock is stopped.
const IDLE_POLL_MS: u64 = 250;

struct CliOptions {
    seed: Option<u64>,
    log_file: Option<String>,
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let options = parse_args(&args);

    if let Some(path) = &options.log_file {
        init_file_logging(path)?;
    }

    let config = WorldConfig::default();
    let sim = match options.seed {
        Some(seed) => Simulation::new(config, seed),
        None => Simulation::from_entropy(config),
    }
    .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let mut session = Session::new(sim);
    info!("starting {}", build_info::version_line());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut session);

    // Cleanup terminal even if the loop or one of the steps failed
    let raw = disable_raw_mode();
    let screen = terminal
        .backend_mut()
        .execute(LeaveAlternateScreen)
        .map(|_| ());
    let best = first_error(result, raw, screen)?;
    println!("Best score: {}", best);
    println!("Goodbye!");

    Ok(())
}

/// Draw, read input and tick until the player quits. Returns the best score.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut Session,
) -> io::Result<u32> {
    let mut best = 0;
    let mut last = Instant::now();
    session.start();

    loop {
        terminal.draw(|frame| draw_ui(frame, session, best))?;

        let timeout = if session.is_running() {
            session.clock().until_next()
        } else {
            Duration::from_millis(IDLE_POLL_MS)
        };

        if event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()? {
                if handle_game_input(key_event, session) == InputResult::Quit {
                    break;
                }
            }
        }

        let now = Instant::now();
        if let Some(outcome) = session.advance(now - last) {
            if outcome.is_game_over() {
                info!("round over with score {}", session.score());
            }
        }
        last = now;
        best = best.max(session.score());
    }

    Ok(best)
}

/// The loop's result, unless it succeeded and a cleanup step did not.
fn first_error<T>(
    result: io::Result<T>,
    raw: io::Result<()>,
    screen: io::Result<()>,
) -> io::Result<T> {
    let value = result?;
    raw?;
    screen?;
    Ok(value)
}

fn parse_args(args: &[String]) -> CliOptions {
    let mut options = CliOptions {
        seed: None,
        log_file: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" | "-s" => match args.get(i + 1).and_then(|s| s.parse().ok()) {
                Some(seed) => {
                    options.seed = Some(seed);
                    i += 1;
                }
                None => usage_error("--seed expects a number"),
            },
            "--log" => match args.get(i + 1) {
                Some(path) => {
                    options.log_file = Some(path.clone());
                    i += 1;
                }
                None => usage_error("--log expects a file path"),
            },
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            other => usage_error(&format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    options
}

fn usage_error(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!("Run 'flappy --help' for usage.");
    std::process::exit(1);
}

fn print_help() {
    println!("Flappy - Terminal Flappy Bird\n");
    println!("Usage: flappy [options]\n");
    println!("Options:");
    println!("  --seed N     Use a fixed seed for the pipe gaps");
    println!("  --log FILE   Write logs to FILE (filter with RUST_LOG)");
    println!("  --version    Show version information");
    println!("  --help       Show this help message\n");
    println!("Controls:");
    println!("  Space / Up   Flap");
    println!("  Q / Esc      Quit");
    println!("  Y / Enter    Restart after a crash");
}

/// Logging would corrupt the alternate screen, so it only goes to a file.
fn init_file_logging(path: &str) -> io::Result<()> {
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
