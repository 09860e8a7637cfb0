//! Keyboard handling for the play screen.
//!
//! Keys are first mapped to a [`HostCommand`] depending on whether the round
//! is still running, then applied to the session.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use flappy::core::Session;
use log::debug;

/// What a key press asks the host to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    Flap,
    Restart,
    Quit,
    None,
}

/// Map a key to a command. Only presses count; repeats and releases are
/// ignored so holding Space does not machine-gun flaps.
pub fn map_key(key: KeyEvent, game_over: bool) -> HostCommand {
    if key.kind != KeyEventKind::Press {
        return HostCommand::None;
    }

    if game_over {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => HostCommand::Restart,
            KeyCode::Char('n')
            | KeyCode::Char('N')
            | KeyCode::Char('q')
            | KeyCode::Char('Q')
            | KeyCode::Esc => HostCommand::Quit,
            _ => HostCommand::None,
        }
    } else {
        match key.code {
            KeyCode::Char(' ') | KeyCode::Up => HostCommand::Flap,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => HostCommand::Quit,
            _ => HostCommand::None,
        }
    }
}

/// Result of handling a game input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue the game loop normally.
    Continue,
    /// Leave the game loop.
    Quit,
}

/// Apply one key press to the session.
pub fn handle_game_input(key: KeyEvent, session: &mut Session) -> InputResult {
    match map_key(key, session.is_game_over()) {
        HostCommand::Flap => {
            session.on_flap();
            InputResult::Continue
        }
        HostCommand::Restart => {
            debug!("restart requested");
            session.reset();
            InputResult::Continue
        }
        HostCommand::Quit => InputResult::Quit,
        HostCommand::None => InputResult::Continue,
    }
}
