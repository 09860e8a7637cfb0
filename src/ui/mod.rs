pub mod flappy_scene;
pub mod game_common;
pub mod terminal_surface;

use flappy::core::Session;
use ratatui::Frame;

/// Main UI drawing function.
pub fn draw_ui(frame: &mut Frame, session: &Session, best: u32) {
    let size = frame.size();
    flappy_scene::render_flappy(frame, size, session, best);
}
