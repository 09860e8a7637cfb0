//! UI rendering for the Flappy Bird play screen.

use crate::ui::game_common::{
    create_play_layout, render_crash_banner, render_info_panel, render_status_bar, InfoRow,
    StatusBar,
};
use crate::ui::terminal_surface::TerminalSurface;
use flappy::core::Session;
use ratatui::{layout::Rect, style::Color, widgets::Paragraph, Frame};

/// Render the Flappy Bird game scene.
pub fn render_flappy(frame: &mut Frame, area: Rect, session: &Session, best: u32) {
    let crashed = session.is_game_over();
    let layout = create_play_layout(frame, area, crashed);

    let surface = render_play_area(frame, layout.field, session);
    let status = match surface.game_over {
        Some(_) => StatusBar::Crashed {
            final_score: surface.score,
        },
        None => StatusBar::Flying {
            score: surface.score,
        },
    };
    render_status_bar(frame, layout.status_bar, status);
    render_info_panel(frame, layout.info_panel, "Flappy", &info_rows(session, best));

    if let Some(cause) = surface.game_over {
        render_crash_banner(frame, layout.field, cause.description(), surface.score);
    }
}

/// Paint the world into a character grid the size of the play area.
fn render_play_area(frame: &mut Frame, area: Rect, session: &Session) -> TerminalSurface {
    let mut surface = TerminalSurface::new(area.width, area.height);
    session.simulation().render(&mut surface);

    if area.width > 0 && area.height > 0 {
        frame.render_widget(Paragraph::new(surface.lines()), area);
    }
    surface
}

fn info_rows(session: &Session, best: u32) -> Vec<InfoRow> {
    let sim = session.simulation();
    let config = sim.config();
    vec![
        InfoRow::Stat {
            label: "Score",
            value: sim.score().to_string(),
            color: Color::White,
        },
        InfoRow::Stat {
            label: "Best",
            value: best.max(sim.score()).to_string(),
            color: Color::Yellow,
        },
        InfoRow::Spacer,
        InfoRow::Stat {
            label: "Gap",
            value: format!("{}px", config.pipe_gap),
            color: Color::Green,
        },
        InfoRow::Stat {
            label: "Speed",
            value: format!("{}px/tick", config.pipe_speed),
            color: Color::Green,
        },
        InfoRow::Stat {
            label: "Velocity",
            value: format!("{:+}", sim.bird().velocity),
            color: Color::Yellow,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use flappy::core::{Bird, Simulation, WorldConfig};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(session: &Session) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| render_flappy(frame, frame.size(), session, 3))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_playing_screen_shows_controls() {
        let session = Session::new(Simulation::new(WorldConfig::default(), 2).unwrap());
        let text = screen_text(&session);
        assert!(text.contains("Score: 0"));
        assert!(text.contains("[Space/Up] Flap"));
        assert!(!text.contains("Restart?"));
    }

    #[test]
    fn test_crashed_screen_prompts_for_restart() {
        let mut sim = Simulation::new(WorldConfig::default(), 2).unwrap();
        sim.set_bird(Bird::new(520, 4));
        sim.tick();
        let session = Session::new(sim);

        let text = screen_text(&session);
        assert!(text.contains("Restart? [Y]es / [N]o"));
        assert!(text.contains("You hit the ground."));
    }
}
