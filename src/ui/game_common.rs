//! Frame, status bar and info column around the play field.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const FIELD_MIN_HEIGHT: u16 = 10;
const STATUS_BAR_HEIGHT: u16 = 2;
const INFO_PANEL_WIDTH: u16 = 22;

const FLYING_CONTROLS: &[(&str, &str)] = &[("[Space/Up]", "Flap"), ("[Q/Esc]", "Quit")];

/// Areas returned by [`create_play_layout`].
pub struct PlayLayout {
    pub field: Rect,
    pub status_bar: Rect,
    pub info_panel: Rect,
}

/// Outer border with the field on the left, a status bar under it and the
/// info column on the right. The border turns red once the bird crashes.
///
/// ```text
/// ┌─ Flappy Bird ───────────────────┬─ Info ──────┐
/// │   [field]                       │  [stats]    │
/// │ [status - 2 lines]              │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn create_play_layout(frame: &mut Frame, area: Rect, crashed: bool) -> PlayLayout {
    frame.render_widget(Clear, area);

    let border = if crashed { Color::Red } else { Color::Cyan };
    let block = Block::default()
        .title(" Flappy Bird ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(INFO_PANEL_WIDTH)])
        .split(inner);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(FIELD_MIN_HEIGHT),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(h_chunks[0]);

    PlayLayout {
        field: v_chunks[0],
        status_bar: v_chunks[1],
        info_panel: h_chunks[1],
    }
}

/// What the two status lines say.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBar {
    Flying { score: u32 },
    /// The controls line becomes the restart prompt.
    Crashed { final_score: u32 },
}

impl StatusBar {
    fn lines(&self) -> [Line<'static>; 2] {
        let key = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
        match *self {
            StatusBar::Flying { score } => {
                let mut spans = Vec::new();
                for (i, (keys, action)) in FLYING_CONTROLS.iter().enumerate() {
                    if i > 0 {
                        spans.push(Span::raw("  "));
                    }
                    spans.push(Span::styled(*keys, Style::default().fg(Color::White)));
                    spans.push(Span::styled(
                        format!(" {}", action),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                [
                    Line::styled(format!("Score: {}", score), Style::default().fg(Color::Green)),
                    Line::from(spans),
                ]
            }
            StatusBar::Crashed { final_score } => {
                let prompt = Style::default().fg(Color::Cyan);
                [
                    Line::styled(
                        format!("CRASH! Final score: {}", final_score),
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    ),
                    Line::from(vec![
                        Span::styled("Restart? ", prompt),
                        Span::styled("[Y]", key),
                        Span::styled("es / ", prompt),
                        Span::styled("[N]", key),
                        Span::styled("o", prompt),
                    ]),
                ]
            }
        }
    }
}

pub fn render_status_bar(frame: &mut Frame, area: Rect, status: StatusBar) {
    let [headline, controls] = status.lines();
    let lines = if area.height >= 2 {
        vec![headline, controls]
    } else {
        vec![headline]
    };
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Compact box at the bottom of the field naming what the bird hit.
///
/// Only the box itself is cleared, so the crashed bird stays visible above it.
pub fn render_crash_banner(frame: &mut Frame, area: Rect, description: &str, final_score: u32) {
    let banner_height: u16 = 4;
    let banner_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(banner_height),
        width: area.width,
        height: banner_height.min(area.height),
    };

    frame.render_widget(Clear, banner_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(banner_area);
    frame.render_widget(block, banner_area);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                "CRASH!",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(description.to_string(), Style::default().fg(Color::White)),
        ]),
        Line::from(Span::styled(
            format!("You survived {} ticks.", final_score),
            Style::default().fg(Color::Yellow),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// One line in the info column.
pub enum InfoRow {
    Stat {
        label: &'static str,
        value: String,
        color: Color,
    },
    Spacer,
}

/// Bordered " Info " column: a bold heading followed by label/value rows.
pub fn render_info_panel(frame: &mut Frame, area: Rect, heading: &str, rows: &[InfoRow]) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {} ", heading),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for row in rows {
        lines.push(match row {
            InfoRow::Stat {
                label,
                value,
                color,
            } => Line::from(vec![
                Span::styled(format!(" {}: ", label), Style::default().fg(Color::DarkGray)),
                Span::styled(value.clone(), Style::default().fg(*color)),
            ]),
            InfoRow::Spacer => Line::from(""),
        });
    }
    frame.render_widget(Paragraph::new(lines), inner);
}
