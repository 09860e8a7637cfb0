//! Rasterizes the simulation's pixel-space boxes onto a character grid.

use flappy::core::{GameOverCause, PipeSide, Rect, Surface};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// What occupies one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Sky,
    Pipe,
    PipeLip(char),
    Ground,
    Bird(char),
}

impl Cell {
    fn glyph(self) -> char {
        match self {
            Cell::Sky => ' ',
            Cell::Pipe => '█',
            Cell::PipeLip(c) => c,
            Cell::Ground => '▒',
            Cell::Bird(c) => c,
        }
    }

    fn style(self) -> Style {
        match self {
            Cell::Sky => Style::default(),
            Cell::Pipe | Cell::PipeLip(_) => Style::default().fg(Color::Green),
            Cell::Ground => Style::default().fg(Color::Rgb(210, 140, 40)),
            Cell::Bird(_) => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// A [`Surface`] that paints into `cols × rows` cells, scaling from the
/// world size announced by `clear`.
pub struct TerminalSurface {
    cols: u16,
    rows: u16,
    world_width: i32,
    world_height: i32,
    cells: Vec<Cell>,
    pub score: u32,
    pub game_over: Option<GameOverCause>,
}

impl TerminalSurface {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            world_width: 1,
            world_height: 1,
            cells: vec![Cell::Sky; cols as usize * rows as usize],
            score: 0,
            game_over: None,
        }
    }

    #[cfg(test)]
    pub fn cell(&self, col: u16, row: u16) -> Option<Cell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells
            .get(row as usize * self.cols as usize + col as usize)
            .copied()
    }

    fn set(&mut self, col: i64, row: i64, cell: Cell) {
        if col < 0 || row < 0 || col >= self.cols as i64 || row >= self.rows as i64 {
            return;
        }
        let idx = row as usize * self.cols as usize + col as usize;
        self.cells[idx] = cell;
    }

    /// Cell span `[start, end)` covering world pixels `[from, to)` on one axis.
    fn span(from: i32, to: i32, world: i32, cells: u16) -> (i64, i64) {
        let world = world.max(1) as i64;
        let cells = cells as i64;
        let start = (from as i64 * cells).div_euclid(world);
        let end = (to as i64 * cells + world - 1).div_euclid(world);
        (start.max(0), end.min(cells))
    }

    fn fill(&mut self, rect: Rect, cell: Cell) {
        if rect.is_empty() {
            return;
        }
        let (c0, c1) = Self::span(rect.x, rect.right(), self.world_width, self.cols);
        let (r0, r1) = Self::span(rect.y, rect.bottom(), self.world_height, self.rows);
        for row in r0..r1 {
            for col in c0..c1 {
                self.set(col, row, cell);
            }
        }
    }

    /// Center cell of a world-space box.
    fn center(&self, rect: Rect) -> (i64, i64) {
        let cx = rect.x as i64 + rect.width as i64 / 2;
        let cy = rect.y as i64 + rect.height as i64 / 2;
        (
            (cx * self.cols as i64).div_euclid(self.world_width.max(1) as i64),
            (cy * self.rows as i64).div_euclid(self.world_height.max(1) as i64),
        )
    }

    /// Convert the grid into styled lines, one span per run of equal cells.
    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(self.rows as usize);
        for row in self.cells.chunks(self.cols.max(1) as usize) {
            let mut spans = Vec::new();
            let mut run = String::new();
            let mut current: Option<Cell> = None;

            for &cell in row {
                if current.is_some_and(|c| c.style() != cell.style()) {
                    if let Some(c) = current {
                        spans.push(Span::styled(std::mem::take(&mut run), c.style()));
                    }
                }
                current = Some(cell);
                run.push(cell.glyph());
            }
            if let Some(c) = current {
                spans.push(Span::styled(run, c.style()));
            }
            lines.push(Line::from(spans));
        }
        lines
    }
}

impl Surface for TerminalSurface {
    fn clear(&mut self, world: Rect) {
        self.world_width = world.width.max(1);
        self.world_height = world.height.max(1);
        self.cells.fill(Cell::Sky);
        self.score = 0;
        self.game_over = None;
    }

    fn draw_bird(&mut self, bounds: Rect, velocity: i32) {
        let glyph = if velocity < -4 {
            '▲' // Flapping up
        } else if velocity > 6 {
            '▼' // Falling fast
        } else {
            '►'
        };
        let (col, row) = self.center(bounds);
        self.set(col, row, Cell::Bird(glyph));
    }

    fn draw_pipe(&mut self, bounds: Rect, side: PipeSide) {
        if bounds.is_empty() {
            return;
        }
        self.fill(bounds, Cell::Pipe);

        // Half-block lip on the row facing the gap
        let (c0, c1) = Self::span(bounds.x, bounds.right(), self.world_width, self.cols);
        let (r0, r1) = Self::span(bounds.y, bounds.bottom(), self.world_height, self.rows);
        if r0 >= r1 {
            return;
        }
        let (row, lip) = match side {
            PipeSide::Top => (r1 - 1, '▄'),
            PipeSide::Bottom => (r0, '▀'),
        };
        for col in c0..c1 {
            self.set(col, row, Cell::PipeLip(lip));
        }
    }

    fn draw_ground(&mut self, band: Rect) {
        self.fill(band, Cell::Ground);
    }

    fn draw_score(&mut self, score: u32) {
        self.score = score;
    }

    fn draw_game_over(&mut self, _final_score: u32, cause: GameOverCause) {
        self.game_over = Some(cause);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flappy::core::{Simulation, WorldConfig};

    fn painted(cols: u16, rows: u16) -> TerminalSurface {
        let sim = Simulation::new(WorldConfig::default(), 11).unwrap();
        let mut surface = TerminalSurface::new(cols, rows);
        sim.render(&mut surface);
        surface
    }

    #[test]
    fn test_bird_lands_in_centre_column() {
        let surface = painted(80, 24);
        // Bird box 400..430 x 300..330 → centre pixel (415, 315).
        assert!(matches!(surface.cell(41, 12), Some(Cell::Bird(_))));
    }

    #[test]
    fn test_ground_fills_bottom_rows() {
        let surface = painted(80, 24);
        assert_eq!(surface.cell(0, 23), Some(Cell::Ground));
        assert_eq!(surface.cell(79, 23), Some(Cell::Ground));
        assert_eq!(surface.cell(0, 0), Some(Cell::Sky));
    }

    #[test]
    fn test_off_screen_pipes_are_clipped() {
        // Fresh pipes start at x >= 800, fully right of an 800 px world.
        let surface = painted(80, 24);
        for row in 0..22 {
            for col in 0..80 {
                assert!(!matches!(
                    surface.cell(col, row),
                    Some(Cell::Pipe) | Some(Cell::PipeLip(_))
                ));
            }
        }
    }

    #[test]
    fn test_visible_pipe_is_drawn() {
        let mut surface = TerminalSurface::new(80, 24);
        surface.clear(Rect::new(0, 0, 800, 600));
        surface.draw_pipe(Rect::new(100, 0, 80, 200), PipeSide::Top);
        assert_eq!(surface.cell(12, 0), Some(Cell::Pipe));
        assert_eq!(surface.cell(12, 10), Some(Cell::Sky));
    }

    #[test]
    fn test_lines_cover_every_row() {
        let surface = painted(40, 12);
        let lines = surface.lines();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0].width(), 40);
    }

    #[test]
    fn test_surface_records_score_and_state() {
        let surface = painted(10, 5);
        assert_eq!(surface.score, 0);
        assert_eq!(surface.game_over, None);
    }
}
