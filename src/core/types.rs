//! Value types shared by the simulation, its hosts and the simulator.

use super::config::WorldConfig;
use serde::{Deserialize, Serialize};

/// Axis-aligned box in world pixels, origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// True when the two boxes share a nonzero area. Touching edges and
    /// empty boxes never intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// The bird's vertical state. Its x never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bird {
    /// Top edge, pixels from the top of the world.
    pub y: i32,
    /// Pixels per tick, positive = downward.
    pub velocity: i32,
}

impl Bird {
    pub fn new(y: i32, velocity: i32) -> Self {
        Self { y, velocity }
    }

    pub fn bounds(&self, config: &WorldConfig) -> Rect {
        Rect::new(config.bird_x(), self.y, config.bird_size, config.bird_size)
    }
}

/// Which half of a pipe pair a box belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipeSide {
    Top,
    Bottom,
}

/// One obstacle column: a top and bottom pipe around a single gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipePair {
    /// Left edge shared by both halves.
    pub x: i32,
    /// First row of the gap; the top pipe ends here.
    pub gap_start: i32,
}

impl PipePair {
    pub fn new(x: i32, gap_start: i32) -> Self {
        Self { x, gap_start }
    }

    pub fn right_edge(&self, config: &WorldConfig) -> i32 {
        self.x + config.pipe_width
    }

    pub fn gap_end(&self, config: &WorldConfig) -> i32 {
        self.gap_start + config.pipe_gap
    }

    /// Whether the pair has scrolled fully past the left edge.
    pub fn is_off_screen(&self, config: &WorldConfig) -> bool {
        self.right_edge(config) < 0
    }

    pub fn top(&self, config: &WorldConfig) -> Rect {
        Rect::new(self.x, 0, config.pipe_width, self.gap_start)
    }

    pub fn bottom(&self, config: &WorldConfig) -> Rect {
        let y = self.gap_end(config);
        Rect::new(
            self.x,
            y,
            config.pipe_width,
            config.height - y - config.ground_height,
        )
    }

    pub fn side(&self, side: PipeSide, config: &WorldConfig) -> Rect {
        match side {
            PipeSide::Top => self.top(config),
            PipeSide::Bottom => self.bottom(config),
        }
    }
}

/// What ended a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOverCause {
    Ground,
    Ceiling,
    Pipe,
}

impl GameOverCause {
    pub const ALL: [GameOverCause; 3] = [Self::Ground, Self::Ceiling, Self::Pipe];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Ground => "Ground",
            Self::Ceiling => "Ceiling",
            Self::Pipe => "Pipe",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Ground => "You hit the ground.",
            Self::Ceiling => "You flew into the sky's edge.",
            Self::Pipe => "You crashed into a pipe.",
        }
    }
}

/// Session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Playing,
    GameOver(GameOverCause),
}

/// Result of a single `tick()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The session was already over; nothing moved.
    Idle,
    /// The bird survived and the score advanced.
    Alive { score: u32 },
    /// The bird collided on this tick.
    GameOver { cause: GameOverCause, final_score: u32 },
}

impl TickOutcome {
    pub fn is_game_over(&self) -> bool {
        matches!(self, TickOutcome::GameOver { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_rects_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(9, 9, 10, 10);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_rects_do_not_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let right = Rect::new(10, 0, 10, 10);
        let below = Rect::new(0, 10, 10, 10);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_empty_rect_never_intersects() {
        let a = Rect::new(0, 0, 10, 10);
        let flat = Rect::new(2, 2, 5, 0);
        let negative = Rect::new(2, 2, 5, -4);
        assert!(!a.intersects(&flat));
        assert!(!a.intersects(&negative));
    }

    #[test]
    fn test_pipe_halves_share_one_gap() {
        let config = WorldConfig::default();
        let pair = PipePair::new(300, 120);
        let top = pair.top(&config);
        let bottom = pair.bottom(&config);

        assert_eq!(top, Rect::new(300, 0, 80, 120));
        assert_eq!(bottom, Rect::new(300, 320, 80, 230));
        assert_eq!(bottom.y - top.bottom(), config.pipe_gap);
        assert_eq!(bottom.bottom(), config.height - config.ground_height);
    }

    #[test]
    fn test_off_screen_needs_right_edge_past_zero() {
        let config = WorldConfig::default();
        assert!(!PipePair::new(-80, 100).is_off_screen(&config));
        assert!(PipePair::new(-81, 100).is_off_screen(&config));
    }

    #[test]
    fn test_bird_bounds_sit_at_world_centre() {
        let config = WorldConfig::default();
        let bird = Bird::new(250, 0);
        assert_eq!(bird.bounds(&config), Rect::new(400, 250, 30, 30));
    }
}
