//! Render contract between the simulation and whatever draws it.
//!
//! The simulation never knows about colors, fonts or terminals. It hands a
//! [`Surface`] world-space boxes in a fixed order, or a [`Snapshot`] value for
//! hosts that prefer to pull state.

use super::types::{GameOverCause, PipeSide, Rect};
use serde::{Deserialize, Serialize};

/// Draw target for [`Simulation::render`](super::simulation::Simulation::render).
///
/// Calls arrive in paint order: `clear`, `draw_bird`, every `draw_pipe`,
/// `draw_ground`, `draw_score`, then `draw_game_over` when the session ended.
pub trait Surface {
    fn clear(&mut self, world: Rect);
    fn draw_bird(&mut self, bounds: Rect, velocity: i32);
    fn draw_pipe(&mut self, bounds: Rect, side: PipeSide);
    fn draw_ground(&mut self, band: Rect);
    fn draw_score(&mut self, score: u32);
    fn draw_game_over(&mut self, final_score: u32, cause: GameOverCause);
}

/// Everything a frame needs, copied out of the simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub world: Rect,
    pub bird: Rect,
    pub bird_velocity: i32,
    pub top_pipes: Vec<Rect>,
    pub bottom_pipes: Vec<Rect>,
    pub ground: Rect,
    pub score: u32,
    pub game_over: Option<GameOverCause>,
}

impl Snapshot {
    pub fn is_game_over(&self) -> bool {
        self.game_over.is_some()
    }

    /// Replay this snapshot onto a surface in paint order.
    pub fn paint<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.world);
        surface.draw_bird(self.bird, self.bird_velocity);
        for pipe in &self.top_pipes {
            surface.draw_pipe(*pipe, PipeSide::Top);
        }
        for pipe in &self.bottom_pipes {
            surface.draw_pipe(*pipe, PipeSide::Bottom);
        }
        surface.draw_ground(self.ground);
        surface.draw_score(self.score);
        if let Some(cause) = self.game_over {
            surface.draw_game_over(self.score, cause);
        }
    }
}
