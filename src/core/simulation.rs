//! Fixed-timestep bird physics, pipe recycling and collision.

use super::config::{ConfigError, WorldConfig};
use super::render::{Snapshot, Surface};
use super::types::{Bird, GameOverCause, Phase, PipePair, Rect, TickOutcome};
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Owns the whole game state for one player.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: WorldConfig,
    bird: Bird,
    pipes: Vec<PipePair>,
    score: u32,
    game_over: Option<GameOverCause>,
    rng: ChaCha8Rng,
}

impl Simulation {
    /// Create a simulation with a reproducible gap sequence.
    pub fn new(config: WorldConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Create a simulation seeded from the OS.
    pub fn from_entropy(config: WorldConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, ChaCha8Rng::from_entropy())
    }

    fn with_rng(config: WorldConfig, rng: ChaCha8Rng) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut sim = Self {
            config,
            bird: Bird::new(0, 0),
            pipes: Vec::with_capacity(config.pipe_pairs),
            score: 0,
            game_over: None,
            rng,
        };
        sim.reset();
        Ok(sim)
    }

    /// Start a fresh session: bird centred and at rest, score zero, every
    /// pipe pair back at its staggered starting offset with a new gap.
    pub fn reset(&mut self) {
        self.bird = Bird::new(self.config.height / 2, 0);
        self.score = 0;
        self.game_over = None;

        self.pipes.clear();
        for slot in 0..self.config.pipe_pairs {
            let gap_start = self.draw_gap();
            self.pipes
                .push(PipePair::new(self.config.initial_pipe_x(slot), gap_start));
        }
        info!("session reset ({} pipe pairs)", self.pipes.len());
    }

    /// Advance the world by one step.
    pub fn tick(&mut self) -> TickOutcome {
        if self.game_over.is_some() {
            return TickOutcome::Idle;
        }

        self.move_pipes();
        self.move_bird();

        if let Some(cause) = self.check_collisions() {
            return self.end(cause);
        }

        self.score += 1;
        TickOutcome::Alive { score: self.score }
    }

    /// Flap: overwrite the bird's velocity with the upward impulse.
    ///
    /// Returns `false` (and changes nothing) once the session is over.
    pub fn on_flap(&mut self) -> bool {
        if self.game_over.is_some() {
            return false;
        }
        self.bird.velocity = self.config.flap_velocity;
        true
    }

    fn move_pipes(&mut self) {
        for slot in 0..self.pipes.len() {
            let moved = PipePair {
                x: self.pipes[slot].x - self.config.pipe_speed,
                ..self.pipes[slot]
            };
            let next = if moved.is_off_screen(&self.config) {
                let recycled = PipePair::new(self.config.width, self.draw_gap());
                debug!(
                    "recycled pipe slot {} with gap at {}",
                    slot, recycled.gap_start
                );
                recycled
            } else {
                moved
            };
            self.pipes[slot] = next;
        }
    }

    fn move_bird(&mut self) {
        self.bird.velocity += self.config.gravity;
        self.bird.y += self.bird.velocity;
    }

    /// Ground first, then pipes, then ceiling. Clamps the bird into
    /// `[0, floor]` as a side effect, whatever the cause.
    fn check_collisions(&mut self) -> Option<GameOverCause> {
        let floor = self.config.floor_line();
        if self.bird.y > floor {
            self.bird.y = floor;
            return Some(GameOverCause::Ground);
        }

        let bird = self.bird.bounds(&self.config);
        let hit_pipe = self.pipes.iter().any(|pipe| {
            bird.intersects(&pipe.top(&self.config)) || bird.intersects(&pipe.bottom(&self.config))
        });
        if hit_pipe {
            // A top pipe reaches the ceiling, so the bird may be above it here.
            self.bird.y = self.bird.y.max(0);
            return Some(GameOverCause::Pipe);
        }

        if self.bird.y <= 0 {
            self.bird.y = 0;
            return Some(GameOverCause::Ceiling);
        }

        None
    }

    fn end(&mut self, cause: GameOverCause) -> TickOutcome {
        self.game_over = Some(cause);
        info!(
            "game over: {} (score {})",
            cause.name().to_lowercase(),
            self.score
        );
        TickOutcome::GameOver {
            cause,
            final_score: self.score,
        }
    }

    fn draw_gap(&mut self) -> i32 {
        let (min, max) = self.config.gap_range();
        self.rng.gen_range(min..=max)
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn bird(&self) -> Bird {
        self.bird
    }

    pub fn pipes(&self) -> &[PipePair] {
        &self.pipes
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over.is_some()
    }

    pub fn game_over_cause(&self) -> Option<GameOverCause> {
        self.game_over
    }

    pub fn phase(&self) -> Phase {
        match self.game_over {
            Some(cause) => Phase::GameOver(cause),
            None => Phase::Playing,
        }
    }

    /// Place the bird directly, e.g. to set up a scenario.
    pub fn set_bird(&mut self, bird: Bird) {
        self.bird = bird;
    }

    /// Replace the pair in `slot`. Out-of-range slots are ignored.
    pub fn set_pipe(&mut self, slot: usize, pipe: PipePair) {
        if let Some(existing) = self.pipes.get_mut(slot) {
            *existing = pipe;
        }
    }

    /// Copy the drawable state out.
    pub fn snapshot(&self) -> Snapshot {
        let config = &self.config;
        Snapshot {
            world: Rect::new(0, 0, config.width, config.height),
            bird: self.bird.bounds(config),
            bird_velocity: self.bird.velocity,
            top_pipes: self.pipes.iter().map(|p| p.top(config)).collect(),
            bottom_pipes: self.pipes.iter().map(|p| p.bottom(config)).collect(),
            ground: Rect::new(
                0,
                config.height - config.ground_height,
                config.width,
                config.ground_height,
            ),
            score: self.score,
            game_over: self.game_over,
        }
    }

    /// Issue this frame's draw calls. Never mutates state.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.snapshot().paint(surface);
    }
}
