//! World configuration and its construction-time validation.

use super::constants::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed world parameters, read-only for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldConfig {
    pub width: i32,
    pub height: i32,
    pub ground_height: i32,
    pub bird_size: i32,
    pub pipe_width: i32,
    /// Height of the passable band between a pair's top and bottom pipe.
    pub pipe_gap: i32,
    /// Leftward scroll per tick.
    pub pipe_speed: i32,
    /// Velocity added to the bird every tick.
    pub gravity: i32,
    /// Velocity the bird is set to on a flap (negative = upward).
    pub flap_velocity: i32,
    /// Number of pipe pairs in the recycling pool.
    pub pipe_pairs: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            ground_height: GROUND_HEIGHT,
            bird_size: BIRD_SIZE,
            pipe_width: PIPE_WIDTH,
            pipe_gap: PIPE_GAP,
            pipe_speed: PIPE_SPEED,
            gravity: GRAVITY,
            flap_velocity: FLAP_VELOCITY,
            pipe_pairs: PIPE_PAIRS,
        }
    }
}

impl WorldConfig {
    /// Lowest `y` the bird may occupy before touching the ground.
    pub fn floor_line(&self) -> i32 {
        self.height - self.ground_height - self.bird_size
    }

    /// Fixed horizontal position of the bird's left edge.
    pub fn bird_x(&self) -> i32 {
        self.width / 2
    }

    /// Inclusive range a pipe pair's gap start is drawn from.
    pub fn gap_range(&self) -> (i32, i32) {
        (
            self.ground_height,
            self.height - self.ground_height - self.pipe_gap,
        )
    }

    /// Starting x of the pair in `slot` after a reset.
    pub fn initial_pipe_x(&self, slot: usize) -> i32 {
        self.width + slot as i32 * (self.width / 2)
    }

    /// Check every precondition the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("bird_size", self.bird_size),
            ("pipe_width", self.pipe_width),
            ("pipe_gap", self.pipe_gap),
            ("pipe_speed", self.pipe_speed),
        ];
        for (field, value) in positive {
            if value <= 0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if self.ground_height < 0 {
            return Err(ConfigError::NonPositive {
                field: "ground_height",
                value: self.ground_height,
            });
        }
        if self.gravity < 0 {
            return Err(ConfigError::NonPositive {
                field: "gravity",
                value: self.gravity,
            });
        }

        // Keeps every pixel computation below comfortably inside i32.
        let bounded = [
            ("width", self.width),
            ("height", self.height),
            ("ground_height", self.ground_height),
            ("bird_size", self.bird_size),
            ("pipe_width", self.pipe_width),
            ("pipe_gap", self.pipe_gap),
            ("pipe_speed", self.pipe_speed),
        ];
        for (field, value) in bounded {
            if value > MAX_WORLD_SIZE {
                return Err(ConfigError::TooLarge {
                    field,
                    value,
                    max: MAX_WORLD_SIZE,
                });
            }
        }
        if self.pipe_pairs > MAX_PIPE_PAIRS {
            return Err(ConfigError::TooManyPipes {
                pipe_pairs: self.pipe_pairs,
                max: MAX_PIPE_PAIRS,
            });
        }

        let (min_gap, max_gap) = self.gap_range();
        if max_gap < min_gap {
            return Err(ConfigError::DegenerateGapRange {
                pipe_gap: self.pipe_gap,
                playable: self.height - 2 * self.ground_height,
            });
        }

        if self.floor_line() <= 0 {
            return Err(ConfigError::BirdDoesNotFit {
                bird_size: self.bird_size,
                playable: self.height - self.ground_height,
            });
        }

        if self.flap_velocity >= 0 {
            return Err(ConfigError::FlapNotUpward(self.flap_velocity));
        }

        // A single step may not carry the bird across the whole band.
        let floor = self.floor_line();
        if self.gravity >= floor {
            return Err(ConfigError::TooFast {
                field: "gravity",
                value: self.gravity,
                limit: floor,
            });
        }
        if self.flap_velocity <= -floor {
            return Err(ConfigError::TooFast {
                field: "flap_velocity",
                value: self.flap_velocity,
                limit: floor,
            });
        }

        if self.pipe_pairs == 0 {
            return Err(ConfigError::NoPipes);
        }

        Ok(())
    }
}

/// A world configuration the simulation cannot run with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A dimension or speed that must be positive is not.
    NonPositive { field: &'static str, value: i32 },

    /// The gap does not fit between the two ground-height margins.
    DegenerateGapRange { pipe_gap: i32, playable: i32 },

    /// The bird is taller than the space above the ground.
    BirdDoesNotFit { bird_size: i32, playable: i32 },

    /// Flapping would push the bird down.
    FlapNotUpward(i32),

    /// The obstacle pool is empty.
    NoPipes,

    /// A dimension or speed beyond what the pixel math supports.
    TooLarge {
        field: &'static str,
        value: i32,
        max: i32,
    },

    /// More pipe pairs than the pool allows.
    TooManyPipes { pipe_pairs: usize, max: usize },

    /// Gravity or flap strong enough to cross the playable band in one tick.
    TooFast {
        field: &'static str,
        value: i32,
        limit: i32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositive { field, value } => {
                write!(f, "{} must be positive, got {}", field, value)
            }
            Self::DegenerateGapRange { pipe_gap, playable } => write!(
                f,
                "pipe gap {} leaves no room for a gap position in a {} px band",
                pipe_gap, playable
            ),
            Self::BirdDoesNotFit {
                bird_size,
                playable,
            } => write!(
                f,
                "bird of size {} does not fit above the ground ({} px)",
                bird_size, playable
            ),
            Self::FlapNotUpward(v) => {
                write!(f, "flap velocity must be negative (upward), got {}", v)
            }
            Self::NoPipes => write!(f, "at least one pipe pair is required"),
            Self::TooLarge { field, value, max } => {
                write!(f, "{} must be at most {}, got {}", field, max, value)
            }
            Self::TooManyPipes { pipe_pairs, max } => {
                write!(f, "at most {} pipe pairs are supported, got {}", max, pipe_pairs)
            }
            Self::TooFast {
                field,
                value,
                limit,
            } => write!(
                f,
                "{} magnitude must stay below the {} px flight band, got {}",
                field, limit, value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
