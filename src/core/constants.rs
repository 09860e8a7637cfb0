// Timing
pub const TICK_INTERVAL_MS: u64 = 20;
pub const MAX_CATCH_UP_TICKS: u32 = 5;

// World geometry (pixels)
pub const WORLD_WIDTH: i32 = 800;
pub const WORLD_HEIGHT: i32 = 600;
pub const GROUND_HEIGHT: i32 = 50;
pub const BIRD_SIZE: i32 = 30;
pub const PIPE_WIDTH: i32 = 80;
pub const PIPE_GAP: i32 = 200;

// Motion (pixels per tick)
pub const PIPE_SPEED: i32 = 4;
pub const GRAVITY: i32 = 1;
pub const FLAP_VELOCITY: i32 = -12;

// Obstacle pool
pub const PIPE_PAIRS: usize = 2;

// Validation limits
pub const MAX_WORLD_SIZE: i32 = 1_000_000;
pub const MAX_PIPE_PAIRS: usize = 64;
