// All tunable animation constants in one place.

// Canvas
pub const CANVAS_WIDTH: f32 = 800.0;
pub const CANVAS_HEIGHT: f32 = 600.0;

// Pool
pub const INITIAL_CELL_COUNT: usize = 50;
pub const MAX_CELL_COUNT: usize = 5000;
pub const CELL_BASE_RADIUS: f32 = 10.0;
pub const CELL_SPAWN_SPEED: f32 = 2.0; // velocity components drawn from (-2, 2)

// Lifespan: inclusive cycle budgets (frames) per phase
pub const GROWING_CYCLES: (u32, u32) = (5, 10);
pub const MATURE_CYCLES: (u32, u32) = (10, 75);
pub const DECAYING_CYCLES: (u32, u32) = (5, 10);

// Mature jitter
pub const MATURE_POSITION_JITTER: f32 = 2.0;
pub const MATURE_RADIUS_JITTER: f32 = 1.0;

// Drawing
pub const HALO_SCALE: f32 = 1.618;
pub const GLOW_BLUR: f32 = 7.0;
pub const OUTLINE_WIDTH: f32 = 2.0;
pub const COLOR_DARKEN: f32 = 0.9;
pub const COLOR_LIGHTEN: f32 = 1.1;

// Stats
pub const STATS_CAPACITY: usize = 600;
pub const STATS_SAMPLE_INTERVAL: u32 = 10;

// Defaults
pub const DEFAULT_SEED: u64 = 42;
