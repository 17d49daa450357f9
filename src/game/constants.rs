pub const SEGMENT_SPACING: f64 = 0.5;
pub const POINTS_PER_SEGMENT: usize = 1;
pub const PATH_RESOLUTION: f64 = 0.05;
pub const RETENTION_MARGIN: usize = 2;
pub const INITIAL_SEGMENTS: usize = 2;
pub const MIN_TRIM_SEGMENTS: usize = 2;
pub const BODY_COLLISION_RADIUS: f64 = 0.35;
pub const MIN_SPACING: f64 = 1e-3;
pub const MIN_INPUT_SQ: f64 = 0.01;

pub const MOVE_SPEED: f64 = 4.0;
pub const TURN_RATE: f64 = std::f64::consts::PI * 4.0;
pub const EAT_RADIUS: f64 = 0.4;
pub const MOVE_INTERVAL: f64 = 0.12;

pub const BOARD_WIDTH: u32 = 24;
pub const BOARD_HEIGHT: u32 = 16;
pub const CELL_SIZE: f64 = 1.0;
pub const FOOD_MIN_DISTANCE: f64 = 0.5;

pub const POINTS_PER_FOOD: i64 = 10;
pub const POINTS_PER_REMOVED_SEGMENT: i64 = 10;
pub const START_SECONDS: f64 = 60.0;

pub const EFFECT_POOL_SIZE: usize = 4;
pub const EFFECT_LIFETIME_TICKS: u32 = 12;

pub const TICK_MS: u64 = 16;
