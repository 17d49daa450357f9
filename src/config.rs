use crate::error::{ConfigError, Result};
use crate::game::constants::{
    BOARD_HEIGHT, BOARD_WIDTH, BODY_COLLISION_RADIUS, CELL_SIZE, EAT_RADIUS, EFFECT_LIFETIME_TICKS,
    EFFECT_POOL_SIZE, FOOD_MIN_DISTANCE, INITIAL_SEGMENTS, MIN_SPACING, MIN_TRIM_SEGMENTS,
    MOVE_INTERVAL, MOVE_SPEED, PATH_RESOLUTION, POINTS_PER_FOOD, POINTS_PER_REMOVED_SEGMENT, POINTS_PER_SEGMENT,
    RETENTION_MARGIN, SEGMENT_SPACING, START_SECONDS, TICK_MS, TURN_RATE,
};
use crate::game::types::{BoundsMode, MovementMode, SteeringMode};
use serde::{Deserialize, Serialize};
use std::env;

/// Shape and retention parameters of the trailing body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyConfig {
    /// Arc length of one logical segment.
    pub segment_spacing: f64,
    /// Resampled points per logical segment.
    pub points_per_segment: usize,
    /// Minimum head travel before a new history sample is inserted.
    pub path_resolution: f64,
    /// Extra segments of history kept beyond the current body length.
    pub retention_margin: usize,
    pub initial_segments: usize,
    /// Collision dead zone behind the head, in logical segments.
    pub min_trim_segments: usize,
    pub collision_radius: f64,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            segment_spacing: SEGMENT_SPACING,
            points_per_segment: POINTS_PER_SEGMENT,
            path_resolution: PATH_RESOLUTION,
            retention_margin: RETENTION_MARGIN,
            initial_segments: INITIAL_SEGMENTS,
            min_trim_segments: MIN_TRIM_SEGMENTS,
            collision_radius: BODY_COLLISION_RADIUS,
        }
    }
}

impl BodyConfig {
    /// Copy with degenerate values clamped to the nearest usable setting.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let segment_spacing = if self.segment_spacing.is_finite() {
            self.segment_spacing.max(MIN_SPACING)
        } else {
            MIN_SPACING
        };
        let path_resolution = if self.path_resolution.is_finite() {
            self.path_resolution.max(0.0)
        } else {
            0.0
        };
        Self {
            segment_spacing,
            points_per_segment: self.points_per_segment.max(1),
            path_resolution,
            retention_margin: self.retention_margin.max(1),
            initial_segments: self.initial_segments,
            min_trim_segments: self.min_trim_segments,
            collision_radius: self.collision_radius,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.points_per_segment == 0 {
            return Err(invalid("body.points_per_segment", "must be at least 1"));
        }
        if !self.segment_spacing.is_finite() || self.segment_spacing < MIN_SPACING {
            return Err(invalid(
                "body.segment_spacing",
                format!("must be a finite value >= {MIN_SPACING}"),
            ));
        }
        if !self.path_resolution.is_finite() || self.path_resolution < 0.0 {
            return Err(invalid("body.path_resolution", "must be finite and >= 0"));
        }
        if self.retention_margin == 0 {
            return Err(invalid("body.retention_margin", "must be at least 1"));
        }
        if !self.collision_radius.is_finite() {
            return Err(invalid("body.collision_radius", "must be finite"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadConfig {
    pub speed: f64,
    /// Maximum heading change in radians per second.
    pub turn_rate: f64,
    pub steering: SteeringMode,
    pub bounds: BoundsMode,
    pub movement: MovementMode,
    /// Seconds between cell steps in grid movement.
    pub move_interval: f64,
}

impl Default for HeadConfig {
    fn default() -> Self {
        Self {
            speed: MOVE_SPEED,
            turn_rate: TURN_RATE,
            steering: SteeringMode::Free,
            bounds: BoundsMode::Clamp,
            movement: MovementMode::Continuous,
            move_interval: MOVE_INTERVAL,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: u32,
    pub height: u32,
    pub cell_size: f64,
    pub food_min_distance: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            cell_size: CELL_SIZE,
            food_min_distance: FOOD_MIN_DISTANCE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    pub points_per_food: i64,
    pub points_per_removed_segment: i64,
    pub start_seconds: f64,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            points_per_food: POINTS_PER_FOOD,
            points_per_removed_segment: POINTS_PER_REMOVED_SEGMENT,
            start_seconds: START_SECONDS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub body: BodyConfig,
    pub head: HeadConfig,
    pub board: BoardConfig,
    pub score: ScoreConfig,
    pub eat_radius: f64,
    pub effect_pool_size: usize,
    pub effect_lifetime_ticks: u32,
    pub tick_ms: u64,
    /// Fixed RNG seed; entropy when unset.
    pub seed: Option<u64>,
    /// Stop the headless run after this many seconds even if the timer is running.
    pub run_seconds: Option<f64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            body: BodyConfig::default(),
            head: HeadConfig::default(),
            board: BoardConfig::default(),
            score: ScoreConfig::default(),
            eat_radius: EAT_RADIUS,
            effect_pool_size: EFFECT_POOL_SIZE,
            effect_lifetime_ticks: EFFECT_LIFETIME_TICKS,
            tick_ms: TICK_MS,
            seed: None,
            run_seconds: None,
        }
    }
}

impl SimConfig {
    /// Loads `SNAKE_CONFIG` (a JSON file) when set, applies `TICK_MS`,
    /// `SNAKE_SEED` and `RUN_SECONDS` overrides, then validates.
    pub fn from_env() -> Result<Self> {
        let mut config = match env::var("SNAKE_CONFIG")
            .map(|value| value.trim().to_string())
            .ok()
            .filter(|value| !value.is_empty())
        {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        if let Some(tick_ms) = parse_env::<u64>("TICK_MS")? {
            config.tick_ms = tick_ms;
        }
        if let Some(seed) = parse_env::<u64>("SNAKE_SEED")? {
            config.seed = Some(seed);
        }
        if let Some(run_seconds) = parse_env::<f64>("RUN_SECONDS")? {
            config.run_seconds = Some(run_seconds);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.body.validate()?;
        if !self.head.speed.is_finite() || self.head.speed < 0.0 {
            return Err(invalid("head.speed", "must be finite and >= 0"));
        }
        if !self.head.turn_rate.is_finite() || self.head.turn_rate <= 0.0 {
            return Err(invalid("head.turn_rate", "must be finite and > 0"));
        }
        if self.head.movement == MovementMode::Grid
            && (!self.head.move_interval.is_finite() || self.head.move_interval <= 0.0)
        {
            return Err(invalid("head.move_interval", "must be finite and > 0"));
        }
        if self.board.width == 0 || self.board.height == 0 {
            return Err(invalid("board", "width and height must be non-zero"));
        }
        if !self.board.cell_size.is_finite() || self.board.cell_size <= 0.0 {
            return Err(invalid("board.cell_size", "must be finite and > 0"));
        }
        if !self.eat_radius.is_finite() || self.eat_radius < 0.0 {
            return Err(invalid("eat_radius", "must be finite and >= 0"));
        }
        if !self.score.start_seconds.is_finite() || self.score.start_seconds < 0.0 {
            return Err(invalid("score.start_seconds", "must be finite and >= 0"));
        }
        if self.tick_ms == 0 {
            return Err(invalid("tick_ms", "must be at least 1"));
        }
        if let Some(run_seconds) = self.run_seconds {
            if !run_seconds.is_finite() || run_seconds <= 0.0 {
                return Err(invalid("run_seconds", "must be finite and > 0"));
            }
        }
        Ok(())
    }

    pub fn tick_seconds(&self) -> f64 {
        self.tick_ms as f64 / 1000.0
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

fn parse_env<T: std::str::FromStr>(name: &'static str) -> Result<Option<T>> {
    let Ok(value) = env::var(name) else {
        return Ok(None);
    };
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<T>()
        .map(Some)
        .map_err(|_| ConfigError::InvalidEnv { name, value })
}
