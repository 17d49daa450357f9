use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
  pub x: f64,
  pub y: f64,
}

impl Point {
  pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

  pub const fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeadState {
  pub position: Point,
  pub direction: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundsMode {
  #[default]
  Clamp,
  Wrap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SteeringMode {
  #[default]
  Free,
  Cardinal,
}

/// Continuous motion at `speed`, or one cell per move interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementMode {
  #[default]
  Continuous,
  Grid,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
  /// Raw directional input (stick or keys). Ignored when too small.
  pub direction: Option<Point>,
  /// Drag target in world space; takes precedence over `direction`.
  pub drag_target: Option<Point>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
  pub removed_segments: usize,
  pub ate_food: bool,
  pub finished: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
  #[serde(rename = "sessionId")]
  pub session_id: String,
  pub tick: u64,
  pub head: HeadState,
  pub body: Vec<Point>,
  #[serde(rename = "totalSegments")]
  pub total_segments: usize,
  pub food: Option<Point>,
  pub score: i64,
  #[serde(rename = "timeRemaining")]
  pub time_remaining: f64,
  pub finished: bool,
}
