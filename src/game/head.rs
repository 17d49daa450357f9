use super::board::Board;
use super::input::{parse_direction, quantize_cardinal};
use super::math::{add, dot, normalize, rotate_toward, scale, sub};
use super::constants::MOVE_INTERVAL;
use super::types::{BoundsMode, HeadState, MovementMode, Point, SteeringMode};
use crate::config::HeadConfig;

const REVERSAL_DOT: f64 = -0.999;

#[derive(Debug, Clone)]
pub struct HeadController {
    position: Point,
    direction: Point,
    target_direction: Point,
    speed: f64,
    turn_rate: f64,
    steering: SteeringMode,
    bounds: BoundsMode,
    movement: MovementMode,
    move_interval: f64,
    move_timer: f64,
}

impl HeadController {
    pub fn new(config: &HeadConfig) -> Self {
        let direction = Point::new(1.0, 0.0);
        Self {
            position: Point::ZERO,
            direction,
            target_direction: direction,
            speed: config.speed.max(0.0),
            turn_rate: config.turn_rate.max(0.0),
            steering: config.steering,
            bounds: config.bounds,
            movement: config.movement,
            move_interval: if config.move_interval.is_finite() && config.move_interval > 0.0 {
                config.move_interval
            } else {
                MOVE_INTERVAL
            },
            move_timer: 0.0,
        }
    }

    pub fn reset(&mut self, position: Point, direction: Point) {
        let mut direction = parse_direction(direction).unwrap_or(Point::new(1.0, 0.0));
        if self.cardinal_only() {
            direction = quantize_cardinal(direction).unwrap_or(Point::new(1.0, 0.0));
        }
        self.position = position;
        self.direction = direction;
        self.target_direction = direction;
        self.move_timer = 0.0;
    }

    /// Updates the desired heading. Returns false when the input was ignored.
    pub fn steer(&mut self, input: Point) -> bool {
        let Some(desired) = parse_direction(input) else {
            return false;
        };
        if !self.cardinal_only() {
            self.target_direction = desired;
            return true;
        }
        let Some(cardinal) = quantize_cardinal(desired) else {
            return false;
        };
        if dot(cardinal, self.direction) < REVERSAL_DOT {
            return false;
        }
        self.target_direction = cardinal;
        true
    }

    /// Drag steering: head toward a world-space point.
    pub fn steer_toward(&mut self, target: Point) -> bool {
        self.steer(sub(target, self.position))
    }

    pub fn step(&mut self, dt: f64, board: &Board) -> Point {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        match self.movement {
            MovementMode::Continuous => self.step_continuous(dt, board),
            MovementMode::Grid => self.step_grid(dt, board),
        }
        self.position
    }

    fn step_continuous(&mut self, dt: f64, board: &Board) {
        self.direction = match self.steering {
            SteeringMode::Free => {
                rotate_toward(self.direction, self.target_direction, self.turn_rate * dt)
            }
            SteeringMode::Cardinal => self.target_direction,
        };
        let moved = add(self.position, scale(self.direction, self.speed * dt));
        self.position = board.confine(moved, self.bounds);
    }

    /// One cell along the queued direction once per move interval.
    fn step_grid(&mut self, dt: f64, board: &Board) {
        self.move_timer += dt;
        if self.move_timer < self.move_interval {
            return;
        }
        self.move_timer = 0.0;
        self.direction = self.target_direction;
        let (x, y) = board.world_to_cell(self.position);
        let next = (
            x + self.direction.x.round() as i64,
            y + self.direction.y.round() as i64,
        );
        let (cell_x, cell_y) = board.confine_cell(next, self.bounds);
        self.position = board.grid_to_world(cell_x, cell_y);
    }

    fn cardinal_only(&self) -> bool {
        self.steering == SteeringMode::Cardinal || self.movement == MovementMode::Grid
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn direction(&self) -> Point {
        self.direction
    }

    pub fn target_direction(&self) -> Point {
        normalize(self.target_direction)
    }

    pub fn state(&self) -> HeadState {
        HeadState {
            position: self.position,
            direction: self.direction,
        }
    }
}
