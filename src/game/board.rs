use super::math::{clamp, distance, wrap};
use super::types::{BoundsMode, Point};
use crate::config::BoardConfig;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct Board {
    width: u32,
    height: u32,
    cell_size: f64,
}

impl Board {
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            width: config.width.max(1),
            height: config.height.max(1),
            cell_size: if config.cell_size.is_finite() && config.cell_size > 0.0 {
                config.cell_size
            } else {
                1.0
            },
        }
    }

    pub fn world_size(&self) -> Point {
        Point {
            x: self.width as f64 * self.cell_size,
            y: self.height as f64 * self.cell_size,
        }
    }

    pub fn grid_to_world(&self, cell_x: u32, cell_y: u32) -> Point {
        Point {
            x: cell_x as f64 * self.cell_size,
            y: cell_y as f64 * self.cell_size,
        }
    }

    pub fn start_position(&self) -> Point {
        self.grid_to_world(self.width / 2, self.height / 2)
    }

    pub fn clamp_position(&self, position: Point) -> Point {
        let size = self.world_size();
        Point {
            x: clamp(position.x, 0.0, size.x),
            y: clamp(position.y, 0.0, size.y),
        }
    }

    pub fn wrap_position(&self, position: Point) -> Point {
        wrap(position, self.world_size())
    }

    pub fn confine(&self, position: Point, mode: BoundsMode) -> Point {
        match mode {
            BoundsMode::Clamp => self.clamp_position(position),
            BoundsMode::Wrap => self.wrap_position(position),
        }
    }

    /// Nearest cell to a world position. May lie off the board.
    pub fn world_to_cell(&self, position: Point) -> (i64, i64) {
        (
            (position.x / self.cell_size).round() as i64,
            (position.y / self.cell_size).round() as i64,
        )
    }

    /// Brings a cell back onto the board by wrapping or clamping.
    pub fn confine_cell(&self, cell: (i64, i64), mode: BoundsMode) -> (u32, u32) {
        let (width, height) = (i64::from(self.width), i64::from(self.height));
        let (x, y) = match mode {
            BoundsMode::Clamp => (cell.0.clamp(0, width - 1), cell.1.clamp(0, height - 1)),
            BoundsMode::Wrap => (cell.0.rem_euclid(width), cell.1.rem_euclid(height)),
        };
        (x as u32, y as u32)
    }

    /// Picks a random cell centre farther than `min_distance` from every
    /// occupied point. Falls back to the origin when no cell qualifies.
    pub fn random_free_position<R: Rng + ?Sized>(
        &self,
        occupied: &[Point],
        min_distance: f64,
        rng: &mut R,
    ) -> Point {
        let max_tries = (self.width * self.height) as usize;
        for _ in 0..max_tries {
            let candidate =
                self.grid_to_world(rng.gen_range(0..self.width), rng.gen_range(0..self.height));
            let is_occupied = occupied
                .iter()
                .any(|point| distance(*point, candidate) <= min_distance);
            if !is_occupied {
                return candidate;
            }
        }
        Point::ZERO
    }
}
