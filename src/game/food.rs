use super::board::Board;
use super::math::distance_sq;
use super::types::Point;
use rand::Rng;

/// Holds the single active food item.
#[derive(Debug, Clone, Default)]
pub struct FoodSpawner {
    active: Option<Point>,
    min_distance: f64,
}

impl FoodSpawner {
    pub fn new(min_distance: f64) -> Self {
        Self {
            active: None,
            min_distance: min_distance.max(0.0),
        }
    }

    pub fn spawn<R: Rng + ?Sized>(
        &mut self,
        board: &Board,
        occupied: &[Point],
        rng: &mut R,
    ) -> Point {
        let position = board.random_free_position(occupied, self.min_distance, rng);
        self.active = Some(position);
        position
    }

    pub fn place(&mut self, position: Point) {
        self.active = Some(position);
    }

    pub fn position(&self) -> Option<Point> {
        self.active
    }

    pub fn is_food_near(&self, position: Point, radius: f64) -> bool {
        let Some(food) = self.active else {
            return false;
        };
        radius >= 0.0 && distance_sq(food, position) <= radius * radius
    }
}
