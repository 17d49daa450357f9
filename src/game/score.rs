use crate::config::ScoreConfig;

#[derive(Debug, Clone)]
pub struct ScoreTracker {
    score: i64,
    points_per_food: i64,
    points_per_removed_segment: i64,
}

impl ScoreTracker {
    pub fn new(config: &ScoreConfig) -> Self {
        Self {
            score: 0,
            points_per_food: config.points_per_food,
            points_per_removed_segment: config.points_per_removed_segment,
        }
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn add_food_points(&mut self) -> i64 {
        self.score += self.points_per_food;
        self.score
    }

    /// Deducts for segments lost to a bite. Never drops below zero.
    pub fn remove_body_points(&mut self, removed_segments: usize) -> i64 {
        let deducted = (removed_segments as i64).saturating_mul(self.points_per_removed_segment);
        self.score = (self.score - deducted).max(0);
        self.score
    }

    pub fn reset(&mut self) {
        self.score = 0;
    }
}
