use super::body::rebuild_points;
use super::collision;
use super::history::PathHistory;
use super::math::{add, distance_sq, length_sq, normalize, wrap, wrapped_delta};
use super::types::Point;
use crate::config::BodyConfig;

const DEFAULT_DIRECTION: Point = Point { x: 1.0, y: 0.0 };

/// Trailing body of the snake.
///
/// The visible points are a view over the recorded head path: every rebuild
/// resamples the path from scratch, so growth and truncation only ever change
/// `target_segments`.
///
/// On a wrapping board the history is kept unwrapped, so the trail stays
/// continuous across the seam; `body_points` are folded back onto the board.
#[derive(Debug, Clone)]
pub struct SnakeBody {
    history: PathHistory,
    points: Vec<Point>,
    wrap_size: Option<Point>,
    target_segments: usize,
    head: Point,
    direction: Point,
    segment_spacing: f64,
    points_per_segment: usize,
    retention_margin: usize,
    initial_segments: usize,
    min_trim_segments: usize,
}

impl SnakeBody {
    pub fn new(config: &BodyConfig) -> Self {
        let config = config.sanitized();
        Self {
            history: PathHistory::new(config.path_resolution),
            points: Vec::new(),
            wrap_size: None,
            target_segments: config.initial_segments,
            head: Point::ZERO,
            direction: DEFAULT_DIRECTION,
            segment_spacing: config.segment_spacing,
            points_per_segment: config.points_per_segment,
            retention_margin: config.retention_margin,
            initial_segments: config.initial_segments,
            min_trim_segments: config.min_trim_segments,
        }
    }

    /// Treats the plane as a torus of `size`. `None` restores a flat plane.
    pub fn set_wrap(&mut self, size: Option<Point>) {
        self.wrap_size = size.filter(|size| size.x > 0.0 && size.y > 0.0);
    }

    pub fn reset(&mut self, head: Point, direction: Point) {
        self.target_segments = self.initial_segments;
        self.head = head;
        self.direction = unit_or_default(direction, DEFAULT_DIRECTION);
        self.history.seed(head, self.direction, self.retention_length());
        self.rebuild();
    }

    /// Records the new head position, resamples the body and drops history
    /// that the current length no longer reaches.
    pub fn advance(&mut self, head: Point, direction: Point, grow: bool) {
        if grow {
            self.grow();
        }
        self.direction = unit_or_default(direction, self.direction);
        let head = if self.history.is_empty() {
            self.history.seed(head, self.direction, self.retention_length());
            head
        } else {
            let head = self.unwrap_near_head(head);
            self.history.record(head);
            head
        };
        self.head = head;
        self.rebuild();
        self.history.prune(self.retention_length());
    }

    pub fn grow(&mut self) {
        self.target_segments += 1;
    }

    /// Cuts the body at the segment containing `collision_index`. The struck
    /// segment and everything towards the tail is discarded.
    pub fn trim(&mut self, collision_index: usize, head: Point) -> usize {
        debug_assert!(
            collision_index < self.points.len(),
            "trim index {collision_index} out of range for {} points",
            self.points.len()
        );
        let segment_index = self.segment_index(collision_index).min(self.target_segments);
        let removed = self.target_segments - segment_index;
        self.target_segments = segment_index;
        self.head = self.unwrap_near_head(head);
        self.rebuild();
        removed
    }

    pub fn remove_tail(&mut self, count: usize) -> usize {
        let removed = count.min(self.target_segments);
        self.target_segments -= removed;
        self.points.truncate(self.point_capacity());
        removed
    }

    pub fn set_target_segments(&mut self, target_segments: usize) {
        self.target_segments = target_segments;
    }

    pub fn rebuild(&mut self) {
        let mut points = rebuild_points(
            self.head,
            self.history.iter(),
            self.point_capacity(),
            self.sub_segment_spacing(),
        );
        if let Some(size) = self.wrap_size {
            for point in &mut points {
                *point = wrap(*point, size);
            }
        }
        self.points = points;
    }

    pub fn find_collision(&self, head: Point, radius: f64) -> Option<usize> {
        let start = self.min_trim_point_index();
        match self.wrap_size {
            Some(size) => collision::find_collision_by(&self.points, head, radius, start, |a, b| {
                length_sq(wrapped_delta(a, b, size))
            }),
            None => collision::find_collision_by(&self.points, head, radius, start, distance_sq),
        }
    }

    pub fn find_closest(&self, point: Point) -> Option<usize> {
        match self.wrap_size {
            Some(size) => collision::find_closest_by(&self.points, point, |a, b| {
                length_sq(wrapped_delta(a, b, size))
            }),
            None => collision::find_closest_by(&self.points, point, distance_sq),
        }
    }

    pub fn body_points(&self) -> &[Point] {
        &self.points
    }

    pub fn target_segments(&self) -> usize {
        self.target_segments
    }

    /// Logical segments currently visible, rounding a partial segment up.
    pub fn segment_count(&self) -> usize {
        self.points.len().div_ceil(self.points_per_segment)
    }

    /// Body segments plus the head. A partial segment counts as whole, so with
    /// one point per segment this is the point count plus one.
    pub fn total_segments(&self) -> usize {
        self.segment_count() + 1
    }

    pub fn segment_index(&self, point_index: usize) -> usize {
        point_index / self.points_per_segment
    }

    pub fn point_capacity(&self) -> usize {
        self.target_segments * self.points_per_segment
    }

    pub fn min_trim_point_index(&self) -> usize {
        self.min_trim_segments * self.points_per_segment
    }

    pub fn points_per_segment(&self) -> usize {
        self.points_per_segment
    }

    pub fn segment_spacing(&self) -> f64 {
        self.segment_spacing
    }

    pub fn sub_segment_spacing(&self) -> f64 {
        self.segment_spacing / self.points_per_segment as f64
    }

    pub(crate) fn history(&self) -> &PathHistory {
        &self.history
    }

    /// Continues the unwrapped trail from the previous head when the board wraps.
    fn unwrap_near_head(&self, head: Point) -> Point {
        match self.wrap_size {
            Some(size) => add(self.head, wrapped_delta(self.head, head, size)),
            None => head,
        }
    }

    fn retention_length(&self) -> f64 {
        (self.target_segments + self.retention_margin) as f64 * self.segment_spacing
    }
}

fn unit_or_default(direction: Point, fallback: Point) -> Point {
    if length_sq(direction) > 0.0 && direction.x.is_finite() && direction.y.is_finite() {
        normalize(direction)
    } else {
        fallback
    }
}
