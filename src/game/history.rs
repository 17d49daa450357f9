use super::math::{add, distance, normalize, scale};
use super::types::Point;
use std::collections::VecDeque;

/// Recorded head trajectory, newest point first.
///
/// The leading point tracks the live head and is overwritten every tick; the
/// point behind it is the last committed sample.
#[derive(Debug, Clone, Default)]
pub struct PathHistory {
    points: VecDeque<Point>,
    resolution: f64,
}

impl PathHistory {
    pub fn new(resolution: f64) -> Self {
        Self {
            points: VecDeque::new(),
            resolution: resolution.max(0.0),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }

    /// Replaces the history with a straight trail of `length` behind `head`.
    pub fn seed(&mut self, head: Point, direction: Point, length: f64) {
        self.points.clear();
        self.points.push_front(head);
        let dir = normalize(direction);
        if length > 0.0 && (dir.x != 0.0 || dir.y != 0.0) {
            self.points.push_back(add(head, scale(dir, -length)));
        }
    }

    /// Commits the previous head once `position` is `resolution` away from the
    /// last committed sample; otherwise moves the live head in place.
    pub fn record(&mut self, position: Point) {
        let should_push = self
            .points
            .get(1)
            .map(|committed| distance(*committed, position) >= self.resolution)
            .unwrap_or(true);

        if should_push {
            self.points.push_front(position);
        } else if let Some(front) = self.points.front_mut() {
            *front = position;
        }
    }

    pub fn total_length(&self) -> f64 {
        self.points
            .iter()
            .zip(self.points.iter().skip(1))
            .map(|(a, b)| distance(*a, *b))
            .sum()
    }

    /// Drops every point past the first one at which the walked length reaches
    /// `retention`. Returns how many points were discarded.
    pub fn prune(&mut self, retention: f64) -> usize {
        let mut acc = 0.0;
        for i in 0..self.points.len().saturating_sub(1) {
            acc += distance(self.points[i], self.points[i + 1]);
            if acc >= retention {
                let keep = i + 2;
                let removed = self.points.len() - keep;
                self.points.truncate(keep);
                return removed;
            }
        }
        0
    }
}
