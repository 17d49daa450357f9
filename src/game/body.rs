use super::constants::MIN_SPACING;
use super::math::{distance, lerp};
use super::types::Point;

const LENGTH_EPSILON: f64 = 1e-9;

/// Resamples the polyline `head -> path[0] -> path[1] -> ...` at every multiple
/// of `spacing`, emitting at most `count` points. Stops early when the path
/// runs out.
pub fn rebuild_points<I>(head: Point, path: I, count: usize, spacing: f64) -> Vec<Point>
where
    I: IntoIterator<Item = Point>,
{
    let mut points = Vec::with_capacity(count);
    if count == 0 {
        return points;
    }
    let spacing = if spacing.is_finite() {
        spacing.max(MIN_SPACING)
    } else {
        MIN_SPACING
    };

    let mut prev = head;
    let mut walked = 0.0;
    let mut next_distance = spacing;

    for point in path {
        let seg_len = distance(prev, point);
        if seg_len <= LENGTH_EPSILON {
            prev = point;
            continue;
        }

        while next_distance <= walked + seg_len + LENGTH_EPSILON {
            let t = ((next_distance - walked) / seg_len).min(1.0);
            points.push(lerp(prev, point, t));
            if points.len() == count {
                return points;
            }
            next_distance = spacing * (points.len() + 1) as f64;
        }

        walked += seg_len;
        prev = point;
    }

    points
}
