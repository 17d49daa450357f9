use super::math::distance_sq;
use super::types::Point;

/// First point at or after `start` within `radius` of `head`.
pub fn find_collision(points: &[Point], head: Point, radius: f64, start: usize) -> Option<usize> {
    find_collision_by(points, head, radius, start, distance_sq)
}

/// `find_collision` under a caller-supplied squared distance.
pub fn find_collision_by<F>(
    points: &[Point],
    head: Point,
    radius: f64,
    start: usize,
    dist_sq: F,
) -> Option<usize>
where
    F: Fn(Point, Point) -> f64,
{
    if !(radius > 0.0) {
        return None;
    }
    let radius_sq = radius * radius;
    let start = start.min(points.len());
    points[start..]
        .iter()
        .position(|point| dist_sq(*point, head) <= radius_sq)
        .map(|offset| start + offset)
}

pub fn find_closest(points: &[Point], target: Point) -> Option<usize> {
    find_closest_by(points, target, distance_sq)
}

pub fn find_closest_by<F>(points: &[Point], target: Point, dist_sq: F) -> Option<usize>
where
    F: Fn(Point, Point) -> f64,
{
    let mut closest: Option<(usize, f64)> = None;
    for (index, point) in points.iter().enumerate() {
        let dist = dist_sq(*point, target);
        match closest {
            Some((_, best)) if dist >= best => {}
            _ => closest = Some((index, dist)),
        }
    }
    closest.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(count: usize) -> Vec<Point> {
        (0..count).map(|i| Point::new(-(i as f64), 0.0)).collect()
    }

    #[test]
    fn returns_lowest_matching_index() {
        let mut points = line(8);
        points[5] = Point::new(0.1, 0.0);
        points[6] = Point::new(0.0, 0.0);
        assert_eq!(find_collision(&points, Point::ZERO, 0.2, 1), Some(5));
    }

    #[test]
    fn dead_zone_excludes_points_near_head() {
        let points = line(5);
        assert_eq!(find_collision(&points, Point::ZERO, 0.5, 0), Some(0));
        assert_eq!(find_collision(&points, Point::ZERO, 0.5, 1), None);
        assert_eq!(find_collision(&points, Point::ZERO, 0.5, 99), None);
    }

    #[test]
    fn non_positive_radius_never_collides() {
        let points = line(3);
        assert_eq!(find_collision(&points, Point::ZERO, 0.0, 0), None);
        assert_eq!(find_collision(&points, Point::ZERO, -1.0, 0), None);
    }

    #[test]
    fn find_closest_picks_global_minimum() {
        let points = line(6);
        assert_eq!(find_closest(&points, Point::new(-3.2, 1.0)), Some(3));
        assert_eq!(find_closest(&[], Point::ZERO), None);
    }
}
