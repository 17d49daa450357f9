use super::constants::MIN_INPUT_SQ;
use super::math::{length_sq, normalize};
use super::types::Point;

pub fn parse_direction(value: Point) -> Option<Point> {
    if !value.x.is_finite() || !value.y.is_finite() {
        return None;
    }
    if length_sq(value) <= MIN_INPUT_SQ {
        return None;
    }
    Some(normalize(value))
}

/// Maps a unit input onto one of the four axes, horizontal first.
pub fn quantize_cardinal(value: Point) -> Option<Point> {
    if value.x > 0.5 {
        Some(Point::new(1.0, 0.0))
    } else if value.x < -0.5 {
        Some(Point::new(-1.0, 0.0))
    } else if value.y > 0.5 {
        Some(Point::new(0.0, 1.0))
    } else if value.y < -0.5 {
        Some(Point::new(0.0, -1.0))
    } else {
        None
    }
}
