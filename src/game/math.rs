use super::types::Point;

pub fn add(a: Point, b: Point) -> Point {
  Point {
    x: a.x + b.x,
    y: a.y + b.y,
  }
}

pub fn sub(a: Point, b: Point) -> Point {
  Point {
    x: a.x - b.x,
    y: a.y - b.y,
  }
}

pub fn scale(point: Point, factor: f64) -> Point {
  Point {
    x: point.x * factor,
    y: point.y * factor,
  }
}

pub fn length_sq(point: Point) -> f64 {
  point.x * point.x + point.y * point.y
}

pub fn length(point: Point) -> f64 {
  length_sq(point).sqrt()
}

pub fn distance_sq(a: Point, b: Point) -> f64 {
  length_sq(sub(a, b))
}

pub fn distance(a: Point, b: Point) -> f64 {
  distance_sq(a, b).sqrt()
}

pub fn normalize(point: Point) -> Point {
  let len = length(point);
  if !len.is_finite() || len == 0.0 {
    return Point { x: 0.0, y: 0.0 };
  }
  Point {
    x: point.x / len,
    y: point.y / len,
  }
}

pub fn dot(a: Point, b: Point) -> f64 {
  a.x * b.x + a.y * b.y
}

/// z component of the 3D cross product of two planar vectors.
pub fn cross(a: Point, b: Point) -> f64 {
  a.x * b.y - a.y * b.x
}

pub fn lerp(a: Point, b: Point, t: f64) -> Point {
  Point {
    x: a.x + (b.x - a.x) * t,
    y: a.y + (b.y - a.y) * t,
  }
}

pub fn rotate(point: &mut Point, angle: f64) {
  let cos_a = angle.cos();
  let sin_a = angle.sin();
  let x = point.x;
  let y = point.y;
  point.x = cos_a * x - sin_a * y;
  point.y = sin_a * x + cos_a * y;
}

pub fn rotate_toward(current: Point, target: Point, max_angle: f64) -> Point {
  let current_norm = normalize(current);
  let target_norm = normalize(target);
  if length_sq(target_norm) == 0.0 {
    return current_norm;
  }
  if length_sq(current_norm) == 0.0 {
    return target_norm;
  }
  let dot_value = clamp(dot(current_norm, target_norm), -1.0, 1.0);
  let angle = dot_value.acos();
  if !angle.is_finite() || angle <= max_angle {
    return target_norm;
  }

  // Exact reversal has no preferred side; turn counter-clockwise.
  let side = cross(current_norm, target_norm);
  let signed = if side < 0.0 { -max_angle } else { max_angle };
  let mut rotated = current_norm;
  rotate(&mut rotated, signed);
  normalize(rotated)
}

pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
  value.min(max).max(min)
}

/// Maps `point` into `[0, size)` on both axes.
pub fn wrap(point: Point, size: Point) -> Point {
  Point {
    x: point.x.rem_euclid(size.x),
    y: point.y.rem_euclid(size.y),
  }
}

/// Shortest displacement from `a` to `b` on a torus of `size`.
pub fn wrapped_delta(a: Point, b: Point, size: Point) -> Point {
  let delta = sub(b, a);
  Point {
    x: delta.x - size.x * (delta.x / size.x).round(),
    y: delta.y - size.y * (delta.y / size.y).round(),
  }
}
