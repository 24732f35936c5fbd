//! Planar vector helpers.
//!
//! Rotation convention: `+90°` is counter-clockwise, so [`rotate_ccw`] of the
//! direction of travel points to the left-hand side.

use super::{Point2, Vector2, TOLERANCE};

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    (b - a).norm()
}

/// Unit vector pointing from `a` to `b`, or `None` if the points coincide.
#[must_use]
pub fn unit_direction(a: &Point2, b: &Point2) -> Option<Vector2> {
    let d = b - a;
    let len = d.norm();
    if len < TOLERANCE {
        return None;
    }
    Some(d / len)
}

/// Rotates a vector by +90° (counter-clockwise).
#[must_use]
pub fn rotate_ccw(v: &Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// Rotates a vector by -90° (clockwise).
#[must_use]
pub fn rotate_cw(v: &Vector2) -> Vector2 {
    Vector2::new(v.y, -v.x)
}

/// 2D cross product (z component of the 3D cross product).
#[must_use]
pub fn cross(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Translates `origin` by `distance` along `dir`.
///
/// `dir` is expected to be a unit vector; `distance` may be negative.
#[must_use]
pub fn translate(origin: &Point2, dir: &Vector2, distance: f64) -> Point2 {
    origin + dir * distance
}

/// Linear interpolation: `a + (b - a) * t`.
///
/// `t` outside `[0, 1]` extrapolates along the line through `a` and `b`.
#[must_use]
pub fn lerp(a: &Point2, b: &Point2, t: f64) -> Point2 {
    a + (b - a) * t
}

/// Signed scalar projection of `p` onto the line through `origin` along unit `dir`.
#[must_use]
pub fn project(p: &Point2, origin: &Point2, dir: &Vector2) -> f64 {
    (p - origin).dot(dir)
}
