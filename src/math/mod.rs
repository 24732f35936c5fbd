pub mod circle_2d;
pub mod intersect_2d;
pub mod vector_2d;

mod tolerance;

pub use tolerance::{rounding_floor, Tolerance};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Absolute floor for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Largest absolute coordinate among `points`.
///
/// Bounds the rounding error of differences between the coordinates; see
/// [`rounding_floor`].
#[must_use]
pub fn coordinate_magnitude(points: &[Point2]) -> f64 {
    points
        .iter()
        .fold(0.0_f64, |acc, p| acc.max(p.x.abs()).max(p.y.abs()))
}

/// Larger side of the axis-aligned box around `points`.
///
/// Unlike [`coordinate_magnitude`] this does not change when the points are
/// moved together.
#[must_use]
pub fn span(points: &[Point2]) -> f64 {
    let Some(first) = points.first() else {
        return 0.0;
    };
    let (min, max) = points.iter().fold((*first, *first), |(lo, hi), p| {
        (
            Point2::new(lo.x.min(p.x), lo.y.min(p.y)),
            Point2::new(hi.x.max(p.x), hi.y.max(p.y)),
        )
    });
    (max.x - min.x).max(max.y - min.y)
}
