use crate::error::{IntersectionError, ParameterError, Result};
use crate::geometry::Segment;
use crate::math::vector_2d::{self, rotate_ccw, rotate_cw};
use crate::math::{coordinate_magnitude, Point2, Tolerance, Vector2};

/// Baseline endpoint that measure A is taken from.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    #[default]
    Start,
    End,
}

/// Direction change between two consecutive wall legs.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// +90°, counter-clockwise.
    Left,
    /// -90°, clockwise.
    Right,
}

/// How the distance list is laid out after Point_B.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Legs {
    /// Every distance runs parallel to the baseline, away from the anchor.
    #[default]
    AlongBaseline,
    /// Building outline: the first leg continues from Point_A through
    /// Point_B, and every following leg turns by the matching entry.
    Walls(Vec<Turn>),
}

/// Rectangular (orthogonal offset) mapping from a baseline.
///
/// Point_A lies at distance `a` along the baseline, measured from the
/// anchor towards the opposite endpoint. Point_B lies at distance `b` from
/// Point_A, perpendicular to the baseline on its left-hand side (negative `b`
/// goes right). The distance list then extends the chain leg by leg.
///
/// A chain point that coincides with the one before it is dropped, so
/// `a = b = 0` yields only the anchor and a trailing zero distance is
/// harmless.
#[derive(Debug, Clone)]
pub struct RectangularMapping {
    baseline: Segment,
    anchor: Anchor,
    a: f64,
    b: f64,
    distances: Vec<f64>,
    legs: Legs,
    tolerance: Tolerance,
}

impl RectangularMapping {
    /// Creates a new mapping with an empty distance list.
    #[must_use]
    pub fn new(baseline: Segment, anchor: Anchor, a: f64, b: f64) -> Self {
        Self {
            baseline,
            anchor,
            a,
            b,
            distances: Vec::new(),
            legs: Legs::default(),
            tolerance: Tolerance::default(),
        }
    }

    /// Sets the distances that follow Point_B.
    #[must_use]
    pub fn with_distances(mut self, distances: Vec<f64>) -> Self {
        self.distances = distances;
        self
    }

    /// Sets the leg layout.
    #[must_use]
    pub fn with_legs(mut self, legs: Legs) -> Self {
        self.legs = legs;
        self
    }

    /// Overrides the relative tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Computes the chain `[Point_A, Point_B, P_1, .., P_n]`.
    ///
    /// # Errors
    ///
    /// - `ParameterError::Invalid` if `a` or `b` is not finite
    /// - `ParameterError::OutOfRange` if a distance is negative or not finite
    /// - `IntersectionError::Ambiguous` if wall legs are requested without a
    ///   turn for every leg after the first
    pub fn execute(&self) -> Result<Vec<Point2>> {
        for (name, value) in [("A", self.a), ("B", self.b)] {
            if !value.is_finite() {
                return Err(ParameterError::Invalid(format!(
                    "measure {name} must be finite, got {value}"
                ))
                .into());
            }
        }
        for &d in &self.distances {
            check_distance(d)?;
        }

        let oriented = match self.anchor {
            Anchor::Start => self.baseline,
            Anchor::End => self.baseline.reversed(),
        };
        let along = oriented.direction();
        let normal = oriented.left_normal();

        let point_a = oriented.point_at_distance(self.a);
        let point_b = vector_2d::translate(&point_a, &normal, self.b);

        let coordinates =
            coordinate_magnitude(&[*oriented.start(), *oriented.end(), point_a, point_b]);
        let eps = self.tolerance.length_eps(oriented.length(), coordinates);

        let directions = self.leg_directions(&along, &normal)?;

        let mut chain = Vec::with_capacity(self.distances.len() + 2);
        push_distinct(&mut chain, point_a, eps);
        push_distinct(&mut chain, point_b, eps);

        let mut current = point_b;
        for (d, dir) in self.distances.iter().zip(&directions) {
            current = vector_2d::translate(&current, dir, *d);
            push_distinct(&mut chain, current, eps);
        }

        tracing::debug!(
            points = chain.len(),
            suppressed = self.distances.len() + 2 - chain.len(),
            "rectangular mapping"
        );
        Ok(chain)
    }

    /// Unit direction of each leg, one per distance.
    fn leg_directions(&self, along: &Vector2, normal: &Vector2) -> Result<Vec<Vector2>> {
        let n = self.distances.len();
        match &self.legs {
            Legs::AlongBaseline => Ok(vec![*along; n]),
            Legs::Walls(turns) => {
                if n == 0 {
                    return Ok(Vec::new());
                }
                if turns.len() < n - 1 {
                    return Err(IntersectionError::Ambiguous { candidates: 2 }.into());
                }
                let mut dir = if self.b < 0.0 { -*normal } else { *normal };
                let mut out = Vec::with_capacity(n);
                out.push(dir);
                for turn in &turns[..n - 1] {
                    dir = match turn {
                        Turn::Left => rotate_ccw(&dir),
                        Turn::Right => rotate_cw(&dir),
                    };
                    out.push(dir);
                }
                Ok(out)
            }
        }
    }
}

fn check_distance(d: f64) -> Result<()> {
    if d.is_finite() && d >= 0.0 {
        Ok(())
    } else {
        Err(ParameterError::OutOfRange {
            parameter: "distance",
            value: d,
            min: 0.0,
            max: f64::INFINITY,
        }
        .into())
    }
}

/// Appends `p` unless it coincides with the last point of the chain.
fn push_distinct(chain: &mut Vec<Point2>, p: Point2, eps: f64) {
    if let Some(last) = chain.last() {
        if vector_2d::distance(last, &p) <= eps {
            tracing::trace!(x = p.x, y = p.y, "suppressed duplicate chain point");
            return;
        }
    }
    chain.push(p);
}

/// Parses a comma-separated distance list such as `"8.2, 13.6, 8.2"`.
///
/// Blank input gives an empty list.
///
/// # Errors
///
/// - `ParameterError::Malformed` if an entry is empty or not a finite number
/// - `ParameterError::OutOfRange` if an entry is negative
pub fn parse_distances(input: &str) -> Result<Vec<f64>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }
    input
        .split(',')
        .map(|entry| -> Result<f64> {
            let entry = entry.trim();
            let value: f64 = entry
                .parse()
                .map_err(|_| ParameterError::Malformed(format!("`{entry}` is not a distance")))?;
            if !value.is_finite() {
                return Err(
                    ParameterError::Malformed(format!("`{entry}` is not a finite distance")).into(),
                );
            }
            check_distance(value)?;
            Ok(value)
        })
        .collect()
}
