use crate::error::{GeometryError, ParameterError, Result};
use crate::geometry::Polyline;
use crate::math::{coordinate_magnitude, rounding_floor, Point2, Tolerance, TOLERANCE};

/// Largest number of parts a line can be split into.
pub const MAX_PARTS: usize = 100_000;

/// Outcome of splitting a line into equal parts.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitResult {
    /// The parts in line order. Each keeps the original vertices it spans.
    pub parts: Vec<Polyline>,
    /// Length of every part.
    pub part_length: f64,
    /// Start of every part followed by the end of the last one.
    pub nodes: Vec<Point2>,
}

/// Splits a line into `parts` pieces of equal length.
///
/// Split points sit at arc lengths `k * L / parts` measured along the whole
/// line, so the pieces follow its bends.
#[derive(Debug, Clone)]
pub struct SplitLine {
    line: Polyline,
    parts: usize,
    tolerance: Tolerance,
}

impl SplitLine {
    /// Creates a new split operation.
    #[must_use]
    pub fn new(line: Polyline, parts: usize) -> Self {
        Self {
            line,
            parts,
            tolerance: Tolerance::default(),
        }
    }

    /// Overrides the relative tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the split.
    ///
    /// # Errors
    ///
    /// - `ParameterError::OutOfRange` if `parts` is zero or above [`MAX_PARTS`]
    /// - `GeometryError::Degenerate` if the line has zero length
    pub fn execute(&self) -> Result<SplitResult> {
        if !(1..=MAX_PARTS).contains(&self.parts) {
            #[allow(clippy::cast_precision_loss)]
            let (value, max) = (self.parts as f64, MAX_PARTS as f64);
            return Err(ParameterError::OutOfRange {
                parameter: "parts",
                value,
                min: 1.0,
                max,
            }
            .into());
        }

        let points = self.line.points();
        let cumulative = self.line.cumulative_lengths();
        let total = cumulative[cumulative.len() - 1];
        let coordinates = coordinate_magnitude(points);
        if total <= rounding_floor(coordinates).max(TOLERANCE) {
            return Err(GeometryError::Degenerate("cannot split a zero-length line".to_owned()).into());
        }

        #[allow(clippy::cast_precision_loss)]
        let n = self.parts as f64;
        let part_length = total / n;

        #[allow(clippy::cast_precision_loss)]
        let interior: Vec<f64> = (1..self.parts).map(|k| total * (k as f64) / n).collect();
        let mut nodes = Vec::with_capacity(self.parts + 1);
        nodes.push(points[0]);
        nodes.extend(self.line.points_at_lengths(&interior));
        nodes.push(points[points.len() - 1]);

        let eps = self.tolerance.length_eps(total, coordinates);
        let mut parts = Vec::with_capacity(self.parts);
        for (k, bounds) in nodes.windows(2).enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let (from, to) = (total * (k as f64) / n, total * ((k + 1) as f64) / n);
            let mut part = vec![bounds[0]];
            part.extend(
                points
                    .iter()
                    .zip(&cumulative)
                    .filter(|&(_, &c)| c > from + eps && c < to - eps)
                    .map(|(p, _)| *p),
            );
            part.push(bounds[1]);
            parts.push(Polyline::new(part)?);
        }

        tracing::debug!(parts = parts.len(), part_length, "split line");
        Ok(SplitResult {
            parts,
            part_length,
            nodes,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use approx::assert_relative_eq;

    fn line(coords: &[(f64, f64)]) -> Polyline {
        Polyline::new(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()).unwrap()
    }

    #[test]
    fn single_part_is_the_whole_line() {
        let input = line(&[(0.0, 0.0), (3.0, 0.0), (3.0, 4.0)]);
        let result = SplitLine::new(input.clone(), 1).execute().unwrap();
        assert_eq!(result.parts, vec![input]);
        assert_relative_eq!(result.part_length, 7.0);
    }

    #[test]
    fn nodes_follow_the_bend() {
        let input = line(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
        let result = SplitLine::new(input, 4).execute().unwrap();
        let expected = [(0.0, 0.0), (5.0, 0.0), (10.0, 0.0), (10.0, 5.0), (10.0, 10.0)];
        assert_eq!(result.nodes.len(), expected.len());
        for (p, &(x, y)) in result.nodes.iter().zip(&expected) {
            assert_relative_eq!(p.x, x, epsilon = 1e-9);
            assert_relative_eq!(p.y, y, epsilon = 1e-9);
        }
        // A vertex landing on a split point is not repeated inside a part.
        assert_eq!(result.parts[1].vertex_count(), 2);
        assert_eq!(result.parts[2].vertex_count(), 2);
    }

    #[test]
    fn part_keeps_the_corner_it_spans() {
        let input = line(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
        let result = SplitLine::new(input, 3).execute().unwrap();
        let middle = &result.parts[1];
        assert_eq!(middle.vertex_count(), 3);
        assert_eq!(middle.points()[1], Point2::new(10.0, 0.0));
        assert_relative_eq!(middle.length(), 20.0 / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn parts_are_equal_and_sum_to_total() {
        let input = line(&[
            (0.0, 0.0),
            (3.0, 4.0),
            (3.0, 4.0),
            (10.0, 4.0),
            (12.5, -1.0),
            (20.0, 7.0),
        ]);
        let total = input.length();
        for n in 1..=9 {
            let result = SplitLine::new(input.clone(), n).execute().unwrap();
            assert_eq!(result.parts.len(), n);
            let sum: f64 = result.parts.iter().map(Polyline::length).sum();
            assert_relative_eq!(sum, total, epsilon = 1e-9);
            for part in &result.parts {
                assert_relative_eq!(part.length(), result.part_length, epsilon = 1e-9);
            }
            assert_eq!(result.nodes.first(), input.points().first());
            assert_eq!(result.nodes.last(), input.points().last());
        }
    }

    #[test]
    fn zero_parts_is_rejected() {
        let err = SplitLine::new(line(&[(0.0, 0.0), (1.0, 0.0)]), 0)
            .execute()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }

    #[test]
    fn too_many_parts_is_rejected() {
        for parts in [MAX_PARTS + 1, usize::MAX] {
            let err = SplitLine::new(line(&[(0.0, 0.0), (1.0, 0.0)]), parts)
                .execute()
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidParameter);
        }
    }

    #[test]
    fn short_line_at_projected_coordinates_splits() {
        let (x, y) = (385_000.0, 6_672_000.0);
        let input = line(&[(x, y), (x + 0.004, y), (x + 0.004, y + 0.002)]);
        let result = SplitLine::new(input, 3).execute().unwrap();
        assert_eq!(result.parts.len(), 3);
        assert_relative_eq!(result.part_length, 0.002, epsilon = 1e-8);
        assert_relative_eq!(result.nodes[1].x - x, 0.002, epsilon = 1e-9);
        assert_relative_eq!(result.nodes[2].x - x, 0.004, epsilon = 1e-9);
    }

    #[test]
    fn zero_length_line_is_degenerate() {
        let err = SplitLine::new(line(&[(2.0, 2.0), (2.0, 2.0)]), 3)
            .execute()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DegenerateGeometry);
    }
}
