use thiserror::Error;

use crate::math::Point2;

/// Top-level error type for the construction engine.
#[derive(Debug, Error)]
pub enum KimuError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Intersection(#[from] IntersectionError),

    #[error(transparent)]
    Parameter(#[from] ParameterError),
}

impl KimuError {
    /// Returns the coarse failure category, for hosts that map errors to messages.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Geometry(_) => ErrorKind::DegenerateGeometry,
            Self::Intersection(IntersectionError::Ambiguous { .. }) => ErrorKind::AmbiguousResult,
            Self::Intersection(_) => ErrorKind::NoIntersection,
            Self::Parameter(_) => ErrorKind::InvalidParameter,
        }
    }
}

/// Coarse failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    DegenerateGeometry,
    NoIntersection,
    InvalidParameter,
    AmbiguousResult,
}

/// Errors raised when input geometry cannot support the requested construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length segment between ({}, {}) and ({}, {})", .start.x, .start.y, .end.x, .end.y)]
    ZeroLengthSegment { start: Point2, end: Point2 },

    #[error("points are collinear, no circle passes through them")]
    Collinear,

    #[error("circle radius is zero")]
    ZeroRadius,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors raised when an intersection does not exist or cannot be chosen.
#[derive(Debug, Error)]
pub enum IntersectionError {
    #[error("lines are parallel, there is no intersection point")]
    Parallel,

    #[error("line and circle do not intersect")]
    Disjoint,

    #[error("circles are concentric, there is no intersection point")]
    Concentric,

    #[error("all {excluded} candidate points lie outside the extent")]
    OutsideExtent { excluded: usize },

    #[error("{candidates} candidate points exist, a choice is required")]
    Ambiguous { candidates: usize },
}

/// Errors raised when numeric parameters are out of range or malformed.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("malformed value: {0}")]
    Malformed(String),

    #[error("invalid input: {0}")]
    Invalid(String),
}

/// Convenience type alias for results using [`KimuError`].
pub type Result<T> = std::result::Result<T, KimuError>;
