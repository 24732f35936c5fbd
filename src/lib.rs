//! Planar construction geometry for GIS mapping tools.
//!
//! Intersections of construction lines and circles, rectangular (orthogonal
//! offset) mapping from a baseline, line displacement, and feature
//! decomposition. All coordinates are plain projected values; nothing here
//! knows about coordinate reference systems.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{ErrorKind, KimuError, Result};
pub use geometry::{Circle, Geometry, Polygon, Polyline, Segment, ThreePointArc};
pub use math::{Point2, Tolerance, Vector2};
