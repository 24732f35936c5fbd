mod arc;
mod circle;
mod polygon;
mod polyline;
mod segment;

pub use arc::ThreePointArc;
pub use circle::Circle;
pub use polygon::Polygon;
pub use polyline::Polyline;
pub use segment::Segment;

use crate::math::Point2;

/// The closed set of feature geometries the host can hand over.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point2),
    Segment(Segment),
    Polyline(Polyline),
    Polygon(Polygon),
    CurveApproximation(ThreePointArc),
}

impl Geometry {
    /// Short name of the geometry kind, for error messages.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Point(_) => "point",
            Self::Segment(_) => "segment",
            Self::Polyline(_) => "line",
            Self::Polygon(_) => "polygon",
            Self::CurveApproximation(_) => "curve",
        }
    }
}

impl From<Point2> for Geometry {
    fn from(p: Point2) -> Self {
        Self::Point(p)
    }
}

impl From<Segment> for Geometry {
    fn from(s: Segment) -> Self {
        Self::Segment(s)
    }
}

impl From<Polyline> for Geometry {
    fn from(l: Polyline) -> Self {
        Self::Polyline(l)
    }
}

impl From<Polygon> for Geometry {
    fn from(p: Polygon) -> Self {
        Self::Polygon(p)
    }
}

impl From<ThreePointArc> for Geometry {
    fn from(a: ThreePointArc) -> Self {
        Self::CurveApproximation(a)
    }
}
