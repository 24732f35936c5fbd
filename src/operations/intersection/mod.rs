//! Intersection points of construction lines.
//!
//! Every solver returns [`Candidates`], an ordered non-empty list. When more
//! than one point qualifies the caller picks one with [`Candidates::select`].

mod candidates;
mod four_point;
mod intersect_lines;

pub use candidates::{
    CandidateTag, Candidates, Extent, IntersectionCandidate, Partition, Resolution,
};
pub use four_point::FourPointIntersect;
pub use intersect_lines::{IntersectLineCircle, IntersectLines, Intersectable};
