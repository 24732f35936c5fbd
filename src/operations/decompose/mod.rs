//! Breaking features into simpler parts.

mod explode;
mod split;

pub use explode::{Explode, ExplodeLine, ExplodeLineToPoints, ExplodePolygon};
pub use split::{SplitLine, SplitResult, MAX_PARTS};
