use crate::error::{IntersectionError, ParameterError, Result};
use crate::math::Point2;

/// One of the three ways to pair four points `a, b, c, d` into two lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Partition {
    /// Lines `a-b` and `c-d`.
    AbCd,
    /// Lines `a-c` and `b-d`.
    AcBd,
    /// Lines `a-d` and `b-c`.
    AdBc,
}

impl Partition {
    /// All partitions, in enumeration order.
    pub const ALL: [Partition; 3] = [Partition::AbCd, Partition::AcBd, Partition::AdBc];

    /// Index pairs of the two lines.
    #[must_use]
    pub fn pairs(self) -> [(usize, usize); 2] {
        match self {
            Self::AbCd => [(0, 1), (2, 3)],
            Self::AcBd => [(0, 2), (1, 3)],
            Self::AdBc => [(0, 3), (1, 2)],
        }
    }
}

/// Where a candidate came from; used only to order and label candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateTag {
    /// The only solution (line-line crossing or a tangency).
    Single,
    /// The smaller root of a quadratic.
    FirstRoot,
    /// The larger root of a quadratic.
    SecondRoot,
    /// The crossing of one four-point partition.
    Partition(Partition),
}

/// A possible intersection point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionCandidate {
    pub point: Point2,
    pub tag: CandidateTag,
}

/// Axis-aligned rectangle used to discard candidates the host cannot show.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    min: Point2,
    max: Point2,
}

impl Extent {
    /// Creates an extent spanning two opposite corners, in any order.
    #[must_use]
    pub fn new(a: Point2, b: Point2) -> Self {
        Self {
            min: Point2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Returns `true` if `p` lies inside or on the border.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Outcome of an intersection once the candidate count is known.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Exactly one candidate; no choice needed.
    Resolved(Point2),
    /// Several candidates; the host must pick one by index and call
    /// [`Candidates::select`].
    NeedsDisambiguation(Vec<IntersectionCandidate>),
}

/// Non-empty, deterministically ordered list of intersection candidates.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidates {
    items: Vec<IntersectionCandidate>,
}

impl Candidates {
    /// Wraps roots of a quadratic (already in ascending order).
    pub(crate) fn from_roots(points: &[Point2]) -> Result<Self> {
        let items = match points {
            [] => return Err(IntersectionError::Disjoint.into()),
            [p] => vec![IntersectionCandidate {
                point: *p,
                tag: CandidateTag::Single,
            }],
            [first, second, ..] => vec![
                IntersectionCandidate {
                    point: *first,
                    tag: CandidateTag::FirstRoot,
                },
                IntersectionCandidate {
                    point: *second,
                    tag: CandidateTag::SecondRoot,
                },
            ],
        };
        Ok(Self { items })
    }

    pub(crate) fn single(point: Point2) -> Self {
        Self {
            items: vec![IntersectionCandidate {
                point,
                tag: CandidateTag::Single,
            }],
        }
    }

    pub(crate) fn from_items(items: Vec<IntersectionCandidate>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self { items })
        }
    }

    /// Number of candidates (always at least 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Candidates in presentation order.
    #[must_use]
    pub fn as_slice(&self) -> &[IntersectionCandidate] {
        &self.items
    }

    /// Candidate points in presentation order.
    #[must_use]
    pub fn points(&self) -> Vec<Point2> {
        self.items.iter().map(|c| c.point).collect()
    }

    /// Drops the candidates outside `extent`, keeping the order of the rest.
    ///
    /// # Errors
    ///
    /// Returns `IntersectionError::OutsideExtent` if no candidate remains.
    pub fn retain_within(mut self, extent: &Extent) -> Result<Self> {
        let before = self.items.len();
        self.items.retain(|c| extent.contains(&c.point));
        if self.items.is_empty() {
            return Err(IntersectionError::OutsideExtent { excluded: before }.into());
        }
        tracing::debug!(
            kept = self.items.len(),
            excluded = before - self.items.len(),
            "filtered candidates by extent"
        );
        Ok(self)
    }

    /// Turns the list into a final point or a request to choose.
    #[must_use]
    pub fn resolve(self) -> Resolution {
        if self.items.len() == 1 {
            Resolution::Resolved(self.items[0].point)
        } else {
            Resolution::NeedsDisambiguation(self.items)
        }
    }

    /// Picks a candidate.
    ///
    /// `choice` is an index into [`Candidates::as_slice`]. It may be omitted
    /// when there is only one candidate.
    ///
    /// # Errors
    ///
    /// - `IntersectionError::Ambiguous` if `choice` is `None` and there are
    ///   several candidates
    /// - `ParameterError::OutOfRange` if `choice` is not a valid index
    pub fn select(&self, choice: Option<usize>) -> Result<Point2> {
        match choice {
            None if self.items.len() == 1 => Ok(self.items[0].point),
            None => Err(IntersectionError::Ambiguous {
                candidates: self.items.len(),
            }
            .into()),
            Some(i) => self.items.get(i).map(|c| c.point).ok_or_else(|| {
                #[allow(clippy::cast_precision_loss)]
                let (value, max) = (i as f64, (self.items.len() - 1) as f64);
                ParameterError::OutOfRange {
                    parameter: "choice",
                    value,
                    min: 0.0,
                    max,
                }
                .into()
            }),
        }
    }
}
