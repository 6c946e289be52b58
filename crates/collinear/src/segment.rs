use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CollinearError;
use crate::point::Point;

/// Immutable segment between the two extreme points of a collinear run.
///
/// Invariant: `p != q`, also enforced when deserializing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawSegment")]
pub struct LineSegment {
    p: Point,
    q: Point,
}

impl LineSegment {
    /// `None` if the endpoints coincide.
    pub fn new(p: Point, q: Point) -> Option<Self> {
        (p != q).then_some(Self { p, q })
    }

    /// Detectors only build segments from distinct sorted points.
    pub(crate) fn between(p: Point, q: Point) -> Self {
        debug_assert!(p != q, "segment endpoints must differ: {p}");
        Self { p, q }
    }

    #[inline]
    pub fn p(&self) -> Point {
        self.p
    }

    #[inline]
    pub fn q(&self) -> Point {
        self.q
    }

    #[inline]
    pub fn endpoints(&self) -> (Point, Point) {
        (self.p, self.q)
    }

    /// Same segment with endpoints in natural order.
    pub fn normalized(&self) -> Self {
        if self.q < self.p {
            Self {
                p: self.q,
                q: self.p,
            }
        } else {
            *self
        }
    }
}

/// Unchecked wire form of `LineSegment`.
#[derive(Deserialize)]
struct RawSegment {
    p: Point,
    q: Point,
}

impl TryFrom<RawSegment> for LineSegment {
    type Error = CollinearError;

    fn try_from(raw: RawSegment) -> Result<Self, Self::Error> {
        LineSegment::new(raw.p, raw.q).ok_or(CollinearError::CoincidentPoints {
            a: raw.p,
            b: raw.q,
        })
    }
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.p, self.q)
    }
}
