//! Integer points, slopes and the collinearity predicate.
//!
//! - `Point`: immutable 2D integer point; `Ord` is the natural order
//!   (`y` ascending, ties by `x` ascending).
//! - `Slope`: slope between two points with explicit vertical/degenerate cases.
//! - `Collinearity`: outcome of the 3-point test; the degenerate case is a typed
//!   outcome instead of a magic float.
//!
//! Sentinels
//! - A vertical pair (equal `x`, different `y`) is `Slope::Vertical` and sorts
//!   after every finite slope.
//! - A coincident pair is `Slope::Degenerate` and sorts before every finite
//!   slope. Validation rejects duplicates, so detectors only meet it on a bug.
//! - Horizontal pairs yield `+0.0`, never `-0.0`.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cfg::SLOPE_EPS;
use crate::error::CollinearError;

/// Immutable point with integer coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Slope of the line from `self` to `other`.
    pub fn slope_to(&self, other: Point) -> Slope {
        let dx = i64::from(other.x) - i64::from(self.x);
        let dy = i64::from(other.y) - i64::from(self.y);
        match (dx, dy) {
            (0, 0) => Slope::Degenerate,
            (0, _) => Slope::Vertical,
            (_, 0) => Slope::Finite(0.0),
            _ => Slope::Finite(dy as f64 / dx as f64),
        }
    }

    /// Total order over other points by slope from `self`.
    ///
    /// Vertical partners sort last, a coincident partner sorts first.
    pub fn slope_order(self) -> impl Fn(&Point, &Point) -> Ordering {
        move |a: &Point, b: &Point| {
            let sa = self.slope_to(*a).as_f64();
            let sb = self.slope_to(*b).as_f64();
            sa.total_cmp(&sb)
        }
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Slope between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Slope {
    Finite(f64),
    /// Equal `x`, different `y`.
    Vertical,
    /// Same point.
    Degenerate,
}

impl Slope {
    /// Real-valued view used for ordering: `Vertical` is `+inf`, `Degenerate` is `-inf`.
    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Slope::Finite(s) => s,
            Slope::Vertical => f64::INFINITY,
            Slope::Degenerate => f64::NEG_INFINITY,
        }
    }

    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Slope::Vertical)
    }

    /// Equality within `eps`. Vertical only matches vertical; degenerate
    /// matches nothing, itself included.
    pub fn approx_eq(self, other: Slope, eps: f64) -> bool {
        match (self, other) {
            (Slope::Finite(a), Slope::Finite(b)) => (a - b).abs() < eps,
            (Slope::Vertical, Slope::Vertical) => true,
            _ => false,
        }
    }
}

/// Outcome of the 3-point collinearity test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collinearity {
    Collinear,
    NotCollinear,
    /// Two consecutive arguments coincide.
    Coincident { a: Point, b: Point },
}

impl Collinearity {
    /// Compare slope(p1→p2) with slope(p2→p3) within `eps`.
    pub fn of(p1: Point, p2: Point, p3: Point, eps: f64) -> Self {
        match (p1.slope_to(p2), p2.slope_to(p3)) {
            (Slope::Degenerate, _) => Collinearity::Coincident { a: p1, b: p2 },
            (_, Slope::Degenerate) => Collinearity::Coincident { a: p2, b: p3 },
            (s1, s2) => Self::from_bool(s1.approx_eq(s2, eps)),
        }
    }

    #[inline]
    fn from_bool(collinear: bool) -> Self {
        if collinear {
            Collinearity::Collinear
        } else {
            Collinearity::NotCollinear
        }
    }

    /// `Coincident` becomes `CollinearError::CoincidentPoints`.
    pub fn into_result(self) -> Result<bool, CollinearError> {
        match self {
            Collinearity::Collinear => Ok(true),
            Collinearity::NotCollinear => Ok(false),
            Collinearity::Coincident { a, b } => Err(CollinearError::CoincidentPoints { a, b }),
        }
    }
}

/// Collinearity of three points with the default tolerance.
pub fn are_collinear(p1: Point, p2: Point, p3: Point) -> Result<bool, CollinearError> {
    Collinearity::of(p1, p2, p3, SLOPE_EPS).into_result()
}
