//! Errors surfaced while building a detector.
//!
//! Every variant aborts construction; there is no partial result.

use std::fmt;

use crate::point::Point;

#[derive(Clone, Debug, PartialEq)]
pub enum CollinearError {
    /// The point set is absent or has zero length.
    EmptyInput,
    /// Entry `index` of the point set is absent.
    NullElement { index: usize },
    /// `point` occurs more than once.
    DuplicatePoint { point: Point },
    /// A slope was taken between two coincident points. Unreachable after
    /// validation; seeing it means a duplicate leaked through.
    CoincidentPoints { a: Point, b: Point },
    /// Rejected `DetectCfg`.
    InvalidConfig { reason: String },
}

impl CollinearError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for CollinearError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "no points were given"),
            Self::NullElement { index } => write!(f, "point {index} is missing"),
            Self::DuplicatePoint { point } => write!(f, "point {point} occurs more than once"),
            Self::CoincidentPoints { a, b } => write!(
                f,
                "internal invariant violated: slope between coincident points {a} and {b}"
            ),
            Self::InvalidConfig { reason } => write!(f, "invalid detector config: {reason}"),
        }
    }
}

impl std::error::Error for CollinearError {}
