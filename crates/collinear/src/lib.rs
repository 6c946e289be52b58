//! Collinear point detection in the plane.
//!
//! Given a finite set of integer points, find every maximal straight-line
//! segment that passes through four or more of them.
//!
//! Two detectors share one contract (`CollinearDetector`):
//! - `FastCollinearPoints`: sort-by-slope per pivot, Θ(n² log n). Reports each
//!   maximal run exactly once, spanning its two extreme points.
//! - `BruteCollinearPoints`: all 4-combinations, Θ(n⁴). Reports every 4-point
//!   collinear subset; used as a reference on small inputs.
//!
//! Conventions
//! - Natural point order is `y` ascending, then `x` ascending.
//! - Slopes are compared with a fixed tolerance (`cfg::SLOPE_EPS`); vertical
//!   pairs use a dedicated `Slope::Vertical` instead of an infinite float.
//! - Input is validated up front; detectors never return partial results.

pub mod brute;
pub mod cfg;
pub mod detector;
pub mod error;
pub mod fast;
mod input;
pub mod point;
pub mod rand;
pub mod segment;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use brute::BruteCollinearPoints;
pub use cfg::DetectCfg;
pub use detector::CollinearDetector;
pub use error::CollinearError;
pub use fast::FastCollinearPoints;
pub use point::{are_collinear, Collinearity, Point, Slope};
pub use segment::LineSegment;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::rand::{grid_points, random_points, with_planted_line, Bounds, ReplayToken};
    pub use crate::{
        BruteCollinearPoints, CollinearDetector, CollinearError, DetectCfg, FastCollinearPoints,
        LineSegment, Point, Slope,
    };
}
