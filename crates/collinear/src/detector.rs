//! Shared read-only surface of both detectors.
//!
//! All work happens at construction; accessors only expose the stored result,
//! so repeated calls return the same segments. Order is unspecified.

use crate::segment::LineSegment;

pub trait CollinearDetector {
    /// Segments found at construction.
    fn segments(&self) -> &[LineSegment];

    fn number_of_segments(&self) -> usize {
        self.segments().len()
    }

    fn into_segments(self) -> Vec<LineSegment>
    where
        Self: Sized;
}
