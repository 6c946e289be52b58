//! Subsumption-based merging of candidate runs.
//!
//! Accepted runs live in a flat arena (`Vec<Run>`), each holding its member
//! points in natural order. Insertion rules:
//! - candidate contained in an accepted run (equal included): dropped;
//! - candidate strictly containing accepted runs: those are removed, candidate kept;
//! - otherwise: kept.
//!
//! Partial overlaps are kept side by side; the forward-only pivot scan does not
//! produce them.

use tracing::trace;

use crate::point::Point;
use crate::segment::LineSegment;

#[derive(Clone, Debug)]
struct Run {
    members: Vec<Point>,
}

impl Run {
    fn contains_all(&self, other: &[Point]) -> bool {
        other.len() <= self.members.len()
            && other.iter().all(|p| self.members.binary_search(p).is_ok())
    }

    fn segment(&self) -> Option<LineSegment> {
        let first = *self.members.first()?;
        let last = *self.members.last()?;
        LineSegment::new(first, last)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Insertion {
    Accepted,
    Suppressed,
    /// Accepted after evicting this many contained runs.
    Replaced(usize),
}

#[derive(Clone, Debug, Default)]
pub(crate) struct SegmentDeduplicator {
    runs: Vec<Run>,
}

impl SegmentDeduplicator {
    /// `members` must be sorted in natural order.
    pub(crate) fn insert(&mut self, members: Vec<Point>) -> Insertion {
        debug_assert!(members.windows(2).all(|w| w[0] < w[1]));
        let candidate = Run { members };
        if self.runs.iter().any(|r| r.contains_all(&candidate.members)) {
            trace!(len = candidate.members.len(), "run suppressed: already covered");
            return Insertion::Suppressed;
        }
        let evicted: Vec<usize> = self
            .runs
            .iter()
            .enumerate()
            .filter(|(_, r)| candidate.contains_all(&r.members))
            .map(|(idx, _)| idx)
            .collect();
        // Descending so swap_remove never moves a pending index.
        for &idx in evicted.iter().rev() {
            self.runs.swap_remove(idx);
        }
        self.runs.push(candidate);
        if evicted.is_empty() {
            Insertion::Accepted
        } else {
            trace!(evicted = evicted.len(), "run replaced shorter runs");
            Insertion::Replaced(evicted.len())
        }
    }

    pub(crate) fn into_segments(self) -> Vec<LineSegment> {
        self.runs.iter().filter_map(Run::segment).collect()
    }
}
