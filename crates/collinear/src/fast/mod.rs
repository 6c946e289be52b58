//! Sort-based detector for maximal collinear runs, Θ(n² log n).
//!
//! Per pivot `p0` (natural order):
//! 1. Build an index view over the points strictly after `p0` and sort it by
//!    slope from `p0`. The sort is stable, so equal slopes keep natural order.
//!    Points before `p0` are skipped: a run through them was already seen when
//!    they were the pivot.
//! 2. Scan the view for runs of consecutive entries whose slope from `p0`
//!    matches the slope from `p0` of the entry before it, within eps. Slopes are
//!    always taken from `p0`, never between two run members.
//! 3. A run with at least 3 entries (4 points with `p0`) is handed whole to the
//!    deduplicator, which drops it if an accepted run already contains it and
//!    evicts accepted runs it strictly contains.
//!
//! The sorted snapshot is shared read-only by all pivots; only the index view
//! is reordered, and it is rebuilt from scratch for each pivot.

mod dedup;

use tracing::debug;

use crate::cfg::{DetectCfg, MIN_SEGMENT_POINTS};
use crate::detector::CollinearDetector;
use crate::error::CollinearError;
use crate::input::Snapshot;
use crate::point::{Point, Slope};
use crate::segment::LineSegment;

use dedup::{Insertion, SegmentDeduplicator};

#[derive(Clone, Debug)]
pub struct FastCollinearPoints {
    segments: Vec<LineSegment>,
}

impl FastCollinearPoints {
    pub fn new(points: &[Point]) -> Result<Self, CollinearError> {
        Self::with_cfg(points, DetectCfg::default())
    }

    pub fn with_cfg(points: &[Point], cfg: DetectCfg) -> Result<Self, CollinearError> {
        cfg.validate()?;
        let snapshot = Snapshot::from_points(points)?;
        Self::search(&snapshot, cfg)
    }

    /// Like `new`, but absent entries are rejected with `NullElement`.
    pub fn from_entries(entries: &[Option<Point>]) -> Result<Self, CollinearError> {
        let snapshot = Snapshot::from_entries(entries.iter().copied())?;
        Self::search(&snapshot, DetectCfg::default())
    }

    fn search(snapshot: &Snapshot, cfg: DetectCfg) -> Result<Self, CollinearError> {
        let pts = snapshot.points();
        let n = snapshot.len();
        let mut dedup = SegmentDeduplicator::default();
        let mut view: Vec<usize> = Vec::with_capacity(n);
        let (mut suppressed, mut evicted) = (0usize, 0usize);

        for (i, &p0) in pts.iter().enumerate() {
            if n - i < MIN_SEGMENT_POINTS {
                break;
            }
            view.clear();
            view.extend(i + 1..n);
            let by_slope = p0.slope_order();
            view.sort_by(|&a, &b| by_slope(&pts[a], &pts[b]));

            let mut start = 0;
            while start < view.len() {
                let end = run_end(pts, &view, p0, start, cfg.eps_slope)?;
                if end - start + 1 >= MIN_SEGMENT_POINTS {
                    let mut members = Vec::with_capacity(end - start + 1);
                    members.push(p0);
                    members.extend(view[start..end].iter().map(|&k| pts[k]));
                    members.sort_unstable();
                    match dedup.insert(members) {
                        Insertion::Accepted => {}
                        Insertion::Suppressed => suppressed += 1,
                        Insertion::Replaced(k) => evicted += k,
                    }
                }
                start = end;
            }
        }

        let segments = dedup.into_segments();
        debug!(
            points = n,
            segments = segments.len(),
            suppressed,
            evicted,
            "fast search done"
        );
        Ok(Self { segments })
    }
}

/// One past the last entry of the run starting at `view[start]`.
fn run_end(
    pts: &[Point],
    view: &[usize],
    p0: Point,
    start: usize,
    eps: f64,
) -> Result<usize, CollinearError> {
    let slope_from_pivot = |k: usize| match p0.slope_to(pts[k]) {
        Slope::Degenerate => Err(CollinearError::CoincidentPoints { a: p0, b: pts[k] }),
        s => Ok(s),
    };
    let mut prev = slope_from_pivot(view[start])?;
    let mut end = start + 1;
    while end < view.len() {
        let cur = slope_from_pivot(view[end])?;
        if !prev.approx_eq(cur, eps) {
            break;
        }
        prev = cur;
        end += 1;
    }
    Ok(end)
}

impl CollinearDetector for FastCollinearPoints {
    fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    fn into_segments(self) -> Vec<LineSegment> {
        self.segments
    }
}

#[cfg(test)]
mod tests;
