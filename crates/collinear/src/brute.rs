//! Reference detector: every 4-combination of the sorted points.
//!
//! Reports each collinear 4-subset as one segment from its smallest to its
//! largest point (natural order). Runs of 5+ points are not merged, so a run of
//! length L yields C(L, 4) segments. Θ(n⁴); meant as an oracle on small inputs.

use tracing::debug;

use crate::cfg::DetectCfg;
use crate::detector::CollinearDetector;
use crate::error::CollinearError;
use crate::input::Snapshot;
use crate::point::{Collinearity, Point};
use crate::segment::LineSegment;

#[derive(Clone, Debug)]
pub struct BruteCollinearPoints {
    segments: Vec<LineSegment>,
}

impl BruteCollinearPoints {
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
        let cfg = DetectCfg::default();
        let snapshot = Snapshot::from_entries(entries.iter().copied())?;
        Self::search(&snapshot, cfg)
    }

    fn search(snapshot: &Snapshot, cfg: DetectCfg) -> Result<Self, CollinearError> {
        let pts = snapshot.points();
        let n = pts.len();
        let eps = cfg.eps_slope;
        let mut segments = Vec::new();
        // Sorted input means any collinear 4-subset is visited in natural order.
        for i in 0..n {
            for j in i + 1..n.saturating_sub(2) {
                for k in j + 1..n {
                    if !Collinearity::of(pts[i], pts[j], pts[k], eps).into_result()? {
                        continue;
                    }
                    for m in k + 1..n {
                        if Collinearity::of(pts[j], pts[k], pts[m], eps).into_result()? {
                            segments.push(LineSegment::between(pts[i], pts[m]));
                        }
                    }
                }
            }
        }
        debug!(points = n, segments = segments.len(), "brute search done");
        Ok(Self { segments })
    }
}

impl CollinearDetector for BruteCollinearPoints {
    fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    fn into_segments(self) -> Vec<LineSegment> {
        self.segments
    }
}
