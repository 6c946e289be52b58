//! Reproducible point sets for tests and benchmarks.
//!
//! Model
//! - `random_points`: `n` distinct points drawn uniformly from a coordinate box.
//! - `grid_points`: a `side × side` lattice with fixed spacing.
//! - `with_planted_line`: embed a collinear run of exactly `len` points into a
//!   base set, dropping any base point that lies on the same line.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::point::Point;

/// Inclusive coordinate box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl Default for Bounds {
    /// `[0, 32767]²`, the usual range for these datasets.
    fn default() -> Self {
        Self {
            min_x: 0,
            max_x: 32767,
            min_y: 0,
            max_y: 32767,
        }
    }
}

impl Bounds {
    /// Number of lattice points in the box; `None` if the box is empty.
    fn capacity(&self) -> Option<u64> {
        if self.min_x > self.max_x || self.min_y > self.max_y {
            return None;
        }
        let w = (i64::from(self.max_x) - i64::from(self.min_x) + 1) as u64;
        let h = (i64::from(self.max_y) - i64::from(self.min_y) + 1) as u64;
        Some(w.saturating_mul(h))
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// `n` distinct points drawn uniformly from `bounds`.
///
/// Returns `None` if the box is empty or holds fewer than `n` lattice points.
pub fn random_points(n: usize, bounds: Bounds, tok: ReplayToken) -> Option<Vec<Point>> {
    if bounds.capacity()? < n as u64 {
        return None;
    }
    let mut rng = tok.to_std_rng();
    let mut seen = HashSet::with_capacity(n);
    let mut out = Vec::with_capacity(n);
    while out.len() < n {
        let p = Point::new(
            rng.gen_range(bounds.min_x..=bounds.max_x),
            rng.gen_range(bounds.min_y..=bounds.max_y),
        );
        if seen.insert(p) {
            out.push(p);
        }
    }
    Some(out)
}

/// `side × side` lattice `{(i·spacing, j·spacing)}`, row by row.
///
/// Returns `None` if a coordinate overflows `i32`.
pub fn grid_points(side: i32, spacing: i32) -> Option<Vec<Point>> {
    // The largest index bounds every coordinate.
    if side > 0 {
        (side - 1).checked_mul(spacing)?;
    }
    Some(
        (0..side)
            .flat_map(|j| (0..side).map(move |i| Point::new(i * spacing, j * spacing)))
            .collect(),
    )
}

/// `base` plus the run `start + k·step` for `k in 0..len`.
///
/// Base points on the run's supporting line are removed, so the line carries
/// exactly `len` points. Returns `None` for a zero step or coordinate overflow.
pub fn with_planted_line(
    base: &[Point],
    start: Point,
    step: (i32, i32),
    len: usize,
) -> Option<Vec<Point>> {
    if step == (0, 0) {
        return None;
    }
    let mut run = Vec::with_capacity(len);
    for k in 0..len {
        let k = i32::try_from(k).ok()?;
        let x = start.x.checked_add(step.0.checked_mul(k)?)?;
        let y = start.y.checked_add(step.1.checked_mul(k)?)?;
        run.push(Point::new(x, y));
    }
    let (dx, dy) = (i64::from(step.0), i64::from(step.1));
    let off_line = |p: &&Point| {
        let ex = i64::from(p.x) - i64::from(start.x);
        let ey = i64::from(p.y) - i64::from(start.y);
        dx * ey - dy * ex != 0
    };
    let mut out: Vec<Point> = base.iter().filter(off_line).copied().collect();
    out.extend(run);
    Some(out)
}
