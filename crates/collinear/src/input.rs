//! Input validation and the detector-owned sorted snapshot.
//!
//! Checks, in order: empty set, absent entries, duplicates (exact equality via
//! a hash set), then duplicates again by adjacency after sorting. Caller data is
//! never touched; the snapshot is a private copy.

use std::collections::HashSet;

use crate::error::CollinearError;
use crate::point::Point;

/// Points in natural order, validated distinct.
#[derive(Clone, Debug)]
pub(crate) struct Snapshot {
    points: Vec<Point>,
}

impl Snapshot {
    pub(crate) fn from_points(points: &[Point]) -> Result<Self, CollinearError> {
        Self::from_entries(points.iter().copied().map(Some))
    }

    pub(crate) fn from_entries<I>(entries: I) -> Result<Self, CollinearError>
    where
        I: IntoIterator<Item = Option<Point>>,
    {
        let entries = entries.into_iter();
        let mut seen: HashSet<Point> = HashSet::with_capacity(entries.size_hint().0);
        let mut points = Vec::with_capacity(entries.size_hint().0);
        for (index, entry) in entries.enumerate() {
            let point = entry.ok_or(CollinearError::NullElement { index })?;
            if !seen.insert(point) {
                return Err(CollinearError::DuplicatePoint { point });
            }
            points.push(point);
        }
        if points.is_empty() {
            return Err(CollinearError::EmptyInput);
        }
        points.sort_unstable();
        // Sorted duplicates are adjacent.
        if let Some(w) = points.windows(2).find(|w| w[0] == w[1]) {
            return Err(CollinearError::DuplicatePoint { point: w[0] });
        }
        Ok(Self { points })
    }

    #[inline]
    pub(crate) fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.points.len()
    }
}
