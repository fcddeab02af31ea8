use std::cmp::Ordering;
use std::fmt;
use crate::error::{Error, Result};

/// A half-open interval `[start, start + length)` on the real line.
/// The length doubles as the interval's weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    start: f64,
    length: f64,
}

impl Interval {
    /// Build an interval, rejecting a negative length and any non-finite start, length or end.
    pub fn new(start: f64, length: f64) -> Result<Self> {
        if !start.is_finite() || !length.is_finite() || length < 0.0 || !(start + length).is_finite() {
            return Err(Error::InvalidInterval { start, length });
        }
        Ok(Interval { start, length })
    }
    pub fn start(&self) -> f64 {
        self.start
    }
    pub fn length(&self) -> f64 {
        self.length
    }
    pub fn end(&self) -> f64 {
        self.start + self.length
    }

    /// true if both intervals share a point.
    /// Touching endpoints do not overlap, and the result does not depend on argument order.
    pub fn overlap(&self, other: &Interval) -> bool {
        self.start < other.end() && other.start < self.end()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<Interval: start={:.4}, end={:.4}, length={:.4}>", self.start, self.end(), self.length)
    }
}

/// order by start, then by end
pub fn cmp_by_start(a: &Interval, b: &Interval) -> Ordering {
    a.start.total_cmp(&b.start).then_with(|| a.end().total_cmp(&b.end()))
}

/// order by end, then by start
pub fn cmp_by_end(a: &Interval, b: &Interval) -> Ordering {
    a.end().total_cmp(&b.end()).then_with(|| a.start.total_cmp(&b.start))
}

/// check if any intervals in the slice overlap
/// If any two intervals overlap, the function will return true.
pub fn check_any_overlaps(intervals: &[&Interval]) -> bool {
    // Sort intervals by their start points
    let mut sorted = intervals.to_vec();
    sorted.sort_by(|a, b| cmp_by_start(a, b));
    // compare against the interval reaching furthest right so far
    let mut furthest: Option<&Interval> = None;
    for current in sorted {
        if let Some(prev) = furthest {
            if prev.overlap(current) {
                return true;
            }
            if current.end() <= prev.end() {
                continue;
            }
        }
        furthest = Some(current);
    }
    // No overlap found
    false
}
