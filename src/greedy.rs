use log::debug;
use crate::math_support::{cmp_by_start, Interval};
use crate::selector::Selection;

/// Earliest-start greedy.
/// Sweep the intervals by start and keep every one that clears the last kept interval.
/// This is a baseline, it is not optimal even for unit weights.
/// ## panic if intervals is empty
pub fn greedy_earliest(intervals: &[Interval], show_intervals: bool) -> Selection<'_> {
    assert!(!intervals.is_empty(), "greedy_earliest needs at least one interval");
    // sort based on start point, ties by end so a zero-length interval never hides a longer one
    let mut sorted: Vec<&Interval> = intervals.iter().collect();
    sorted.sort_by(|a, b| cmp_by_start(a, b));

    let mut last = sorted[0];
    let mut total = last.length();
    let mut picked = vec![last];
    for &interval in &sorted[1..] {
        if !last.overlap(interval) {
            total += interval.length();
            picked.push(interval);
            last = interval;
        }
    }
    debug!("greedy_earliest picked {} of {} intervals, total {}", picked.len(), intervals.len(), total);
    Selection::new(total, picked, show_intervals)
}

/// Longest-first greedy.
/// Visit the intervals by decreasing length and keep one if it clears every kept interval.
/// All candidates are visited, a shorter one can still fit late in the scan.
/// ## panic if intervals is empty
pub fn greedy_longest(intervals: &[Interval], show_intervals: bool) -> Selection<'_> {
    assert!(!intervals.is_empty(), "greedy_longest needs at least one interval");
    // sort based on length, stable so equal lengths keep input order
    let mut sorted: Vec<&Interval> = intervals.iter().collect();
    sorted.sort_by(|a, b| b.length().total_cmp(&a.length()));

    let mut total = sorted[0].length();
    let mut picked = vec![sorted[0]];
    for &interval in &sorted[1..] {
        if picked.iter().all(|prev| !prev.overlap(interval)) {
            total += interval.length();
            picked.push(interval);
        }
    }
    debug!("greedy_longest picked {} of {} intervals, total {}", picked.len(), intervals.len(), total);
    Selection::new(total, picked, show_intervals)
}
