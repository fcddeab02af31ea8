use log::debug;
use crate::math_support::{cmp_by_end, Interval};
use crate::selector::Selection;

/// Exact weighted interval scheduling.
///
/// Intervals are ordered by end. For position `k` the best value is either the
/// best value up to `k - 1` (skip `k`) or the length of `k` plus the best value up
/// to its predecessor, the last interval ending at or before `k` starts.
/// The table is filled bottom-up and the chosen subset is recovered by walking
/// the per-position decisions backwards.
///
/// On a tie between skipping and taking `k`, `k` is skipped.
/// ## panic if intervals is empty
pub fn dynamic_optimal(intervals: &[Interval], show_intervals: bool) -> Selection<'_> {
    assert!(!intervals.is_empty(), "dynamic_optimal needs at least one interval");
    let mut sorted: Vec<&Interval> = intervals.iter().collect();
    sorted.sort_by(|a, b| cmp_by_end(a, b));

    let prev = predecessors(&sorted);
    let n = sorted.len();
    let mut best = Vec::with_capacity(n);
    let mut taken = Vec::with_capacity(n);
    best.push(sorted[0].length());
    taken.push(true);
    for k in 1..n {
        let exclude = best[k - 1];
        let include = sorted[k].length() + prev[k].map_or(0.0, |p| best[p]);
        if include > exclude {
            best.push(include);
            taken.push(true);
        } else {
            best.push(exclude);
            taken.push(false);
        }
    }
    let total = best[n - 1];

    let mut picked = Vec::new();
    if show_intervals {
        // walk back the decisions
        let mut k = Some(n - 1);
        while let Some(i) = k {
            if taken[i] {
                picked.push(sorted[i]);
                k = prev[i];
            } else {
                k = i.checked_sub(1);
            }
        }
    }
    debug!("dynamic_optimal over {} intervals, total {}", n, total);
    Selection::new(total, picked, show_intervals)
}

/// For every position in the end-sorted slice, the last earlier position whose
/// interval ends at or before this one starts.
/// Ends are non-decreasing so the candidates form a prefix and a binary search finds its edge.
fn predecessors(sorted: &[&Interval]) -> Vec<Option<usize>> {
    sorted
        .iter()
        .enumerate()
        .map(|(k, current)| {
            let start = current.start();
            sorted[..k].partition_point(|prev| prev.end() <= start).checked_sub(1)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: f64, length: f64) -> Interval {
        Interval::new(start, length).unwrap()
    }

    #[test]
    fn test_predecessors() {
        let a = iv(0.0, 2.0);
        let b = iv(1.0, 3.0);
        let c = iv(2.0, 3.0);
        let d = iv(4.5, 1.0);
        let sorted = vec![&a, &b, &c, &d];
        assert_eq!(predecessors(&sorted), vec![None, None, Some(0), Some(1)]);
    }

    #[test]
    fn test_predecessor_ignores_later_positions() {
        // a zero-length interval at the very end of another one sorts after it
        let a = iv(0.0, 1.0);
        let z = iv(1.0, 0.0);
        let sorted = vec![&a, &z];
        assert_eq!(predecessors(&sorted), vec![None, Some(0)]);
        let z_first = vec![&z, &a];
        assert_eq!(predecessors(&z_first), vec![None, None]);
    }

    #[test]
    fn test_weighted_optimum() {
        // sorted by end: [0,3) w3, [1,5) w4, [3,6) w3, [5,9) w4 -> pick [1,5) + [5,9)
        let input = vec![iv(3.0, 3.0), iv(0.0, 3.0), iv(5.0, 4.0), iv(1.0, 4.0)];
        let sel = dynamic_optimal(&input, true);
        assert_eq!(sel.total, 8.0);
        assert_eq!(sel.intervals, Some(vec![&input[3], &input[2]]));
    }

    #[test]
    fn test_many_small_beat_one_long() {
        let input = vec![iv(0.0, 10.0), iv(0.0, 4.0), iv(4.0, 4.0), iv(8.0, 4.0)];
        let sel = dynamic_optimal(&input, true);
        assert_eq!(sel.total, 12.0);
        assert_eq!(sel.intervals, Some(vec![&input[1], &input[2], &input[3]]));
    }

    #[test]
    fn test_tie_prefers_exclusion() {
        // [0,2) and [1,3) have equal length and clash; the later one is skipped
        let input = vec![iv(1.0, 2.0), iv(0.0, 2.0)];
        let sel = dynamic_optimal(&input, true);
        assert_eq!(sel.total, 2.0);
        assert_eq!(sel.intervals, Some(vec![&input[1]]));
    }

    #[test]
    fn test_tie_against_chain_prefers_exclusion() {
        // [0,1) + [1,2) ties with [0.5,2.5) when the latter is reached
        let input = vec![iv(0.0, 1.0), iv(1.0, 1.0), iv(0.5, 2.0)];
        let sel = dynamic_optimal(&input, true);
        assert_eq!(sel.total, 2.0);
        assert_eq!(sel.intervals, Some(vec![&input[0], &input[1]]));
    }

    #[test]
    fn test_total_matches_with_and_without_listing() {
        let input = vec![iv(0.0, 1.5), iv(1.0, 2.5), iv(3.0, 0.5), iv(2.0, 4.0)];
        let shown = dynamic_optimal(&input, true);
        let hidden = dynamic_optimal(&input, false);
        assert_eq!(shown.total, hidden.total);
        assert!(hidden.intervals.is_none());
    }

    #[test]
    fn test_large_chain_has_no_recursion_limit() {
        let input: Vec<Interval> = (0..200_000).map(|i| iv(i as f64, 1.0)).collect();
        let sel = dynamic_optimal(&input, true);
        assert_eq!(sel.total, 200_000.0);
        assert_eq!(sel.intervals.map(|v| v.len()), Some(200_000));
    }

    #[test]
    #[should_panic(expected = "dynamic_optimal needs at least one interval")]
    fn test_empty_panics() {
        dynamic_optimal(&[], true);
    }
}
