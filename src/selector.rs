use std::fmt;
use crate::dynamic::dynamic_optimal;
use crate::greedy::{greedy_earliest, greedy_longest};
use crate::math_support::{cmp_by_start, Interval};

/// Outcome of one selector run: the total selected length and, when asked
/// for, the selected intervals sorted by start.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<'a> {
    pub total: f64,
    pub intervals: Option<Vec<&'a Interval>>,
}

impl<'a> Selection<'a> {
    /// Build a selection, sorting the picked intervals by start when they are kept
    pub(crate) fn new(total: f64, picked: Vec<&'a Interval>, show_intervals: bool) -> Self {
        let intervals = if show_intervals {
            let mut picked = picked;
            picked.sort_by(|a, b| cmp_by_start(a, b));
            Some(picked)
        } else {
            None
        };
        Selection { total, intervals }
    }
}

/// SelectorTrait picks a subset of mutually non-overlapping intervals.
/// Implementations never mutate the input and panic on an empty slice.
pub trait SelectorTrait {
    fn name(&self) -> &'static str;
    fn select<'a>(&self, intervals: &'a [Interval], show_intervals: bool) -> Selection<'a>;
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Strategy {
    GreedyEarliest,
    GreedyLongest,
    DynamicOptimal,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Strategy {
    /// All strategies in report order
    pub const ALL: [Strategy; 3] = [Strategy::GreedyEarliest, Strategy::GreedyLongest, Strategy::DynamicOptimal];

    /// Convert a name to a Strategy,typically from the command line
    pub fn from_name(name: &str) -> Option<Strategy> {
        Strategy::ALL.into_iter().find(|s| s.name() == name)
    }
    /// label used in the final result table
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::GreedyEarliest => "Greedy Earliest",
            Strategy::GreedyLongest => "Greedy Longest",
            Strategy::DynamicOptimal => "Dynamic Optimal",
        }
    }
}

impl SelectorTrait for Strategy {
    fn name(&self) -> &'static str {
        match self {
            Strategy::GreedyEarliest => "greedy_earliest",
            Strategy::GreedyLongest => "greedy_longest",
            Strategy::DynamicOptimal => "dynamic_optimal",
        }
    }
    fn select<'a>(&self, intervals: &'a [Interval], show_intervals: bool) -> Selection<'a> {
        match self {
            Strategy::GreedyEarliest => greedy_earliest(intervals, show_intervals),
            Strategy::GreedyLongest => greedy_longest(intervals, show_intervals),
            Strategy::DynamicOptimal => dynamic_optimal(intervals, show_intervals),
        }
    }
}
