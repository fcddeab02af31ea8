use std::fmt;
use std::time::Duration;
use crate::constants::BANNER_WIDTH;
use crate::math_support::Interval;
use crate::selector::{Selection, Strategy};

/// `===== title =====` line framing each section of the report
pub fn banner(title: &str) -> String {
    let bar = "=".repeat(BANNER_WIDTH);
    format!("{}  {} {}", bar, title, bar)
}

/// one interval per line, wrapped in brackets
pub fn format_intervals<'a, I>(intervals: I) -> String
where
    I: IntoIterator<Item = &'a Interval>,
{
    let mut out = String::from("[");
    for (counter, interval) in intervals.into_iter().enumerate() {
        if counter > 0 {
            out.push_str(",\n ");
        }
        out.push_str(&interval.to_string());
    }
    out.push(']');
    out
}

/// Section printed after one selector finished
pub fn format_selection(strategy: Strategy, selection: &Selection) -> String {
    let mut out = banner(&format!(" {} ", strategy));
    out.push('\n');
    if let Some(intervals) = &selection.intervals {
        out.push_str("Selected Intervals:\n");
        out.push_str(&format_intervals(intervals.iter().copied()));
        out.push_str("\n\n");
    }
    out.push_str(&format!("Total Length = {}", selection.total));
    out
}

/// Result of one selector inside a benchmark run
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyOutcome {
    pub strategy: Strategy,
    pub total: f64,
    pub selected: Option<usize>,
    pub elapsed: Duration,
}

/// Totals of every selector in report order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BenchReport {
    pub outcomes: Vec<StrategyOutcome>,
}

impl BenchReport {
    pub fn total_of(&self, strategy: Strategy) -> Option<f64> {
        self.outcomes.iter().find(|o| o.strategy == strategy).map(|o| o.total)
    }
    /// best total among the selectors, i.e. the dynamic optimum
    pub fn best_total(&self) -> Option<f64> {
        self.outcomes.iter().map(|o| o.total).reduce(f64::max)
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", banner("Result"))?;
        let best = self.best_total();
        for outcome in &self.outcomes {
            let label = format!("{}:", outcome.strategy.label());
            write!(f, "{:<17}{:.4}", label, outcome.total)?;
            if let Some(best) = best.filter(|b| *b > 0.0) {
                write!(f, "  ({:.2}% of best)", outcome.total / best * 100.0)?;
            }
            writeln!(f, "  [{:.3?}]", outcome.elapsed)?;
        }
        Ok(())
    }
}
