pub mod config;
pub mod constants;
pub mod dynamic;
pub mod error;
pub mod generator;
pub mod greedy;
pub mod math_support;
pub mod report;
pub mod selector;

use std::fs;
use std::io::Write;
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use log::{debug, info};
use constants::*;
use crate::config::BenchConfig;
use crate::error::Result;
use crate::generator::{generate_intervals, rng_from_config};
use crate::math_support::Interval;
use crate::report::{format_intervals, format_selection, BenchReport, StrategyOutcome};
use crate::selector::{Selection, SelectorTrait, Strategy};

/// How a benchmark run reports its work
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// list the intervals each selector picked
    pub show_intervals: bool,
    /// list every generated interval before running
    pub list_generated: bool,
    /// run the selectors on separate threads
    pub parallel: bool,
    /// no progress spinners
    pub quiet: bool,
}

/// Generate a template config file
pub fn generate_template_config_file<P: AsRef<Path>>(path: P) -> Result<()> {
    let toml = BenchConfig::default().to_toml_string()?;
    let mut file = fs::File::create(path.as_ref())?;
    file.write_all(TEMPLATE_CONFIG_HEADER.as_bytes())?;
    file.write_all(toml.as_bytes())?;
    info!("Template config written to {}", path.as_ref().display());
    Ok(())
}

/// Check config file without running anything
pub fn check_config_file<P: AsRef<Path>>(path: P) -> Result<BenchConfig> {
    let config = BenchConfig::from_toml(path)?;
    println!("{}", config);
    println!("Check done");
    Ok(config)
}

/// Generate the random intervals described by config and compare every selector on them
pub fn run_benchmark(config: &BenchConfig, options: &RunOptions) -> Result<BenchReport> {
    config.validate()?;
    println!("{}", config);
    println!();

    let mut rng = rng_from_config(config);
    let intervals = generate_intervals(config, &mut rng)?;
    if options.list_generated {
        println!("Randomly Generated Intervals");
        println!("{}", format_intervals(&intervals));
        println!();
    }

    println!("Running Algos...");
    println!();
    let report = run_strategies(&intervals, &Strategy::ALL, options);
    print!("{}", report);
    Ok(report)
}

/// Run the given strategies over the same intervals and print each section
/// ## panic if intervals is empty
pub fn run_strategies(intervals: &[Interval], strategies: &[Strategy], options: &RunOptions) -> BenchReport {
    let style = ProgressStyle::with_template(SPINNER_TEMPLATE).unwrap_or_else(|_| ProgressStyle::default_spinner());
    let multi = MultiProgress::new();
    let spinner = |strategy: Strategy| {
        let pb = if options.quiet { ProgressBar::hidden() } else { multi.add(ProgressBar::new_spinner()) };
        pb.set_style(style.clone());
        pb.set_message(format!("running {} on {} intervals", strategy, intervals.len()));
        pb.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        pb
    };

    let runs: Vec<(Strategy, Selection, Duration)> = if options.parallel {
        debug!("Running {} strategies in parallel", strategies.len());
        thread::scope(|scope| {
            let handles: Vec<_> = strategies
                .iter()
                .map(|&strategy| {
                    let pb = spinner(strategy);
                    scope.spawn(move || {
                        let run = timed(strategy, intervals, options.show_intervals);
                        pb.finish_and_clear();
                        run
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| match handle.join() {
                    Ok(run) => run,
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .collect()
        })
    } else {
        strategies
            .iter()
            .map(|&strategy| {
                let pb = spinner(strategy);
                let run = timed(strategy, intervals, options.show_intervals);
                pb.finish_and_clear();
                run
            })
            .collect()
    };

    let mut report = BenchReport::default();
    for (strategy, selection, elapsed) in runs {
        println!("{}", format_selection(strategy, &selection));
        info!("{} finished in {:?}", strategy, elapsed);
        report.outcomes.push(StrategyOutcome {
            strategy,
            total: selection.total,
            selected: selection.intervals.as_ref().map(|v| v.len()),
            elapsed,
        });
    }
    report
}

fn timed(strategy: Strategy, intervals: &[Interval], show_intervals: bool) -> (Strategy, Selection<'_>, Duration) {
    let begin = Instant::now();
    let selection = strategy.select(intervals, show_intervals);
    (strategy, selection, begin.elapsed())
}
