use argh::FromArgs;
use libintsched_cli_r::config::BenchConfig;
use libintsched_cli_r::{check_config_file, generate_template_config_file, run_benchmark, RunOptions};
use log::{debug, LevelFilter};
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::process::ExitCode;

#[derive(FromArgs)]
/// intsched command line tool,
/// compare greedy and dynamic programming selectors on random intervals
struct CmdProg {
    #[argh(switch, short = 'v')]
    /// verbose mode, print debug logs
    verbose: bool,
    #[argh(subcommand)]
    /// subcommand
    mode: Mode,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Mode {
    Run(RunMode),
    Template(TemplateMode),
    Check(CheckMode),
}

#[derive(FromArgs)]
#[argh(
    subcommand,
    name = "run",
    description = "Generate random intervals and run every selector on them. \
Use -c <config> to read settings from a toml file, -n and --seed override it.",
    example = "intsched run",
    example = "intsched run -c <config> --seed 42",
    example = "intsched run -n 200 -s -p"
)]
/// run the benchmark
struct RunMode {
    /// config file
    #[argh(option, short = 'c')]
    config: Option<String>,
    /// number of intervals
    #[argh(option, short = 'n')]
    count: Option<usize>,
    /// seed for the random intervals
    #[argh(option)]
    seed: Option<u64>,
    /// show the intervals each selector picked (slow for large n)
    #[argh(switch, short = 's')]
    show: bool,
    /// list the generated intervals
    #[argh(switch, short = 'l')]
    list: bool,
    /// run the selectors in parallel
    #[argh(switch, short = 'p')]
    parallel: bool,
    /// hide progress spinners
    #[argh(switch, short = 'q')]
    quiet: bool,
}

#[derive(FromArgs)]
#[argh(subcommand, name = "template", example = "intsched template -o <output file>")]
/// generate a template config file
struct TemplateMode {
    /// output file
    #[argh(option, short = 'o')]
    output: String,
}

#[derive(FromArgs)]
#[argh(subcommand, name = "check", example = "intsched check <config>")]
/// check a config file without running
struct CheckMode {
    /// config file
    #[argh(positional)]
    config: String,
}

/// log to stderr so the report on stdout stays clean
fn init_logger(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S%.3f)} {h({l})} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level));
    match config {
        Ok(config) => {
            if let Err(e) = log4rs::init_config(config) {
                eprintln!("Warning: logger init failed {}", e);
            }
        }
        Err(e) => eprintln!("Warning: logger config invalid {}", e),
    }
}

fn run(mode: RunMode) -> libintsched_cli_r::error::Result<()> {
    let mut config = match &mode.config {
        Some(path) => BenchConfig::from_toml(path)?,
        None => BenchConfig::default(),
    };
    if let Some(count) = mode.count {
        config.count = count;
    }
    if mode.seed.is_some() {
        config.seed = mode.seed;
    }
    debug!("Effective config {:?}", config);
    let options = RunOptions {
        show_intervals: mode.show,
        list_generated: mode.list,
        parallel: mode.parallel,
        quiet: mode.quiet,
    };
    run_benchmark(&config, &options)?;
    Ok(())
}

fn main() -> ExitCode {
    let args: CmdProg = argh::from_env();
    init_logger(args.verbose);
    let ret = match args.mode {
        Mode::Run(mode) => run(mode),
        Mode::Template(template) => generate_template_config_file(&template.output),
        Mode::Check(check) => check_config_file(&check.config).map(|_| ()),
    };
    match ret {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
