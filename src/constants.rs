/// intervals generated when no count is configured
pub const DEFAULT_COUNT: usize = 10_000;
/// start points are drawn from this range
pub const DEFAULT_START_RANGE: (f64, f64) = (1.0, 1_000_000.0);
/// lengths are drawn from this range
pub const DEFAULT_LENGTH_RANGE: (f64, f64) = (1.0, 1000.0);

/// number of '=' on each side of a report banner
pub const BANNER_WIDTH: usize = 30;
/// tick of the progress spinners, in milliseconds
pub const SPINNER_TICK_MS: u64 = 100;
pub const SPINNER_TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] {msg}";

pub const TEMPLATE_CONFIG_HEADER: &str = "# Benchmark config for intsched\n\
# count        : number of random intervals\n\
# start_range  : [min, max] of the uniformly drawn start points\n\
# length_range : [min, max] of the uniformly drawn lengths, min must not be negative\n\
# seed         : optional, fixes the random intervals between runs\n\n";
