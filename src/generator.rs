use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::config::BenchConfig;
use crate::error::Result;
use crate::math_support::Interval;

/// Draw `config.count` intervals with start and length uniform over the configured ranges (both ends inclusive)
pub fn generate_intervals<R: Rng + ?Sized>(config: &BenchConfig, rng: &mut R) -> Result<Vec<Interval>> {
    config.validate()?;
    let (start_lo, start_hi) = config.start_range;
    let (length_lo, length_hi) = config.length_range;
    let mut intervals = Vec::with_capacity(config.count);
    for _ in 0..config.count {
        let start = rng.random_range(start_lo..=start_hi);
        let length = rng.random_range(length_lo..=length_hi);
        intervals.push(Interval::new(start, length)?);
    }
    debug!("Generated {} intervals", intervals.len());
    Ok(intervals)
}

/// Seeded rng when the config fixes a seed, fresh entropy otherwise
pub fn rng_from_config(config: &BenchConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
