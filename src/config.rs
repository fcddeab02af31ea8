//! benchmark config module
use serde::{Deserialize, Serialize};

use std::fmt;
use std::path::Path;
use log::debug;
use crate::constants::{DEFAULT_COUNT, DEFAULT_LENGTH_RANGE, DEFAULT_START_RANGE};
use crate::error::{Error, Result};

/// Settings of one benchmark run, usually read from a toml file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchConfig {
    pub count: usize,
    pub start_range: (f64, f64),
    pub length_range: (f64, f64),
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            count: DEFAULT_COUNT,
            start_range: DEFAULT_START_RANGE,
            length_range: DEFAULT_LENGTH_RANGE,
            seed: None,
        }
    }
}

impl fmt::Display for BenchConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Config: N={}, Start Range=({}, {}), Length Range=({}, {})",
               self.count, self.start_range.0, self.start_range.1, self.length_range.0, self.length_range.1)?;
        if let Some(seed) = self.seed {
            write!(f, ", Seed={}", seed)?;
        }
        Ok(())
    }
}

impl BenchConfig {
    pub fn from_toml_str(data: &str) -> Result<Self> {
        let config: BenchConfig = toml::from_str(data)?;
        config.validate()?;
        Ok(config)
    }
    /// read and validate a config file
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from {}", path.display());
        let data = std::fs::read_to_string(path)?;
        BenchConfig::from_toml_str(&data)
    }
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// check the config can drive a run
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(Error::InvalidConfig("count must be at least 1"));
        }
        let (start_lo, start_hi) = self.start_range;
        if !start_lo.is_finite() || !start_hi.is_finite() || start_lo > start_hi {
            return Err(Error::InvalidConfig("start_range must be finite with min <= max"));
        }
        if !(start_hi - start_lo).is_finite() {
            return Err(Error::InvalidConfig("start_range is too wide"));
        }
        let (length_lo, length_hi) = self.length_range;
        if !length_lo.is_finite() || !length_hi.is_finite() || length_lo > length_hi {
            return Err(Error::InvalidConfig("length_range must be finite with min <= max"));
        }
        if !(length_hi - length_lo).is_finite() {
            return Err(Error::InvalidConfig("length_range is too wide"));
        }
        if length_lo < 0.0 {
            return Err(Error::InvalidConfig("length_range must not be negative"));
        }
        // the furthest end a generated interval can reach
        if !(start_hi + length_hi).is_finite() {
            return Err(Error::InvalidConfig("start_range and length_range overflow the end point"));
        }
        Ok(())
    }
}
