use thiserror::Error;

/// Errors surfaced by interval construction and the benchmark driver.
///
/// Calling a selector with no intervals is a programming error and panics
/// instead of producing one of these.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid interval: start={start}, length={length}")]
    InvalidInterval { start: f64, length: f64 },

    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
