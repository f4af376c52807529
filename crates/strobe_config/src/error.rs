//! Error types for configuration resolution.

/// Errors that can occur while resolving the run mode or loading the
/// harness configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `--cycles` appeared as the last argument, with no value after it.
    #[error("--cycles must be followed by a number of cycles")]
    MissingCycleCount,

    /// The configuration file exists but could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The TOML content could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Parse(String),
}
