//! Run-mode resolution from the driver's argument list.
//!
//! The driver recognizes exactly one flag, `--cycles <unsigned>`. Everything
//! else in the argument list is left alone: compiled models conventionally
//! take arguments of their own, so unknown tokens are accepted and ignored
//! rather than rejected.

use crate::error::ConfigError;

/// How long the active-clock phase of a run lasts.
///
/// Exactly one of the two modes holds; a bounded run carries its cycle count
/// inline. Resolved once at startup via [`RunConfig::from_args`] and consulted
/// by the clock engine every tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunConfig {
    /// Run until the model signals completion or an interrupt arrives.
    RunToCompletion,
    /// Run a bounded number of clock cycles after reset, two ticks per cycle.
    Bounded {
        /// Number of full clock periods to run out of reset. Zero is legal
        /// and yields a zero-tick active phase.
        cycles: u64,
    },
}

impl RunConfig {
    /// Scans the argument list for `--cycles <unsigned>`.
    ///
    /// The flag's value token is consumed and not itself re-scanned; if the
    /// flag appears more than once, the last occurrence wins. A `--cycles`
    /// with nothing after it is the one recoverable configuration error and
    /// must be surfaced before any simulation resource exists.
    pub fn from_args(args: &[String]) -> Result<Self, ConfigError> {
        let mut mode = RunConfig::RunToCompletion;
        let mut i = 0;
        while i < args.len() {
            if args[i] == "--cycles" {
                match args.get(i + 1) {
                    Some(value) => {
                        mode = RunConfig::Bounded {
                            cycles: parse_cycle_count(value),
                        };
                        i += 1;
                    }
                    None => return Err(ConfigError::MissingCycleCount),
                }
            }
            i += 1;
        }
        Ok(mode)
    }

    /// Returns the cycle bound, or `None` for a run-to-completion run.
    pub fn cycle_bound(&self) -> Option<u64> {
        match self {
            RunConfig::RunToCompletion => None,
            RunConfig::Bounded { cycles } => Some(*cycles),
        }
    }
}

/// Reads a cycle count as the leading run of decimal digits.
///
/// Junk input is tolerated, not rejected: a value with no leading digits
/// reads as zero. The missing-value case is the only error this surface
/// reports.
fn parse_cycle_count(raw: &str) -> u64 {
    let end = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());
    raw[..end].parse().unwrap_or(0)
}
