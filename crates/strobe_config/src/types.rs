//! Harness configuration types deserialized from `strobe.toml`.

use serde::Deserialize;

/// File name of the optional harness configuration, relative to the working
/// directory.
pub const CONFIG_FILE_NAME: &str = "strobe.toml";

/// Environment variable overriding the `trace.enabled` setting.
///
/// Set (to anything but `0` or `false`) it enables tracing; `0`/`false`
/// disable it; unset or empty leaves the file's setting in place.
pub const TRACE_ENV_VAR: &str = "STROBE_TRACE";

/// Default hierarchy-depth limit recorded with a waveform trace.
pub const DEFAULT_TRACE_DEPTH: u32 = 99;

/// Top-level harness configuration.
///
/// Every section is optional; an absent `strobe.toml` resolves to the
/// defaults (tracing off).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Waveform capture settings.
    pub trace: TraceSettings,
}

/// Waveform capture settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TraceSettings {
    /// Whether a waveform trace is recorded for the run.
    pub enabled: bool,
    /// How many levels of model hierarchy the trace session is asked to
    /// capture.
    pub hierarchy_depth: u32,
}

impl Default for TraceSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            hierarchy_depth: DEFAULT_TRACE_DEPTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_disable_tracing() {
        let config = HarnessConfig::default();
        assert!(!config.trace.enabled);
        assert_eq!(config.trace.hierarchy_depth, 99);
    }
}
