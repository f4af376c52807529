//! Harness configuration loading and environment resolution.

use std::ffi::OsStr;
use std::path::Path;

use crate::error::ConfigError;
use crate::types::{HarnessConfig, CONFIG_FILE_NAME, TRACE_ENV_VAR};

/// Loads `<dir>/strobe.toml` if it exists.
///
/// An absent file is not an error; it resolves to the default configuration.
pub fn load_config(dir: &Path) -> Result<HarnessConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(HarnessConfig::default())
        }
        Err(e) => return Err(ConfigError::Io(e)),
    };
    load_config_from_str(&content)
}

/// Parses a harness configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<HarnessConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
}

/// Loads the configuration from `dir` and applies the `STROBE_TRACE`
/// environment override.
pub fn resolve_config(dir: &Path) -> Result<HarnessConfig, ConfigError> {
    let mut config = load_config(dir)?;
    if let Some(enabled) = trace_env_override(std::env::var_os(TRACE_ENV_VAR).as_deref()) {
        config.trace.enabled = enabled;
    }
    Ok(config)
}

/// Interprets a `STROBE_TRACE` value. Unset or empty means "no override".
fn trace_env_override(value: Option<&OsStr>) -> Option<bool> {
    match value?.to_str() {
        Some("") => None,
        Some("0") | Some("false") => Some(false),
        _ => Some(true),
    }
}
