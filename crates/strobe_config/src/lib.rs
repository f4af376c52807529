//! Configuration for the strobe RTL driver harness.
//!
//! Two configuration surfaces feed a driver run:
//!
//! - the argument list, scanned once at startup into a [`RunConfig`]
//!   (bounded cycle count vs. run-to-completion);
//! - an optional `strobe.toml` in the working directory, plus the
//!   `STROBE_TRACE` environment variable, resolved into a [`HarnessConfig`]
//!   controlling waveform capture.
//!
//! Both are resolved before any simulation resource (model instance, trace
//! handle) is created.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod run;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, resolve_config};
pub use run::RunConfig;
pub use types::{
    HarnessConfig, TraceSettings, CONFIG_FILE_NAME, DEFAULT_TRACE_DEPTH, TRACE_ENV_VAR,
};
