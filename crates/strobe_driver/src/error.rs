//! Error types for the driver harness.

use std::io;

/// Errors that can occur while setting up or running a driver session.
///
/// Model misbehavior is deliberately not represented here: the harness is
/// single-pass and treats the model as a black box.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// An I/O error occurred while opening or writing the waveform trace.
    #[error("waveform trace I/O error: {0}")]
    TraceIo(#[from] io::Error),

    /// The interrupt handler could not be registered.
    #[error("failed to install interrupt handler: {0}")]
    InterruptHandler(#[source] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_trace_io() {
        let err = DriverError::TraceIo(io::Error::new(io::ErrorKind::Other, "disk full"));
        assert_eq!(format!("{err}"), "waveform trace I/O error: disk full");
    }

    #[test]
    fn display_interrupt_handler() {
        let err = DriverError::InterruptHandler(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert!(format!("{err}").starts_with("failed to install interrupt handler:"));
    }

    #[test]
    fn io_error_converts_to_trace_io() {
        let err: DriverError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, DriverError::TraceIo(_)));
    }
}
