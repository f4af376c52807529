//! Cooperative cancellation for the tick loop.
//!
//! Cancellation is a single-writer/single-reader flag: the interrupt
//! notification context stores `true`, and the clock engine reads the flag
//! once per tick at the top of each iteration. The tick in progress always
//! completes before the flag is observed; cancellation is cooperative, not
//! preemptive.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::DriverError;

/// Process-cooperative cancellation flag.
///
/// Cloning yields another handle to the same flag. Setting it repeatedly has
/// the same effect as setting it once.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag {
    inner: Arc<AtomicBool>,
}

impl CancelFlag {
    /// Creates a new, unset flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Safe to call from any context; the only side
    /// effect is one atomic store.
    pub fn cancel(&self) {
        self.inner.store(true, Ordering::SeqCst);
    }

    /// Returns whether cancellation has been requested. The engine calls
    /// this exactly once per tick, at the tick boundary.
    pub fn is_cancelled(&self) -> bool {
        self.inner.load(Ordering::SeqCst)
    }
}

/// Registers `flag` to be set when the process receives an interrupt
/// notification (SIGINT).
///
/// The registered handler's only side effect is the atomic store, with no
/// allocation or I/O, so it is safe in signal context. Install before any
/// simulation state exists.
pub fn install_interrupt_handler(flag: &CancelFlag) -> Result<(), DriverError> {
    signal_hook::flag::register(signal_hook::consts::SIGINT, Arc::clone(&flag.inner))
        .map(drop)
        .map_err(DriverError::InterruptHandler)
}
