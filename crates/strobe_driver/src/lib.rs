//! Clock-driven run harness for compiled RTL models.
//!
//! This crate implements the driver loop that takes a device under test
//! through a fixed reset-hold window and an active-clock run with
//! deterministic timing, cooperative interruption, and optional waveform
//! capture. The model itself is opaque: anything implementing [`Dut`] can be
//! driven, including externally compiled models via [`CompiledModel`].
//!
//! # Usage
//!
//! ```ignore
//! use strobe_driver::{drive, install_interrupt_handler, CancelFlag};
//!
//! let cancel = CancelFlag::new();
//! install_interrupt_handler(&cancel)?;
//! let summary = drive(dut, &run_config, &harness_config, cancel)?;
//! println!("last tick {}", summary.last_tick);
//! ```
//!
//! # Modules
//!
//! - `error` — Driver error types
//! - `clock` — Tick counter and clock level
//! - `cancel` — Cooperative cancellation flag and interrupt handler
//! - `dut` — Device-under-test capability trait and C-ABI adapter
//! - `trace` — Waveform recording strategies (no-op, VCD)
//! - `engine` — The phase state machine driving the run

#![warn(missing_docs)]

pub mod cancel;
pub mod clock;
pub mod dut;
pub mod engine;
pub mod error;
pub mod trace;

use std::path::Path;

use strobe_config::{HarnessConfig, RunConfig};

pub use cancel::{install_interrupt_handler, CancelFlag};
pub use clock::ClockState;
pub use dut::{CompiledModel, Dut, ModelVTable};
pub use engine::{ClockEngine, RunOutcome, RunSummary, RESET_HOLD_TICKS};
pub use error::DriverError;
pub use trace::{NullTrace, TraceRecorder, VcdTrace, TRACE_FILE_NAME};

/// High-level entry point: runs one model to termination.
///
/// Builds the trace recorder the harness configuration asks for (opening the
/// trace file before the reset hold begins), hands the model to a
/// [`ClockEngine`], and runs it. The engine owns the model exclusively until
/// the run ends.
pub fn drive<D: Dut>(
    dut: D,
    run_config: &RunConfig,
    harness: &HarnessConfig,
    cancel: CancelFlag,
) -> Result<RunSummary, DriverError> {
    let mut engine = ClockEngine::new(dut, *run_config, cancel);
    if harness.trace.enabled {
        let recorder = VcdTrace::create(Path::new(TRACE_FILE_NAME), harness.trace.hierarchy_depth)?;
        engine.set_recorder(Box::new(recorder));
    }
    engine.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Minimal model: counts evals, optionally finishing at a given tick.
    struct ScriptedDut {
        evals: Rc<Cell<u64>>,
        finalizes: Rc<Cell<u32>>,
        finish_at: Option<u64>,
        finished: bool,
    }

    impl Dut for ScriptedDut {
        fn set_clock(&mut self, _level: bool) {}

        fn set_reset(&mut self, _asserted: bool) {}

        fn eval(&mut self) {
            if self.finish_at == Some(self.evals.get()) {
                self.finished = true;
            }
            self.evals.set(self.evals.get() + 1);
        }

        fn is_finished(&self) -> bool {
            self.finished
        }

        fn finalize(&mut self) {
            self.finalizes.set(self.finalizes.get() + 1);
        }
    }

    #[test]
    fn drive_bounded_run_with_tracing_disabled() {
        let evals = Rc::new(Cell::new(0));
        let finalizes = Rc::new(Cell::new(0));
        let dut = ScriptedDut {
            evals: Rc::clone(&evals),
            finalizes: Rc::clone(&finalizes),
            finish_at: None,
            finished: false,
        };

        let summary = drive(
            dut,
            &RunConfig::Bounded { cycles: 2 },
            &HarnessConfig::default(),
            CancelFlag::new(),
        )
        .unwrap();

        // 8 reset ticks plus 2 cycles of 2 ticks each.
        assert_eq!(evals.get(), 12);
        assert_eq!(summary.last_tick, 11);
        assert_eq!(summary.outcome, RunOutcome::BoundReached);
        assert_eq!(finalizes.get(), 1);
    }

    #[test]
    fn drive_reports_model_finish() {
        let evals = Rc::new(Cell::new(0));
        let finalizes = Rc::new(Cell::new(0));
        let dut = ScriptedDut {
            evals: Rc::clone(&evals),
            finalizes: Rc::clone(&finalizes),
            finish_at: Some(10),
            finished: false,
        };

        let summary = drive(
            dut,
            &RunConfig::RunToCompletion,
            &HarnessConfig::default(),
            CancelFlag::new(),
        )
        .unwrap();

        assert_eq!(summary.last_tick, 10);
        assert_eq!(summary.outcome, RunOutcome::ModelFinished);
        assert_eq!(finalizes.get(), 1);
    }
}
