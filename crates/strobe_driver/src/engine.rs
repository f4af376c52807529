//! The clock engine: reset sequencing, the active-clock run, and teardown.
//!
//! [`ClockEngine`] drives a model through four phases (reset hold, active
//! run, draining, terminated) with an explicit phase loop. Every exit path
//! (cycle bound reached, model-signaled finish, external interrupt, trace
//! failure) converges on the draining phase, which is what guarantees that
//! the model is finalized and the trace closed exactly once. Teardown is
//! sequenced by the state machine itself, never by scope-exit guarantees.

use strobe_config::RunConfig;

use crate::cancel::CancelFlag;
use crate::clock::ClockState;
use crate::dut::Dut;
use crate::error::DriverError;
use crate::trace::{NullTrace, TraceRecorder};

/// Number of ticks reset is held asserted before the active run begins.
///
/// Fixed and independent of the run configuration.
pub const RESET_HOLD_TICKS: u64 = 8;

/// Why a run left the active phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The configured cycle bound was reached.
    BoundReached,
    /// The model signaled that the simulation is finished.
    ModelFinished,
    /// An external interrupt requested cancellation.
    Cancelled,
}

/// The result of a completed run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// The last tick that was evaluated before draining began. A run that
    /// drains before its first tick reports zero.
    pub last_tick: u64,
    /// Total number of ticks evaluated.
    pub ticks: u64,
    /// Why the run ended.
    pub outcome: RunOutcome,
}

/// Engine phase. Sequenced explicitly by [`ClockEngine::run`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    ResetHold,
    ActiveRun,
    Draining,
    Terminated,
}

/// The clock-driven control loop around one exclusively owned model.
///
/// Construct with [`ClockEngine::new`], optionally attach a recorder, then
/// call [`run`](ClockEngine::run). `run` consumes the engine: the model and
/// the trace session belong to it for the whole lifetime of the run.
pub struct ClockEngine<D: Dut> {
    dut: D,
    run_config: RunConfig,
    cancel: CancelFlag,
    recorder: Box<dyn TraceRecorder>,
    clock: ClockState,
    phase: Phase,
    reset_asserted: bool,
    outcome: RunOutcome,
    trace_error: Option<DriverError>,
}

impl<D: Dut> ClockEngine<D> {
    /// Creates an engine around `dut` with tracing disabled.
    pub fn new(dut: D, run_config: RunConfig, cancel: CancelFlag) -> Self {
        Self {
            dut,
            run_config,
            cancel,
            recorder: Box::new(NullTrace),
            clock: ClockState::new(),
            phase: Phase::ResetHold,
            reset_asserted: true,
            outcome: RunOutcome::BoundReached,
            trace_error: None,
        }
    }

    /// Attaches a waveform recorder. The engine closes it exactly once,
    /// after the model is finalized.
    pub fn set_recorder(&mut self, recorder: Box<dyn TraceRecorder>) {
        self.recorder = recorder;
    }

    /// Runs the model to termination and reports how the run ended.
    ///
    /// A trace I/O failure still drains the run (finalize, then close)
    /// before surfacing as the error.
    pub fn run(mut self) -> Result<RunSummary, DriverError> {
        self.dut.set_reset(true);
        self.dut.set_clock(self.clock.level());

        loop {
            self.phase = match self.phase {
                Phase::ResetHold => self.reset_hold(),
                Phase::ActiveRun => self.active_run(),
                Phase::Draining => self.drain(),
                Phase::Terminated => break,
            };
        }

        if let Some(e) = self.trace_error.take() {
            return Err(e);
        }
        let ticks = self.clock.current_time();
        Ok(RunSummary {
            last_tick: ticks.saturating_sub(1),
            ticks,
            outcome: self.outcome,
        })
    }

    /// Reset hold: reset asserted, clock toggling, for a fixed window.
    ///
    /// Finish and cancellation are re-checked at every tick boundary, so a
    /// finish raised mid-reset drains early. If the window completes, reset
    /// deasserts and the active run begins unconditionally; a condition
    /// raised by the final reset tick is observed at the first active-run
    /// boundary instead.
    fn reset_hold(&mut self) -> Phase {
        while self.clock.current_time() < RESET_HOLD_TICKS {
            if self.dut.is_finished() {
                self.outcome = RunOutcome::ModelFinished;
                return Phase::Draining;
            }
            if self.cancel.is_cancelled() {
                self.outcome = RunOutcome::Cancelled;
                return Phase::Draining;
            }
            self.tick();
            if self.trace_error.is_some() {
                return Phase::Draining;
            }
        }
        self.reset_asserted = false;
        self.dut.set_reset(false);
        Phase::ActiveRun
    }

    /// Active run: clock toggling out of reset until the bound, the model's
    /// finish signal, or cancellation ends it.
    fn active_run(&mut self) -> Phase {
        // Two ticks per clock period; a zero bound admits no active ticks.
        let end_time = self
            .run_config
            .cycle_bound()
            .map(|cycles| self.clock.current_time().saturating_add(cycles.saturating_mul(2)));
        loop {
            if let Some(end) = end_time {
                if self.clock.current_time() >= end {
                    self.outcome = RunOutcome::BoundReached;
                    return Phase::Draining;
                }
            }
            if self.dut.is_finished() {
                self.outcome = RunOutcome::ModelFinished;
                return Phase::Draining;
            }
            if self.cancel.is_cancelled() {
                self.outcome = RunOutcome::Cancelled;
                return Phase::Draining;
            }
            self.tick();
            if self.trace_error.is_some() {
                return Phase::Draining;
            }
        }
    }

    /// Draining: finalize the model, then close the trace. No eval happens
    /// here. Reached exactly once per run.
    fn drain(&mut self) -> Phase {
        self.dut.finalize();
        if let Err(e) = self.recorder.close() {
            if self.trace_error.is_none() {
                self.trace_error = Some(e);
            }
        }
        Phase::Terminated
    }

    /// One tick: evaluate at the current pin values, toggle the clock onto
    /// the model, record one sample keyed by the executed tick, advance.
    fn tick(&mut self) {
        self.dut.eval();
        let executed = self.clock.tick();
        self.dut.set_clock(self.clock.level());
        if let Err(e) = self
            .recorder
            .sample(executed, self.clock.level(), self.reset_asserted)
        {
            if self.trace_error.is_none() {
                self.trace_error = Some(e);
            }
        }
    }
}
