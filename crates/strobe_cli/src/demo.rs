//! Bundled software model for self-contained runs.
//!
//! Real deployments implement [`Dut`] over an externally compiled model (see
//! `strobe_driver::CompiledModel`). When nothing is linked in, the binary
//! drives this free-running counter instead: it counts rising clock edges
//! out of reset and never signals completion, so an unbounded run ends only
//! on an interrupt, like a model with no terminal state.

use strobe_driver::Dut;

/// A free-running rising-edge counter.
#[derive(Clone, Copy, Debug, Default)]
pub struct DemoCounter {
    clock: bool,
    prev_clock: bool,
    reset: bool,
    count: u64,
}

impl DemoCounter {
    /// Creates a counter at zero with both pins low.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rising edges observed out of reset.
    pub fn count(&self) -> u64 {
        self.count
    }
}

impl Dut for DemoCounter {
    fn set_clock(&mut self, level: bool) {
        self.clock = level;
    }

    fn set_reset(&mut self, asserted: bool) {
        self.reset = asserted;
    }

    fn eval(&mut self) {
        if self.clock && !self.prev_clock && !self.reset {
            self.count += 1;
        }
        self.prev_clock = self.clock;
    }

    fn is_finished(&self) -> bool {
        false
    }

    fn finalize(&mut self) {}
}
