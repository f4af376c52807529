//! The device-under-test capability surface.
//!
//! The harness treats the model as a black box with a fixed capability set:
//! drive the clock and reset pins, evaluate, query completion, finalize.
//! [`CompiledModel`] binds that set to the C ABI exported by an externally
//! compiled model; anything else (a software model, a test double) just
//! implements [`Dut`] directly.

use std::ffi::c_void;

/// Capability set of a device under test.
///
/// The engine owns one implementor exclusively for a run's lifetime and is
/// the only caller of these methods. `finalize` has call-once semantics that
/// the model is not required to enforce internally; the engine guarantees the
/// single invocation.
pub trait Dut {
    /// Drives the clock pin to `level`.
    fn set_clock(&mut self, level: bool);

    /// Asserts (`true`) or deasserts (`false`) the reset pin.
    fn set_reset(&mut self, asserted: bool);

    /// Advances the model for the current pin values.
    fn eval(&mut self);

    /// Whether the model has signaled that the simulation is finished.
    /// Consulted every tick.
    fn is_finished(&self) -> bool;

    /// Flushes and cleans up the model. Called exactly once, from the
    /// draining phase.
    fn finalize(&mut self);
}

/// C-ABI entry points of an externally compiled model.
///
/// `model` is the opaque instance handle the embedder obtained from the
/// model's own constructor.
#[derive(Clone, Copy)]
pub struct ModelVTable {
    /// Drives the model's clock pin.
    pub set_clock: unsafe extern "C" fn(model: *mut c_void, level: bool),
    /// Drives the model's reset pin (`true` = asserted).
    pub set_reset: unsafe extern "C" fn(model: *mut c_void, asserted: bool),
    /// Evaluates the model for the current pin values.
    pub eval: unsafe extern "C" fn(model: *mut c_void),
    /// Queries the model's finished signal.
    pub is_finished: unsafe extern "C" fn(model: *const c_void) -> bool,
    /// Flushes and cleans up the model.
    pub finalize: unsafe extern "C" fn(model: *mut c_void),
}

/// Adapter implementing [`Dut`] over a [`ModelVTable`] and an opaque model
/// handle.
///
/// The adapter borrows the handle for the run; it never frees it. The
/// embedder that constructed the model instance remains responsible for its
/// memory.
pub struct CompiledModel {
    vtable: ModelVTable,
    model: *mut c_void,
}

impl CompiledModel {
    /// Binds `vtable` to `model`.
    ///
    /// # Safety
    ///
    /// `model` must be a live instance handle accepted by every function in
    /// `vtable`, and must outlive the adapter. No other code may use the
    /// handle while the adapter exists.
    pub unsafe fn new(vtable: ModelVTable, model: *mut c_void) -> Self {
        Self { vtable, model }
    }
}

impl Dut for CompiledModel {
    fn set_clock(&mut self, level: bool) {
        unsafe { (self.vtable.set_clock)(self.model, level) }
    }

    fn set_reset(&mut self, asserted: bool) {
        unsafe { (self.vtable.set_reset)(self.model, asserted) }
    }

    fn eval(&mut self) {
        unsafe { (self.vtable.eval)(self.model) }
    }

    fn is_finished(&self) -> bool {
        unsafe { (self.vtable.is_finished)(self.model) }
    }

    fn finalize(&mut self) {
        unsafe { (self.vtable.finalize)(self.model) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A C-ABI model stub backing the adapter tests.
    #[repr(C)]
    struct StubModel {
        clock: bool,
        reset: bool,
        evals: u64,
        finished: bool,
        finalized: u32,
    }

    unsafe extern "C" fn stub_set_clock(model: *mut c_void, level: bool) {
        (*(model as *mut StubModel)).clock = level;
    }

    unsafe extern "C" fn stub_set_reset(model: *mut c_void, asserted: bool) {
        (*(model as *mut StubModel)).reset = asserted;
    }

    unsafe extern "C" fn stub_eval(model: *mut c_void) {
        (*(model as *mut StubModel)).evals += 1;
    }

    unsafe extern "C" fn stub_is_finished(model: *const c_void) -> bool {
        (*(model as *const StubModel)).finished
    }

    unsafe extern "C" fn stub_finalize(model: *mut c_void) {
        (*(model as *mut StubModel)).finalized += 1;
    }

    const STUB_VTABLE: ModelVTable = ModelVTable {
        set_clock: stub_set_clock,
        set_reset: stub_set_reset,
        eval: stub_eval,
        is_finished: stub_is_finished,
        finalize: stub_finalize,
    };

    #[test]
    fn adapter_forwards_every_capability() {
        let handle = Box::into_raw(Box::new(StubModel {
            clock: false,
            reset: false,
            evals: 0,
            finished: false,
            finalized: 0,
        }));

        let mut dut = unsafe { CompiledModel::new(STUB_VTABLE, handle as *mut c_void) };
        dut.set_clock(true);
        dut.set_reset(true);
        dut.eval();
        dut.eval();
        assert!(!dut.is_finished());
        dut.finalize();

        let stub = unsafe { Box::from_raw(handle) };
        assert!(stub.clock);
        assert!(stub.reset);
        assert_eq!(stub.evals, 2);
        assert_eq!(stub.finalized, 1);
    }

    #[test]
    fn adapter_reads_the_finished_signal() {
        let handle = Box::into_raw(Box::new(StubModel {
            clock: false,
            reset: false,
            evals: 0,
            finished: true,
            finalized: 0,
        }));

        let dut = unsafe { CompiledModel::new(STUB_VTABLE, handle as *mut c_void) };
        assert!(dut.is_finished());

        drop(unsafe { Box::from_raw(handle) });
    }
}
