//! Waveform capture for driver runs.
//!
//! [`TraceRecorder`] abstracts per-tick waveform output behind a runtime
//! strategy: [`NullTrace`] when capture is disabled, [`VcdTrace`] (Value
//! Change Dump text, viewable in GTKWave or Surfer) when enabled. Both paths
//! are always compiled, so either can be exercised without rebuilding.
//!
//! The recorder sees the harness-visible pins only (clock and reset), one
//! sample per tick, keyed by the tick just executed.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::DriverError;

/// File name of the waveform artifact, relative to the working directory.
pub const TRACE_FILE_NAME: &str = "main.vcd";

/// Trait for per-tick waveform recording.
pub trait TraceRecorder {
    /// Records one sample for the tick that just evaluated.
    fn sample(&mut self, tick: u64, clock: bool, reset: bool) -> Result<(), DriverError>;

    /// Flushes and closes the output. The engine calls this exactly once,
    /// strictly after the model has been finalized.
    fn close(&mut self) -> Result<(), DriverError>;
}

/// The disabled strategy: every operation is a no-op.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullTrace;

impl TraceRecorder for NullTrace {
    fn sample(&mut self, _tick: u64, _clock: bool, _reset: bool) -> Result<(), DriverError> {
        Ok(())
    }

    fn close(&mut self) -> Result<(), DriverError> {
        Ok(())
    }
}

/// VCD recorder for the harness pins.
///
/// The header, variable definitions, and `$dumpvars` marker are written at
/// construction; each sample then emits a timestamp and both pin values.
pub struct VcdTrace<W: Write> {
    writer: W,
    current_time: Option<u64>,
}

impl VcdTrace<BufWriter<File>> {
    /// Opens `path` for writing and emits the VCD preamble.
    pub fn create(path: &Path, hierarchy_depth: u32) -> Result<Self, DriverError> {
        let file = File::create(path)?;
        Self::new(BufWriter::new(file), hierarchy_depth)
    }
}

impl<W: Write> VcdTrace<W> {
    // Identifier codes for the two registered pins.
    const CLK_ID: &'static str = "!";
    const RESET_ID: &'static str = "\"";

    /// Creates a recorder over an arbitrary writer and emits the VCD
    /// preamble. Useful for testing without filesystem dependencies.
    pub fn new(mut writer: W, hierarchy_depth: u32) -> Result<Self, DriverError> {
        writeln!(writer, "$date")?;
        writeln!(writer, "  Simulation date")?;
        writeln!(writer, "$end")?;
        writeln!(writer, "$version")?;
        writeln!(writer, "  Strobe RTL driver")?;
        writeln!(writer, "$end")?;
        writeln!(writer, "$timescale")?;
        writeln!(writer, "  1ns")?;
        writeln!(writer, "$end")?;
        writeln!(writer, "$comment hierarchy depth limit {hierarchy_depth} $end")?;
        writeln!(writer, "$scope module driver $end")?;
        writeln!(writer, "$var wire 1 {} clk $end", Self::CLK_ID)?;
        writeln!(writer, "$var wire 1 {} reset $end", Self::RESET_ID)?;
        writeln!(writer, "$upscope $end")?;
        writeln!(writer, "$enddefinitions $end")?;
        writeln!(writer, "$dumpvars")?;
        Ok(Self {
            writer,
            current_time: None,
        })
    }

    fn bit(value: bool) -> char {
        if value {
            '1'
        } else {
            '0'
        }
    }
}

impl<W: Write> TraceRecorder for VcdTrace<W> {
    fn sample(&mut self, tick: u64, clock: bool, reset: bool) -> Result<(), DriverError> {
        if self.current_time != Some(tick) {
            writeln!(self.writer, "#{tick}")?;
            self.current_time = Some(tick);
        }
        writeln!(self.writer, "{}{}", Self::bit(clock), Self::CLK_ID)?;
        writeln!(self.writer, "{}{}", Self::bit(reset), Self::RESET_ID)?;
        Ok(())
    }

    fn close(&mut self) -> Result<(), DriverError> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorded(samples: &[(u64, bool, bool)]) -> String {
        let mut buf = Vec::new();
        let mut rec = VcdTrace::new(&mut buf, 99).unwrap();
        for &(tick, clock, reset) in samples {
            rec.sample(tick, clock, reset).unwrap();
        }
        rec.close().unwrap();
        drop(rec);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn preamble_contents() {
        let output = recorded(&[]);
        assert!(output.contains("$version"));
        assert!(output.contains("Strobe RTL driver"));
        assert!(output.contains("$timescale"));
        assert!(output.contains("$comment hierarchy depth limit 99 $end"));
        assert!(output.contains("$scope module driver $end"));
        assert!(output.contains("$var wire 1 ! clk $end"));
        assert!(output.contains("$var wire 1 \" reset $end"));
        assert!(output.contains("$upscope $end"));
        assert!(output.contains("$enddefinitions $end"));
        assert!(output.contains("$dumpvars"));
    }

    #[test]
    fn sample_emits_timestamp_and_both_pins() {
        let output = recorded(&[(0, true, true)]);
        assert!(output.contains("#0\n1!\n1\"\n"));
    }

    #[test]
    fn one_timestamp_per_tick() {
        let output = recorded(&[(0, true, true), (1, false, true), (2, true, false)]);
        assert!(output.contains("#0\n1!\n1\"\n#1\n0!\n1\"\n#2\n1!\n0\"\n"));
    }

    #[test]
    fn configured_depth_lands_in_the_header() {
        let mut buf = Vec::new();
        let rec = VcdTrace::new(&mut buf, 4).unwrap();
        drop(rec);
        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("$comment hierarchy depth limit 4 $end"));
    }

    #[test]
    fn create_writes_a_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join(TRACE_FILE_NAME);
        let mut rec = VcdTrace::create(&path, 99).unwrap();
        rec.sample(0, false, true).unwrap();
        rec.close().unwrap();
        drop(rec);

        let output = std::fs::read_to_string(&path).unwrap();
        assert!(output.contains("$enddefinitions $end"));
        assert!(output.contains("#0"));
    }

    #[test]
    fn null_trace_is_a_no_op() {
        let mut rec = NullTrace;
        rec.sample(0, true, true).unwrap();
        rec.sample(1, false, false).unwrap();
        rec.close().unwrap();
    }
}
