//! Strobe CLI — drives a compiled RTL model through reset and an active
//! clock run.
//!
//! The binary recognizes exactly one flag, `--cycles <unsigned>`; everything
//! else on the command line is left for the model. Stdout carries two
//! informational lines per run (start, and the last tick reached); errors go
//! to stderr with exit code 1.

#![warn(missing_docs)]

mod demo;

use std::path::Path;
use std::process;

use strobe_config::RunConfig;
use strobe_driver::{drive, install_interrupt_handler, CancelFlag};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Runs one driver session over the given argument list.
///
/// Returns the process exit code. The interrupt handler goes in before any
/// simulation state exists, and the run mode is resolved before the model or
/// the trace file is created, so a bad `--cycles` aborts with nothing to
/// tear down.
fn run(args: &[String]) -> Result<i32, Box<dyn std::error::Error>> {
    let cancel = CancelFlag::new();
    install_interrupt_handler(&cancel)?;

    let run_config = RunConfig::from_args(args)?;
    let harness = strobe_config::resolve_config(Path::new("."))?;

    let dut = demo::DemoCounter::new();

    println!("[driver] Starting simulation");
    let summary = drive(dut, &run_config, &harness, cancel)?;
    println!("[driver] Ending simulation at tick #{}", summary.last_tick);

    Ok(0)
}
