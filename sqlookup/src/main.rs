//! # sqlookup
//!
//! Emits the `sqlookup` Verilog function used by the FPU square-root unit.
//!
//! ## Overview
//!
//! sqlookup is built on top of sqlookuplib. It takes no arguments and writes
//! the complete function (512 `case` entries between a fixed header and
//! footer) to stdout, ready to be redirected into the RTL tree.
//!
//! ## Usage
//!
//! ```bash
//! # Regenerate the table
//! sqlookup > rtl/fpu/sqlookup.v
//!
//! # See what it is doing (diagnostics go to stderr)
//! RUST_LOG=debug sqlookup > /dev/null
//! ```

use std::process::ExitCode;

use anyhow::Context;

/// Install the stderr logger. `RUST_LOG` overrides the default level.
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

fn run() -> anyhow::Result<()> {
    sqlookuplib::emit().context("failed to write lookup table to stdout")?;
    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("emission failed: {e:?}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
