//! Verilog emission of the lookup table.
//!
//! The output is a `function` body meant to be pasted (or redirected) into
//! the square-root unit's source. Indentation and blank lines are part of the
//! contract: downstream tooling diffs against it byte-for-byte.

use std::io::{self, BufWriter, Write};

use crate::table::{entries, TableEntry, TABLE_SIZE};
use crate::Result;

/// Lines written before the case entries.
pub const PREAMBLE: &[&str] = &[
    "   function [51:44] sqlookup;",
    "      input [8:0] idx;",
    "",
    "      begin",
    "         case(idx)",
];

/// Lines written after the case entries.
pub const POSTAMBLE: &[&str] = &[
    "         endcase",
    "      end",
    "",
    "   endfunction // u1",
    "",
];

/// Format a single case entry, without the trailing newline.
pub fn case_line(entry: &TableEntry) -> String {
    format!("           {}: sqlookup = {};", entry.index, entry.value)
}

/// Write the complete function to `out`.
pub fn write_function<W: Write>(out: &mut W) -> Result<()> {
    for line in PREAMBLE {
        writeln!(out, "{line}")?;
    }

    let mut written = 0usize;
    for entry in entries() {
        writeln!(out, "{}", case_line(&entry))?;
        written += 1;
    }
    debug_assert_eq!(written, TABLE_SIZE);

    for line in POSTAMBLE {
        writeln!(out, "{line}")?;
    }

    log::trace!("wrote {} case entries", written);
    Ok(())
}

/// Render the complete function to a string.
pub fn render() -> Result<String> {
    let mut buf = Vec::with_capacity(16 * 1024);
    write_function(&mut buf)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

/// Write the complete function to standard output.
pub fn emit() -> Result<()> {
    log::debug!("emitting {}-entry sqlookup function", TABLE_SIZE);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_function(&mut out)?;
    out.flush()?;
    log::debug!("emission complete");
    Ok(())
}
