//! # sqlookuplib
//!
//! Generator for the `sqlookup` Verilog function: a 512-entry table used by
//! the FPU square-root unit to seed its iteration.
//!
//! ## Overview
//!
//! The square-root unit normalizes its operand's mantissa into `[1, 4)`,
//! folding the exponent's parity into bit 8 of a 9-bit index. The table maps
//! that index to `round(256 * (sqrt(m) - 1))`, the fractional part of the
//! square root in 1/256 steps:
//!
//! - **Indices `0..256`**: `m = (256 + i) / 256`
//! - **Indices `256..512`**: `m = (256 + (i & 255)) / 128`
//!
//! Rounding is `floor(0.5 + x)` and all arithmetic is `f64`, so the emitted
//! text is reproducible bit-for-bit.
//!
//! ## Features
//!
//! - **Table access**: [`value`], checked [`lookup`], and an [`entries`] iterator
//! - **Verilog emission**: [`write_function`] into any writer, [`render`] to a
//!   string, [`emit`] to stdout
//! - **Serializable data**: [`TableEntry`] derives serde traits
//!
//! ## Example
//!
//! ```rust
//! use sqlookuplib::{entries, lookup, render, TABLE_SIZE};
//!
//! assert_eq!(lookup(0).unwrap(), 0);
//! assert_eq!(lookup(256).unwrap(), 106);
//! assert!(lookup(512).is_err());
//!
//! assert_eq!(entries().len(), TABLE_SIZE);
//!
//! let text = render().unwrap();
//! assert!(text.starts_with("   function [51:44] sqlookup;\n"));
//! assert!(text.contains("           511: sqlookup = 255;\n"));
//! ```

pub mod error;
pub mod table;
pub mod verilog;

pub use error::SqlookupError;
pub use table::{
    entries, lookup, round_half_up, value, Entries, Segment, TableEntry, SCALE, SEGMENT_SIZE,
    TABLE_SIZE,
};
pub use verilog::{case_line, emit, render, write_function, POSTAMBLE, PREAMBLE};

/// Result type for sqlookuplib operations
pub type Result<T> = std::result::Result<T, SqlookupError>;
