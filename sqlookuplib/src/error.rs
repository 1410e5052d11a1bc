//! Error types for sqlookuplib

use thiserror::Error;

/// Errors that can occur while generating the lookup table
#[derive(Error, Debug)]
pub enum SqlookupError {
    /// Index outside the 9-bit selector range
    #[error("index {} is out of range for a {}-entry table", .index, crate::TABLE_SIZE)]
    IndexOutOfRange { index: u32 },

    /// IO error while writing the generated function. The underlying error is
    /// exposed as `source()`, not repeated in the message.
    #[error("IO error")]
    Io(#[from] std::io::Error),
}
