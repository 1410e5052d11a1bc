//! The square-root rescaling table.
//!
//! The table maps a 9-bit index to `round(256 * (sqrt(m) - 1))`, where the
//! mantissa `m` is rebuilt from the low 8 index bits and bit 8 selects
//! whether the exponent was even or odd:
//!
//! - **Lower** segment (`0..256`): `m = (256 + i) / 256`, so `m` in `[1, 2)`
//! - **Upper** segment (`256..512`): `m = (256 + (i & 255)) / 128`, so `m` in `[2, 4)`
//!
//! Everything is computed in `f64`. The rounding is `floor(0.5 + x)`, which is
//! neither ties-to-even nor [`f64::round`].

use serde::{Deserialize, Serialize};

use crate::error::SqlookupError;
use crate::Result;

/// Number of entries in the table (every value of a 9-bit index).
pub const TABLE_SIZE: usize = 512;

/// Number of entries in each segment.
pub const SEGMENT_SIZE: usize = 256;

/// Output scale: table values are fractions of `1/SCALE`.
pub const SCALE: f64 = 256.0;

/// Half of the index space, selected by bit 8 of the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    /// Indices `0..256`, mantissa in `[1, 2)`
    Lower,
    /// Indices `256..512`, mantissa in `[2, 4)`
    Upper,
}

impl Segment {
    /// Segment selected by bit 8 of `index`. Higher bits are ignored.
    pub fn of(index: u16) -> Self {
        if index & 0x100 == 0 {
            Segment::Lower
        } else {
            Segment::Upper
        }
    }

    /// Divisor applied to `256 + offset` to rebuild the mantissa.
    pub fn divisor(self) -> f64 {
        match self {
            Segment::Lower => 256.0,
            Segment::Upper => 128.0,
        }
    }
}

/// One `(index, value)` pair of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEntry {
    /// Selector value, `0..512`
    pub index: u16,
    /// Table value for `index`
    pub value: i32,
}

impl TableEntry {
    /// Compute the entry for `index`.
    pub fn new(index: u16) -> Self {
        Self {
            index,
            value: value(index),
        }
    }

    /// Segment this entry belongs to.
    pub fn segment(&self) -> Segment {
        Segment::of(self.index)
    }
}

/// Round half up: `floor(0.5 + x)`.
pub fn round_half_up(x: f64) -> f64 {
    (0.5 + x).floor()
}

/// Table value for `index`.
///
/// Only the low 9 bits are used, as a 9-bit selector would see them.
/// Use [`lookup`] to reject indices outside the table instead.
pub fn value(index: u16) -> i32 {
    let segment = Segment::of(index);
    let offset = f64::from(index & 0xff);
    let mantissa = (SCALE + offset) / segment.divisor();
    round_half_up(SCALE * (mantissa.sqrt() - 1.0)) as i32
}

/// Checked table lookup.
pub fn lookup(index: u32) -> Result<i32> {
    if index as usize >= TABLE_SIZE {
        return Err(SqlookupError::IndexOutOfRange { index });
    }
    Ok(value(index as u16))
}

/// Iterate over every entry in ascending index order.
pub fn entries() -> Entries {
    Entries { next: 0 }
}

/// Iterator over all [`TableEntry`] values, see [`entries`].
#[derive(Debug, Clone)]
pub struct Entries {
    next: u16,
}

impl Iterator for Entries {
    type Item = TableEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next as usize >= TABLE_SIZE {
            return None;
        }
        let entry = TableEntry::new(self.next);
        self.next += 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = TABLE_SIZE - self.next as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Entries {}

impl std::iter::FusedIterator for Entries {}
