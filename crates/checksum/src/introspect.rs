//! Table introspection.
//!
//! Formats a lookup table as a Rust array literal, for comparing against
//! published tables or pasting into other code. Zero allocation; the output
//! is produced by `Display`.
//!
//! # Examples
//!
//! ```
//! use checksum::Crc16;
//!
//! let literal = Crc16::ibm().table_literal().to_string();
//! assert!(literal.starts_with("[\n  0x0000, 0xC0C1, 0xC181,"));
//! ```

use core::fmt;

use crate::{Crc16, Crc32};

/// Number of entries printed per line.
const PER_LINE: usize = 8;

/// A 256-entry lookup table that displays as a Rust array literal.
#[derive(Clone, Copy)]
pub struct TableLiteral<'a, T> {
  table: &'a [T; 256],
}

impl<'a, T> TableLiteral<'a, T> {
  /// Wrap a table for display.
  #[inline]
  #[must_use]
  pub const fn new(table: &'a [T; 256]) -> Self {
    Self { table }
  }
}

impl<T: fmt::UpperHex> fmt::Display for TableLiteral<'_, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    // "0x" plus two digits per byte.
    let width = 2 + core::mem::size_of::<T>() * 2;
    f.write_str("[\n")?;
    for row in self.table.chunks(PER_LINE) {
      f.write_str(" ")?;
      for entry in row {
        write!(f, " {entry:#0width$X},")?;
      }
      f.write_str("\n")?;
    }
    f.write_str("]")
  }
}

impl<T: fmt::UpperHex> fmt::Debug for TableLiteral<'_, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(self, f)
  }
}

impl Crc16 {
  /// The lookup table as a displayable Rust literal.
  #[inline]
  #[must_use]
  pub fn table_literal(&self) -> TableLiteral<'_, u16> {
    TableLiteral::new(self.table())
  }
}

impl Crc32 {
  /// The lookup table as a displayable Rust literal.
  #[inline]
  #[must_use]
  pub fn table_literal(&self) -> TableLiteral<'_, u32> {
    TableLiteral::new(self.table())
  }
}
