//! Const-fn CRC lookup table generation for 16- and 32-bit registers.
//!
//! Every table has 256 entries, one per input byte. Two generators exist per
//! width:
//!
//! | Generator | Input order | Polynomial form | Bit tested |
//! |-----------|-------------|-----------------|------------|
//! | `shift_right_*` | reflected (LSB-first) | reflected | lowest |
//! | `shift_left_*` | normal (MSB-first) | normal | highest |
//!
//! The same functions build the compile-time tables of the named variants and
//! the runtime tables of custom engines.

// SAFETY: All array indexing in this module uses bounded loop indices (0..256).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use super::reflect::{reflect16, reflect32};

// ─────────────────────────────────────────────────────────────────────────────
// CRC-16 Table Generation
// ─────────────────────────────────────────────────────────────────────────────

/// Build a reflected CRC-16 table.
///
/// # Arguments
///
/// * `poly` - The reflected polynomial (e.g. `0xA001` for CRC-16/IBM)
#[must_use]
pub const fn shift_right_table16(poly: u16) -> [u16; 256] {
  let mut table = [0u16; 256];
  let mut i = 0usize;
  while i < 256 {
    let mut crc = i as u16;
    let mut bit = 0;
    while bit < 8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
      bit += 1;
    }
    table[i] = crc;
    i += 1;
  }
  table
}

/// Build a normal (MSB-first) CRC-16 table.
///
/// # Arguments
///
/// * `poly` - The polynomial in normal form (e.g. `0x1021` for CCITT)
#[must_use]
pub const fn shift_left_table16(poly: u16) -> [u16; 256] {
  let mut table = [0u16; 256];
  let mut i = 0usize;
  while i < 256 {
    let mut crc = (i as u16) << 8;
    let mut bit = 0;
    while bit < 8 {
      crc = if crc & 0x8000 != 0 { (crc << 1) ^ poly } else { crc << 1 };
      bit += 1;
    }
    table[i] = crc;
    i += 1;
  }
  table
}

/// Build the CRC-16 table for a normal-form polynomial and input order.
///
/// Reflected input reflects the polynomial and uses the shift-right generator.
#[must_use]
pub const fn table16(poly: u16, reflect_in: bool) -> [u16; 256] {
  if reflect_in {
    shift_right_table16(reflect16(poly))
  } else {
    shift_left_table16(poly)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// CRC-32 Table Generation
// ─────────────────────────────────────────────────────────────────────────────

/// Build a reflected CRC-32 table.
///
/// # Arguments
///
/// * `poly` - The reflected polynomial (e.g. `0xEDB88320` for CRC-32)
#[must_use]
pub const fn shift_right_table32(poly: u32) -> [u32; 256] {
  let mut table = [0u32; 256];
  let mut i = 0usize;
  while i < 256 {
    let mut crc = i as u32;
    let mut bit = 0;
    while bit < 8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
      bit += 1;
    }
    table[i] = crc;
    i += 1;
  }
  table
}

/// Build a normal (MSB-first) CRC-32 table.
#[must_use]
pub const fn shift_left_table32(poly: u32) -> [u32; 256] {
  let mut table = [0u32; 256];
  let mut i = 0usize;
  while i < 256 {
    let mut crc = (i as u32) << 24;
    let mut bit = 0;
    while bit < 8 {
      crc = if crc & 0x8000_0000 != 0 { (crc << 1) ^ poly } else { crc << 1 };
      bit += 1;
    }
    table[i] = crc;
    i += 1;
  }
  table
}

/// Build the CRC-32 table for a normal-form polynomial and input order.
#[must_use]
pub const fn table32(poly: u32, reflect_in: bool) -> [u32; 256] {
  if reflect_in {
    shift_right_table32(reflect32(poly))
  } else {
    shift_left_table32(poly)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Table storage
// ─────────────────────────────────────────────────────────────────────────────

/// A lookup table that is either shared from a `static` or owned by the engine.
#[derive(Clone, Copy)]
pub(crate) enum TableRef<T: 'static> {
  Static(&'static [T; 256]),
  Owned([T; 256]),
}

impl<T: 'static> TableRef<T> {
  #[inline(always)]
  pub(crate) const fn get(&self) -> &[T; 256] {
    match self {
      Self::Static(table) => *table,
      Self::Owned(table) => table,
    }
  }

  #[inline]
  pub(crate) const fn is_static(&self) -> bool {
    matches!(self, Self::Static(_))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn entry_zero_is_zero() {
    assert_eq!(table16(0x8005, true)[0], 0);
    assert_eq!(table16(0x1021, false)[0], 0);
    assert_eq!(table32(0x04C1_1DB7, true)[0], 0);
    assert_eq!(table32(0x8141_41AB, false)[0], 0);
  }

  #[test]
  fn well_known_entries() {
    // Classic zlib table.
    let crc32 = table32(0x04C1_1DB7, true);
    assert_eq!(crc32[1], 0x7707_3096);
    assert_eq!(crc32[255], 0x2D02_EF8D);

    // Classic CCITT (XMODEM) table.
    let ccitt = table16(0x1021, false);
    assert_eq!(ccitt[1], 0x1021);
    assert_eq!(ccitt[255], 0x1EF0);

    // Classic ARC table.
    let ibm = table16(0x8005, true);
    assert_eq!(ibm[1], 0xC0C1);
    assert_eq!(ibm[255], 0x4040);

    // Normal generator: entry 1 of the shift-left table is the polynomial itself.
    assert_eq!(table32(0x04C1_1DB7, false)[1], 0x04C1_1DB7);
    assert_eq!(table32(0x8141_41AB, false)[1], 0x8141_41AB);
  }

  #[test]
  fn reflected_table_is_bit_mirror_of_normal_table() {
    let normal = table16(0x1021, false);
    let reflected = table16(0x1021, true);
    for i in 0..256usize {
      let mirrored = (i as u8).reverse_bits() as usize;
      assert_eq!(reflected[mirrored], normal[i].reverse_bits(), "entry {i}");
    }

    let normal = table32(0x04C1_1DB7, false);
    let reflected = table32(0x04C1_1DB7, true);
    for i in 0..256usize {
      let mirrored = (i as u8).reverse_bits() as usize;
      assert_eq!(reflected[mirrored], normal[i].reverse_bits(), "entry {i}");
    }
  }

  #[test]
  fn table_ref_views_agree() {
    static TABLE: [u16; 256] = table16(0x1021, false);
    let shared = TableRef::Static(&TABLE);
    let owned = TableRef::Owned(table16(0x1021, false));
    assert!(shared.is_static());
    assert!(!owned.is_static());
    assert_eq!(shared.get(), owned.get());
  }
}
