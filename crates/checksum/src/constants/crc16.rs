//! CRC-16 constants.
//!
//! Polynomials in normal form. Three tables cover all seven named variants:
//!
//! | Table | Polynomial | Generator | Variants |
//! |-------|------------|-----------|----------|
//! | [`IBM_TABLE`] | 0x8005 (reflected: 0xA001) | shift-right | IBM |
//! | [`CCITT_TABLE`] | 0x1021 | shift-left | CCITT-FALSE, XMODEM, AUG |
//! | [`CCITT_REFLECTED_TABLE`] | 0x1021 (reflected: 0x8408) | shift-right | KERMIT, KERMIT-LSB, MCRF4XX |

use super::Aligned64;
use crate::common::tables::table16;

/// CRC-16/IBM polynomial.
pub const IBM_POLY: u16 = 0x8005;

/// CRC-16/CCITT polynomial.
pub const CCITT_POLY: u16 = 0x1021;

/// Reflected table for CRC-16/IBM.
pub static IBM_TABLE: Aligned64<[u16; 256]> = Aligned64(table16(IBM_POLY, true));

/// Normal table for the MSB-first CCITT variants.
pub static CCITT_TABLE: Aligned64<[u16; 256]> = Aligned64(table16(CCITT_POLY, false));

/// Reflected table for the LSB-first CCITT variants.
pub static CCITT_REFLECTED_TABLE: Aligned64<[u16; 256]> = Aligned64(table16(CCITT_POLY, true));

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn tables_are_cache_aligned() {
    assert_eq!(core::ptr::from_ref(&IBM_TABLE.0) as usize % 64, 0);
    assert_eq!(core::ptr::from_ref(&CCITT_TABLE.0) as usize % 64, 0);
    assert_eq!(core::ptr::from_ref(&CCITT_REFLECTED_TABLE.0) as usize % 64, 0);
  }

  #[test]
  fn test_polynomials() {
    assert_eq!(IBM_TABLE.0[0x80], 0xA001);
    assert_eq!(CCITT_TABLE.0[1], CCITT_POLY);
    assert_eq!(CCITT_REFLECTED_TABLE.0[0x80], 0x8408);
  }
}
