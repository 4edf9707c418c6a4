//! CRC-32 constants.
//!
//! | Table | Polynomial | Generator | Variants |
//! |-------|------------|-----------|----------|
//! | [`STANDARD_TABLE`] | 0x04C11DB7 (reflected: 0xEDB88320) | shift-right | CRC-32 |
//! | [`NORMAL_TABLE`] | 0x04C11DB7 | shift-left | CRC-32/POSIX |
//! | [`Q_TABLE`] | 0x814141AB | shift-left | CRC-32Q |

use super::Aligned64;
use crate::common::tables::table32;

/// CRC-32 (IEEE 802.3) polynomial.
pub const IEEE_POLY: u32 = 0x04C1_1DB7;

/// CRC-32Q polynomial.
pub const Q_POLY: u32 = 0x8141_41AB;

/// Reflected table for CRC-32 (ISO-HDLC).
pub static STANDARD_TABLE: Aligned64<[u32; 256]> = Aligned64(table32(IEEE_POLY, true));

/// Normal table for CRC-32/POSIX.
pub static NORMAL_TABLE: Aligned64<[u32; 256]> = Aligned64(table32(IEEE_POLY, false));

/// Normal table for CRC-32Q.
pub static Q_TABLE: Aligned64<[u32; 256]> = Aligned64(table32(Q_POLY, false));
