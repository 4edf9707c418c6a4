//! CRC-16 engine and variants.
//!
//! CRC-16 is not a single algorithm: multiple polynomials and parameter sets
//! exist in the wild. [`Crc16`] is a parameterised engine covering all of
//! them; the named factories below return the common ones with tables built
//! at compile time.
//!
//! # Variants
//!
//! | Factory | Polynomial | Init | Reflected | Byte swap |
//! |---------|------------|------|-----------|-----------|
//! | [`Crc16::ibm`] | 0x8005 | 0x0000 | yes | no |
//! | [`Crc16::ccitt_false`] | 0x1021 | 0xFFFF | no | no |
//! | [`Crc16::ccitt_xmodem`] | 0x1021 | 0x0000 | no | no |
//! | [`Crc16::ccitt_aug`] | 0x1021 | 0x1D0F | no | no |
//! | [`Crc16::ccitt_kermit`] | 0x1021 | 0x0000 | yes | no |
//! | [`Crc16::ccitt_kermit_lsb`] | 0x1021 | 0x0000 | yes | yes |
//! | [`Crc16::ccitt_mcrf4xx`] | 0x1021 | 0xFFFF | yes | no |
//!
//! # Example
//!
//! ```
//! use checksum::Crc16;
//!
//! let ibm = Crc16::ibm();
//! assert_eq!(ibm.compute(b"1234567890"), 0xC57A);
//!
//! let mut digest = ibm.digest();
//! digest.update(b"12345");
//! digest.update(b"67890");
//! assert_eq!(digest.finalize(), [0xC5, 0x7A]);
//! ```

mod variants;

pub use variants::{
  Crc16CcittAug, Crc16CcittFalse, Crc16CcittKermit, Crc16CcittKermitLsb, Crc16CcittMcrf4xx, Crc16CcittXmodem,
  Crc16Ibm,
};

use crate::{
  common::{reflect::reflect16, tables::table16},
  constants::crc16::{CCITT_REFLECTED_TABLE, CCITT_TABLE, IBM_TABLE},
  params::CrcParams,
};

define_crc_engine! {
  /// A 16-bit table-driven CRC engine.
  ///
  /// Immutable once built; share it freely. The running register lives in a
  /// [`Crc16Digest`] or is passed explicitly to the register primitives.
  engine Crc16,
  /// Incremental CRC-16 state borrowed from a [`Crc16`].
  ///
  /// [`finalize`](Crc16Digest::finalize) leaves the register untouched, so a
  /// digest must be [`reset`](Crc16Digest::reset) before it is reused for
  /// unrelated data.
  digest Crc16Digest,
  register: u16,
  width: 16,
  table_fn: table16,
  reflect_fn: reflect16,
}

impl Crc16 {
  /// CRC-16/IBM (ARC).
  #[must_use]
  pub const fn ibm() -> Self {
    Self::catalogue(&CrcParams::CRC16_IBM, &IBM_TABLE.0)
  }

  /// CRC-16/CCITT-FALSE.
  #[must_use]
  pub const fn ccitt_false() -> Self {
    Self::catalogue(&CrcParams::CRC16_CCITT_FALSE, &CCITT_TABLE.0)
  }

  /// CRC-16/XMODEM.
  #[must_use]
  pub const fn ccitt_xmodem() -> Self {
    Self::catalogue(&CrcParams::CRC16_CCITT_XMODEM, &CCITT_TABLE.0)
  }

  /// CRC-16/AUG-CCITT.
  #[must_use]
  pub const fn ccitt_aug() -> Self {
    Self::catalogue(&CrcParams::CRC16_CCITT_AUG, &CCITT_TABLE.0)
  }

  /// CRC-16/KERMIT.
  #[must_use]
  pub const fn ccitt_kermit() -> Self {
    Self::catalogue(&CrcParams::CRC16_CCITT_KERMIT, &CCITT_REFLECTED_TABLE.0)
  }

  /// CRC-16/KERMIT with the result emitted least-significant byte first.
  ///
  /// `compute` returns the KERMIT value with its bytes swapped.
  #[must_use]
  pub const fn ccitt_kermit_lsb() -> Self {
    Self::catalogue(&CrcParams::CRC16_CCITT_KERMIT_LSB, &CCITT_REFLECTED_TABLE.0)
  }

  /// CRC-16/MCRF4XX.
  #[must_use]
  pub const fn ccitt_mcrf4xx() -> Self {
    Self::catalogue(&CrcParams::CRC16_CCITT_MCRF4XX, &CCITT_REFLECTED_TABLE.0)
  }
}
