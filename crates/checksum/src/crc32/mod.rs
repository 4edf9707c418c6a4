//! CRC-32 engine and variants.
//!
//! # Variants
//!
//! | Factory | Polynomial | Init | XorOut | Reflected |
//! |---------|------------|------|--------|-----------|
//! | [`Crc32::standard`] | 0x04C11DB7 | 0xFFFFFFFF | 0xFFFFFFFF | yes |
//! | [`Crc32::crc32q`] | 0x814141AB | 0x00000000 | 0x00000000 | no |
//! | [`Crc32::posix`] | 0x04C11DB7 | 0x00000000 | 0xFFFFFFFF | no |
//!
//! `posix` is the polynomial pass of `cksum(1)` only; the utility also feeds
//! the input length before the final XOR, which callers append themselves.
//!
//! # Example
//!
//! ```
//! use checksum::Crc32;
//!
//! let crc = Crc32::standard();
//! assert_eq!(crc.compute(b"1234567890"), 0x261D_AEE5);
//! assert_eq!(crc.hash(b"1234567890"), [0x26, 0x1D, 0xAE, 0xE5]);
//! ```

mod variants;

pub use variants::{Crc32Posix, Crc32Q, Crc32Standard};

use crate::{
  common::{reflect::reflect32, tables::table32},
  constants::crc32::{NORMAL_TABLE, Q_TABLE, STANDARD_TABLE},
  params::CrcParams,
};

define_crc_engine! {
  /// A 32-bit table-driven CRC engine.
  ///
  /// Same contract as [`Crc16`](crate::Crc16) with a 32-bit register.
  engine Crc32,
  /// Incremental CRC-32 state borrowed from a [`Crc32`].
  ///
  /// [`finalize`](Crc32Digest::finalize) does not reset the register.
  digest Crc32Digest,
  register: u32,
  width: 32,
  table_fn: table32,
  reflect_fn: reflect32,
}

impl Crc32 {
  /// CRC-32 (ISO-HDLC): Ethernet, gzip, zip, PNG.
  #[must_use]
  pub const fn standard() -> Self {
    Self::catalogue(&CrcParams::CRC32_STANDARD, &STANDARD_TABLE.0)
  }

  /// CRC-32Q (AIXM).
  #[must_use]
  pub const fn crc32q() -> Self {
    Self::catalogue(&CrcParams::CRC32_Q, &Q_TABLE.0)
  }

  /// CRC-32/POSIX.
  #[must_use]
  pub const fn posix() -> Self {
    Self::catalogue(&CrcParams::CRC32_POSIX, &NORMAL_TABLE.0)
  }
}
