//! CRC algorithm parameters.
//!
//! Width-independent descriptions of every supported variant, following the
//! conventions of the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/)
//! plus one extra axis, `byte_swap`, for variants that emit their register
//! least-significant byte first.

use crate::{common::reflect::reflect_bits, error::CrcError};

/// CRC algorithm parameters.
///
/// # Parameters
///
/// - `width`: Register width in bits (16 or 32)
/// - `polynomial`: Generator polynomial in normal form, implicit top bit omitted
/// - `initial`: Seed loaded into the register before the first byte
/// - `reflect_in`: Process input LSB-first (shift-right table, reflected polynomial)
/// - `reflect_out`: Output reflection; the register is reflected at finalize
///   when this differs from `reflect_in`
/// - `xor_out`: Value XORed into the (possibly reflected) register
/// - `byte_swap`: Emit the result least-significant byte first
///
/// The seed is used exactly as given, in the register's own bit order. For
/// reflected variants this is the catalogue `init` bit-reversed; every
/// variant listed here has a symmetric seed, so the two coincide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrcParams {
  /// Catalogue-style name.
  pub name: &'static str,
  /// Width in bits (16 or 32).
  pub width: u8,
  /// Generator polynomial (without implicit high bit).
  pub polynomial: u64,
  /// Initial value for the CRC register.
  pub initial: u64,
  /// Reflect input bytes before processing.
  pub reflect_in: bool,
  /// Reflect final CRC before XOR.
  pub reflect_out: bool,
  /// XOR value applied to final CRC.
  pub xor_out: u64,
  /// Emit the final value least-significant byte first.
  pub byte_swap: bool,
}

impl CrcParams {
  /// CRC-16/IBM (ARC) - Modbus framing, LHA, legacy IBM protocols
  pub const CRC16_IBM: Self = Self {
    name: "CRC-16/IBM",
    width: 16,
    polynomial: 0x8005,
    initial: 0x0000,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0x0000,
    byte_swap: false,
  };

  /// CRC-16/CCITT-FALSE - the common MSB-first CCITT flavour
  pub const CRC16_CCITT_FALSE: Self = Self {
    name: "CRC-16/CCITT-FALSE",
    width: 16,
    polynomial: 0x1021,
    initial: 0xFFFF,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x0000,
    byte_swap: false,
  };

  /// CRC-16/XMODEM - XMODEM, ZMODEM, Bluetooth ACL
  pub const CRC16_CCITT_XMODEM: Self = Self {
    name: "CRC-16/XMODEM",
    width: 16,
    polynomial: 0x1021,
    initial: 0x0000,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x0000,
    byte_swap: false,
  };

  /// CRC-16/AUG-CCITT (SPI-FUJITSU) - augmented-message CCITT
  pub const CRC16_CCITT_AUG: Self = Self {
    name: "CRC-16/AUG-CCITT",
    width: 16,
    polynomial: 0x1021,
    initial: 0x1D0F,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x0000,
    byte_swap: false,
  };

  /// CRC-16/KERMIT - Kermit protocol, reflected CCITT
  pub const CRC16_CCITT_KERMIT: Self = Self {
    name: "CRC-16/KERMIT",
    width: 16,
    polynomial: 0x1021,
    initial: 0x0000,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0x0000,
    byte_swap: false,
  };

  /// CRC-16/KERMIT emitted least-significant byte first
  pub const CRC16_CCITT_KERMIT_LSB: Self = Self {
    name: "CRC-16/KERMIT-LSB",
    width: 16,
    polynomial: 0x1021,
    initial: 0x0000,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0x0000,
    byte_swap: true,
  };

  /// CRC-16/MCRF4XX - Microchip RFID tags, MAVLink
  pub const CRC16_CCITT_MCRF4XX: Self = Self {
    name: "CRC-16/MCRF4XX",
    width: 16,
    polynomial: 0x1021,
    initial: 0xFFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0x0000,
    byte_swap: false,
  };

  /// CRC-32 (ISO-HDLC) - Ethernet, gzip, PNG, zip
  pub const CRC32_STANDARD: Self = Self {
    name: "CRC-32",
    width: 32,
    polynomial: 0x04C1_1DB7,
    initial: 0xFFFF_FFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0xFFFF_FFFF,
    byte_swap: false,
  };

  /// CRC-32Q (AIXM) - aeronautical data exchange
  pub const CRC32_Q: Self = Self {
    name: "CRC-32Q",
    width: 32,
    polynomial: 0x8141_41AB,
    initial: 0x0000_0000,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x0000_0000,
    byte_swap: false,
  };

  /// CRC-32/POSIX (CKSUM) - the `cksum` utility polynomial pass
  pub const CRC32_POSIX: Self = Self {
    name: "CRC-32/POSIX",
    width: 32,
    polynomial: 0x04C1_1DB7,
    initial: 0x0000_0000,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0xFFFF_FFFF,
    byte_swap: false,
  };

  /// Every named variant, 16-bit first.
  pub const CATALOGUE: [Self; 10] = [
    Self::CRC16_IBM,
    Self::CRC16_CCITT_FALSE,
    Self::CRC16_CCITT_XMODEM,
    Self::CRC16_CCITT_AUG,
    Self::CRC16_CCITT_KERMIT,
    Self::CRC16_CCITT_KERMIT_LSB,
    Self::CRC16_CCITT_MCRF4XX,
    Self::CRC32_STANDARD,
    Self::CRC32_Q,
    Self::CRC32_POSIX,
  ];

  /// Look up a named variant, ignoring ASCII case.
  #[must_use]
  pub fn by_name(name: &str) -> Option<Self> {
    Self::CATALOGUE.into_iter().find(|p| p.name.eq_ignore_ascii_case(name))
  }

  /// Returns the reflected polynomial (bit-reversed).
  ///
  /// For reflected CRCs, the polynomial is processed in bit-reversed form.
  #[must_use]
  pub const fn polynomial_reflected(&self) -> u64 {
    reflect_bits(self.polynomial, self.width)
  }

  /// Check that this parameter set describes a `width`-bit CRC whose values
  /// all fit the register.
  pub(crate) fn validate(&self, width: u8) -> Result<(), CrcError> {
    if self.width != width {
      return Err(CrcError::WidthMismatch { expected: width, found: self.width });
    }
    let mask = if width >= 64 { u64::MAX } else { (1u64 << width) - 1 };
    for (field, value) in [("polynomial", self.polynomial), ("initial", self.initial), ("xor_out", self.xor_out)] {
      if value & !mask != 0 {
        return Err(CrcError::ValueTooWide { field, value, width });
      }
    }
    Ok(())
  }
}
