//! Named CRC-16 hasher types.

use super::Crc16;

define_crc_variant! {
  /// CRC-16/IBM (ARC) hasher.
  ///
  /// ```
  /// use checksum::{Checksum, Crc16Ibm};
  ///
  /// assert_eq!(Crc16Ibm::checksum(b"123456789"), 0xBB3D);
  /// ```
  pub struct Crc16Ibm {
    engine: Crc16,
    register: u16,
    ctor: Crc16::ibm(),
  }
}

define_crc_variant! {
  /// CRC-16/CCITT-FALSE hasher.
  pub struct Crc16CcittFalse {
    engine: Crc16,
    register: u16,
    ctor: Crc16::ccitt_false(),
  }
}

define_crc_variant! {
  /// CRC-16/XMODEM hasher.
  pub struct Crc16CcittXmodem {
    engine: Crc16,
    register: u16,
    ctor: Crc16::ccitt_xmodem(),
  }
}

define_crc_variant! {
  /// CRC-16/AUG-CCITT hasher.
  pub struct Crc16CcittAug {
    engine: Crc16,
    register: u16,
    ctor: Crc16::ccitt_aug(),
  }
}

define_crc_variant! {
  /// CRC-16/KERMIT hasher.
  pub struct Crc16CcittKermit {
    engine: Crc16,
    register: u16,
    ctor: Crc16::ccitt_kermit(),
  }
}

define_crc_variant! {
  /// CRC-16/KERMIT hasher with byte-swapped output.
  pub struct Crc16CcittKermitLsb {
    engine: Crc16,
    register: u16,
    ctor: Crc16::ccitt_kermit_lsb(),
  }
}

define_crc_variant! {
  /// CRC-16/MCRF4XX hasher.
  pub struct Crc16CcittMcrf4xx {
    engine: Crc16,
    register: u16,
    ctor: Crc16::ccitt_mcrf4xx(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Checksum;

  #[test]
  fn hasher_matches_engine() {
    let data = b"The quick brown fox jumps over the lazy dog";
    assert_eq!(Crc16Ibm::checksum(data), Crc16::ibm().compute(data));
    assert_eq!(Crc16CcittFalse::checksum(data), Crc16::ccitt_false().compute(data));
    assert_eq!(Crc16CcittXmodem::checksum(data), Crc16::ccitt_xmodem().compute(data));
    assert_eq!(Crc16CcittAug::checksum(data), Crc16::ccitt_aug().compute(data));
    assert_eq!(Crc16CcittKermit::checksum(data), Crc16::ccitt_kermit().compute(data));
    assert_eq!(Crc16CcittKermitLsb::checksum(data), Crc16::ccitt_kermit_lsb().compute(data));
    assert_eq!(Crc16CcittMcrf4xx::checksum(data), Crc16::ccitt_mcrf4xx().compute(data));
  }

  #[test]
  fn engine_is_shared() {
    assert!(core::ptr::eq(Crc16Ibm::engine(), Crc16Ibm::engine()));
    assert_eq!(Crc16Ibm::engine().name(), "CRC-16/IBM");
  }

  #[test]
  fn resume_continues_finished_value() {
    let (a, b) = b"1234567890".split_at(4);
    let mut h = Crc16CcittKermitLsb::resume(Crc16CcittKermitLsb::checksum(a));
    h.update(b);
    assert_eq!(h.finalize(), 0x6B28);
    assert_eq!(h.finalize_bytes(), [0x6B, 0x28]);
  }

  #[test]
  fn reset_returns_to_seed() {
    let mut h = Crc16CcittMcrf4xx::new();
    h.update(b"abc");
    h.reset();
    assert_eq!(h, Crc16CcittMcrf4xx::default());
    assert_eq!(h.register(), 0xFFFF);
  }
}
