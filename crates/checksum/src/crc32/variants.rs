//! Named CRC-32 hasher types.

use super::Crc32;

define_crc_variant! {
  /// CRC-32 (ISO-HDLC) hasher.
  ///
  /// ```
  /// use checksum::{Checksum, Crc32Standard};
  ///
  /// let mut hasher = Crc32Standard::new();
  /// hasher.update(b"1234");
  /// hasher.update(b"56789");
  /// assert_eq!(hasher.finalize(), 0xCBF4_3926);
  /// ```
  pub struct Crc32Standard {
    engine: Crc32,
    register: u32,
    ctor: Crc32::standard(),
  }
}

define_crc_variant! {
  /// CRC-32Q hasher.
  pub struct Crc32Q {
    engine: Crc32,
    register: u32,
    ctor: Crc32::crc32q(),
  }
}

define_crc_variant! {
  /// CRC-32/POSIX hasher (polynomial pass only, no length suffix).
  pub struct Crc32Posix {
    engine: Crc32,
    register: u32,
    ctor: Crc32::posix(),
  }
}
