//! Byte order selection.

/// Byte order of a multi-byte field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endian {
  /// Least-significant byte at the lowest offset.
  Little,
  /// Most-significant byte at the lowest offset.
  Big,
}

impl Endian {
  /// The byte order of the target.
  pub const NATIVE: Self = if cfg!(target_endian = "little") { Self::Little } else { Self::Big };

  /// `Little` when `little_endian` is true, `Big` otherwise.
  #[inline]
  #[must_use]
  pub const fn from_little_endian(little_endian: bool) -> Self {
    if little_endian { Self::Little } else { Self::Big }
  }

  #[inline]
  #[must_use]
  pub const fn is_little(self) -> bool {
    matches!(self, Self::Little)
  }

  /// Whether this is the target's byte order, i.e. whether the raw tier can
  /// store without swapping.
  #[inline]
  #[must_use]
  pub const fn is_native(self) -> bool {
    self.is_little() == Self::NATIVE.is_little()
  }

  /// The other byte order.
  #[inline]
  #[must_use]
  pub const fn reverse(self) -> Self {
    match self {
      Self::Little => Self::Big,
      Self::Big => Self::Little,
    }
  }
}

impl Default for Endian {
  #[inline]
  fn default() -> Self {
    Self::NATIVE
  }
}

impl From<bool> for Endian {
  /// `true` selects little-endian.
  #[inline]
  fn from(little_endian: bool) -> Self {
    Self::from_little_endian(little_endian)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn native_matches_target() {
    assert_eq!(Endian::NATIVE.is_little(), u16::from_ne_bytes([1, 0]) == 1);
    assert!(Endian::NATIVE.is_native());
    assert!(!Endian::NATIVE.reverse().is_native());
    assert_eq!(Endian::default(), Endian::NATIVE);
  }

  #[test]
  fn bool_conversion() {
    assert_eq!(Endian::from_little_endian(true), Endian::Little);
    assert_eq!(Endian::from(false), Endian::Big);
    assert_eq!(Endian::Big.reverse(), Endian::Little);
  }
}
