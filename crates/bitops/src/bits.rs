//! Integer sources for the store functions.
//!
//! The store functions accept any primitive integer and keep only the
//! low-order bits that fit the field, so a `u64` written into a 16-bit field
//! stores its low two bytes and never fails.

mod sealed {
  pub trait Sealed {}
}

/// A primitive integer that can be truncated into a narrower field.
///
/// Sealed; implemented for every primitive integer type up to 64 bits plus
/// `isize`/`usize`.
pub trait LowBits: Copy + sealed::Sealed {
  /// The value's two's-complement bit pattern, sign-extended to 64 bits.
  ///
  /// Only the low `W` bits are ever stored, so the extension never leaks
  /// into a field.
  fn low_bits(self) -> u64;
}

macro_rules! impl_low_bits {
  ($($ty:ty),* $(,)?) => {
    $(
      impl sealed::Sealed for $ty {}

      impl LowBits for $ty {
        #[inline(always)]
        fn low_bits(self) -> u64 {
          self as u64
        }
      }
    )*
  };
}

impl_low_bits!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn signed_values_keep_twos_complement_pattern() {
    assert_eq!((-1i8).low_bits() as u8, 0xFF);
    assert_eq!((-2i16).low_bits() as u16, 0xFFFE);
    assert_eq!(i32::MIN.low_bits() as u32, 0x8000_0000);
  }

  #[test]
  fn unsigned_values_are_zero_extended() {
    assert_eq!(0xABu8.low_bits(), 0xAB);
    assert_eq!(u64::MAX.low_bits(), u64::MAX);
  }
}
