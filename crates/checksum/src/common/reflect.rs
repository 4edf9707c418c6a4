//! Bit reflection.
//!
//! Reflection reverses the low `width` bits of a register. It converts between
//! the LSB-first (reflected) and MSB-first (normal) forms of a polynomial, and
//! is applied at finalize when a variant's input and output reflection differ.

/// Reverse the low `width` bits of `value`; bits above `width` are dropped.
///
/// `width` must be in `1..=64`. Widths outside that range yield `0`.
#[inline]
#[must_use]
pub const fn reflect_bits(value: u64, width: u8) -> u64 {
  if width == 0 || width > 64 {
    return 0;
  }
  value.reverse_bits() >> (64 - width as u32)
}

/// Reverse all 16 bits.
#[inline]
#[must_use]
pub const fn reflect16(value: u16) -> u16 {
  reflect_bits(value as u64, 16) as u16
}

/// Reverse all 32 bits.
#[inline]
#[must_use]
pub const fn reflect32(value: u32) -> u32 {
  reflect_bits(value as u64, 32) as u32
}

#[cfg(test)]
mod tests {
  use proptest::prelude::*;

  use super::*;

  #[test]
  fn known_polynomials() {
    assert_eq!(reflect16(0x8005), 0xA001);
    assert_eq!(reflect16(0x1021), 0x8408);
    assert_eq!(reflect32(0x04C1_1DB7), 0xEDB8_8320);
    assert_eq!(reflect32(0x8141_41AB), 0xD582_8281);
  }

  #[test]
  fn drops_high_bits() {
    assert_eq!(reflect_bits(0x1_0001, 16), 0x8000);
    assert_eq!(reflect_bits(0b1011, 4), 0b1101);
  }

  #[test]
  fn degenerate_widths() {
    assert_eq!(reflect_bits(u64::MAX, 0), 0);
    assert_eq!(reflect_bits(u64::MAX, 65), 0);
    assert_eq!(reflect_bits(1, 64), 1 << 63);
  }

  proptest! {
    #[test]
    fn reflect16_is_involution(v in any::<u16>()) {
      prop_assert_eq!(reflect16(reflect16(v)), v);
    }

    #[test]
    fn reflect32_is_involution(v in any::<u32>()) {
      prop_assert_eq!(reflect32(reflect32(v)), v);
    }

    #[test]
    fn matches_reverse_bits(v16 in any::<u16>(), v32 in any::<u32>()) {
      prop_assert_eq!(reflect16(v16), v16.reverse_bits());
      prop_assert_eq!(reflect32(v32), v32.reverse_bits());
    }
  }
}
