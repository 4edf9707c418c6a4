//! Safe tier: shift-and-mask encode/decode with bounds checks.
//!
//! Every byte is produced by shifting the value and masking off eight bits,
//! then written through a fixed-size view of the buffer obtained with a
//! bounds check. Nothing here depends on the target's byte order.
//!
//! All functions return [`BufferError`] when the field does not fit, and leave
//! the buffer untouched in that case. Stores take any primitive integer and
//! keep its low-order bits ([`LowBits`]); loads return the signed type of the
//! field width, exactly as the bytes encode it.
//!
//! ```
//! use bitops::{Endian, shift};
//!
//! let mut buf = [0u8; 6];
//! shift::copy32(0x1234_5678u32, &mut buf, 1, Endian::Big)?;
//! assert_eq!(buf, [0x00, 0x12, 0x34, 0x56, 0x78, 0x00]);
//! assert_eq!(shift::to32(&buf, 1, Endian::Big)?, 0x1234_5678);
//!
//! // Wider sources are truncated to the field.
//! shift::copy16_le(0x1234_5678_90AB_CDEFu64, &mut buf, 0)?;
//! assert_eq!(&buf[..2], &[0xEF, 0xCD]);
//!
//! assert!(shift::copy64_le(0i64, &mut buf, 0).is_err());
//! # Ok::<(), bitops::BufferError>(())
//! ```

use traits::BufferError;

use crate::{Endian, LowBits};

/// The `N` bytes at `offset`.
#[inline(always)]
fn field<const N: usize>(buf: &[u8], offset: usize) -> Result<&[u8; N], BufferError> {
  let len = buf.len();
  buf
    .get(offset..)
    .and_then(|tail| tail.first_chunk::<N>())
    .ok_or(BufferError::new(offset, N, len))
}

/// The `N` bytes at `offset`, mutably.
#[inline(always)]
fn field_mut<const N: usize>(buf: &mut [u8], offset: usize) -> Result<&mut [u8; N], BufferError> {
  let len = buf.len();
  buf
    .get_mut(offset..)
    .and_then(|tail| tail.first_chunk_mut::<N>())
    .ok_or(BufferError::new(offset, N, len))
}

/// Bit offset of byte `index` within an `N`-byte field.
#[inline(always)]
const fn byte_shift<const N: usize>(index: usize, endian: Endian) -> usize {
  match endian {
    Endian::Little => index * 8,
    Endian::Big => (N - 1 - index) * 8,
  }
}

#[inline(always)]
fn encode<const N: usize>(bits: u64, endian: Endian) -> [u8; N] {
  let mut out = [0u8; N];
  for (index, byte) in out.iter_mut().enumerate() {
    *byte = ((bits >> byte_shift::<N>(index, endian)) & 0xFF) as u8;
  }
  out
}

#[inline(always)]
fn decode<const N: usize>(bytes: &[u8; N], endian: Endian) -> u64 {
  bytes
    .iter()
    .enumerate()
    .fold(0, |acc, (index, &byte)| acc | (u64::from(byte) << byte_shift::<N>(index, endian)))
}

// ─────────────────────────────────────────────────────────────────────────────
// Byte-wide
// ─────────────────────────────────────────────────────────────────────────────

/// Store the low byte of `value` at `offset`.
///
/// # Errors
///
/// [`BufferError`] if `offset` is out of bounds.
#[inline]
pub fn copy8<V: LowBits>(value: V, buf: &mut [u8], offset: usize) -> Result<(), BufferError> {
  *field_mut::<1>(buf, offset)? = encode::<1>(value.low_bits(), Endian::Little);
  Ok(())
}

/// Read the byte at `offset` as an unsigned value.
///
/// # Errors
///
/// [`BufferError`] if `offset` is out of bounds.
#[inline]
pub fn to8(buf: &[u8], offset: usize) -> Result<u8, BufferError> {
  let [byte] = *field::<1>(buf, offset)?;
  Ok(byte)
}

// ─────────────────────────────────────────────────────────────────────────────
// Integers
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! shift_int {
  (
    bits: $bits:literal,
    bytes: $n:literal,
    signed: $s:ty,
    unsigned: $u:ty,
    copy: [$copy:ident, $copy_le:ident, $copy_be:ident],
    to: [$to:ident, $to_le:ident, $to_be:ident],
    arrays: [$to_bytes:ident, $from_bytes:ident] $(,)?
  ) => {
    #[doc = concat!("Store the low ", $bits, " bits of `value` at `offset` in `endian` byte order.")]
    ///
    /// # Errors
    ///
    #[doc = concat!("[`BufferError`] if `offset + ", $n, "` exceeds `buf.len()`.")]
    #[inline]
    pub fn $copy<V: LowBits>(value: V, buf: &mut [u8], offset: usize, endian: Endian) -> Result<(), BufferError> {
      *field_mut::<$n>(buf, offset)? = encode::<$n>(value.low_bits(), endian);
      Ok(())
    }

    #[doc = concat!("[`", stringify!($copy), "`] in little-endian order.")]
    ///
    /// # Errors
    ///
    #[doc = concat!("[`BufferError`] if `offset + ", $n, "` exceeds `buf.len()`.")]
    #[inline]
    pub fn $copy_le<V: LowBits>(value: V, buf: &mut [u8], offset: usize) -> Result<(), BufferError> {
      $copy(value, buf, offset, Endian::Little)
    }

    #[doc = concat!("[`", stringify!($copy), "`] in big-endian order.")]
    ///
    /// # Errors
    ///
    #[doc = concat!("[`BufferError`] if `offset + ", $n, "` exceeds `buf.len()`.")]
    #[inline]
    pub fn $copy_be<V: LowBits>(value: V, buf: &mut [u8], offset: usize) -> Result<(), BufferError> {
      $copy(value, buf, offset, Endian::Big)
    }

    #[doc = concat!("Read a ", $bits, "-bit integer at `offset` in `endian` byte order.")]
    ///
    /// # Errors
    ///
    #[doc = concat!("[`BufferError`] if `offset + ", $n, "` exceeds `buf.len()`.")]
    #[inline]
    #[allow(clippy::unnecessary_cast)]
    pub fn $to(buf: &[u8], offset: usize, endian: Endian) -> Result<$s, BufferError> {
      Ok(decode::<$n>(field::<$n>(buf, offset)?, endian) as $u as $s)
    }

    #[doc = concat!("[`", stringify!($to), "`] in little-endian order.")]
    ///
    /// # Errors
    ///
    #[doc = concat!("[`BufferError`] if `offset + ", $n, "` exceeds `buf.len()`.")]
    #[inline]
    pub fn $to_le(buf: &[u8], offset: usize) -> Result<$s, BufferError> {
      $to(buf, offset, Endian::Little)
    }

    #[doc = concat!("[`", stringify!($to), "`] in big-endian order.")]
    ///
    /// # Errors
    ///
    #[doc = concat!("[`BufferError`] if `offset + ", $n, "` exceeds `buf.len()`.")]
    #[inline]
    pub fn $to_be(buf: &[u8], offset: usize) -> Result<$s, BufferError> {
      $to(buf, offset, Endian::Big)
    }

    #[doc = concat!("The ", $n, " bytes encoding the low ", $bits, " bits of `value`.")]
    #[inline]
    #[must_use]
    pub fn $to_bytes<V: LowBits>(value: V, endian: Endian) -> [u8; $n] {
      encode::<$n>(value.low_bits(), endian)
    }

    #[doc = concat!("Decode a ", $bits, "-bit integer from its bytes.")]
    #[inline]
    #[must_use]
    #[allow(clippy::unnecessary_cast)]
    pub fn $from_bytes(bytes: [u8; $n], endian: Endian) -> $s {
      decode::<$n>(&bytes, endian) as $u as $s
    }
  };
}

shift_int! {
  bits: 16,
  bytes: 2,
  signed: i16,
  unsigned: u16,
  copy: [copy16, copy16_le, copy16_be],
  to: [to16, to16_le, to16_be],
  arrays: [to_bytes16, from_bytes16],
}

shift_int! {
  bits: 32,
  bytes: 4,
  signed: i32,
  unsigned: u32,
  copy: [copy32, copy32_le, copy32_be],
  to: [to32, to32_le, to32_be],
  arrays: [to_bytes32, from_bytes32],
}

shift_int! {
  bits: 64,
  bytes: 8,
  signed: i64,
  unsigned: u64,
  copy: [copy64, copy64_le, copy64_be],
  to: [to64, to64_le, to64_be],
  arrays: [to_bytes64, from_bytes64],
}

// ─────────────────────────────────────────────────────────────────────────────
// Floats
// ─────────────────────────────────────────────────────────────────────────────
//
// Floats travel as their IEEE-754 bit pattern, so NaN payloads, signed zero
// and infinities are preserved exactly.

/// Store `value`'s IEEE-754 bits at `offset`.
///
/// # Errors
///
/// [`BufferError`] if `offset + 4` exceeds `buf.len()`.
#[inline]
pub fn copy_f32(value: f32, buf: &mut [u8], offset: usize, endian: Endian) -> Result<(), BufferError> {
  copy32(value.to_bits(), buf, offset, endian)
}

/// [`copy_f32`] in little-endian order.
///
/// # Errors
///
/// [`BufferError`] if `offset + 4` exceeds `buf.len()`.
#[inline]
pub fn copy_f32_le(value: f32, buf: &mut [u8], offset: usize) -> Result<(), BufferError> {
  copy_f32(value, buf, offset, Endian::Little)
}

/// [`copy_f32`] in big-endian order.
///
/// # Errors
///
/// [`BufferError`] if `offset + 4` exceeds `buf.len()`.
#[inline]
pub fn copy_f32_be(value: f32, buf: &mut [u8], offset: usize) -> Result<(), BufferError> {
  copy_f32(value, buf, offset, Endian::Big)
}

/// Store `value`'s IEEE-754 bits at `offset`.
///
/// # Errors
///
/// [`BufferError`] if `offset + 8` exceeds `buf.len()`.
#[inline]
pub fn copy_f64(value: f64, buf: &mut [u8], offset: usize, endian: Endian) -> Result<(), BufferError> {
  copy64(value.to_bits(), buf, offset, endian)
}

/// [`copy_f64`] in little-endian order.
///
/// # Errors
///
/// [`BufferError`] if `offset + 8` exceeds `buf.len()`.
#[inline]
pub fn copy_f64_le(value: f64, buf: &mut [u8], offset: usize) -> Result<(), BufferError> {
  copy_f64(value, buf, offset, Endian::Little)
}

/// [`copy_f64`] in big-endian order.
///
/// # Errors
///
/// [`BufferError`] if `offset + 8` exceeds `buf.len()`.
#[inline]
pub fn copy_f64_be(value: f64, buf: &mut [u8], offset: usize) -> Result<(), BufferError> {
  copy_f64(value, buf, offset, Endian::Big)
}

/// Read an `f32` from its IEEE-754 bits at `offset`.
///
/// # Errors
///
/// [`BufferError`] if `offset + 4` exceeds `buf.len()`.
#[inline]
pub fn to_f32(buf: &[u8], offset: usize, endian: Endian) -> Result<f32, BufferError> {
  Ok(f32::from_bits(decode::<4>(field::<4>(buf, offset)?, endian) as u32))
}

/// [`to_f32`] in little-endian order.
///
/// # Errors
///
/// [`BufferError`] if `offset + 4` exceeds `buf.len()`.
#[inline]
pub fn to_f32_le(buf: &[u8], offset: usize) -> Result<f32, BufferError> {
  to_f32(buf, offset, Endian::Little)
}

/// [`to_f32`] in big-endian order.
///
/// # Errors
///
/// [`BufferError`] if `offset + 4` exceeds `buf.len()`.
#[inline]
pub fn to_f32_be(buf: &[u8], offset: usize) -> Result<f32, BufferError> {
  to_f32(buf, offset, Endian::Big)
}

/// Read an `f64` from its IEEE-754 bits at `offset`.
///
/// # Errors
///
/// [`BufferError`] if `offset + 8` exceeds `buf.len()`.
#[inline]
pub fn to_f64(buf: &[u8], offset: usize, endian: Endian) -> Result<f64, BufferError> {
  Ok(f64::from_bits(decode::<8>(field::<8>(buf, offset)?, endian)))
}

/// [`to_f64`] in little-endian order.
///
/// # Errors
///
/// [`BufferError`] if `offset + 8` exceeds `buf.len()`.
#[inline]
pub fn to_f64_le(buf: &[u8], offset: usize) -> Result<f64, BufferError> {
  to_f64(buf, offset, Endian::Little)
}

/// [`to_f64`] in big-endian order.
///
/// # Errors
///
/// [`BufferError`] if `offset + 8` exceeds `buf.len()`.
#[inline]
pub fn to_f64_be(buf: &[u8], offset: usize) -> Result<f64, BufferError> {
  to_f64(buf, offset, Endian::Big)
}

/// The 4 bytes of `value`'s IEEE-754 bits.
#[inline]
#[must_use]
pub fn to_bytes_f32(value: f32, endian: Endian) -> [u8; 4] {
  to_bytes32(value.to_bits(), endian)
}

/// Decode an `f32` from its bytes.
#[inline]
#[must_use]
pub fn from_bytes_f32(bytes: [u8; 4], endian: Endian) -> f32 {
  f32::from_bits(from_bytes32(bytes, endian) as u32)
}

/// The 8 bytes of `value`'s IEEE-754 bits.
#[inline]
#[must_use]
pub fn to_bytes_f64(value: f64, endian: Endian) -> [u8; 8] {
  to_bytes64(value.to_bits(), endian)
}

/// Decode an `f64` from its bytes.
#[inline]
#[must_use]
pub fn from_bytes_f64(bytes: [u8; 8], endian: Endian) -> f64 {
  f64::from_bits(from_bytes64(bytes, endian) as u64)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn copy8_truncates_and_to8_is_unsigned() {
    let mut buf = [0u8; 2];
    copy8(0x1234i32, &mut buf, 1).unwrap();
    copy8(-1i8, &mut buf, 0).unwrap();
    assert_eq!(buf, [0xFF, 0x34]);
    assert_eq!(to8(&buf, 0).unwrap(), 0xFF);
    assert!(copy8(0u8, &mut buf, 2).is_err());
    assert!(to8(&buf, 2).is_err());
  }

  #[test]
  fn byte_layout() {
    let mut buf = [0u8; 8];
    copy16(0x0102u16, &mut buf, 0, Endian::Little).unwrap();
    assert_eq!(&buf[..2], &[0x02, 0x01]);
    copy16(0x0102u16, &mut buf, 0, Endian::Big).unwrap();
    assert_eq!(&buf[..2], &[0x01, 0x02]);

    copy64_le(0x0102_0304_0506_0708u64, &mut buf, 0).unwrap();
    assert_eq!(buf, [8, 7, 6, 5, 4, 3, 2, 1]);
    copy64_be(0x0102_0304_0506_0708u64, &mut buf, 0).unwrap();
    assert_eq!(buf, [1, 2, 3, 4, 5, 6, 7, 8]);
  }

  #[test]
  fn truncation_keeps_low_bits() {
    let mut buf = [0u8; 4];
    copy16_le(0x1234_5678_90AB_CDEFu64, &mut buf, 0).unwrap();
    assert_eq!(&buf[..2], &[0xEF, 0xCD]);
    copy32_be(-1i64, &mut buf, 0).unwrap();
    assert_eq!(buf, [0xFF; 4]);
  }

  #[test]
  fn loads_are_signed() {
    assert_eq!(to16_be(&[0xFF, 0xFE], 0).unwrap(), -2);
    assert_eq!(to32_le(&[0, 0, 0, 0x80], 0).unwrap(), i32::MIN);
    assert_eq!(to64_be(&[0xFF; 8], 0).unwrap(), -1);
  }

  #[test]
  fn failed_store_leaves_buffer_untouched() {
    let mut buf = [0xAAu8; 5];
    let err = copy32_le(0u32, &mut buf, 2).unwrap_err();
    assert_eq!((err.offset(), err.needed(), err.len()), (2, 4, 5));
    assert_eq!(buf, [0xAA; 5]);
    assert!(copy_f64_be(1.0, &mut buf, usize::MAX).is_err());
    assert_eq!(buf, [0xAA; 5]);
  }

  #[test]
  fn float_specials_keep_bit_patterns() {
    let mut buf = [0u8; 8];
    copy_f32_be(f32::NEG_INFINITY, &mut buf, 0).unwrap();
    assert_eq!(&buf[..4], &[0xFF, 0x80, 0x00, 0x00]);

    let payload = f64::from_bits(0x7FF8_0000_DEAD_BEEF);
    copy_f64_le(payload, &mut buf, 0).unwrap();
    assert_eq!(to_f64_le(&buf, 0).unwrap().to_bits(), 0x7FF8_0000_DEAD_BEEF);

    copy_f32_le(-0.0, &mut buf, 0).unwrap();
    assert_eq!(to_f32_le(&buf, 0).unwrap().to_bits(), (-0.0f32).to_bits());
  }

  #[test]
  fn array_helpers_match_buffer_forms() {
    let mut buf = [0u8; 8];
    copy32(0xDEAD_BEEFu32, &mut buf, 0, Endian::Big).unwrap();
    assert_eq!(to_bytes32(0xDEAD_BEEFu32, Endian::Big), [0xDE, 0xAD, 0xBE, 0xEF]);
    assert_eq!(from_bytes32([0xDE, 0xAD, 0xBE, 0xEF], Endian::Big), 0xDEAD_BEEFu32 as i32);
    assert_eq!(from_bytes_f64(to_bytes_f64(core::f64::consts::PI, Endian::Little), Endian::Little), core::f64::consts::PI);
    assert_eq!(from_bytes16(to_bytes16(-300i32, Endian::Big), Endian::Big), -300);
  }
}
