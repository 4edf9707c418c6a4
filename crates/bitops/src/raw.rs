//! Raw tier: one unaligned load or store per field, no bounds checks.
//!
//! Each function performs a single `read_unaligned`/`write_unaligned` of the
//! full field at `offset`. The plain forms use the target's byte order; the
//! `_swap` forms reverse the bytes first, giving the opposite order. The
//! `_le`/`_be`/`_endian` forms pick between the two for the requested order.
//!
//! Output is byte-identical to [`crate::shift`] for the same value, width and
//! byte order.
//!
//! # Safety
//!
//! Every function here is `unsafe`: the caller guarantees that
//! `offset + W/8 <= buf.len()` for a `W`-bit field. Violating this is
//! undefined behaviour. Debug builds assert it.
//!
//! ```
//! use bitops::{Endian, raw, shift};
//!
//! let mut a = [0u8; 8];
//! let mut b = [0u8; 8];
//! // SAFETY: 8 bytes at offset 0 of an 8-byte buffer.
//! unsafe { raw::copy64_be(-2i64, &mut a, 0) };
//! shift::copy64(-2i64, &mut b, 0, Endian::Big)?;
//! assert_eq!(a, b);
//! # Ok::<(), bitops::BufferError>(())
//! ```

use crate::{Endian, LowBits};

/// Debug-build check of the caller's bounds guarantee.
#[inline(always)]
fn debug_check(offset: usize, needed: usize, len: usize) {
  debug_assert!(
    offset.checked_add(needed).is_some_and(|end| end <= len),
    "raw access of {needed} bytes at offset {offset} exceeds buffer length {len}"
  );
}

macro_rules! raw_int {
  (
    bits: $bits:literal,
    bytes: $n:literal,
    signed: $s:ty,
    unsigned: $u:ty,
    copy: [$copy:ident, $copy_swap:ident, $copy_le:ident, $copy_be:ident, $copy_endian:ident],
    to: [$to:ident, $to_swap:ident, $to_le:ident, $to_be:ident, $to_endian:ident] $(,)?
  ) => {
    #[doc = concat!("Store the low ", $bits, " bits of `value` at `offset` in native byte order.")]
    ///
    /// # Safety
    ///
    #[doc = concat!("`offset + ", $n, "` must not exceed `buf.len()`.")]
    #[inline]
    #[allow(clippy::unnecessary_cast)]
    pub unsafe fn $copy<V: LowBits>(value: V, buf: &mut [u8], offset: usize) {
      debug_check(offset, $n, buf.len());
      // SAFETY: the caller guarantees the field lies inside `buf`; the store is unaligned.
      unsafe { buf.as_mut_ptr().add(offset).cast::<$u>().write_unaligned(value.low_bits() as $u) }
    }

    #[doc = concat!("[`", stringify!($copy), "`] with the bytes reversed (non-native order).")]
    ///
    /// # Safety
    ///
    #[doc = concat!("`offset + ", $n, "` must not exceed `buf.len()`.")]
    #[inline]
    #[allow(clippy::unnecessary_cast)]
    pub unsafe fn $copy_swap<V: LowBits>(value: V, buf: &mut [u8], offset: usize) {
      debug_check(offset, $n, buf.len());
      let swapped = (value.low_bits() as $u).swap_bytes();
      // SAFETY: the caller guarantees the field lies inside `buf`; the store is unaligned.
      unsafe { buf.as_mut_ptr().add(offset).cast::<$u>().write_unaligned(swapped) }
    }

    /// Little-endian store.
    ///
    /// # Safety
    ///
    #[doc = concat!("`offset + ", $n, "` must not exceed `buf.len()`.")]
    #[inline]
    pub unsafe fn $copy_le<V: LowBits>(value: V, buf: &mut [u8], offset: usize) {
      // SAFETY: forwarded caller contract.
      unsafe { $copy_endian(value, buf, offset, Endian::Little) }
    }

    /// Big-endian store.
    ///
    /// # Safety
    ///
    #[doc = concat!("`offset + ", $n, "` must not exceed `buf.len()`.")]
    #[inline]
    pub unsafe fn $copy_be<V: LowBits>(value: V, buf: &mut [u8], offset: usize) {
      // SAFETY: forwarded caller contract.
      unsafe { $copy_endian(value, buf, offset, Endian::Big) }
    }

    /// Store in `endian` byte order, swapping only when it is not native.
    ///
    /// # Safety
    ///
    #[doc = concat!("`offset + ", $n, "` must not exceed `buf.len()`.")]
    #[inline]
    pub unsafe fn $copy_endian<V: LowBits>(value: V, buf: &mut [u8], offset: usize, endian: Endian) {
      // SAFETY: forwarded caller contract.
      unsafe {
        if endian.is_native() {
          $copy(value, buf, offset)
        } else {
          $copy_swap(value, buf, offset)
        }
      }
    }

    #[doc = concat!("Read a ", $bits, "-bit integer at `offset` in native byte order.")]
    ///
    /// # Safety
    ///
    #[doc = concat!("`offset + ", $n, "` must not exceed `buf.len()`.")]
    #[inline]
    #[must_use]
    pub unsafe fn $to(buf: &[u8], offset: usize) -> $s {
      debug_check(offset, $n, buf.len());
      // SAFETY: the caller guarantees the field lies inside `buf`; the load is unaligned.
      unsafe { buf.as_ptr().add(offset).cast::<$s>().read_unaligned() }
    }

    #[doc = concat!("[`", stringify!($to), "`] with the bytes reversed (non-native order).")]
    ///
    /// # Safety
    ///
    #[doc = concat!("`offset + ", $n, "` must not exceed `buf.len()`.")]
    #[inline]
    #[must_use]
    pub unsafe fn $to_swap(buf: &[u8], offset: usize) -> $s {
      // SAFETY: forwarded caller contract.
      unsafe { $to(buf, offset) }.swap_bytes()
    }

    /// Little-endian load.
    ///
    /// # Safety
    ///
    #[doc = concat!("`offset + ", $n, "` must not exceed `buf.len()`.")]
    #[inline]
    #[must_use]
    pub unsafe fn $to_le(buf: &[u8], offset: usize) -> $s {
      // SAFETY: forwarded caller contract.
      unsafe { $to_endian(buf, offset, Endian::Little) }
    }

    /// Big-endian load.
    ///
    /// # Safety
    ///
    #[doc = concat!("`offset + ", $n, "` must not exceed `buf.len()`.")]
    #[inline]
    #[must_use]
    pub unsafe fn $to_be(buf: &[u8], offset: usize) -> $s {
      // SAFETY: forwarded caller contract.
      unsafe { $to_endian(buf, offset, Endian::Big) }
    }

    /// Load in `endian` byte order, swapping only when it is not native.
    ///
    /// # Safety
    ///
    #[doc = concat!("`offset + ", $n, "` must not exceed `buf.len()`.")]
    #[inline]
    #[must_use]
    pub unsafe fn $to_endian(buf: &[u8], offset: usize, endian: Endian) -> $s {
      // SAFETY: forwarded caller contract.
      unsafe {
        if endian.is_native() {
          $to(buf, offset)
        } else {
          $to_swap(buf, offset)
        }
      }
    }
  };
}

raw_int! {
  bits: 16,
  bytes: 2,
  signed: i16,
  unsigned: u16,
  copy: [copy16, copy16_swap, copy16_le, copy16_be, copy16_endian],
  to: [to16, to16_swap, to16_le, to16_be, to16_endian],
}

raw_int! {
  bits: 32,
  bytes: 4,
  signed: i32,
  unsigned: u32,
  copy: [copy32, copy32_swap, copy32_le, copy32_be, copy32_endian],
  to: [to32, to32_swap, to32_le, to32_be, to32_endian],
}

raw_int! {
  bits: 64,
  bytes: 8,
  signed: i64,
  unsigned: u64,
  copy: [copy64, copy64_swap, copy64_le, copy64_be, copy64_endian],
  to: [to64, to64_swap, to64_le, to64_be, to64_endian],
}

// Floats reuse the integer forms on their IEEE-754 bit pattern.
macro_rules! raw_float {
  (
    float: $f:ty,
    bits: $bits:ty,
    int: [$copy_int:ident, $copy_int_swap:ident, $to_int:ident, $to_int_swap:ident],
    copy: [$copy:ident, $copy_swap:ident, $copy_le:ident, $copy_be:ident, $copy_endian:ident],
    to: [$to:ident, $to_swap:ident, $to_le:ident, $to_be:ident, $to_endian:ident] $(,)?
  ) => {
    #[doc = concat!("Store an `", stringify!($f), "` at `offset` in native byte order.")]
    ///
    /// # Safety
    ///
    #[doc = concat!("`offset + size_of::<", stringify!($f), ">()` must not exceed `buf.len()`.")]
    #[inline]
    pub unsafe fn $copy(value: $f, buf: &mut [u8], offset: usize) {
      // SAFETY: forwarded caller contract.
      unsafe { $copy_int(value.to_bits(), buf, offset) }
    }

    #[doc = concat!("[`", stringify!($copy), "`] with the bytes reversed (non-native order).")]
    ///
    /// # Safety
    ///
    #[doc = concat!("`offset + size_of::<", stringify!($f), ">()` must not exceed `buf.len()`.")]
    #[inline]
    pub unsafe fn $copy_swap(value: $f, buf: &mut [u8], offset: usize) {
      // SAFETY: forwarded caller contract.
      unsafe { $copy_int_swap(value.to_bits(), buf, offset) }
    }

    /// Little-endian store.
    ///
    /// # Safety
    ///
    #[doc = concat!("`offset + size_of::<", stringify!($f), ">()` must not exceed `buf.len()`.")]
    #[inline]
    pub unsafe fn $copy_le(value: $f, buf: &mut [u8], offset: usize) {
      // SAFETY: forwarded caller contract.
      unsafe { $copy_endian(value, buf, offset, Endian::Little) }
    }

    /// Big-endian store.
    ///
    /// # Safety
    ///
    #[doc = concat!("`offset + size_of::<", stringify!($f), ">()` must not exceed `buf.len()`.")]
    #[inline]
    pub unsafe fn $copy_be(value: $f, buf: &mut [u8], offset: usize) {
      // SAFETY: forwarded caller contract.
      unsafe { $copy_endian(value, buf, offset, Endian::Big) }
    }

    /// Store in `endian` byte order, swapping only when it is not native.
    ///
    /// # Safety
    ///
    #[doc = concat!("`offset + size_of::<", stringify!($f), ">()` must not exceed `buf.len()`.")]
    #[inline]
    pub unsafe fn $copy_endian(value: $f, buf: &mut [u8], offset: usize, endian: Endian) {
      // SAFETY: forwarded caller contract.
      unsafe {
        if endian.is_native() {
          $copy(value, buf, offset)
        } else {
          $copy_swap(value, buf, offset)
        }
      }
    }

    #[doc = concat!("Read an `", stringify!($f), "` at `offset` in native byte order.")]
    ///
    /// # Safety
    ///
    #[doc = concat!("`offset + size_of::<", stringify!($f), ">()` must not exceed `buf.len()`.")]
    #[inline]
    #[must_use]
    pub unsafe fn $to(buf: &[u8], offset: usize) -> $f {
      // SAFETY: forwarded caller contract.
      <$f>::from_bits(unsafe { $to_int(buf, offset) } as $bits)
    }

    #[doc = concat!("[`", stringify!($to), "`] with the bytes reversed (non-native order).")]
    ///
    /// # Safety
    ///
    #[doc = concat!("`offset + size_of::<", stringify!($f), ">()` must not exceed `buf.len()`.")]
    #[inline]
    #[must_use]
    pub unsafe fn $to_swap(buf: &[u8], offset: usize) -> $f {
      // SAFETY: forwarded caller contract.
      <$f>::from_bits(unsafe { $to_int_swap(buf, offset) } as $bits)
    }

    /// Little-endian load.
    ///
    /// # Safety
    ///
    #[doc = concat!("`offset + size_of::<", stringify!($f), ">()` must not exceed `buf.len()`.")]
    #[inline]
    #[must_use]
    pub unsafe fn $to_le(buf: &[u8], offset: usize) -> $f {
      // SAFETY: forwarded caller contract.
      unsafe { $to_endian(buf, offset, Endian::Little) }
    }

    /// Big-endian load.
    ///
    /// # Safety
    ///
    #[doc = concat!("`offset + size_of::<", stringify!($f), ">()` must not exceed `buf.len()`.")]
    #[inline]
    #[must_use]
    pub unsafe fn $to_be(buf: &[u8], offset: usize) -> $f {
      // SAFETY: forwarded caller contract.
      unsafe { $to_endian(buf, offset, Endian::Big) }
    }

    /// Load in `endian` byte order, swapping only when it is not native.
    ///
    /// # Safety
    ///
    #[doc = concat!("`offset + size_of::<", stringify!($f), ">()` must not exceed `buf.len()`.")]
    #[inline]
    #[must_use]
    pub unsafe fn $to_endian(buf: &[u8], offset: usize, endian: Endian) -> $f {
      // SAFETY: forwarded caller contract.
      unsafe {
        if endian.is_native() {
          $to(buf, offset)
        } else {
          $to_swap(buf, offset)
        }
      }
    }
  };
}

raw_float! {
  float: f32,
  bits: u32,
  int: [copy32, copy32_swap, to32, to32_swap],
  copy: [copy_f32, copy_f32_swap, copy_f32_le, copy_f32_be, copy_f32_endian],
  to: [to_f32, to_f32_swap, to_f32_le, to_f32_be, to_f32_endian],
}

raw_float! {
  float: f64,
  bits: u64,
  int: [copy64, copy64_swap, to64, to64_swap],
  copy: [copy_f64, copy_f64_swap, copy_f64_le, copy_f64_be, copy_f64_endian],
  to: [to_f64, to_f64_swap, to_f64_le, to_f64_be, to_f64_endian],
}
