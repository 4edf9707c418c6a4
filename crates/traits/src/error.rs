//! Error types shared across corebits.
//!
//! Errors are small `Copy` values that carry just enough context to report
//! the failure; no allocation, no backtraces.

use core::fmt;

/// A fixed-width field does not fit in the buffer.
///
/// Returned by every bounds-checked operation that reads or writes `needed`
/// bytes starting at `offset` in a buffer of `len` bytes. The buffer is left
/// untouched when this is returned.
///
/// # Examples
///
/// ```
/// use traits::BufferError;
///
/// fn field(buf: &[u8], offset: usize) -> Result<&[u8], BufferError> {
///   BufferError::check(offset, 4, buf.len())?;
///   Ok(&buf[offset..offset + 4])
/// }
///
/// assert!(field(&[0u8; 8], 4).is_ok());
/// let err = field(&[0u8; 8], 5).unwrap_err();
/// assert_eq!(err.offset(), 5);
/// assert_eq!(err.needed(), 4);
/// assert_eq!(err.len(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct BufferError {
  offset: usize,
  needed: usize,
  len: usize,
}

impl BufferError {
  /// Create an error for `needed` bytes at `offset` in a buffer of `len` bytes.
  #[inline]
  #[must_use]
  pub const fn new(offset: usize, needed: usize, len: usize) -> Self {
    Self { offset, needed, len }
  }

  /// Check that `offset..offset + needed` lies within a buffer of `len` bytes.
  ///
  /// Overflow of `offset + needed` is reported as an error, never wrapped.
  #[inline]
  pub const fn check(offset: usize, needed: usize, len: usize) -> Result<(), Self> {
    match offset.checked_add(needed) {
      Some(end) if end <= len => Ok(()),
      _ => Err(Self::new(offset, needed, len)),
    }
  }

  /// Start of the requested range.
  #[inline]
  #[must_use]
  pub const fn offset(&self) -> usize {
    self.offset
  }

  /// Number of bytes the operation needed.
  #[inline]
  #[must_use]
  pub const fn needed(&self) -> usize {
    self.needed
  }

  /// Length of the buffer that was supplied.
  #[inline]
  #[must_use]
  #[allow(clippy::len_without_is_empty)]
  pub const fn len(&self) -> usize {
    self.len
  }
}

impl fmt::Display for BufferError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "buffer too small: {} bytes at offset {} exceed buffer length {}",
      self.needed, self.offset, self.len
    )
  }
}

impl core::error::Error for BufferError {}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{format, string::ToString};

  use super::*;

  #[test]
  fn check_accepts_exact_fit() {
    assert_eq!(BufferError::check(6, 2, 8), Ok(()));
    assert_eq!(BufferError::check(0, 0, 0), Ok(()));
  }

  #[test]
  fn check_rejects_overrun() {
    assert_eq!(BufferError::check(7, 2, 8), Err(BufferError::new(7, 2, 8)));
    assert_eq!(BufferError::check(9, 0, 8), Err(BufferError::new(9, 0, 8)));
  }

  #[test]
  fn check_rejects_offset_overflow() {
    let err = BufferError::check(usize::MAX, 2, 8).unwrap_err();
    assert_eq!(err.offset(), usize::MAX);
    assert_eq!(err.needed(), 2);
  }

  #[test]
  fn display_message() {
    assert_eq!(
      BufferError::new(3, 4, 5).to_string(),
      "buffer too small: 4 bytes at offset 3 exceed buffer length 5"
    );
  }

  #[test]
  fn debug_impl() {
    let dbg = format!("{:?}", BufferError::new(1, 2, 3));
    assert_eq!(dbg, "BufferError { offset: 1, needed: 2, len: 3 }");
  }

  #[test]
  fn error_trait_impl() {
    use core::error::Error;

    let err = BufferError::new(0, 8, 4);
    assert!(err.source().is_none());
  }

  #[test]
  fn trait_bounds() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    fn assert_copy<T: Copy>() {}

    assert_send::<BufferError>();
    assert_sync::<BufferError>();
    assert_copy::<BufferError>();
  }
}
