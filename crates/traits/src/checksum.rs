//! Streaming checksum convention.
//!
//! Every named CRC variant implements [`Checksum`], so code written against
//! the trait works with any of them and with the I/O adapters in
//! [`crate::io`].

use core::fmt::Debug;

/// A non-cryptographic checksum with a reset / update / finalize lifecycle.
///
/// ```rust,ignore
/// use checksum::{Checksum, Crc16Ibm};
///
/// let one_shot = Crc16Ibm::checksum(b"1234567890");
///
/// let mut hasher = Crc16Ibm::new();
/// hasher.update(b"12345");
/// hasher.update(b"67890");
/// assert_eq!(hasher.finalize(), one_shot);
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must not change the running state; calling it twice returns
///   the same value, and further updates continue from where the data left off
/// - `reset()` must restore the state `new()` (or `with_initial()`) produced
pub trait Checksum: Clone + Default {
  /// Output size in bytes (2 for CRC-16, 4 for CRC-32).
  const OUTPUT_SIZE: usize;

  /// The numeric checksum value.
  type Output: Copy + Eq + Debug + Default;

  /// Create a hasher seeded with the algorithm's default initial register.
  #[must_use]
  fn new() -> Self;

  /// Create a hasher seeded with a raw register value.
  ///
  /// The value is used as the register itself, before any output
  /// reflection or final XOR, which is what CRC chaining across separate
  /// buffers requires.
  #[must_use]
  fn with_initial(initial: Self::Output) -> Self;

  /// Feed more bytes into the running state.
  fn update(&mut self, data: &[u8]);

  /// Feed several non-contiguous buffers, in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Return the finished checksum for all data fed so far.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Return to the initial state.
  fn reset(&mut self);

  /// One-shot checksum of `data`.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// One-shot checksum over several buffers treated as one stream.
  #[inline]
  #[must_use]
  fn checksum_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }

  /// Wrap a reader so that every byte read is also checksummed.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(inner: R) -> crate::io::ChecksumReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumReader::new(inner)
  }

  /// Wrap a writer so that every byte written is also checksummed.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(inner: W) -> crate::io::ChecksumWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumWriter::new(inner)
  }
}
