//! `std::io` adapters that checksum data in flight.
//!
//! [`ChecksumReader`] hashes exactly the bytes a read returned (short reads
//! included); [`ChecksumWriter`] hashes exactly the bytes the inner writer
//! accepted. Both are available with the `std` feature.
//!
//! ```rust
//! # use traits::Checksum;
//! # #[derive(Clone, Default)]
//! # struct Xor(u8);
//! # impl Checksum for Xor {
//! #   const OUTPUT_SIZE: usize = 1;
//! #   type Output = u8;
//! #   fn new() -> Self { Self(0) }
//! #   fn with_initial(initial: u8) -> Self { Self(initial) }
//! #   fn update(&mut self, data: &[u8]) { self.0 = data.iter().fold(self.0, |acc, &b| acc ^ b); }
//! #   fn finalize(&self) -> u8 { self.0 }
//! #   fn reset(&mut self) { self.0 = 0; }
//! # }
//! use std::io::{Cursor, Read};
//!
//! let mut reader = Xor::reader(Cursor::new(vec![0x0F, 0xF0]));
//! let mut out = Vec::new();
//! reader.read_to_end(&mut out)?;
//! assert_eq!(reader.checksum(), 0xFF);
//! # Ok::<(), std::io::Error>(())
//! ```

#[cfg(feature = "std")]
pub use adapters::{ChecksumReader, ChecksumWriter};

#[cfg(feature = "std")]
mod adapters {
  use std::io::{self, IoSlice, IoSliceMut, Read, Write};

  use crate::Checksum;

  /// A reader that checksums everything read through it.
  #[derive(Clone, Debug)]
  pub struct ChecksumReader<R, C> {
    inner: R,
    hasher: C,
  }

  impl<R, C: Checksum> ChecksumReader<R, C> {
    /// Wrap `inner`, starting from the algorithm's default state.
    #[inline]
    #[must_use]
    pub fn new(inner: R) -> Self {
      Self { inner, hasher: C::new() }
    }

    /// Wrap `inner`, starting from a raw register value.
    #[inline]
    #[must_use]
    pub fn with_initial(inner: R, initial: C::Output) -> Self {
      Self { inner, hasher: C::with_initial(initial) }
    }

    /// Checksum of all bytes read so far.
    #[inline]
    #[must_use]
    pub fn checksum(&self) -> C::Output {
      self.hasher.finalize()
    }

    /// Borrow the running hasher.
    #[inline]
    pub fn hasher(&self) -> &C {
      &self.hasher
    }

    /// Borrow the wrapped reader.
    #[inline]
    pub fn get_ref(&self) -> &R {
      &self.inner
    }

    /// Split into the wrapped reader and the checksum so far.
    #[inline]
    pub fn into_parts(self) -> (R, C::Output) {
      let sum = self.hasher.finalize();
      (self.inner, sum)
    }
  }

  impl<R: Read, C: Checksum> Read for ChecksumReader<R, C> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
      let n = self.inner.read(buf)?;
      if let Some(data) = buf.get(..n) {
        self.hasher.update(data);
      }
      Ok(n)
    }

    fn read_vectored(&mut self, bufs: &mut [IoSliceMut<'_>]) -> io::Result<usize> {
      let n = self.inner.read_vectored(bufs)?;
      let mut remaining = n;
      for buf in bufs.iter() {
        if remaining == 0 {
          break;
        }
        let take = remaining.min(buf.len());
        if let Some(data) = buf.get(..take) {
          self.hasher.update(data);
        }
        remaining -= take;
      }
      Ok(n)
    }
  }

  /// A writer that checksums everything the inner writer accepts.
  #[derive(Clone, Debug)]
  pub struct ChecksumWriter<W, C> {
    inner: W,
    hasher: C,
  }

  impl<W, C: Checksum> ChecksumWriter<W, C> {
    /// Wrap `inner`, starting from the algorithm's default state.
    #[inline]
    #[must_use]
    pub fn new(inner: W) -> Self {
      Self { inner, hasher: C::new() }
    }

    /// Wrap `inner`, starting from a raw register value.
    #[inline]
    #[must_use]
    pub fn with_initial(inner: W, initial: C::Output) -> Self {
      Self { inner, hasher: C::with_initial(initial) }
    }

    /// Checksum of all bytes written so far.
    #[inline]
    #[must_use]
    pub fn checksum(&self) -> C::Output {
      self.hasher.finalize()
    }

    /// Borrow the wrapped writer.
    #[inline]
    pub fn get_ref(&self) -> &W {
      &self.inner
    }

    /// Split into the wrapped writer and the checksum so far.
    #[inline]
    pub fn into_parts(self) -> (W, C::Output) {
      let sum = self.hasher.finalize();
      (self.inner, sum)
    }
  }

  impl<W: Write, C: Checksum> Write for ChecksumWriter<W, C> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
      // Only the accepted prefix counts; the caller retries the rest.
      let n = self.inner.write(buf)?;
      if let Some(data) = buf.get(..n) {
        self.hasher.update(data);
      }
      Ok(n)
    }

    fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> io::Result<usize> {
      let n = self.inner.write_vectored(bufs)?;
      let mut remaining = n;
      for buf in bufs {
        if remaining == 0 {
          break;
        }
        let take = remaining.min(buf.len());
        if let Some(data) = buf.get(..take) {
          self.hasher.update(data);
        }
        remaining -= take;
      }
      Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
      self.inner.flush()
    }
  }

}
