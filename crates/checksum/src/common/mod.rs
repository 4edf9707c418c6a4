//! Width-generic CRC building blocks.
//!
//! - [`reflect`]: bit reversal of a register
//! - [`tables`]: const-fn table generators
//! - [`reference`]: bitwise reference implementations used as a test oracle

pub mod reference;
pub mod reflect;
pub mod tables;

/// The `count` bytes of `buffer` starting at `offset`.
#[inline]
pub(crate) fn range(buffer: &[u8], offset: usize, count: usize) -> Result<&[u8], traits::BufferError> {
  traits::BufferError::check(offset, count, buffer.len())?;
  buffer
    .get(offset..)
    .and_then(|tail| tail.get(..count))
    .ok_or(traits::BufferError::new(offset, count, buffer.len()))
}
