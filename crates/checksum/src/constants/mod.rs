//! Precomputed lookup tables for the named CRC variants.
//!
//! All tables are computed at compile time by the generators in
//! [`crate::common::tables`]; nothing here is a literal array.
//!
//! # Cache Alignment
//!
//! Lookup tables are 64-byte (cache line) aligned using [`Aligned64`] so a
//! table never starts mid-line.

pub mod crc16;
pub mod crc32;

/// Wrapper type to force 64-byte (cache line) alignment.
///
/// The inner type `T` is accessible via `.0`.
#[repr(align(64))]
pub struct Aligned64<T>(pub T);
