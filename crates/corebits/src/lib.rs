//! CRC checksums and an endian-aware byte codec.
//!
//! `corebits` re-exports two `no_std` crates behind feature flags:
//!
//! - [`checksum`](https://docs.rs/checksum): table-driven CRC-16 and CRC-32
//!   engines with ten named variants
//! - [`bitops`](https://docs.rs/bitops): fixed-width integer and float
//!   encode/decode at arbitrary byte offsets, in either byte order
//!
//! # Quick Start
//!
//! ```
//! use corebits::{Checksum, Crc16CcittFalse, Endian, codec::shift};
//!
//! // Build a frame: 4-byte big-endian payload followed by its CRC.
//! let mut frame = [0u8; 6];
//! shift::copy32(0xDEAD_BEEFu32, &mut frame, 0, Endian::Big)?;
//! let crc = Crc16CcittFalse::checksum(&frame[..4]);
//! shift::copy16_be(crc, &mut frame, 4)?;
//!
//! // Verify it.
//! assert_eq!(shift::to16_be(&frame, 4)? as u16, Crc16CcittFalse::checksum(&frame[..4]));
//! # Ok::<(), corebits::BufferError>(())
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | `std::io` adapters and `Write` impls |
//! | `checksums` | Yes | CRC-16 and CRC-32 engines |
//! | `codec` | Yes | Byte codec, safe and raw tiers |
//! | `tracing` | No | `tracing` events from the CRC engines' cold paths |
#![cfg_attr(not(feature = "std"), no_std)]

// =============================================================================
// Checksums
// =============================================================================

#[cfg(all(feature = "checksums", feature = "std"))]
pub use checksum::{ChecksumReader, ChecksumWriter};
#[cfg(feature = "checksums")]
pub use checksum::{
  // Traits
  Checksum,
  // Engines
  Crc16,
  // CRC-16
  Crc16CcittAug,
  Crc16CcittFalse,
  Crc16CcittKermit,
  Crc16CcittKermitLsb,
  Crc16CcittMcrf4xx,
  Crc16CcittXmodem,
  Crc16Digest,
  Crc16Ibm,
  Crc32,
  Crc32Digest,
  // CRC-32
  Crc32Posix,
  Crc32Q,
  Crc32Standard,
  // Parameters
  CrcError,
  CrcParams,
};

// =============================================================================
// Byte codec
// =============================================================================

#[cfg(feature = "codec")]
pub mod codec {
  pub use ::bitops::{Endian, LowBits, raw, shift};
}

#[cfg(feature = "codec")]
pub use codec::Endian;

#[cfg(feature = "checksums")]
pub use checksum::BufferError;
#[cfg(all(feature = "codec", not(feature = "checksums")))]
pub use bitops::BufferError;
