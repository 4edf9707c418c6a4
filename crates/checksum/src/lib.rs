//! Table-driven CRC-16 and CRC-32 checksums.
//!
//! This crate provides two parameterised engines, [`Crc16`] and [`Crc32`],
//! covering any polynomial, seed, final XOR, input/output reflection and byte
//! order, plus the named variants below with lookup tables generated at
//! compile time.
//!
//! # Supported Algorithms
//!
//! | Type | Engine | Polynomial | Output | Use Cases |
//! |------|--------|------------|--------|-----------|
//! | [`Crc16Ibm`] | [`Crc16::ibm`] | 0x8005 | `u16` | Modbus, ARC, LHA |
//! | [`Crc16CcittFalse`] | [`Crc16::ccitt_false`] | 0x1021 | `u16` | X.25 variants, PPP tooling |
//! | [`Crc16CcittXmodem`] | [`Crc16::ccitt_xmodem`] | 0x1021 | `u16` | XMODEM, ZMODEM |
//! | [`Crc16CcittAug`] | [`Crc16::ccitt_aug`] | 0x1021 | `u16` | Augmented-message CCITT |
//! | [`Crc16CcittKermit`] | [`Crc16::ccitt_kermit`] | 0x1021 | `u16` | Kermit |
//! | [`Crc16CcittKermitLsb`] | [`Crc16::ccitt_kermit_lsb`] | 0x1021 | `u16` | Kermit, LSB-first output |
//! | [`Crc16CcittMcrf4xx`] | [`Crc16::ccitt_mcrf4xx`] | 0x1021 | `u16` | RFID tags, MAVLink |
//! | [`Crc32Standard`] | [`Crc32::standard`] | 0x04C11DB7 | `u32` | Ethernet, gzip, zip, PNG |
//! | [`Crc32Q`] | [`Crc32::crc32q`] | 0x814141AB | `u32` | Aeronautical data |
//! | [`Crc32Posix`] | [`Crc32::posix`] | 0x04C11DB7 | `u32` | `cksum` |
//!
//! # Example
//!
//! ```rust
//! use checksum::{Checksum, Crc16, Crc32Standard};
//!
//! // One-shot computation on an engine.
//! let engine = Crc16::ccitt_false();
//! assert_eq!(engine.compute(b"1234567890"), 0x3218);
//!
//! // Incremental computation: the register lives in the digest, not the engine.
//! let mut digest = engine.digest();
//! digest.update(b"12345");
//! digest.update(b"67890");
//! assert_eq!(digest.finalize(), [0x32, 0x18]);
//!
//! // Named hasher types follow the `Checksum` convention.
//! let mut hasher = Crc32Standard::new();
//! hasher.update(b"1234567890");
//! assert_eq!(hasher.finalize(), 0x261D_AEE5);
//!
//! // Custom parameters.
//! let custom = Crc16::new(0x8005, 0xFFFF, 0x0000, true); // CRC-16/MODBUS
//! assert_eq!(custom.compute(b"123456789"), 0x4B37);
//! ```
//!
//! # Feature Flags
//!
//! - `std` (default): `std::io` adapters and `std::io::Write` on hashers and digests
//! - `tracing`: emit `tracing` events when a lookup table is generated at
//!   runtime and when parameters are rejected
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded use:
//!
//! ```toml
//! [dependencies]
//! checksum = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

// Internal macros must be declared before modules that use them.
#[macro_use]
mod macros;

pub mod common;
mod constants;
mod crc16;
mod crc32;
mod error;
pub mod introspect;
#[cfg(feature = "std")]
pub mod io;
mod params;

pub use crc16::{
  Crc16, Crc16CcittAug, Crc16CcittFalse, Crc16CcittKermit, Crc16CcittKermitLsb, Crc16CcittMcrf4xx,
  Crc16CcittXmodem, Crc16Digest, Crc16Ibm,
};
pub use crc32::{Crc32, Crc32Digest, Crc32Posix, Crc32Q, Crc32Standard};
pub use error::CrcError;
pub use introspect::TableLiteral;
#[cfg(feature = "std")]
pub use io::{ChecksumReader, ChecksumWriter};
pub use params::CrcParams;
// Re-export traits for convenience
pub use traits::{BufferError, Checksum};
