//! Shared traits and error types for corebits.
//!
//! Both the CRC engines (`checksum`) and the byte codec (`bitops`) depend on
//! this crate. It is `no_std` and has no dependencies.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`Checksum`] | Streaming hasher convention (new / update / finalize / reset) |
//! | [`BufferError`] | A fixed-width field does not fit in the caller's buffer |
//! | [`io::ChecksumReader`], [`io::ChecksumWriter`] | Checksum bytes as they pass through `std::io` (requires `std`) |
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod checksum;
pub mod error;
pub mod io;

pub use checksum::Checksum;
pub use error::BufferError;
