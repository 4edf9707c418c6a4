//! Endian-aware byte codec for fixed-width integers and IEEE-754 floats.
//!
//! Two tiers with byte-identical output:
//!
//! | Tier | Module | Mechanism | Bounds |
//! |------|--------|-----------|--------|
//! | Safe | [`shift`] | shift-and-mask per byte | checked, [`BufferError`] |
//! | Raw | [`raw`] | one unaligned load/store, byte swap when not native | caller contract (`unsafe fn`) |
//!
//! Every function takes the buffer plus a byte offset; offset `0` addresses
//! the start of the buffer. Byte order is chosen per call with [`Endian`] or
//! by the `_le`/`_be` named forms. Stores accept any primitive integer and
//! keep its low-order bits ([`LowBits`]), so truncation never fails.
//!
//! # Example
//!
//! ```rust
//! use bitops::{Endian, shift};
//!
//! let mut frame = [0u8; 14];
//! shift::copy16_be(0xCAFEu16, &mut frame, 0)?;
//! shift::copy32_le(-1i32, &mut frame, 2)?;
//! shift::copy_f64(1.5, &mut frame, 6, Endian::from_little_endian(false))?;
//!
//! assert_eq!(shift::to16_be(&frame, 0)?, 0xCAFEu16 as i16);
//! assert_eq!(shift::to32_le(&frame, 2)?, -1);
//! assert_eq!(shift::to_f64_be(&frame, 6)?, 1.5);
//! # Ok::<(), bitops::BufferError>(())
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible and has no dependencies beyond `traits`.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![deny(unsafe_op_in_unsafe_fn)]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod bits;
mod endian;
pub mod raw;
pub mod shift;

pub use bits::LowBits;
pub use endian::Endian;
pub use traits::BufferError;
