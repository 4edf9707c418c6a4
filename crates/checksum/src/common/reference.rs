//! Bitwise reference implementations.
//!
//! One bit per iteration, no tables. Slow, but simple enough to audit against
//! the algorithm definition. Tests compare the table-driven engines against
//! these, and the `const` blocks below pin them to the catalogue check values
//! for `"123456789"` at compile time.
//!
//! All functions return the raw register: no output reflection, final XOR or
//! byte swap.

// SAFETY: All array indexing in this module uses bounded loop indices (0..data.len()).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

/// Reflected CRC-16 (LSB-first), `poly` in reflected form.
#[must_use]
pub const fn crc16_bitwise_lsb(poly: u16, mut crc: u16, data: &[u8]) -> u16 {
  let mut i = 0;
  while i < data.len() {
    crc ^= data[i] as u16;
    let mut bit = 0;
    while bit < 8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
      bit += 1;
    }
    i += 1;
  }
  crc
}

/// Normal CRC-16 (MSB-first), `poly` in normal form.
#[must_use]
pub const fn crc16_bitwise_msb(poly: u16, mut crc: u16, data: &[u8]) -> u16 {
  let mut i = 0;
  while i < data.len() {
    crc ^= (data[i] as u16) << 8;
    let mut bit = 0;
    while bit < 8 {
      crc = if crc & 0x8000 != 0 { (crc << 1) ^ poly } else { crc << 1 };
      bit += 1;
    }
    i += 1;
  }
  crc
}

/// Reflected CRC-32 (LSB-first), `poly` in reflected form.
#[must_use]
pub const fn crc32_bitwise_lsb(poly: u32, mut crc: u32, data: &[u8]) -> u32 {
  let mut i = 0;
  while i < data.len() {
    crc ^= data[i] as u32;
    let mut bit = 0;
    while bit < 8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
      bit += 1;
    }
    i += 1;
  }
  crc
}

/// Normal CRC-32 (MSB-first), `poly` in normal form.
#[must_use]
pub const fn crc32_bitwise_msb(poly: u32, mut crc: u32, data: &[u8]) -> u32 {
  let mut i = 0;
  while i < data.len() {
    crc ^= (data[i] as u32) << 24;
    let mut bit = 0;
    while bit < 8 {
      crc = if crc & 0x8000_0000 != 0 { (crc << 1) ^ poly } else { crc << 1 };
      bit += 1;
    }
    i += 1;
  }
  crc
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-time check values
// ─────────────────────────────────────────────────────────────────────────────

const CHECK_INPUT: &[u8] = b"123456789";

// CRC-16/ARC (IBM): check 0xBB3D
const _: () = assert!(crc16_bitwise_lsb(0xA001, 0x0000, CHECK_INPUT) == 0xBB3D);

// CRC-16/CCITT-FALSE: check 0x29B1
const _: () = assert!(crc16_bitwise_msb(0x1021, 0xFFFF, CHECK_INPUT) == 0x29B1);

// CRC-16/XMODEM: check 0x31C3
const _: () = assert!(crc16_bitwise_msb(0x1021, 0x0000, CHECK_INPUT) == 0x31C3);

// CRC-16/SPI-FUJITSU (AUG-CCITT): check 0xE5CC
const _: () = assert!(crc16_bitwise_msb(0x1021, 0x1D0F, CHECK_INPUT) == 0xE5CC);

// CRC-16/KERMIT: check 0x2189
const _: () = assert!(crc16_bitwise_lsb(0x8408, 0x0000, CHECK_INPUT) == 0x2189);

// CRC-16/MCRF4XX: check 0x6F91
const _: () = assert!(crc16_bitwise_lsb(0x8408, 0xFFFF, CHECK_INPUT) == 0x6F91);

// CRC-32/ISO-HDLC: check 0xCBF43926
const _: () = assert!(crc32_bitwise_lsb(0xEDB8_8320, !0, CHECK_INPUT) ^ !0 == 0xCBF4_3926);

// CRC-32/AIXM (CRC-32Q): check 0x3010BF7F
const _: () = assert!(crc32_bitwise_msb(0x8141_41AB, 0, CHECK_INPUT) == 0x3010_BF7F);

// CRC-32/CKSUM polynomial pass without the length suffix: 0x765E7680
const _: () = assert!(crc32_bitwise_msb(0x04C1_1DB7, 0, CHECK_INPUT) ^ !0 == 0x765E_7680);
