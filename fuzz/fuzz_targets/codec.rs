//! Fuzz target for the byte codec.
//!
//! Tests that:
//! - The safe tier never panics, whatever the offset and buffer length
//! - Out-of-bounds stores leave the buffer untouched
//! - Whenever the safe tier succeeds, the raw tier writes the same bytes
//!   and both tiers read back the same value

#![no_main]

use arbitrary::Arbitrary;
use bitops::{Endian, raw, shift};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  buffer: Vec<u8>,
  offset: usize,
  value: u64,
  little_endian: bool,
}

fuzz_target!(|input: Input| {
  let endian = Endian::from_little_endian(input.little_endian);
  let offset = input.offset;
  let value = input.value;

  let mut safe = input.buffer.clone();
  let mut fast = input.buffer.clone();

  match shift::copy16(value, &mut safe, offset, endian) {
    Ok(()) => {
      // SAFETY: the safe tier accepted this offset for a 2-byte field.
      unsafe { raw::copy16_endian(value, &mut fast, offset, endian) };
      assert_eq!(safe, fast, "copy16 tier mismatch");
      assert_eq!(shift::to16(&safe, offset, endian).ok(), Some(unsafe { raw::to16_endian(&fast, offset, endian) }));
    }
    Err(_) => assert_eq!(safe, input.buffer, "failed copy16 modified the buffer"),
  }

  match shift::copy32(value, &mut safe, offset, endian) {
    Ok(()) => {
      // SAFETY: the safe tier accepted this offset for a 4-byte field.
      unsafe { raw::copy32_endian(value, &mut fast, offset, endian) };
      assert_eq!(safe, fast, "copy32 tier mismatch");
      let float = f32::from_bits(value as u32);
      shift::copy_f32(float, &mut safe, offset, endian).ok();
      unsafe { raw::copy_f32_endian(float, &mut fast, offset, endian) };
      assert_eq!(safe, fast, "copy_f32 tier mismatch");
    }
    Err(_) => assert!(shift::to32(&safe, offset, endian).is_err()),
  }

  match shift::copy64(value, &mut safe, offset, endian) {
    Ok(()) => {
      // SAFETY: the safe tier accepted this offset for an 8-byte field.
      unsafe { raw::copy64_endian(value, &mut fast, offset, endian) };
      assert_eq!(safe, fast, "copy64 tier mismatch");
      let read = unsafe { raw::to_f64_endian(&fast, offset, endian) };
      assert_eq!(shift::to_f64(&safe, offset, endian).map(f64::to_bits).ok(), Some(read.to_bits()));
    }
    Err(_) => assert!(shift::to64(&safe, offset, endian).is_err()),
  }
});
