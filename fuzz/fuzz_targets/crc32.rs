//! Fuzz target for the CRC-32 variants.
//!
//! Tests that:
//! - No panics on arbitrary input
//! - Incremental updates produce same result as one-shot
//! - Resume produces correct results
//! - Bounded range computation agrees with slicing

#![no_main]

use arbitrary::Arbitrary;
use checksum::{Checksum, Crc32, Crc32Posix, Crc32Q, Crc32Standard};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  split_point: usize,
  offset: usize,
  count: usize,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let split = input.split_point % (data.len() + 1);
  let (a, b) = data.split_at(split);

  // One-shot vs incremental
  let oneshot = Crc32Standard::checksum(data);
  let mut hasher = Crc32Standard::new();
  hasher.update(a);
  hasher.update(b);
  assert_eq!(hasher.finalize(), oneshot, "crc32 incremental mismatch");

  // Resume from a finished value
  let mut resumed = Crc32Standard::resume(Crc32Standard::checksum(a));
  resumed.update(b);
  assert_eq!(resumed.finalize(), oneshot, "crc32 resume mismatch");

  let mut resumed = Crc32Q::resume(Crc32Q::checksum(a));
  resumed.update(b);
  assert_eq!(resumed.finalize(), Crc32Q::checksum(data), "crc32q resume mismatch");

  // Range computation
  let engine = Crc32::posix();
  match engine.compute_range(0, data, input.offset, input.count) {
    Ok(crc) => {
      let end = input.offset + input.count;
      assert_eq!(crc, engine.compute_with_seed(0, &data[input.offset..end]), "crc32 range mismatch");
      assert_eq!(Crc32Posix::checksum(data), engine.compute(data), "crc32/posix engine mismatch");
    }
    Err(err) => assert_eq!(err.len(), data.len(), "crc32 range error length mismatch"),
  }
});
