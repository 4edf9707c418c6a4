//! Fuzz target for the streaming CRC API.
//!
//! Tests that arbitrary sequences of update calls produce correct results,
//! for both the hasher types and engine digests.

#![no_main]

use arbitrary::Arbitrary;
use checksum::{Checksum, Crc16, Crc16CcittMcrf4xx, Crc32Posix};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let data = &input.data;

  test_streaming::<Crc16CcittMcrf4xx>(data, &input.chunk_sizes, "crc16/mcrf4xx");
  test_streaming::<Crc32Posix>(data, &input.chunk_sizes, "crc32/posix");
  test_streaming_digest(data, &input.chunk_sizes);
});

fn chunks<'a>(data: &'a [u8], chunk_sizes: &'a [usize]) -> impl Iterator<Item = &'a [u8]> {
  let mut offset = 0;
  let mut chunk_idx = 0;
  core::iter::from_fn(move || {
    if offset >= data.len() {
      return None;
    }
    let chunk_size = if chunk_sizes.is_empty() {
      1
    } else {
      (chunk_sizes[chunk_idx % chunk_sizes.len()] % 256).max(1)
    };
    let end = (offset + chunk_size).min(data.len());
    let chunk = &data[offset..end];
    offset = end;
    chunk_idx += 1;
    Some(chunk)
  })
}

fn test_streaming<C: Checksum>(data: &[u8], chunk_sizes: &[usize], name: &str) {
  let expected = C::checksum(data);

  let mut hasher = C::new();
  for chunk in chunks(data, chunk_sizes) {
    hasher.update(chunk);
  }

  assert_eq!(hasher.finalize(), expected, "{name} streaming mismatch");
}

fn test_streaming_digest(data: &[u8], chunk_sizes: &[usize]) {
  let engine = Crc16::ccitt_aug();
  let expected = engine.compute(data);

  let mut digest = engine.digest();
  for chunk in chunks(data, chunk_sizes) {
    digest.update(chunk);
    // Finalizing mid-stream must not disturb the register.
    let _ = digest.finalize();
  }

  assert_eq!(digest.value(), expected, "crc16/aug digest streaming mismatch");
}
