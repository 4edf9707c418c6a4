//! Basic checksum usage: engines, digests and named hasher types.
//!
//! Run with: `cargo run --example basic -p checksum`

use checksum::{Checksum, Crc16, Crc16CcittKermitLsb, Crc32, Crc32Standard};

fn main() {
  println!("=== Checksum Basic Examples ===\n");

  one_shot_examples();
  digest_example();
  custom_engine_example();
  resume_example();
}

/// One-shot computation on the named engines.
fn one_shot_examples() {
  println!("--- One-Shot Computation ---\n");

  let data = b"1234567890";

  for engine in [
    Crc16::ibm(),
    Crc16::ccitt_false(),
    Crc16::ccitt_xmodem(),
    Crc16::ccitt_aug(),
    Crc16::ccitt_kermit(),
    Crc16::ccitt_kermit_lsb(),
    Crc16::ccitt_mcrf4xx(),
  ] {
    let [hi, lo] = engine.hash(data);
    println!("{:<20} 0x{:04X}  bytes {hi:02X} {lo:02X}", engine.name(), engine.compute(data));
  }

  for engine in [Crc32::standard(), Crc32::crc32q(), Crc32::posix()] {
    println!("{:<20} 0x{:08X}", engine.name(), engine.compute(data));
  }

  assert_eq!(Crc16::ibm().compute(data), 0xC57A);
  assert_eq!(Crc32::standard().compute(data), 0x261D_AEE5);

  println!();
}

/// Incremental computation: the register lives in a digest borrowed from the engine.
fn digest_example() {
  println!("--- Incremental Digest ---\n");

  let engine = Crc16::ccitt_kermit_lsb();
  let mut digest = engine.digest();
  digest.update(b"12345");
  digest.update(b"67890");
  let bytes = digest.finalize();
  println!("KERMIT-LSB digest bytes: {:02X} {:02X}", bytes[0], bytes[1]);
  assert_eq!(bytes, [0x6B, 0x28]);

  // finalize() does not reset; reset() before reuse.
  digest.reset();
  digest.update(b"123456789");
  println!("KERMIT-LSB of \"123456789\": 0x{:04X}", digest.value());
  assert_eq!(digest.value(), Crc16CcittKermitLsb::checksum(b"123456789"));

  println!();
}

/// Build an engine from raw parameters.
fn custom_engine_example() {
  println!("--- Custom Engine ---\n");

  // CRC-16/MODBUS: IBM polynomial with an all-ones seed.
  let modbus = Crc16::new(0x8005, 0xFFFF, 0x0000, true);
  let crc = modbus.compute(b"123456789");
  println!("CRC-16/MODBUS: 0x{crc:04X}");
  println!("{modbus:?}");
  assert_eq!(crc, 0x4B37);

  println!();
}

/// Resume computation from a finished checksum.
fn resume_example() {
  println!("--- Resume from Saved Value ---\n");

  let part1 = b"first part of data";
  let part2 = b" and the second part";

  let saved = Crc32Standard::checksum(part1);
  println!("Saved CRC after part1: 0x{saved:08X}");

  let mut resumed = Crc32Standard::resume(saved);
  resumed.update(part2);
  let final_crc = resumed.finalize();
  println!("Final CRC after resume: 0x{final_crc:08X}");

  let mut full = Crc32Standard::new();
  full.update(part1);
  full.update(part2);
  assert_eq!(final_crc, full.finalize());
  println!("Verified: matches full computation");

  println!();
}
