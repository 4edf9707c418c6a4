//! Known-answer vectors for every named variant.

use checksum::{
  Checksum, Crc16, Crc16CcittAug, Crc16CcittFalse, Crc16CcittKermit, Crc16CcittKermitLsb, Crc16CcittMcrf4xx,
  Crc16CcittXmodem, Crc16Ibm, Crc32, Crc32Posix, Crc32Q, Crc32Standard, CrcParams,
  common::tables::{table16, table32},
};

const TEN: &[u8] = b"1234567890";
const NINE: &[u8] = b"123456789";

#[test]
fn crc16_ten_digit_vectors() {
  let cases: [(Crc16, u16, [u8; 2]); 7] = [
    (Crc16::ibm(), 0xC57A, [0xC5, 0x7A]),
    (Crc16::ccitt_false(), 0x3218, [0x32, 0x18]),
    (Crc16::ccitt_xmodem(), 0xD321, [0xD3, 0x21]),
    (Crc16::ccitt_aug(), 0x57D8, [0x57, 0xD8]),
    (Crc16::ccitt_kermit(), 0x286B, [0x28, 0x6B]),
    (Crc16::ccitt_kermit_lsb(), 0x6B28, [0x6B, 0x28]),
    (Crc16::ccitt_mcrf4xx(), 0xB4EC, [0xB4, 0xEC]),
  ];

  for (engine, value, bytes) in cases {
    assert_eq!(engine.compute(TEN), value, "{} compute", engine.name());
    assert_eq!(engine.hash(TEN), bytes, "{} hash", engine.name());

    let mut digest = engine.digest();
    digest.update(TEN);
    assert_eq!(digest.finalize(), bytes, "{} finalize", engine.name());
    assert_eq!(digest.value(), value, "{} value", engine.name());
  }
}

#[test]
fn crc16_catalogue_check_values() {
  assert_eq!(Crc16Ibm::checksum(NINE), 0xBB3D);
  assert_eq!(Crc16CcittFalse::checksum(NINE), 0x29B1);
  assert_eq!(Crc16CcittXmodem::checksum(NINE), 0x31C3);
  assert_eq!(Crc16CcittAug::checksum(NINE), 0xE5CC);
  assert_eq!(Crc16CcittKermit::checksum(NINE), 0x2189);
  assert_eq!(Crc16CcittKermitLsb::checksum(NINE), 0x8921);
  assert_eq!(Crc16CcittMcrf4xx::checksum(NINE), 0x6F91);
}

#[test]
fn crc32_vectors() {
  let standard = Crc32::standard();
  assert_eq!(standard.compute(TEN), 0x261D_AEE5);
  assert_eq!(standard.hash(TEN), [0x26, 0x1D, 0xAE, 0xE5]);
  assert_eq!(standard.compute(NINE), 0xCBF4_3926);

  let q = Crc32::crc32q();
  assert_eq!(q.compute(NINE), 0x3010_BF7F);
  assert_eq!(q.hash(NINE), [0x30, 0x10, 0xBF, 0x7F]);

  let posix = Crc32::posix();
  assert_eq!(posix.compute(NINE), 0x765E_7680);
  assert_eq!(posix.hash(NINE), [0x76, 0x5E, 0x76, 0x80]);

  assert_eq!(Crc32Standard::checksum(TEN), 0x261D_AEE5);
  assert_eq!(Crc32Q::checksum(NINE), 0x3010_BF7F);
  assert_eq!(Crc32Posix::checksum(NINE), 0x765E_7680);
}

#[test]
fn empty_input_is_finalized_seed() {
  for engine in [
    Crc16::ibm(),
    Crc16::ccitt_false(),
    Crc16::ccitt_xmodem(),
    Crc16::ccitt_aug(),
    Crc16::ccitt_kermit(),
    Crc16::ccitt_kermit_lsb(),
    Crc16::ccitt_mcrf4xx(),
  ] {
    assert_eq!(engine.compute(&[]), engine.finalize_register(engine.seed()));
  }
  assert_eq!(Crc32::standard().compute(&[]), 0);
  assert_eq!(Crc32::posix().compute(&[]), 0xFFFF_FFFF);
}

#[test]
fn finalize_bytes_are_big_endian_compute() {
  let data = b"The quick brown fox jumps over the lazy dog";
  for params in CrcParams::CATALOGUE {
    match params.width {
      16 => {
        let engine = Crc16::from_params(&params).unwrap();
        assert_eq!(engine.hash(data), engine.compute(data).to_be_bytes(), "{}", params.name);
      }
      32 => {
        let engine = Crc32::from_params(&params).unwrap();
        assert_eq!(engine.hash(data), engine.compute(data).to_be_bytes(), "{}", params.name);
      }
      other => panic!("unexpected width {other}"),
    }
  }
}

#[test]
fn runtime_tables_match_compile_time_tables() {
  for params in CrcParams::CATALOGUE {
    match params.width {
      16 => {
        let named = named16(params.name);
        let runtime = Crc16::from_params(&params).unwrap();
        assert_eq!(runtime.table(), named.table(), "{}", params.name);
        assert_eq!(runtime.table(), &table16(params.polynomial as u16, params.reflect_in));
      }
      32 => {
        let named = named32(params.name);
        let runtime = Crc32::from_params(&params).unwrap();
        assert_eq!(runtime.table(), named.table(), "{}", params.name);
        assert_eq!(runtime.table(), &table32(params.polynomial as u32, params.reflect_in));
      }
      other => panic!("unexpected width {other}"),
    }
  }
}

fn named16(name: &str) -> Crc16 {
  match name {
    "CRC-16/IBM" => Crc16::ibm(),
    "CRC-16/CCITT-FALSE" => Crc16::ccitt_false(),
    "CRC-16/XMODEM" => Crc16::ccitt_xmodem(),
    "CRC-16/AUG-CCITT" => Crc16::ccitt_aug(),
    "CRC-16/KERMIT" => Crc16::ccitt_kermit(),
    "CRC-16/KERMIT-LSB" => Crc16::ccitt_kermit_lsb(),
    "CRC-16/MCRF4XX" => Crc16::ccitt_mcrf4xx(),
    other => panic!("no named CRC-16 {other}"),
  }
}

fn named32(name: &str) -> Crc32 {
  match name {
    "CRC-32" => Crc32::standard(),
    "CRC-32Q" => Crc32::crc32q(),
    "CRC-32/POSIX" => Crc32::posix(),
    other => panic!("no named CRC-32 {other}"),
  }
}
