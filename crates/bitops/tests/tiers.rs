//! The safe and raw tiers must write identical bytes and read identical values.

use bitops::{Endian, raw, shift};

const ORDERS: [Endian; 2] = [Endian::Little, Endian::Big];
const BUF: usize = 24;

const I16S: [i16; 6] = [0, 1, -1, i16::MIN, i16::MAX, 0x1234];
const I32S: [i32; 6] = [0, 1, -1, i32::MIN, i32::MAX, 0x1234_5678];
const I64S: [i64; 6] = [0, 1, -1, i64::MIN, i64::MAX, 0x1234_5678_90AB_CDEF];

fn f32_specials() -> [f32; 10] {
  [
    0.0,
    -0.0,
    f32::NAN,
    f32::INFINITY,
    f32::NEG_INFINITY,
    f32::MIN,
    f32::MAX,
    f32::MIN_POSITIVE,
    f32::from_bits(1),
    f32::EPSILON,
  ]
}

fn f64_specials() -> [f64; 10] {
  [
    0.0,
    -0.0,
    f64::NAN,
    f64::INFINITY,
    f64::NEG_INFINITY,
    f64::MIN,
    f64::MAX,
    f64::MIN_POSITIVE,
    f64::from_bits(1),
    f64::EPSILON,
  ]
}

macro_rules! assert_tiers_agree {
  ($values:expr, $width:literal, $shift_copy:path, $raw_copy:path, $shift_to:path, $raw_to:path, $bits:expr) => {
    for value in $values {
      for endian in ORDERS {
        for offset in 0..=(BUF - $width) {
          let mut safe = [0x5Au8; BUF];
          let mut fast = [0x5Au8; BUF];
          $shift_copy(value, &mut safe, offset, endian).unwrap();
          // SAFETY: offset + width <= BUF.
          unsafe { $raw_copy(value, &mut fast, offset, endian) };
          assert_eq!(safe, fast, "store {:?} at {} ({:?})", value, offset, endian);

          let read_safe = $shift_to(&safe, offset, endian).unwrap();
          // SAFETY: offset + width <= BUF.
          let read_fast = unsafe { $raw_to(&safe, offset, endian) };
          assert_eq!($bits(read_safe), $bits(read_fast));
          assert_eq!($bits(read_safe), $bits(value));
        }
      }
    }
  };
}

#[test]
fn integer_tiers_agree() {
  assert_tiers_agree!(I16S, 2, shift::copy16, raw::copy16_endian, shift::to16, raw::to16_endian, |v: i16| v);
  assert_tiers_agree!(I32S, 4, shift::copy32, raw::copy32_endian, shift::to32, raw::to32_endian, |v: i32| v);
  assert_tiers_agree!(I64S, 8, shift::copy64, raw::copy64_endian, shift::to64, raw::to64_endian, |v: i64| v);
}

#[test]
fn float_tiers_agree() {
  assert_tiers_agree!(
    f32_specials(),
    4,
    shift::copy_f32,
    raw::copy_f32_endian,
    shift::to_f32,
    raw::to_f32_endian,
    f32::to_bits
  );
  assert_tiers_agree!(
    f64_specials(),
    8,
    shift::copy_f64,
    raw::copy_f64_endian,
    shift::to_f64,
    raw::to_f64_endian,
    f64::to_bits
  );
}

#[test]
fn named_forms_match_endian_forms() {
  let mut a = [0u8; 8];
  let mut b = [0u8; 8];

  shift::copy32_le(0x0A0B_0C0Du32, &mut a, 2).unwrap();
  unsafe { raw::copy32_le(0x0A0B_0C0Du32, &mut b, 2) };
  assert_eq!(a, b);
  assert_eq!(&a[2..6], &[0x0D, 0x0C, 0x0B, 0x0A]);

  shift::copy16_be(0xBEEFu16, &mut a, 0).unwrap();
  unsafe { raw::copy16_be(0xBEEFu16, &mut b, 0) };
  assert_eq!(a, b);
  assert_eq!(&a[..2], &[0xBE, 0xEF]);

  shift::copy_f64_le(-2.5, &mut a, 0).unwrap();
  unsafe { raw::copy_f64_le(-2.5, &mut b, 0) };
  assert_eq!(a, b);
  assert_eq!(shift::to_f64_le(&a, 0).unwrap(), unsafe { raw::to_f64_le(&b, 0) });

  shift::copy_f32_be(0.1, &mut a, 4).unwrap();
  unsafe { raw::copy_f32_be(0.1, &mut b, 4) };
  assert_eq!(a, b);
  assert_eq!(shift::to_f32_be(&a, 4).unwrap(), unsafe { raw::to_f32_be(&b, 4) });
}

#[test]
fn native_and_swap_forms_cover_both_orders() {
  let mut native = [0u8; 8];
  let mut swapped = [0u8; 8];
  unsafe {
    raw::copy64(0x0102_0304_0506_0708i64, &mut native, 0);
    raw::copy64_swap(0x0102_0304_0506_0708i64, &mut swapped, 0);
  }
  assert_eq!(native, shift::to_bytes64(0x0102_0304_0506_0708i64, Endian::NATIVE));
  assert_eq!(swapped, shift::to_bytes64(0x0102_0304_0506_0708i64, Endian::NATIVE.reverse()));
  assert_eq!(unsafe { raw::to64(&native, 0) }, unsafe { raw::to64_swap(&swapped, 0) });
}

#[test]
fn little_endian_is_reversed_big_endian() {
  for value in I64S {
    let mut le = shift::to_bytes64(value, Endian::Little);
    le.reverse();
    assert_eq!(le, shift::to_bytes64(value, Endian::Big));
  }
  for value in I32S {
    let mut le = shift::to_bytes32(value, Endian::Little);
    le.reverse();
    assert_eq!(le, shift::to_bytes32(value, Endian::Big));
  }
  for value in I16S {
    let mut le = shift::to_bytes16(value, Endian::Little);
    le.reverse();
    assert_eq!(le, shift::to_bytes16(value, Endian::Big));
  }
}

#[test]
fn wide_sources_truncate_in_both_tiers() {
  let mut safe = [0u8; 4];
  let mut fast = [0u8; 4];
  shift::copy16_le(0x1234_5678_90AB_CDEFu64, &mut safe, 0).unwrap();
  unsafe { raw::copy16_le(0x1234_5678_90AB_CDEFu64, &mut fast, 0) };
  assert_eq!(&safe[..2], &[0xEF, 0xCD]);
  assert_eq!(safe, fast);

  shift::copy32_be(0x1234_5678_90AB_CDEFu64, &mut safe, 0).unwrap();
  unsafe { raw::copy32_be(0x1234_5678_90AB_CDEFu64, &mut fast, 0) };
  assert_eq!(safe, [0x90, 0xAB, 0xCD, 0xEF]);
  assert_eq!(safe, fast);

  // Negative narrow sources sign-extend before truncation, which is a no-op
  // for the bytes kept.
  shift::copy32_le(-2i8, &mut safe, 0).unwrap();
  assert_eq!(safe, [0xFE, 0xFF, 0xFF, 0xFF]);
  shift::copy32_le(0xFEu8, &mut safe, 0).unwrap();
  assert_eq!(safe, [0xFE, 0x00, 0x00, 0x00]);
}

#[test]
fn offset_zero_addresses_buffer_start() {
  let mut buf = [0u8; 4];
  shift::copy32_be(0x0102_0304u32, &mut buf, 0).unwrap();
  assert_eq!(buf, [1, 2, 3, 4]);
  assert_eq!(shift::to8(&buf, 0).unwrap(), 1);
}

#[test]
fn safe_tier_reports_out_of_bounds() {
  let mut buf = [0u8; 7];

  let err = shift::copy64_le(0u64, &mut buf, 0).unwrap_err();
  assert_eq!((err.offset(), err.needed(), err.len()), (0, 8, 7));

  let err = shift::to32_be(&buf, 4).unwrap_err();
  assert_eq!((err.offset(), err.needed(), err.len()), (4, 4, 7));

  assert!(shift::to16_le(&buf, 6).is_err());
  assert!(shift::to16_le(&buf, 5).is_ok());
  assert!(shift::to_f32(&buf, usize::MAX, Endian::Little).is_err());
  assert!(shift::copy8(1u8, &mut buf, 7).is_err());
  assert!(shift::to8(&[], 0).is_err());

  let message = shift::to64_le(&buf, 0).unwrap_err().to_string();
  assert!(message.contains("buffer too small"), "{message}");
}
