//! Byte codec benchmarks.
//!
//! Run: `cargo bench -p bitops`
//!
//! Each group packs a buffer full of fields with the safe shift tier and the
//! raw unaligned tier, in native and swapped byte order.

use bitops::{Endian, raw, shift};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

const BUF_LEN: usize = 4096;

fn orders() -> [(&'static str, Endian); 2] {
  [("native", Endian::NATIVE), ("swapped", Endian::NATIVE.reverse())]
}

fn bench_store64(c: &mut Criterion) {
  let mut group = c.benchmark_group("bitops/store64");
  group.throughput(Throughput::Bytes(BUF_LEN as u64));
  let mut buf = vec![0u8; BUF_LEN];

  for (label, endian) in orders() {
    group.bench_function(BenchmarkId::new("shift", label), |b| {
      b.iter(|| {
        for offset in (0..BUF_LEN).step_by(8) {
          shift::copy64(core::hint::black_box(offset as u64), &mut buf, offset, endian).unwrap();
        }
        core::hint::black_box(&buf);
      });
    });

    group.bench_function(BenchmarkId::new("raw", label), |b| {
      b.iter(|| {
        for offset in (0..BUF_LEN).step_by(8) {
          // SAFETY: offset + 8 <= BUF_LEN.
          unsafe { raw::copy64_endian(core::hint::black_box(offset as u64), &mut buf, offset, endian) };
        }
        core::hint::black_box(&buf);
      });
    });
  }

  group.finish();
}

fn bench_load32(c: &mut Criterion) {
  let mut group = c.benchmark_group("bitops/load32");
  group.throughput(Throughput::Bytes(BUF_LEN as u64));
  let buf: Vec<u8> = (0..BUF_LEN).map(|i| i as u8).collect();

  for (label, endian) in orders() {
    group.bench_function(BenchmarkId::new("shift", label), |b| {
      b.iter(|| {
        let mut acc = 0i32;
        for offset in (0..BUF_LEN).step_by(4) {
          acc = acc.wrapping_add(shift::to32(core::hint::black_box(&buf), offset, endian).unwrap());
        }
        acc
      });
    });

    group.bench_function(BenchmarkId::new("raw", label), |b| {
      b.iter(|| {
        let mut acc = 0i32;
        for offset in (0..BUF_LEN).step_by(4) {
          // SAFETY: offset + 4 <= BUF_LEN.
          acc = acc.wrapping_add(unsafe { raw::to32_endian(core::hint::black_box(&buf), offset, endian) });
        }
        acc
      });
    });
  }

  group.finish();
}

/// Unaligned float fields, the case the raw tier exists for.
fn bench_unaligned_f64(c: &mut Criterion) {
  let mut group = c.benchmark_group("bitops/unaligned-f64");
  let count = (BUF_LEN - 1) / 8;
  group.throughput(Throughput::Bytes((count * 8) as u64));
  let mut buf = vec![0u8; BUF_LEN];

  group.bench_function("shift", |b| {
    b.iter(|| {
      for i in 0..count {
        shift::copy_f64_be(core::hint::black_box(i as f64), &mut buf, 1 + i * 8).unwrap();
      }
      core::hint::black_box(&buf);
    });
  });

  group.bench_function("raw", |b| {
    b.iter(|| {
      for i in 0..count {
        // SAFETY: 1 + i * 8 + 8 <= BUF_LEN for i < count.
        unsafe { raw::copy_f64_be(core::hint::black_box(i as f64), &mut buf, 1 + i * 8) };
      }
      core::hint::black_box(&buf);
    });
  });

  group.finish();
}

criterion_group!(benches, bench_store64, bench_load32, bench_unaligned_f64);
criterion_main!(benches);
