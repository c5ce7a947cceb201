//! Criterion benchmarks for KISS encoding and decoding.
//!
//! Run with:
//! ```bash
//! cargo bench --package kissframe --bench codec_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kissframe::{decode, encode, encode_into, FEND, FESC};

const SIZES: &[usize] = &[16, 256, 4096];

/// Payload with no control bytes: the common case on a quiet link.
fn plain_payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 0xC0) as u8).collect()
}

/// Payload made only of control bytes: every byte doubles on the wire.
fn worst_case_payload(len: usize) -> Vec<u8> {
    (0..len)
        .map(|i| if i % 2 == 0 { FEND } else { FESC })
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for &size in SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        let plain = plain_payload(size);
        group.bench_with_input(BenchmarkId::new("plain", size), &plain, |b, p| {
            b.iter(|| encode(black_box(p)))
        });
        let worst = worst_case_payload(size);
        group.bench_with_input(BenchmarkId::new("all_escaped", size), &worst, |b, p| {
            b.iter(|| encode(black_box(p)))
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for &size in SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        let plain = encode(&plain_payload(size));
        group.bench_with_input(BenchmarkId::new("plain", size), &plain, |b, f| {
            b.iter(|| decode(black_box(f)).unwrap())
        });
        let worst = encode(&worst_case_payload(size));
        group.bench_with_input(BenchmarkId::new("all_escaped", size), &worst, |b, f| {
            b.iter(|| decode(black_box(f)).unwrap())
        });
    }
    group.finish();
}

/// Batching many frames into one reused buffer, as a serial writer would.
fn bench_encode_into_batch(c: &mut Criterion) {
    let payload = plain_payload(256);
    let mut buf = bytes::BytesMut::with_capacity(64 * 1024);
    c.bench_function("encode_into_batch_32", |b| {
        b.iter(|| {
            buf.clear();
            for _ in 0..32 {
                encode_into(black_box(&payload), &mut buf);
            }
        })
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_encode_into_batch);
criterion_main!(benches);
