//! Benchmarks for xxhrs.
//!
//! Run with:
//!     cargo bench

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use xxhrs::{StreamingHasher, Xxh32, Xxh64, digest_reader, sum32, sum64};

fn bench_one_shot(c: &mut Criterion) {
    let mut group = c.benchmark_group("one_shot");

    // Tiny inputs stay in the tail path, larger ones hit the block loop
    for size in [8, 64, 1024, 64 * 1024, 1024 * 1024] {
        let data: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("xxh32", size), &data, |b, data| {
            b.iter(|| black_box(sum32(black_box(data), 0)));
        });
        group.bench_with_input(BenchmarkId::new("xxh64", size), &data, |b, data| {
            b.iter(|| black_box(sum64(black_box(data), 0)));
        });
    }

    group.finish();
}

fn bench_chunked_updates<H: StreamingHasher>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group(format!("updates_{}", name));
    let size = 1024 * 1024; // 1 MB
    let data: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();

    group.throughput(Throughput::Bytes(size as u64));

    // Odd piece sizes keep the pending buffer busy
    for piece in [7, 100, 4096] {
        group.bench_with_input(BenchmarkId::from_parameter(piece), &piece, |b, &piece| {
            b.iter(|| {
                let mut hasher = H::default();
                for chunk in data.chunks(piece) {
                    hasher.update(black_box(chunk));
                }
                black_box(hasher.value())
            });
        });
    }

    group.finish();
}

fn bench_updates(c: &mut Criterion) {
    bench_chunked_updates::<Xxh32>(c, "xxh32");
    bench_chunked_updates::<Xxh64>(c, "xxh64");
}

fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("streaming");
    let size = 1024 * 1024; // 1 MB
    let data: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();

    group.throughput(Throughput::Bytes(size as u64));
    group.bench_function("digest_reader", |b| {
        b.iter(|| {
            let cursor = std::io::Cursor::new(black_box(&data));
            black_box(digest_reader(Xxh64::new(), cursor).unwrap())
        });
    });

    group.bench_function("state_round_trip", |b| {
        let mut hasher = Xxh64::new();
        hasher.update(&data[..1000]);
        b.iter(|| {
            let state = hasher.marshal_state();
            black_box(Xxh64::from_state(black_box(&state)).unwrap())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_one_shot, bench_updates, bench_streaming);
criterion_main!(benches);
