//! Throughput benchmarks for the SHA-256 engine
//!
//! Covers the raw block primitive, the streaming hasher and the async
//! builder, with `sha2` as the baseline.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use cryypt_sha256::{compress, Hash, StreamingHasher, BLOCK_LEN, IV};
use sha2::Digest as _;
use tokio::runtime::Runtime;

/// Single block compression
fn benchmark_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress");
    group.throughput(Throughput::Bytes(BLOCK_LEN as u64));

    let block = [0x5au8; BLOCK_LEN];
    group.bench_function("single_block", |b| {
        b.iter(|| {
            let mut state = IV;
            compress(&mut state, std::hint::black_box(&block)).expect("valid block");
            std::hint::black_box(state);
        });
    });

    group.finish();
}

/// Streaming hasher against `sha2` across input sizes
fn benchmark_hash_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash_throughput");

    // 1KB, 64KB, 1MB
    let sizes = [1024, 65536, 1_048_576];

    for size in &sizes {
        group.throughput(Throughput::Bytes(*size as u64));
        let data = vec![0u8; *size];

        group.bench_with_input(BenchmarkId::new("cryypt_sha256", size), &data, |b, data| {
            b.iter(|| std::hint::black_box(StreamingHasher::digest(data)));
        });

        group.bench_with_input(BenchmarkId::new("sha2", size), &data, |b, data| {
            b.iter(|| std::hint::black_box(sha2::Sha256::digest(data)));
        });
    }
    group.finish();
}

/// Async builder overhead on top of the engine
fn benchmark_builder(c: &mut Criterion) {
    let rt = Runtime::new().expect("tokio runtime");
    let mut group = c.benchmark_group("builder_overhead");

    let data = vec![0u8; 1024];

    group.bench_function("SHA256_builder_compute", |b| {
        b.iter(|| {
            rt.block_on(async {
                let digest = Hash::sha256()
                    .compute(data.clone())
                    .await
                    .expect("Hash should succeed");
                std::hint::black_box(digest);
            });
        });
    });

    group.bench_function("SHA256_direct_computation", |b| {
        b.iter(|| std::hint::black_box(StreamingHasher::digest(&data)));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_compress,
    benchmark_hash_throughput,
    benchmark_builder
);
criterion_main!(benches);
