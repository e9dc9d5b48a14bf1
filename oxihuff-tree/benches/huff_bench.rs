//! Performance benchmarks for oxihuff-tree
//!
//! Covers:
//! - Compression/decompression throughput across data patterns
//! - Tree construction and code derivation on their own

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxihuff_tree::{CodeTable, FrequencyTable, HuffNode, compress_bytes, decompress_bytes};
use std::hint::black_box;

/// Type alias for pattern generator functions
type PatternGenerator = fn(usize) -> Vec<u8>;

/// Generate test data patterns for benchmarking
mod test_data {
    /// Uniform data - a single byte value (one-bit codes)
    pub fn uniform(size: usize) -> Vec<u8> {
        vec![0xAA; size]
    }

    /// Random data - flat histogram, no gain expected
    pub fn random(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            // Linear congruential generator
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }

    /// Skewed data - geometric-ish histogram, deep trees
    pub fn skewed(size: usize) -> Vec<u8> {
        random(size)
            .into_iter()
            .map(|b| b.trailing_zeros() as u8)
            .collect()
    }

    /// Text-like data - realistic scenario
    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog. \
                     Pack my box with five dozen liquor jugs. \
                     How vexingly quick daft zebras jump! ";
        let mut data = Vec::with_capacity(size);
        while data.len() < size {
            let remaining = size - data.len();
            let chunk_size = remaining.min(text.len());
            data.extend_from_slice(&text[..chunk_size]);
        }
        data
    }
}

const SIZES: [(&str, usize); 3] = [
    ("small_4KB", 4 * 1024),
    ("medium_64KB", 64 * 1024),
    ("large_1MB", 1024 * 1024),
];

const PATTERNS: [(&str, PatternGenerator); 4] = [
    ("uniform", test_data::uniform as PatternGenerator),
    ("random", test_data::random as PatternGenerator),
    ("skewed", test_data::skewed as PatternGenerator),
    ("text", test_data::text_like as PatternGenerator),
];

fn bench_compression_speed(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression_speed");

    for (size_name, size) in SIZES {
        for (pattern_name, generator) in PATTERNS {
            let data = generator(size);
            let id = format!("{}/{}", size_name, pattern_name);

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(&id), &data, |b, data| {
                b.iter(|| {
                    let compressed = compress_bytes(black_box(data)).unwrap();
                    black_box(compressed);
                });
            });
        }
    }

    group.finish();
}

fn bench_decompression_speed(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompression_speed");

    for (size_name, size) in SIZES {
        for (pattern_name, generator) in PATTERNS {
            let compressed = compress_bytes(&generator(size)).unwrap();
            let id = format!("{}/{}", size_name, pattern_name);

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(
                BenchmarkId::from_parameter(&id),
                &compressed,
                |b, compressed| {
                    b.iter(|| {
                        let decompressed = decompress_bytes(black_box(compressed)).unwrap();
                        black_box(decompressed);
                    });
                },
            );
        }
    }

    group.finish();
}

/// Tree construction and code derivation, without any bit I/O
fn bench_tree_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_build");

    for (pattern_name, generator) in PATTERNS {
        let table = FrequencyTable::from_bytes(&generator(64 * 1024));

        group.bench_with_input(
            BenchmarkId::from_parameter(pattern_name),
            &table,
            |b, table| {
                b.iter(|| {
                    let tree = HuffNode::build(black_box(table));
                    let codes = CodeTable::derive(&tree).unwrap();
                    black_box(codes);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compression_speed,
    bench_decompression_speed,
    bench_tree_build,
);
criterion_main!(benches);
