//! Criterion benchmarks for packetmaker
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use packetmaker::{Endian, Maker};

fn order<'a>(seq: u32, symbol: &'a [u8]) -> Maker<'a> {
    let mut maker = Maker::with_capacity(7);
    maker
        .byte(1)
        .u32(seq, Endian::Big)
        .u64(1_700_000_000_000_000_000, Endian::Big)
        .i64(50_000_000, Endian::Big)
        .u32(100, Endian::Big)
        .u16(symbol.len() as u16, Endian::Big)
        .bytes(symbol);
    maker
}

fn bench_declare(c: &mut Criterion) {
    c.bench_function("declare_order", |b| {
        b.iter(|| {
            let maker = order(black_box(12345), black_box(b"AAPL"));
            black_box(maker.len());
        });
    });
}

fn bench_make(c: &mut Criterion) {
    let maker = order(12345, b"AAPL");

    c.bench_function("make_order", |b| {
        b.iter(|| {
            black_box(black_box(&maker).make());
        });
    });

    c.bench_function("manipulate_pad_order", |b| {
        let mut pad = Some(vec![0u8; 1024]);
        b.iter(|| {
            let (section, reallocated) = black_box(&maker).manipulate_pad(pad.take());
            black_box(reallocated);
            pad = Some(section);
        });
    });

    c.bench_function("write_into_order", |b| {
        let mut buf = [0u8; 1024];
        b.iter(|| {
            let size = black_box(&maker).write_into(black_box(&mut buf)).unwrap();
            black_box(size);
        });
    });
}

fn bench_variable_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("variable_sizes");

    let symbols: &[&[u8]] = &[
        b"A",
        b"AAPL",
        b"BITCOIN_USD",
        b"VERY_LONG_SYMBOL_NAME_FOR_TESTING_PERFORMANCE",
        &vec![b'X'; 100],
        &vec![b'Y'; 1024],
    ];

    for symbol in symbols {
        group.bench_with_input(
            BenchmarkId::new("make_with_symbol", symbol.len()),
            symbol,
            |b, symbol| {
                b.iter(|| {
                    let packet = order(black_box(1), symbol).make();
                    black_box(packet);
                });
            },
        );
    }

    group.finish();
}

fn bench_batch_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_operations");

    for batch_size in [10, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::new("append_batch", batch_size),
            batch_size,
            |b, &batch_size| {
                let mut out = Vec::with_capacity(64 * batch_size);
                b.iter(|| {
                    out.clear();
                    for i in 0..batch_size {
                        order(black_box(i as u32), b"AAPL").append_to(&mut out);
                    }
                    black_box(out.len());
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_declare,
    bench_make,
    bench_variable_sizes,
    bench_batch_operations
);
criterion_main!(benches);
