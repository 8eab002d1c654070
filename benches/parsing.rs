//! Criterion benchmarks for data URI parsing and updates.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use data_uri::DataUri;

const GIF: &str = "data:image/gif;charset=binary;base64,R0lGODlhIAAgAIABAP8AAP///yH+EUNyZWF0ZWQgd2l0aCBHSU1QACH5BAEKAAEALAAAAAAgACAAAAI5jI+py+0Po5y02ouzfqD7DwJUSHpjSZ4oqK7m5LJw/Ep0Hd1dG/OuvwKihCVianbbKJfMpvMJjWYKADs=";

/// Benchmark: DataUri::parse with varying input shapes
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    let test_cases = [
        ("minimal", "data:,hi"),
        (
            "typical",
            "data:text/plain;charset=us-ascii,Bonjour%20le%20monde%21",
        ),
        ("defaults", ""),
        ("binary", GIF),
        (
            "many_params",
            "data:application/json;charset=utf-8;version=2;profile=strict,%7B%22a%22%3A1%7D",
        ),
    ];

    for (name, uri) in test_cases {
        group.throughput(Throughput::Bytes(uri.len() as u64));
        group.bench_with_input(BenchmarkId::new("uri", name), &uri, |b, uri| {
            b.iter(|| DataUri::parse(black_box(uri)));
        });
    }

    group.finish();
}

/// Benchmark: parameter evolution operations
fn bench_updates(c: &mut Criterion) {
    let mut group = c.benchmark_group("updates");

    let uri = DataUri::parse("data:text/plain;charset=us-ascii,Bonjour%20le%20monde%21").unwrap();

    group.bench_function("merge_parameters", |b| {
        b.iter(|| uri.merge_parameters(black_box([("charset", "utf-8")])));
    });

    group.bench_function("without_parameters", |b| {
        b.iter(|| uri.without_parameters(black_box(&["charset"])));
    });

    group.bench_function("with_parameters", |b| {
        b.iter(|| uri.with_parameters(black_box("charset=utf-8")));
    });

    group.finish();
}

/// Benchmark: payload decode paths
fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    let text = DataUri::parse("data:text/plain;charset=us-ascii,Bonjour%20le%20monde%21").unwrap();
    let binary = DataUri::parse(GIF).unwrap();

    group.bench_function("percent", |b| b.iter(|| black_box(&text).decode()));
    group.bench_function("base64", |b| b.iter(|| black_box(&binary).decode()));

    group.finish();
}

criterion_group!(benches, bench_parse, bench_updates, bench_decode);
criterion_main!(benches);
