use bytes::Bytes;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tubemend_core::{repair::repair, sniff::sniff};

/// Payload with `junk_len` marker-free bytes before an ID3 tag
fn make_payload(junk_len: usize, total_len: usize) -> Vec<u8> {
    let mut buf = vec![0x20u8; junk_len];
    buf.extend_from_slice(b"ID3\x04\x00\x00\x00\x00\x00\x00");
    buf.resize(total_len, 0xAA);
    buf
}

fn bench_sniff(c: &mut Criterion) {
    let mut group = c.benchmark_group("sniff");

    for &junk_len in &[0usize, 512, 4095] {
        let payload = make_payload(junk_len, 256 * 1024);
        group.throughput(Throughput::Bytes(payload.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("marker_at", junk_len),
            &payload,
            |b, data| {
                b.iter(|| {
                    let res = sniff(data);
                    criterion::black_box(res);
                });
            },
        );
    }

    // Worst case: the whole window is scanned and nothing is found
    let markerless = vec![0x20u8; 256 * 1024];
    group.throughput(Throughput::Bytes(markerless.len() as u64));
    group.bench_with_input(
        BenchmarkId::new("no_marker", 0),
        &markerless,
        |b, data| {
            b.iter(|| {
                let res = sniff(data);
                criterion::black_box(res);
            });
        },
    );

    group.finish();
}

fn bench_repair(c: &mut Criterion) {
    let mut group = c.benchmark_group("repair");

    for &junk_len in &[512usize, 8191] {
        let payload = Bytes::from(make_payload(junk_len, 256 * 1024));
        group.throughput(Throughput::Bytes(payload.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("truncate", junk_len),
            &payload,
            |b, data| {
                b.iter(|| {
                    let res = repair(data.clone());
                    criterion::black_box(res);
                });
            },
        );
    }

    let markerless = Bytes::from(vec![0x20u8; 256 * 1024]);
    group.throughput(Throughput::Bytes(markerless.len() as u64));
    group.bench_with_input(
        BenchmarkId::new("prepend", 0),
        &markerless,
        |b, data| {
            b.iter(|| {
                let res = repair(data.clone());
                criterion::black_box(res);
            });
        },
    );

    group.finish();
}

criterion_group!(benches, bench_sniff, bench_repair);
criterion_main!(benches);
