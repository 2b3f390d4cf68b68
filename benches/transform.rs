use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use hashcodec::{StatsCollector, TransformDispatcher, TransformRequest};
use std::hint::black_box;

fn sample_text(size: usize) -> String {
    "Grüße, 世界! The quick brown fox 🦊 jumps over the lazy dog.\n"
        .chars()
        .cycle()
        .take(size)
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let dispatcher = TransformDispatcher::new();

    for id in ["base64", "base32", "hex", "url", "html", "rot13", "binary"] {
        let mut group = c.benchmark_group(format!("encode_{}", id));

        for size in [64, 1024, 16384] {
            let text = sample_text(size);
            group.throughput(Throughput::Bytes(text.len() as u64));

            group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
                let request = TransformRequest::encode(id, text.as_str());
                b.iter(|| dispatcher.transform(black_box(&request)));
            });
        }

        group.finish();
    }
}

fn bench_decode(c: &mut Criterion) {
    let dispatcher = TransformDispatcher::new();

    for id in ["base64", "base32", "hex", "url"] {
        let mut group = c.benchmark_group(format!("decode_{}", id));

        for size in [64, 1024, 16384] {
            let encoded = dispatcher
                .transform(&TransformRequest::encode(id, sample_text(size)))
                .into_outcome()
                .unwrap();
            group.throughput(Throughput::Bytes(encoded.len() as u64));

            group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
                let request = TransformRequest::decode(id, encoded.as_str());
                b.iter(|| dispatcher.transform(black_box(&request)));
            });
        }

        group.finish();
    }
}

fn bench_hash(c: &mut Criterion) {
    let dispatcher = TransformDispatcher::new();
    let collector = StatsCollector::new(&dispatcher);
    let mut group = c.benchmark_group("hash");
    let text = sample_text(4096);
    group.throughput(Throughput::Bytes(text.len() as u64));

    for id in ["md5", "crc32", "sha1", "sha256", "sha512"] {
        let request = TransformRequest::encode(id, text.as_str());
        group.bench_function(id, |b| b.iter(|| collector.measure(black_box(&request))));
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_hash);
criterion_main!(benches);
