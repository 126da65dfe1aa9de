//! Benchmarks for manifest encoding.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use osbuild::prelude::*;

fn manifest() -> Manifest {
    let mut os = Pipeline::new("os").unwrap_or_else(|e| panic!("{e}"));
    for i in 0..64 {
        os.add_options(HostnameStageOptions::new(format!("host-{i}")));
        os.add_options(WaAgentConfStageOptions::new(
            WaAgentConfig::new()
                .with_provisioning_enabled(i % 2 == 0)
                .with_resource_disk_format(true),
        ));
    }
    Manifest::new().with_pipeline(os)
}

fn encoding_benchmark(c: &mut Criterion) {
    let manifest = manifest();

    c.bench_function("encode_json", |b| {
        b.iter(|| to_json(black_box(&manifest)))
    });

    let text = to_json(&manifest).unwrap_or_default();
    c.bench_function("decode_json", |b| {
        b.iter(|| from_json::<Manifest>(black_box(&text)))
    });
}

criterion_group!(benches, encoding_benchmark);
criterion_main!(benches);
