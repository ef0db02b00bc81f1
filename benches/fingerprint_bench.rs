use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sqlfingerprint::{builtin_index, fingerprint_of, scan, TokenizerFlags};

fn bench_scan(c: &mut Criterion) {
    let test_cases: [&[u8]; 8] = [
        b"SELECT * FROM users WHERE id = 1",
        b"1' OR '1'='1",
        b"1 UNION SELECT password FROM users",
        b"'; DROP TABLE users; --",
        b"SELECT * FROM products WHERE price < 100",
        b"admin'--",
        b"1' AND SLEEP(5)--",
        b"october sales report",
    ];

    c.bench_function("scan", |b| {
        b.iter(|| {
            for case in &test_cases {
                black_box(scan(black_box(case)).ok());
            }
        })
    });
}

fn bench_fingerprint_individual(c: &mut Criterion) {
    let mut group = c.benchmark_group("fingerprint_individual");

    let test_cases: [(&str, &[u8]); 5] = [
        ("simple_select", b"SELECT * FROM users WHERE id = 1"),
        ("union_injection", b"1 UNION SELECT password FROM users"),
        ("boolean_injection", b"1' OR '1'='1"),
        ("comment_injection", b"admin'--"),
        ("safe_value", b"october sales report"),
    ];

    for (name, input) in test_cases {
        group.bench_function(name, |b| {
            b.iter(|| {
                black_box(fingerprint_of(black_box(input), TokenizerFlags::NONE).ok())
            })
        });
    }

    group.finish();
}

fn bench_index_lookup(c: &mut Criterion) {
    let index = builtin_index().expect("builtin index");
    let probes = ["s&sos", "1Uk", "koknk", "nn", "zzzzz", ""];

    c.bench_function("index_contains", |b| {
        b.iter(|| {
            for probe in &probes {
                black_box(index.contains(black_box(probe)));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_scan,
    bench_fingerprint_individual,
    bench_index_lookup
);
criterion_main!(benches);
