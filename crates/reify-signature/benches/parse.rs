//! Signature parsing benchmark.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use reify_signature::parse_signature;
use reify_types::MapNamespace;

fn namespace() -> MapNamespace {
    let mut ns = MapNamespace::new();
    ns.register("java.lang.Override");
    ns.register("org.foo.Bar");
    ns.register("org.foo.EventHandler");
    ns
}

fn bench_parse(c: &mut Criterion) {
    let ns = namespace();

    c.bench_function("parse_plain_method", |b| {
        b.iter(|| parse_signature(black_box("void foo(int, org.foo.Bar)"), &ns))
    });

    c.bench_function("parse_annotated_method", |b| {
        b.iter(|| {
            parse_signature(
                black_box("@org.foo.EventHandler(priority = 2, sources = {org.foo.Bar}) void onClick(@java.lang.Override int button)"),
                &ns,
            )
        })
    });

    c.bench_function("parse_field", |b| {
        b.iter(|| parse_signature(black_box("org.foo.Bar bar"), &ns))
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
