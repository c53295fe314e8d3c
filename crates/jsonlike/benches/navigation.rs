use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use jsonlike::Document;

static NESTED: &str = r#"{
    "a": {"b": {"c": {"d": {"value": 42, "tags": ["x", "y", "z"]}}}},
    "items": [
        {"id": 1, "name": "one"},
        {"id": 2, "name": "two"},
        {"id": 3, "name": "three"}
    ]
}"#;

fn bench_navigation(c: &mut Criterion) {
    let document: Document = NESTED.parse().expect("valid JSON");

    c.bench_function("get chain", |b| {
        b.iter(|| {
            black_box(
                document
                    .get(black_box("a"))
                    .get("b")
                    .get("c")
                    .get("d")
                    .get("value")
                    .as_i64(),
            )
        });
    });

    c.bench_function("missing chain", |b| {
        b.iter(|| {
            black_box(
                document
                    .get(black_box("a"))
                    .get("nope")
                    .get("still")
                    .index(3)
                    .as_str()
                    .is_valid,
            )
        });
    });

    c.bench_function("array scan", |b| {
        b.iter(|| {
            let mut total = 0;
            for item in document.get("items").as_array().iter() {
                total += item.get("id").as_i64().value;
            }
            black_box(total)
        });
    });

    c.bench_function("decode", |b| {
        b.iter(|| black_box(NESTED).parse::<Document>().expect("valid JSON"));
    });
}

criterion_group!(benches, bench_navigation);
criterion_main!(benches);
