// benches/keywords.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use serde_json::{json, Value};

use crawllab::core::{KeywordQuery, ResultPayload};

fn sample_input() -> String {
    (0..200).map(|i| format!("  keyword {i} ")).collect::<Vec<_>>().join(",")
}

fn sample_body() -> Value {
    let groups: serde_json::Map<String, Value> = (0..50)
        .map(|i| {
            let links: Vec<Value> = (0..40)
                .map(|j| json!({ "url": format!("https://example.com/{i}/{j}"), "title": "t" }))
                .collect();
            (format!("kw{i}"), Value::Array(links))
        })
        .collect();
    Value::Object(groups)
}

fn bench_keywords(c: &mut Criterion) {
    let input = sample_input();
    c.bench_function("keyword_query_parse", |b| {
        b.iter(|| {
            let q = KeywordQuery::parse(black_box(&input));
            black_box(q.len())
        })
    });

    let body = sample_body();
    c.bench_function("result_link_groups", |b| {
        b.iter(|| {
            let r = ResultPayload::from_value(black_box(body.clone()));
            black_box(r.link_count())
        })
    });
}

criterion_group!(benches, bench_keywords);
criterion_main!(benches);
