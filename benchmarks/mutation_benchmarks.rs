#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Mutation benchmarks: qurl chains vs rebuilding the query with the url crate
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use qurl::Qurl;
use url::Url as UrlCrate;

const BASE: &str = "https://example.com/search?q=rust+lang&page=3&tag=a&tag=b&sort=asc#results";

/// url crate equivalent of `set(key, value)`: drop all pairs for key, append one.
fn url_crate_set(url: &mut UrlCrate, key: &str, value: &str) {
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != key)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair(key, value);
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("qurl", |b| {
        b.iter(|| Qurl::parse(black_box(BASE)).unwrap());
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| UrlCrate::parse(black_box(BASE)).unwrap());
    });

    group.finish();
}

fn bench_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_and_serialize");

    group.bench_function("qurl", |b| {
        b.iter(|| {
            Qurl::parse(black_box(BASE))
                .unwrap()
                .set("page", 4)
                .to_string()
        });
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| {
            let mut url = UrlCrate::parse(black_box(BASE)).unwrap();
            url_crate_set(&mut url, "page", "4");
            url.to_string()
        });
    });

    group.finish();
}

fn bench_token_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("token_chain");
    let tokens = ["page++", "tag-='a'", "tag+='c'", "sort='desc'", "q~='lang'"];

    group.bench_function("qurl", |b| {
        b.iter(|| qurl::qurl(black_box(BASE), black_box(tokens)).unwrap());
    });

    group.finish();
}

fn bench_many_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_pairs");
    let query: Vec<String> = (0..500).map(|i| format!("k{}={i}", i % 50)).collect();
    let input = format!("https://example.com/?{}", query.join("&"));
    let parsed = Qurl::parse(&input).unwrap();

    group.bench_function("remove_and_replace", |b| {
        b.iter(|| {
            black_box(parsed.clone())
                .remove("k7", 407)
                .replace("k9", "9")
                .inc("k0", 1)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse,
    bench_set,
    bench_token_chain,
    bench_many_pairs
);
criterion_main!(benches);
