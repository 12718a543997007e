#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};
use vellum::{json::encode_json, prelude::*};

fn vellum_i64_encode(c: &mut Criterion) {
    c.bench_function("vellum i64 encode", |b| {
        b.iter(|| encode_full(black_box(&1_000_000i64)))
    });
}

fn vellum_i64_value_encode(c: &mut Criterion) {
    c.bench_function("vellum i64 value encode", |b| {
        let v = Value::from(1_000_000i64);
        b.iter(|| encode_value_full(black_box(&v)))
    });
}

fn vellum_i64_ser(c: &mut Criterion) {
    c.bench_function("vellum i64 ser", |b| {
        b.iter(|| {
            let mut out = Vec::<u8>::with_capacity(128);
            out.put_varint(black_box(1_000_000))
        })
    });
}

fn json_i64_encode(c: &mut Criterion) {
    c.bench_function("JSON i64 encode", |b| {
        b.iter(|| serde_json::to_string(&black_box(1_000_000i64)))
    });
}

fn vellum_i64_decode(c: &mut Criterion) {
    c.bench_function("vellum i64 decode", |b| {
        let buf = encode_full(&1_000_000i64).unwrap();
        b.iter(|| decode_full::<i64>(black_box(&buf)))
    });
}

fn json_i64_decode(c: &mut Criterion) {
    c.bench_function("JSON i64 decode", |b| {
        let s = serde_json::to_string(&1_000_000i64).unwrap();
        b.iter(|| serde_json::from_str::<i64>(black_box(&s)))
    });
}

fn vellum_str_encode(c: &mut Criterion) {
    c.bench_function("vellum string encode", |b| {
        let s: String = (0..10_000).map(|x| (b'a' + (x % 26) as u8) as char).collect();
        b.iter(|| encode_full(black_box(&s)))
    });
}

fn json_str_encode(c: &mut Criterion) {
    c.bench_function("JSON string encode", |b| {
        let s: String = (0..10_000).map(|x| (b'a' + (x % 26) as u8) as char).collect();
        b.iter(|| serde_json::to_string(&black_box(&s)))
    });
}

fn document() -> serde_json::Value {
    let rows: Vec<serde_json::Value> = (0..100)
        .map(|i| serde_json::json!({ "id": i, "name": format!("row {}", i), "ok": i % 3 == 0 }))
        .collect();
    serde_json::json!({ "rows": rows, "total": 100 })
}

fn vellum_document_encode(c: &mut Criterion) {
    c.bench_function("vellum JSON document encode", |b| {
        let doc = document();
        b.iter(|| {
            let mut out = Vec::<u8>::new();
            encode_json(black_box(&doc), &mut out).map(|_| out)
        })
    });
}

fn json_document_encode(c: &mut Criterion) {
    c.bench_function("JSON document encode", |b| {
        let doc = document();
        b.iter(|| serde_json::to_vec(black_box(&doc)))
    });
}

criterion_group!(
    benches,
    vellum_i64_encode,
    vellum_i64_value_encode,
    vellum_i64_ser,
    json_i64_encode,
    vellum_i64_decode,
    json_i64_decode,
    vellum_str_encode,
    json_str_encode,
    vellum_document_encode,
    json_document_encode,
);

criterion_main!(benches);
