use criterion::{criterion_group, criterion_main, Criterion};
use splitrand::prelude::*;
use splitrand::threefry::threefry_2x32;
use std::hint::black_box;

fn bench_threefry(c: &mut Criterion) {
    let counter: Vec<u32> = (0..65_536).collect();
    c.bench_function("threefry_2x32_64k", |b| {
        b.iter(|| black_box(threefry_2x32([0, 42], black_box(&counter))))
    });
}

fn bench_split(c: &mut Criterion) {
    let key = Key::from_seed(42);
    c.bench_function("split_1024", |b| b.iter(|| black_box(key.split(1024))));
}

fn bench_uniform(c: &mut Criterion) {
    let key = Key::from_seed(42);
    c.bench_function("uniform_f32_64k", |b| {
        b.iter(|| black_box(uniform::<f32>(key, &[65_536], 0.0, 1.0).unwrap()))
    });
    c.bench_function("uniform_f64_64k", |b| {
        b.iter(|| black_box(uniform::<f64>(key, &[65_536], 0.0, 1.0).unwrap()))
    });
}

fn bench_normal(c: &mut Criterion) {
    let key = Key::from_seed(42);
    c.bench_function("normal_f64_64k", |b| {
        b.iter(|| black_box(normal::<f64>(key, &[65_536]).unwrap()))
    });
}

fn bench_gamma(c: &mut Criterion) {
    let key = Key::from_seed(42);
    c.bench_function("gamma_f64_4k", |b| {
        b.iter(|| black_box(gamma::<f64>(key, 2.0, &[4096]).unwrap()))
    });
}

fn bench_shuffle(c: &mut Criterion) {
    let key = Key::from_seed(42);
    let data: Vec<u32> = (0..8192).collect();
    c.bench_function("shuffle_8k", |b| {
        b.iter(|| black_box(shuffle(key, black_box(&data)).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_threefry,
    bench_split,
    bench_uniform,
    bench_normal,
    bench_gamma,
    bench_shuffle
);
criterion_main!(benches);
