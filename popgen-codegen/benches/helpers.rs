//! Template helper benchmarks.

use criterion::{Criterion, criterion_group, criterion_main};
use popgen_codegen::{get_func_map, parse_func, var_name};
use std::hint::black_box;

fn benchmark_parse_func(c: &mut Criterion) {
    c.bench_function("parse_func_int", |b| {
        b.iter(|| parse_func(black_box("int32"), black_box("orderId")))
    });

    c.bench_function("parse_func_unsupported", |b| {
        b.iter(|| parse_func(black_box("string"), black_box("symbol")))
    });
}

fn benchmark_var_name(c: &mut Criterion) {
    c.bench_function("var_name", |b| {
        b.iter(|| var_name(black_box("ClientOrderId")))
    });
}

fn benchmark_func_map_call(c: &mut Criterion) {
    let funcs = get_func_map();

    c.bench_function("func_map_parsefunc", |b| {
        b.iter(|| funcs.call(black_box("parsefunc"), black_box(&["float64", "price"])))
    });

    c.bench_function("func_map_is_builtin", |b| {
        b.iter(|| funcs.call(black_box("is_builtin"), black_box(&["uintptr"])))
    });
}

criterion_group!(
    benches,
    benchmark_parse_func,
    benchmark_var_name,
    benchmark_func_map_call
);
criterion_main!(benches);
