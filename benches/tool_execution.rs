//! Tool Execution Performance Benchmarks
//!
//! Measures direct tool calls, registry dispatch and catalog search over the
//! standard catalog.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use toolbox_workspace::{StandardToolsConfig, Tool, ToolCall, ToolRegistry, standard_registry};

const CASES: &[(&str, &str)] = &[
    ("word-counter", "The quick brown fox jumps over the lazy dog. Twice."),
    ("temperature-converter", "36.6"),
    ("base64-encoder", "benchmark input"),
    ("sha256-hash-generator", "benchmark input"),
    ("credit-card-validator", "4111 1111 1111 1111"),
    ("json-formatter", r#"{"b":1,"a":[true,null,{"c":"d"}]}"#),
    ("number-to-words-converter", "987654321"),
];

/// Benchmark tools called directly, without registry lookup
fn bench_tool_execution(c: &mut Criterion) {
    let registry = standard_registry(StandardToolsConfig::default()).expect("catalog registers");
    let mut group = c.benchmark_group("tool_execution");

    group.throughput(Throughput::Elements(1));
    group.measurement_time(Duration::from_secs(5));

    for (slug, input) in CASES {
        let tool = registry.get_tool(slug).expect("tool registered");
        group.bench_with_input(BenchmarkId::new("direct_call", slug), input, |b, input| {
            b.iter(|| black_box(tool.call(black_box(input.to_string()))))
        });
    }

    group.finish();
}

/// Benchmark slug lookup plus execution
fn bench_registry_dispatch(c: &mut Criterion) {
    let registry = standard_registry(StandardToolsConfig::default()).expect("catalog registers");
    let mut group = c.benchmark_group("registry_dispatch");

    group.throughput(Throughput::Elements(1));

    for (slug, input) in CASES {
        let call = ToolCall::new(slug, input).expect("valid slug");
        group.bench_with_input(BenchmarkId::new("dispatch", slug), &call, |b, call| {
            b.iter(|| black_box(registry.dispatch_ref(black_box(call))))
        });
    }

    group.bench_function("unknown_slug", |b| {
        let call = ToolCall::new("youtube-to-mp3-converter", "").expect("valid slug");
        b.iter(|| black_box(registry.try_dispatch(black_box(&call)).is_err()))
    });

    group.finish();
}

/// Benchmark catalog search and category grouping used by the home page
fn bench_catalog_queries(c: &mut Criterion) {
    let registry = standard_registry(StandardToolsConfig::default()).expect("catalog registers");
    let mut group = c.benchmark_group("catalog");

    for query in ["", "converter", "sha256", "no-such-tool"] {
        group.bench_with_input(BenchmarkId::new("search", query), &query, |b, query| {
            b.iter(|| black_box(registry.search(black_box(query)).len()))
        });
    }

    group.bench_function("tools_by_category", |b| {
        b.iter(|| black_box(registry.tools_by_category().len()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_tool_execution,
    bench_registry_dispatch,
    bench_catalog_queries
);
criterion_main!(benches);
