//! Criterion benchmarks for rust_log_pipeline

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_log_pipeline::prelude::*;
use rust_log_pipeline::{attrs, info};
use std::io;
use std::sync::Arc;

fn sample_record() -> Record {
    Record::new(
        LogLevel::Info,
        "Request processed",
        attrs![
            "path", "/api/users/42",
            "status", 200,
            "latency_ms", 12.5,
            "agent", "curl/8.0 (x86_64)",
            CallerTag("src/server.rs:118".to_string()),
        ],
    )
}

// ============================================================================
// Format Benchmarks
// ============================================================================

fn bench_formats(c: &mut Criterion) {
    let mut group = c.benchmark_group("formats");
    group.throughput(Throughput::Elements(1));

    let record = sample_record();
    let logfmt = LogfmtFormat::new();
    let json = JsonFormat::new();
    let pretty = JsonFormat::new().with_pretty(true);
    let terminal = TerminalFormat::new()
        .with_name("bench")
        .with_time_format(TimeFormat::Sec);
    let colored = terminal.clone().with_color(true);

    group.bench_function("logfmt", |b| b.iter(|| logfmt.format(black_box(&record))));
    group.bench_function("json", |b| b.iter(|| json.format(black_box(&record))));
    group.bench_function("json_pretty", |b| b.iter(|| pretty.format(black_box(&record))));
    group.bench_function("terminal", |b| b.iter(|| terminal.format(black_box(&record))));
    group.bench_function("terminal_color", |b| {
        b.iter(|| colored.format(black_box(&record)))
    });

    group.finish();
}

fn bench_implicit_sections(c: &mut Criterion) {
    let mut group = c.benchmark_group("implicit_sections");
    group.throughput(Throughput::Elements(1));

    let record = Record::new(
        LogLevel::Error,
        "Upload failed",
        attrs![
            io::Error::other("connection reset by peer"),
            Value::standalone("attempt", 3),
            Value::dump(vec![("chunk", 1), ("chunk", 2)]),
            "bytes", 4096,
        ],
    );
    let logfmt = LogfmtFormat::new();

    group.bench_function("logfmt_error_dump", |b| {
        b.iter(|| logfmt.format(black_box(&record)))
    });

    group.finish();
}

// ============================================================================
// Pipeline Benchmarks
// ============================================================================

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    group.throughput(Throughput::Elements(1));

    let sink = Logger::with_handler(LevelFilterHandler::new(
        LogLevel::Info,
        CallerFileHandler::new(SyncHandler::new(StreamHandler::new(io::sink(), LogfmtFormat::new())), true),
    ));

    group.bench_function("filtered_out", |b| {
        b.iter(|| sink.debug(black_box("dropped"), Vec::new()))
    });

    group.bench_function("delivered", |b| {
        b.iter(|| sink.info(black_box("written"), attrs!["k", 1]))
    });

    let child = sink.child(attrs!["svc", "api", "region", "eu"]);
    group.bench_function("child_context", |b| {
        b.iter(|| child.info(black_box("written"), attrs!["k", 1]))
    });

    group.bench_function("macro", |b| {
        b.iter(|| info!(sink, "request {}", black_box(7); "k", 1))
    });

    let handlers: Vec<SharedHandler> = vec![
        Arc::new(DiscardHandler),
        Arc::new(StreamHandler::new(io::sink(), JsonFormat::new())),
        Arc::new(StreamHandler::new(io::sink(), LogfmtFormat::new())),
    ];
    let fan_out = Logger::with_handler(MultiHandler::new(handlers));
    group.bench_function("multi_3", |b| {
        b.iter(|| fan_out.warn(black_box("everywhere"), Vec::new()))
    });

    group.finish();
}

fn bench_caller_handlers(c: &mut Criterion) {
    let mut group = c.benchmark_group("caller");
    group.throughput(Throughput::Elements(1));

    let file = Logger::with_handler(CallerFileHandler::new(DiscardHandler, true));
    group.bench_function("file", |b| b.iter(|| file.info(black_box("m"), Vec::new())));

    let stack = Logger::with_handler(CallerStackHandler::new(StackFormat::Location, DiscardHandler));
    group.bench_function("stack", |b| b.iter(|| stack.info(black_box("m"), Vec::new())));

    group.finish();
}

criterion_group!(
    benches,
    bench_formats,
    bench_implicit_sections,
    bench_pipeline,
    bench_caller_handlers
);
criterion_main!(benches);
