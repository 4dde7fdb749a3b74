use cinderlog::formatter::{Formatter, JsonConfig, JsonFormatter, StringFormatter};
use cinderlog::Record;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn make_record() -> Record {
    Record::new()
        .severity(2)
        .message("benchmark log message")
        .with("scope", "BENCH")
        .with("count", 42i64)
}

fn bench_string_formatter(c: &mut Criterion) {
    let fmt = StringFormatter::new("[{severity}] {scope}: {message} ({count})").unwrap();
    let record = make_record();

    c.bench_function("StringFormatter::format", |b| {
        b.iter(|| fmt.format(black_box(&record)).unwrap());
    });
}

fn bench_json_formatter(c: &mut Criterion) {
    let mut config = JsonConfig::default();
    config
        .name_mapping
        .insert("message".to_string(), "@message".to_string());
    config
        .field_hierarchy
        .insert("count".to_string(), vec!["fields".to_string()]);
    let fmt = JsonFormatter::new(config);
    let record = make_record();

    c.bench_function("JsonFormatter::format", |b| {
        b.iter(|| fmt.format(black_box(&record)).unwrap());
    });
}

criterion_group!(benches, bench_string_formatter, bench_json_formatter);
criterion_main!(benches);
