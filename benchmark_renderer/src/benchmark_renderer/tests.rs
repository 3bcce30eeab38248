//!
//! Tests for the benchmark renderer binary.
//!

#![cfg(test)]

use std::path::Path;
use std::sync::Arc;
use std::sync::Mutex;

use super::arguments::Arguments;

const INPUT: &str = r#"
goos: darwin
goarch: amd64
pkg: go-benchpress/m/v2/cmd/examples/csvparser
cpu: Intel(R) Core(TM) i9-8950HK CPU @ 2.90GHz
BenchmarkParseCSVLineFields/10_Fields-12                 5764971               193.9 ns/op            64 B/op          2 allocs/op
BenchmarkParseCSVLineFields/20_Fields-12                 5929747               204.8 ns/op            64 B/op          2 allocs/op
BenchmarkParseCSVLineFieldLength/Length_10-12            5744911               207.4 ns/op            64 B/op          2 allocs/op
BenchmarkParseCSVLineFieldLength/Length_20-12            3311017               370.3 ns/op           387 B/op          2 allocs/op
PASS
ok      go-benchpress/m/v2/cmd/examples/csvparser       25.236s
"#;

///
/// A log sink shared between the subscriber and the test.
///
#[derive(Debug, Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().expect("Always valid").clone()).expect("Always valid")
    }
}

impl std::io::Write for LogBuffer {
    fn write(&mut self, buffer: &[u8]) -> std::io::Result<usize> {
        self.0.lock().expect("Always valid").extend_from_slice(buffer);
        Ok(buffer.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn failing_and_succeeding_groups() -> Vec<benchmark_renderer::GroupResult> {
    let set = benchmark_renderer::BenchmarkSet::from(vec![benchmark_renderer::Record {
        name: "BenchmarkA/X".to_owned(),
        ..Default::default()
    }]);
    let mut results = benchmark_renderer::Output::render(
        &set,
        benchmark_renderer::Format::Svg,
        benchmark_renderer::Dimension::NsPerOp,
        None,
        Path::new("chart.svg"),
    );
    results.push(benchmark_renderer::GroupResult {
        group: "BenchmarkB".to_owned(),
        result: Err(benchmark_renderer::OutputError::NoRecordsProvided),
    });
    results
}

fn arguments(directory: &Path, format: benchmark_renderer::Format) -> Arguments {
    let input_path = directory.join("input.txt");
    std::fs::write(input_path.as_path(), INPUT).expect("Always valid");
    Arguments {
        quiet: true,
        input_path: Some(input_path),
        output_path: directory.join("output.something"),
        format,
        dimension: benchmark_renderer::Dimension::BytesPerOp,
        title: None,
        keep_going: false,
    }
}

#[test]
fn renders_one_file_per_group() {
    let directory = tempfile::tempdir().expect("Always valid");

    super::main_inner(arguments(directory.path(), benchmark_renderer::Format::Json))
        .expect("Always valid");

    let first = std::fs::read_to_string(directory.path().join("output-BenchmarkParseCSVLineFields.json"))
        .expect("Always valid");
    let second =
        std::fs::read_to_string(directory.path().join("output-BenchmarkParseCSVLineFieldLength.json"))
            .expect("Always valid");

    let first: serde_json::Value = serde_json::from_str(first.as_str()).expect("Always valid");
    let second: serde_json::Value = serde_json::from_str(second.as_str()).expect("Always valid");
    assert_eq!(first["ParentBenchmark"], "BenchmarkParseCSVLineFields");
    assert_eq!(second["Benchmarks"][1]["AllocedBytesPerOp"], 387);
    assert_eq!(second["Benchmarks"][1]["Ord"], 3);
}

#[test]
fn missing_input_file() {
    let directory = tempfile::tempdir().expect("Always valid");
    let mut arguments = arguments(directory.path(), benchmark_renderer::Format::Csv);
    arguments.input_path = Some(directory.path().join("missing.txt"));

    let error = super::main_inner(arguments).expect_err("Always fails");

    assert!(error.to_string().contains("missing.txt"), "{error}");
}

#[test]
fn keep_going_skips_failed_groups() {
    let (output, failures) =
        super::collect(failing_and_succeeding_groups(), true, true).expect("Always valid");

    assert_eq!(output.files.len(), 1);
    assert_eq!(failures, 1);
}

#[test]
fn every_group_is_logged_at_debug_only() {
    let buffer = LogBuffer::default();

    for keep_going in [true, false] {
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();
        let _ = tracing::subscriber::with_default(subscriber, || {
            super::collect(failing_and_succeeding_groups(), keep_going, true)
        });
    }

    let logs = buffer.contents();
    assert_eq!(logs.matches("Benchmark group rendered").count(), 2, "{logs}");
    assert_eq!(logs.matches("Benchmark group failed").count(), 2, "{logs}");
    assert!(!logs.contains("WARN"), "{logs}");
}

#[test]
fn without_keep_going_first_failure_aborts() {
    let results = vec![benchmark_renderer::GroupResult {
        group: "BenchmarkB".to_owned(),
        result: Err(benchmark_renderer::OutputError::NoRecordsProvided),
    }];

    let error = super::collect(results, false, true).expect_err("Always fails");

    assert!(error.to_string().contains("BenchmarkB"), "{error}");
}

#[test]
fn parses_canonical_argument_strings() {
    use clap::Parser;

    let arguments = Arguments::try_parse_from([
        "benchmark-renderer",
        "input.txt",
        "--output-path",
        "out.svg",
        "--format",
        "SVG",
        "--dimension",
        "ALLOCS_PER_OP",
        "--title",
        "Parsing",
    ])
    .expect("Always valid");

    assert_eq!(arguments.format, benchmark_renderer::Format::Svg);
    assert_eq!(arguments.dimension, benchmark_renderer::Dimension::AllocsPerOp);
    assert_eq!(arguments.title.as_deref(), Some("Parsing"));
}

#[test]
fn rejects_unknown_format() {
    use clap::Parser;

    let result = Arguments::try_parse_from([
        "benchmark-renderer",
        "--output-path",
        "out.png",
        "--format",
        "GIF",
    ]);

    assert!(result.is_err());
}
