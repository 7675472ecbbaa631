//! Directory-level behavior of the metrics pipeline
//!
//! These tests run the full library path (discovery, parallel metrics,
//! table writing) over temporary directories and check the ordering and
//! failure-isolation guarantees of the output.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use genome_stats::reporting::RecordingReporter;
use genome_stats::{
    process_directory, write_table, MetricsEngine, MetricsRecord, OutputFormat, ProcessorConfig,
};
use tempfile::tempdir;

/// Build a FASTA record of `length` bases with `gc` leading G/C bases
fn record(name: &str, length: usize, gc: usize) -> String {
    let mut seq = String::with_capacity(length);
    for i in 0..length {
        seq.push(match (i < gc, i % 2) {
            (true, 0) => 'G',
            (true, _) => 'C',
            (false, _) => 'A',
        });
    }
    // Wrap at 60 columns like typical assembler output
    let wrapped: Vec<&str> = seq
        .as_bytes()
        .chunks(60)
        .map(|c| std::str::from_utf8(c).unwrap())
        .collect();
    format!(">{name}\n{}\n", wrapped.join("\n"))
}

fn engine() -> (MetricsEngine, Arc<RecordingReporter>) {
    let reporter = Arc::new(RecordingReporter::new());
    (MetricsEngine::fasta(reporter.clone()), reporter)
}

fn write_isolates(dir: &Path, count: usize) {
    for i in 0..count {
        let content: String = (0..=i)
            .map(|c| record(&format!("contig{c}"), 100 * (c + 1) + i, 10 * c))
            .collect();
        fs::write(dir.join(format!("isolate_{i:02}.fasta")), content).unwrap();
    }
}

#[test]
fn test_two_contig_scenario() {
    let dir = tempdir().unwrap();
    let content = format!("{}{}", record("c1", 100, 20), record("c2", 300, 40));
    fs::write(dir.path().join("sample.fasta"), content).unwrap();
    let (engine, _) = engine();

    let rows = process_directory(dir.path(), &ProcessorConfig::default(), &engine).unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].isolate_name, "sample");
    assert_eq!(
        rows[0].metrics,
        MetricsRecord {
            total_length: 400,
            gc_content: 15.0,
            contig_count: 2,
            n50: 300,
            longest_contig: 300,
            shortest_contig: 100,
            average_contig_length: 200.0,
        }
    );
}

#[test]
fn test_rows_follow_discovery_order_for_any_thread_count() {
    let dir = tempdir().unwrap();
    write_isolates(dir.path(), 16);
    let (engine, _) = engine();

    let baseline =
        process_directory(dir.path(), &ProcessorConfig::with_threads(1), &engine).unwrap();
    let names: Vec<&str> = baseline.iter().map(|r| r.isolate_name.as_str()).collect();
    let expected: Vec<String> = (0..16).map(|i| format!("isolate_{i:02}")).collect();
    assert_eq!(names, expected);

    for threads in [2, 3, 8, 32] {
        let rows =
            process_directory(dir.path(), &ProcessorConfig::with_threads(threads), &engine)
                .unwrap();
        assert_eq!(rows, baseline, "threads = {threads}");
    }
}

#[test]
fn test_corrupt_file_does_not_affect_siblings() {
    let dir = tempdir().unwrap();
    write_isolates(dir.path(), 5);
    let (engine, _) = engine();
    let before = process_directory(dir.path(), &ProcessorConfig::default(), &engine).unwrap();

    fs::write(
        dir.path().join("isolate_02.fasta"),
        "corrupted: no definition line\nACGT\n",
    )
    .unwrap();
    let (engine, reporter) = self::engine();
    let after = process_directory(dir.path(), &ProcessorConfig::default(), &engine).unwrap();

    assert_eq!(after.len(), 5);
    for (i, (b, a)) in before.iter().zip(&after).enumerate() {
        assert_eq!(a.isolate_name, b.isolate_name);
        if i == 2 {
            assert_eq!(a.metrics, MetricsRecord::zero());
            assert!(a.is_failed());
        } else {
            assert_eq!(a.metrics, b.metrics);
        }
    }

    let failures = reporter.failures();
    assert_eq!(failures.len(), 1);
    assert!(failures[0].0.ends_with("isolate_02.fasta"));
}

#[cfg(unix)]
#[test]
fn test_missing_file_becomes_zero_row() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a_valid.fa"), record("c", 50, 10)).unwrap();
    // Listed by the directory scan, but opening it fails
    std::os::unix::fs::symlink(
        dir.path().join("nowhere.fa"),
        dir.path().join("b_missing.fa"),
    )
    .unwrap();
    let (engine, reporter) = engine();

    let rows = process_directory(dir.path(), &ProcessorConfig::default(), &engine).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].isolate_name, "a_valid");
    assert_eq!(rows[0].metrics.total_length, 50);
    assert_eq!(rows[1].isolate_name, "b_missing");
    assert!(rows[1].metrics.is_zero());
    assert_eq!(reporter.failures().len(), 1);
}

#[test]
fn test_empty_file_is_zero_row_without_failure() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("empty.fasta"), "").unwrap();
    let (engine, reporter) = engine();

    let rows = process_directory(dir.path(), &ProcessorConfig::default(), &engine).unwrap();

    assert_eq!(rows.len(), 1);
    assert!(rows[0].metrics.is_zero());
    assert!(!rows[0].is_failed());
    assert!(reporter.failures().is_empty());
}

#[test]
fn test_end_to_end_csv() {
    let input = tempdir().unwrap();
    fs::write(input.path().join("b.fa"), record("x", 10, 5)).unwrap();
    fs::write(input.path().join("a.fasta"), "not fasta\n").unwrap();
    fs::write(input.path().join("README.md"), "# not an assembly").unwrap();
    let output = tempdir().unwrap();
    let out = output.path().join("metrics.csv");
    let (engine, _) = engine();

    let rows = process_directory(input.path(), &ProcessorConfig::default(), &engine).unwrap();
    write_table(&rows, &out, OutputFormat::Csv).unwrap();

    let text = fs::read_to_string(&out).unwrap();
    assert_eq!(
        text,
        "Isolate Name,Genome Size,GC Content,Number of Contigs,N50,Longest Contig,Shortest Contig,Average Contig Length\r\n\
         a,0,0,0,0,0,0,0\r\n\
         b,10,50.0,1,10,10,10,10.0\r\n"
    );
}
