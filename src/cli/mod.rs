//! Command-line interface for genome-stats.
//!
//! ## Usage
//!
//! ```text
//! # Summarize every FASTA file in a directory
//! genome-stats --input-dir assemblies/ --output-file metrics.csv
//!
//! # Keep diagnostics in a file and limit parallelism
//! genome-stats --input-dir assemblies/ --output-file metrics.csv \
//!     --log-file genome-stats.log --threads 4
//!
//! # JSON output for scripting
//! genome-stats --input-dir assemblies/ --output-file metrics.json --format json
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use crate::core::engine::MetricsEngine;
use crate::output::{write_table, OutputFormat};
use crate::processing::{process_directory, ProcessorConfig};
use crate::reporting::TracingReporter;

#[derive(Parser)]
#[command(name = "genome-stats")]
#[command(version)]
#[command(about = "Calculate genome assembly metrics from FASTA files")]
#[command(
    long_about = "genome-stats computes assembly-quality statistics for every FASTA file in a directory.\n\nFor each file it reports genome size, GC content, number of contigs, N50, and the longest, shortest and average contig lengths. Files are processed in parallel and written as one row per isolate, named after the file."
)]
pub struct Cli {
    /// Directory containing FASTA files (.fasta, .fa, .fna, optionally .gz/.bgz)
    #[arg(long)]
    pub input_dir: PathBuf,

    /// Output table path
    #[arg(long)]
    pub output_file: PathBuf,

    /// Log file path (logs go to stderr when omitted)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Number of worker threads
    #[arg(short, long, default_value_t = num_cpus::get())]
    pub threads: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Process the input directory and write the results table.
///
/// # Errors
///
/// Returns an error if the input directory cannot be read or the output
/// table cannot be written. Per-file failures are logged, not returned.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let engine = MetricsEngine::fasta(Arc::new(TracingReporter));
    let config = ProcessorConfig::with_threads(cli.threads);

    let rows = process_directory(&cli.input_dir, &config, &engine)
        .with_context(|| format!("failed to process {}", cli.input_dir.display()))?;

    write_table(&rows, &cli.output_file, cli.format)
        .with_context(|| format!("failed to write {}", cli.output_file.display()))?;

    info!("Results saved to {}", cli.output_file.display());
    Ok(())
}
