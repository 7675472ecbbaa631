//! # genome-stats
//!
//! A library for summarizing genome assemblies stored as FASTA files.
//!
//! Given a directory of assemblies, one file per isolate, `genome-stats`
//! computes a row of assembly-quality statistics for each file and writes
//! them as a single table. Files are processed in parallel; a file that
//! cannot be read or parsed is logged and reported with all-zero metrics
//! instead of aborting the run.
//!
//! ## Features
//!
//! - **Assembly metrics**: genome size, GC content, contig count, N50,
//!   longest/shortest/average contig length
//! - **Parallel processing**: one file per task on a fixed-size worker pool,
//!   results returned in file order
//! - **Failure isolation**: parse errors and worker panics only affect their own row
//! - **Compressed input**: `.gz` and `.bgz` FASTA files are read transparently
//! - **Output formats**: CSV, TSV, or JSON, written atomically
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! use genome_stats::{process_directory, write_table, MetricsEngine, OutputFormat, ProcessorConfig};
//! use genome_stats::reporting::TracingReporter;
//!
//! let engine = MetricsEngine::fasta(Arc::new(TracingReporter));
//! let rows = process_directory(Path::new("assemblies"), &ProcessorConfig::default(), &engine).unwrap();
//!
//! for row in &rows {
//!     println!("{}: N50 = {}", row.isolate_name, row.metrics.n50);
//! }
//!
//! write_table(&rows, Path::new("metrics.csv"), OutputFormat::Csv).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Sequence records, contig lengths, metrics and the per-file engine
//! - [`parsing`]: The `SequenceReader` abstraction and its FASTA implementation
//! - [`processing`]: Directory discovery and the worker pool
//! - [`reporting`]: Injected progress/failure reporting
//! - [`output`]: CSV/TSV/JSON table writers
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod output;
pub mod parsing;
pub mod processing;
pub mod reporting;

// Re-export commonly used types for convenience
pub use core::engine::{FileError, MetricsEngine};
pub use core::metrics::{compute_metrics, MetricsRecord};
pub use core::row::ResultRow;
pub use core::sequence::SequenceRecord;
pub use output::{write_table, OutputFormat, WriteError};
pub use parsing::{ParseError, SequenceReader};
pub use processing::{process_directory, ProcessError, ProcessorConfig};
