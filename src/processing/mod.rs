//! Parallel processing of a directory of assembly files.
//!
//! [`process_directory`] lists the FASTA files directly inside a directory,
//! runs the [`MetricsEngine`] on each one in a [`WorkerPool`], and returns
//! one [`ResultRow`] per file in discovery order.
//!
//! ## Failure handling
//!
//! | Failure | Scope | Result |
//! |---------|-------|--------|
//! | File unreadable or malformed | That file | Zero record, reported |
//! | Worker panic while processing a file | That file | Zero record, reported |
//! | Directory missing or unlistable | Whole run | `ProcessError::ReadDir` |
//! | Cancellation requested before every file started | Whole run | `ProcessError::Cancelled` |

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::engine::{FileError, MetricsEngine};
use crate::core::row::ResultRow;
use crate::parsing::fasta::{is_fasta_file, isolate_name};

pub mod pool;

pub use pool::{CancellationToken, TaskOutcome, WorkerPool};

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Failed to read directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Thread count must be at least 1")]
    InvalidThreads,

    #[error("Processing cancelled ({completed} of {total} files finished)")]
    Cancelled { completed: usize, total: usize },
}

/// Runtime settings for [`process_directory`].
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    /// Number of worker threads
    pub threads: usize,

    /// Checked before each file is started
    pub cancellation: CancellationToken,
}

impl ProcessorConfig {
    #[must_use]
    pub fn with_threads(threads: usize) -> Self {
        Self {
            threads,
            ..Self::default()
        }
    }
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            threads: num_cpus::get(),
            cancellation: CancellationToken::new(),
        }
    }
}

/// List the FASTA files directly inside `dir`, sorted by file name.
///
/// Subdirectories (including symlinks to directories) and files without a
/// recognized suffix are skipped. There is no recursion.
///
/// # Errors
///
/// Returns `ProcessError::NotADirectory` if `dir` is not a directory, or
/// `ProcessError::ReadDir` if it cannot be listed.
pub fn discover_sequence_files(dir: &Path) -> Result<Vec<PathBuf>, ProcessError> {
    let read_dir_error = |source: std::io::Error| ProcessError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let entries = std::fs::read_dir(dir).map_err(|e| {
        if dir.exists() && !dir.is_dir() {
            ProcessError::NotADirectory(dir.to_path_buf())
        } else {
            read_dir_error(e)
        }
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(read_dir_error)?.path();
        if path.is_dir() || !is_fasta_file(&path) {
            continue;
        }
        files.push(path);
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Compute metrics for every FASTA file in `dir`.
///
/// Rows are returned in discovery order. Files that fail to parse, or whose
/// worker panics, get the zero record and are reported through the engine's
/// reporter; they never abort the run.
///
/// # Errors
///
/// Returns `ProcessError::InvalidThreads` for a zero thread count, a listing
/// error from [`discover_sequence_files`], or `ProcessError::Cancelled` if
/// the configuration's cancellation token caused any file to be skipped.
pub fn process_directory(
    dir: &Path,
    config: &ProcessorConfig,
    engine: &MetricsEngine,
) -> Result<Vec<ResultRow>, ProcessError> {
    if config.threads == 0 {
        return Err(ProcessError::InvalidThreads);
    }

    let files = discover_sequence_files(dir)?;
    let reporter = engine.reporter();
    reporter.directory_scanned(dir, files.len());

    let pool = WorkerPool::new(config.threads, config.cancellation.clone());
    let tasks: Vec<&Path> = files.iter().map(PathBuf::as_path).collect();
    let outcomes = pool.run(tasks, |path| engine.compute_row(path));

    let total = files.len();
    let mut rows = Vec::with_capacity(total);
    let mut skipped = false;
    for (path, outcome) in files.iter().zip(outcomes) {
        match outcome {
            TaskOutcome::Completed(row) => rows.push(row),
            TaskOutcome::Panicked(message) => {
                let error = FileError::Panicked(message);
                reporter.file_failed(path, &error);
                rows.push(ResultRow::failed(isolate_name(path), &error));
            }
            TaskOutcome::Skipped => skipped = true,
        }
    }

    // Only a file skipped by cancellation fails the run
    if skipped {
        return Err(ProcessError::Cancelled {
            completed: rows.len(),
            total,
        });
    }

    reporter.directory_processed(dir, &rows);
    Ok(rows)
}
