use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::core::metrics::{MetricsAccumulator, MetricsRecord};
use crate::core::row::ResultRow;
use crate::parsing::fasta::{isolate_name, FastaReader};
use crate::parsing::{ParseError, SequenceReader};
use crate::reporting::Reporter;

/// Why a single file was degraded to the zero record.
#[derive(Error, Debug)]
pub enum FileError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("worker panicked: {0}")]
    Panicked(String),
}

/// Computes [`MetricsRecord`]s for individual files.
///
/// The engine owns the file parser so that it can attribute failures to the
/// file that caused them. [`MetricsEngine::compute`] and
/// [`MetricsEngine::compute_row`] never fail: parse and I/O errors are
/// reported through the injected [`Reporter`] and the file gets the zero record.
#[derive(Clone)]
pub struct MetricsEngine {
    reader: Arc<dyn SequenceReader>,
    reporter: Arc<dyn Reporter>,
}

impl MetricsEngine {
    pub fn new(reader: Arc<dyn SequenceReader>, reporter: Arc<dyn Reporter>) -> Self {
        Self { reader, reporter }
    }

    /// Engine reading FASTA files
    pub fn fasta(reporter: Arc<dyn Reporter>) -> Self {
        Self::new(Arc::new(FastaReader), reporter)
    }

    #[must_use]
    pub fn reporter(&self) -> &dyn Reporter {
        self.reporter.as_ref()
    }

    /// Compute metrics for `path`, propagating parse failures.
    ///
    /// Nothing is reported; callers decide how to surface the error.
    ///
    /// # Errors
    ///
    /// Returns the reader's `ParseError` if the file cannot be opened or parsed.
    pub fn try_compute(&self, path: &Path) -> Result<MetricsRecord, ParseError> {
        let mut accumulator = MetricsAccumulator::new();
        self.reader
            .read_records(path, &mut |record| accumulator.add(&record))?;
        Ok(accumulator.finish())
    }

    /// Compute metrics for `path`, falling back to the zero record on failure.
    #[must_use]
    pub fn compute(&self, path: &Path) -> MetricsRecord {
        self.compute_row(path).metrics
    }

    /// Compute the output row for `path`.
    ///
    /// On failure the row carries the zero record and the error message, and
    /// the error is reported with the file's path.
    #[must_use]
    pub fn compute_row(&self, path: &Path) -> ResultRow {
        self.reporter.file_started(path);

        match self.try_compute(path) {
            Ok(metrics) => {
                self.reporter.file_completed(path, &metrics);
                ResultRow::for_path(path, metrics)
            }
            Err(e) => {
                let error = FileError::from(e);
                self.reporter.file_failed(path, &error);
                ResultRow::failed(isolate_name(path), &error)
            }
        }
    }
}

impl std::fmt::Debug for MetricsEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricsEngine").finish_non_exhaustive()
    }
}
