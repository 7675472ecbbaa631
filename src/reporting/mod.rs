//! Progress and failure reporting for directory runs.
//!
//! The engine and processor never log directly; they call a [`Reporter`]
//! handed to them at construction. [`TracingReporter`] forwards events to
//! `tracing`, and [`RecordingReporter`] keeps them in memory so per-file
//! failure handling can be asserted without a global subscriber.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use tracing::{debug, error, info};

use crate::core::engine::FileError;
use crate::core::metrics::MetricsRecord;
use crate::core::row::ResultRow;

/// Receives events from the metrics engine and directory processor.
///
/// Methods are called from worker threads, so implementations must be
/// thread-safe.
pub trait Reporter: Send + Sync {
    /// A directory listing finished and `files` sequence files will be processed.
    fn directory_scanned(&self, _dir: &Path, _files: usize) {}

    fn file_started(&self, _path: &Path) {}

    fn file_completed(&self, path: &Path, metrics: &MetricsRecord);

    /// A file could not be processed and was degraded to the zero record.
    fn file_failed(&self, path: &Path, error: &FileError);

    /// All files have been collected, in output order.
    fn directory_processed(&self, _dir: &Path, _rows: &[ResultRow]) {}
}

/// [`Reporter`] that emits `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn directory_scanned(&self, dir: &Path, files: usize) {
        info!(dir = %dir.display(), files, "Found sequence files");
    }

    fn file_started(&self, path: &Path) {
        debug!(file = %path.display(), "Processing file");
    }

    fn file_completed(&self, path: &Path, metrics: &MetricsRecord) {
        debug!(
            file = %path.display(),
            total_length = metrics.total_length,
            contigs = metrics.contig_count,
            n50 = metrics.n50,
            "Computed metrics"
        );
    }

    fn file_failed(&self, path: &Path, error: &FileError) {
        error!("Error processing file {}: {}", path.display(), error);
    }

    fn directory_processed(&self, dir: &Path, rows: &[ResultRow]) {
        let failed = rows.iter().filter(|row| row.is_failed()).count();
        info!(
            dir = %dir.display(),
            files = rows.len(),
            failed,
            "Finished processing directory"
        );
    }
}

/// An event captured by [`RecordingReporter`].
#[derive(Debug, Clone, PartialEq)]
pub enum ReportEvent {
    Scanned { dir: PathBuf, files: usize },
    Started(PathBuf),
    Completed(PathBuf, MetricsRecord),
    Failed { path: PathBuf, message: String },
    Processed { dir: PathBuf, rows: usize },
}

/// [`Reporter`] that stores every event in memory.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<ReportEvent>>,
}

impl RecordingReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, event: ReportEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }

    /// Snapshot of all events recorded so far, in arrival order
    #[must_use]
    pub fn events(&self) -> Vec<ReportEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// `(path, message)` for every failed file
    #[must_use]
    pub fn failures(&self) -> Vec<(PathBuf, String)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ReportEvent::Failed { path, message } => Some((path, message)),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn directory_scanned(&self, dir: &Path, files: usize) {
        self.push(ReportEvent::Scanned {
            dir: dir.to_path_buf(),
            files,
        });
    }

    fn file_started(&self, path: &Path) {
        self.push(ReportEvent::Started(path.to_path_buf()));
    }

    fn file_completed(&self, path: &Path, metrics: &MetricsRecord) {
        self.push(ReportEvent::Completed(path.to_path_buf(), *metrics));
    }

    fn file_failed(&self, path: &Path, error: &FileError) {
        self.push(ReportEvent::Failed {
            path: path.to_path_buf(),
            message: error.to_string(),
        });
    }

    fn directory_processed(&self, dir: &Path, rows: &[ResultRow]) {
        self.push(ReportEvent::Processed {
            dir: dir.to_path_buf(),
            rows: rows.len(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_reporter_keeps_order() {
        let reporter = RecordingReporter::new();
        let path = Path::new("a.fa");
        reporter.file_started(path);
        reporter.file_failed(path, &FileError::Panicked("boom".to_string()));
        reporter.file_completed(Path::new("b.fa"), &MetricsRecord::zero());

        let events = reporter.events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0], ReportEvent::Started(PathBuf::from("a.fa")));
        assert_eq!(
            reporter.failures(),
            vec![(PathBuf::from("a.fa"), "worker panicked: boom".to_string())]
        );
    }

    #[test]
    fn test_tracing_reporter_does_not_require_subscriber() {
        let reporter = TracingReporter;
        reporter.directory_scanned(Path::new("."), 0);
        reporter.file_failed(
            Path::new("x.fa"),
            &FileError::Panicked("no subscriber".to_string()),
        );
        reporter.directory_processed(Path::new("."), &[]);
    }
}
