use std::fmt::Display;
use std::path::Path;

use serde::Serialize;

use crate::core::metrics::MetricsRecord;
use crate::parsing::fasta::isolate_name;

/// One output table row: an isolate name and its metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    /// File base name with the sequence suffix stripped
    pub isolate_name: String,

    #[serde(flatten)]
    pub metrics: MetricsRecord,

    /// Why the file degraded to the zero record, if it did.
    ///
    /// Empty files also produce the zero record but leave this unset. The
    /// table renders both identically; the distinction only reaches logs.
    #[serde(skip)]
    pub failure: Option<String>,
}

impl ResultRow {
    pub fn new(isolate_name: impl Into<String>, metrics: MetricsRecord) -> Self {
        Self {
            isolate_name: isolate_name.into(),
            metrics,
            failure: None,
        }
    }

    /// Row for a file whose processing failed
    pub fn failed(isolate_name: impl Into<String>, error: &impl Display) -> Self {
        Self {
            isolate_name: isolate_name.into(),
            metrics: MetricsRecord::zero(),
            failure: Some(error.to_string()),
        }
    }

    /// Build a row named after the file at `path`
    pub fn for_path(path: &Path, metrics: MetricsRecord) -> Self {
        Self::new(isolate_name(path), metrics)
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.failure.is_some()
    }
}
