//! Readers that turn sequence files into [`SequenceRecord`]s.
//!
//! The metrics engine only needs `(identifier, residues)` pairs, so parsing is
//! hidden behind the [`SequenceReader`] trait. The provided implementation,
//! [`fasta::FastaReader`], reads plain and gzip/bgzip-compressed FASTA via noodles.
//!
//! ## Example
//!
//! ```rust,no_run
//! use genome_stats::parsing::fasta::FastaReader;
//! use genome_stats::parsing::SequenceReader;
//! use std::path::Path;
//!
//! let mut total = 0;
//! FastaReader
//!     .read_records(Path::new("assembly.fasta"), &mut |record| total += record.len())
//!     .unwrap();
//! ```

use std::path::Path;

use thiserror::Error;

use crate::core::sequence::SequenceRecord;

pub mod fasta;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// A source of sequence records for a single file.
///
/// Implementations hand each record to `sink` as soon as it is decoded and
/// return an error on the first malformed or unreadable record. Records
/// already delivered before an error are not retracted; callers that need
/// all-or-nothing semantics discard their partial state on error.
pub trait SequenceReader: Send + Sync {
    /// Read every record in `path`, passing each to `sink`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Io` if the file cannot be opened or read, or
    /// `ParseError::InvalidFormat` if the content is not valid for the format.
    fn read_records(
        &self,
        path: &Path,
        sink: &mut dyn FnMut(SequenceRecord<'_>),
    ) -> Result<(), ParseError>;
}
