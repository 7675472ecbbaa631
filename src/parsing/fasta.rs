//! Reader for FASTA files using noodles.
//!
//! Supports both uncompressed and gzip/bgzip compressed files.
//!
//! Supported extensions (matched case-insensitively):
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;

use crate::core::sequence::SequenceRecord;
use crate::parsing::{ParseError, SequenceReader};

/// Recognized file name suffixes, compressed forms first so they win over
/// their uncompressed prefixes when stripping.
const FASTA_SUFFIXES: &[&str] = &[
    ".fasta.bgz",
    ".fasta.gz",
    ".fna.bgz",
    ".fna.gz",
    ".fa.bgz",
    ".fa.gz",
    ".fasta",
    ".fna",
    ".fa",
];

/// Return the recognized FASTA suffix of a file name, if any
fn fasta_suffix(file_name: &str) -> Option<&'static str> {
    let lower = file_name.to_ascii_lowercase();
    FASTA_SUFFIXES
        .iter()
        .copied()
        .find(|suffix| lower.ends_with(suffix))
}

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    path.file_name()
        .map(|name| fasta_suffix(&name.to_string_lossy()).is_some())
        .unwrap_or(false)
}

/// Derive the isolate name from a FASTA path by stripping the directory and
/// the sequence-file suffix.
///
/// ```
/// use genome_stats::parsing::fasta::isolate_name;
/// use std::path::Path;
///
/// assert_eq!(isolate_name(Path::new("/data/EC-0042.fasta")), "EC-0042");
/// assert_eq!(isolate_name(Path::new("strain_7.fa.gz")), "strain_7");
/// ```
pub fn isolate_name(path: &Path) -> String {
    let Some(file_name) = path.file_name().map(|n| n.to_string_lossy()) else {
        return String::new();
    };

    match fasta_suffix(&file_name) {
        // A name that is only a suffix, like `.fa`, is kept whole
        Some(suffix) if file_name.len() == suffix.len() => file_name.into_owned(),
        // Suffixes are ASCII, so the byte offset is a char boundary
        Some(suffix) => file_name[..file_name.len() - suffix.len()].to_string(),
        None => Path::new(&*file_name)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default(),
    }
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// [`SequenceReader`] for FASTA files.
#[derive(Debug, Clone, Copy, Default)]
pub struct FastaReader;

impl SequenceReader for FastaReader {
    fn read_records(
        &self,
        path: &Path,
        sink: &mut dyn FnMut(SequenceRecord<'_>),
    ) -> Result<(), ParseError> {
        let file = File::open(path)?;

        if is_gzipped(path) {
            // MultiGzDecoder also handles the concatenated members of bgzip files
            let reader = BufReader::new(MultiGzDecoder::new(file));
            read_fasta(&mut fasta::io::Reader::new(reader), sink)
        } else {
            let reader = BufReader::new(file);
            read_fasta(&mut fasta::io::Reader::new(reader), sink)
        }
    }
}

/// Drain a noodles FASTA reader into `sink`.
///
/// Definition lines are split by hand rather than through `records()`, which
/// rejects blank lines before the first record and empty names. Spaces and
/// carriage returns inside sequence lines are not residues.
fn read_fasta<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
    sink: &mut dyn FnMut(SequenceRecord<'_>),
) -> Result<(), ParseError> {
    let mut definition = String::new();
    let mut sequence = Vec::new();

    loop {
        definition.clear();
        if reader.read_definition(&mut definition)? == 0 {
            break;
        }

        if definition.trim().is_empty() {
            continue;
        }

        let name = record_name(&definition)?;

        sequence.clear();
        reader.read_sequence(&mut sequence)?;
        sequence.retain(|&b| b != b' ' && b != b'\r');

        sink(SequenceRecord::new(name, &sequence));
    }

    Ok(())
}

/// First word of a definition line; empty for a bare `>`
fn record_name(definition: &str) -> Result<&str, ParseError> {
    let title = definition.strip_prefix('>').ok_or_else(|| {
        ParseError::InvalidFormat(format!(
            "Failed to parse FASTA record: expected '>' at start of definition line, found {definition:?}"
        ))
    })?;

    Ok(title.split_whitespace().next().unwrap_or_default())
}
