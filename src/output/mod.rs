//! Writers for the per-isolate results table.
//!
//! Every format carries the same eight columns in the same order:
//!
//! | Column | Source field |
//! |--------|--------------|
//! | Isolate Name | [`ResultRow::isolate_name`] |
//! | Genome Size | `total_length` |
//! | GC Content | `gc_content` (percentage) |
//! | Number of Contigs | `contig_count` |
//! | N50 | `n50` |
//! | Longest Contig | `longest_contig` |
//! | Shortest Contig | `shortest_contig` |
//! | Average Contig Length | `average_contig_length` |
//!
//! [`write_table`] writes to a temporary file next to the destination and
//! renames it into place once complete, so a failed run never leaves a
//! truncated table behind.

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::row::ResultRow;

pub mod delimited;

use delimited::{write_delimited, Dialect};

/// Header row, in output order
pub const COLUMNS: [&str; 8] = [
    "Isolate Name",
    "Genome Size",
    "GC Content",
    "Number of Contigs",
    "N50",
    "Longest Contig",
    "Shortest Contig",
    "Average Contig Length",
];

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Failed to create output file {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to move output into place at {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Table encoding
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Comma-separated values
    #[default]
    Csv,
    /// Tab-separated values
    Tsv,
    /// JSON array of row objects
    Json,
}

/// Write `rows` to `writer` in `format`.
///
/// # Errors
///
/// Returns `WriteError::Io` or `WriteError::Json` if writing fails.
pub fn write_rows<W: Write>(
    rows: &[ResultRow],
    writer: &mut W,
    format: OutputFormat,
) -> Result<(), WriteError> {
    match format {
        OutputFormat::Csv => write_delimited(rows, writer, Dialect::CSV)?,
        OutputFormat::Tsv => write_delimited(rows, writer, Dialect::TSV)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, rows)?;
            writer.write_all(b"\n")?;
        }
    }
    Ok(())
}

/// Write the results table to `destination`, replacing any existing file.
///
/// # Errors
///
/// Returns `WriteError::Create` if a file cannot be created next to
/// `destination`, `WriteError::Io`/`WriteError::Json` if writing fails, or
/// `WriteError::Persist` if the finished file cannot be moved into place.
pub fn write_table(
    rows: &[ResultRow],
    destination: &Path,
    format: OutputFormat,
) -> Result<(), WriteError> {
    let parent = match destination.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let temp = tempfile::Builder::new()
        .prefix(".genome-stats-")
        .suffix(".tmp")
        .tempfile_in(parent)
        .map_err(|source| WriteError::Create {
            path: destination.to_path_buf(),
            source,
        })?;

    let mut writer = BufWriter::new(temp);
    write_rows(rows, &mut writer, format)?;
    let temp = writer.into_inner().map_err(|e| e.into_error())?;

    // Temp files are created owner-only; match the permissions of a regular file
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        temp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))?;
    }

    temp.as_file().sync_all()?;
    temp.persist(destination)
        .map_err(|e| WriteError::Persist {
            path: destination.to_path_buf(),
            source: e.error,
        })?;

    Ok(())
}
