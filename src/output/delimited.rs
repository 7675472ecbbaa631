use std::borrow::Cow;
use std::io::Write;

use crate::core::row::ResultRow;
use crate::output::COLUMNS;

/// Field delimiter and record terminator for a delimited table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    pub delimiter: char,
    pub terminator: &'static str,
}

impl Dialect {
    /// Comma-separated, CRLF-terminated
    pub const CSV: Self = Self {
        delimiter: ',',
        terminator: "\r\n",
    };

    pub const TSV: Self = Self {
        delimiter: '\t',
        terminator: "\n",
    };
}

/// Quote `field` if it contains the delimiter, a quote, or a line break.
///
/// Embedded quotes are doubled.
pub fn escape_field(field: &str, delimiter: char) -> Cow<'_, str> {
    if field.contains(|c: char| c == delimiter || matches!(c, '"' | '\n' | '\r')) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Render a float in a locale-independent form that always keeps a decimal
/// point (`15.0`, `33.333333333333336`).
pub fn format_float(value: f64) -> String {
    format!("{value:?}")
}

/// Render a ratio, or a bare `0` when its denominator was zero.
///
/// GC content without any residues and the average of no contigs are
/// integer zeros in the table, so the zero record reads `0,0,0,0,0,0,0`.
fn format_ratio(value: f64, denominator: u64) -> String {
    if denominator == 0 {
        "0".to_string()
    } else {
        format_float(value)
    }
}

fn write_record<W: Write>(
    writer: &mut W,
    fields: &[Cow<'_, str>],
    dialect: Dialect,
) -> std::io::Result<()> {
    let mut delimiter_buf = [0u8; 4];
    let delimiter = dialect.delimiter.encode_utf8(&mut delimiter_buf);

    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            writer.write_all(delimiter.as_bytes())?;
        }
        writer.write_all(field.as_bytes())?;
    }
    writer.write_all(dialect.terminator.as_bytes())
}

/// Write the header and one record per row.
///
/// # Errors
///
/// Returns any I/O error from `writer`.
pub fn write_delimited<W: Write>(
    rows: &[ResultRow],
    writer: &mut W,
    dialect: Dialect,
) -> std::io::Result<()> {
    let header: Vec<Cow<'_, str>> = COLUMNS
        .iter()
        .map(|name| escape_field(name, dialect.delimiter))
        .collect();
    write_record(writer, &header, dialect)?;

    for row in rows {
        let m = &row.metrics;
        let fields = [
            escape_field(&row.isolate_name, dialect.delimiter),
            Cow::Owned(m.total_length.to_string()),
            Cow::Owned(format_ratio(m.gc_content, m.total_length)),
            Cow::Owned(m.contig_count.to_string()),
            Cow::Owned(m.n50.to_string()),
            Cow::Owned(m.longest_contig.to_string()),
            Cow::Owned(m.shortest_contig.to_string()),
            Cow::Owned(format_ratio(m.average_contig_length, m.contig_count)),
        ];
        write_record(writer, &fields, dialect)?;
    }

    Ok(())
}
