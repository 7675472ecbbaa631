use serde::Serialize;

use crate::core::contig::ContigLengths;
use crate::core::sequence::SequenceRecord;

/// Helper function to convert u64 count to f64 with explicit precision loss allowance
#[inline]
fn count_to_f64(count: u64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Assembly-quality statistics for one input file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricsRecord {
    /// Sum of all contig lengths
    pub total_length: u64,

    /// Percentage (0-100) of residues that are exactly `G` or `C`
    pub gc_content: f64,

    pub contig_count: u64,

    pub n50: u64,

    pub longest_contig: u64,

    pub shortest_contig: u64,

    pub average_contig_length: f64,
}

impl MetricsRecord {
    /// The record reported for empty files and for files that failed to parse.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            total_length: 0,
            gc_content: 0.0,
            contig_count: 0,
            n50: 0,
            longest_contig: 0,
            shortest_contig: 0,
            average_contig_length: 0.0,
        }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl Default for MetricsRecord {
    fn default() -> Self {
        Self::zero()
    }
}

/// Accumulates per-record lengths and G/C counts for one file.
#[derive(Debug, Default)]
pub struct MetricsAccumulator {
    contigs: ContigLengths,
    gc_count: u64,
}

impl MetricsAccumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, record: &SequenceRecord<'_>) {
        self.contigs.push(record.len());
        self.gc_count += record.gc_count();
    }

    #[must_use]
    pub fn finish(self) -> MetricsRecord {
        let total_length = self.contigs.total();
        let contig_count = self.contigs.count() as u64;

        let gc_content = if total_length > 0 {
            100.0 * count_to_f64(self.gc_count) / count_to_f64(total_length)
        } else {
            0.0
        };

        let average_contig_length = if contig_count > 0 {
            count_to_f64(total_length) / count_to_f64(contig_count)
        } else {
            0.0
        };

        let sorted = self.contigs.sorted();

        MetricsRecord {
            total_length,
            gc_content,
            contig_count,
            n50: sorted.n50(),
            longest_contig: sorted.longest(),
            shortest_contig: sorted.shortest(),
            average_contig_length,
        }
    }
}

/// Compute metrics over an in-memory sequence of records.
pub fn compute_metrics<'a, I>(records: I) -> MetricsRecord
where
    I: IntoIterator<Item = SequenceRecord<'a>>,
{
    let mut accumulator = MetricsAccumulator::new();
    for record in records {
        accumulator.add(&record);
    }
    accumulator.finish()
}
