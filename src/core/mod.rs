//! Core data types and the per-file metrics engine.
//!
//! - [`SequenceRecord`](sequence::SequenceRecord): one named sequence handed over by a parser
//! - [`ContigLengths`](contig::ContigLengths): per-file contig lengths, with N50 on the sorted view
//! - [`MetricsRecord`](metrics::MetricsRecord): the seven assembly statistics for one file
//! - [`ResultRow`](row::ResultRow): a metrics record labelled with its isolate name
//! - [`MetricsEngine`](engine::MetricsEngine): parses a file and computes its metrics
//!
//! ## Metrics
//!
//! | Field | Definition |
//! |-------|------------|
//! | Genome Size | Sum of all contig lengths |
//! | GC Content | `100 * (#G + #C) / genome size`, uppercase `G`/`C` only |
//! | Number of Contigs | Number of records |
//! | N50 | Length of the contig at which the cumulative length, longest first, reaches half the genome size |
//! | Longest / Shortest Contig | Extremes of the contig lengths |
//! | Average Contig Length | Genome size divided by number of contigs |
//!
//! Every field is 0 for a file without records.

pub mod contig;
pub mod engine;
pub mod metrics;
pub mod row;
pub mod sequence;
