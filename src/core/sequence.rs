use std::borrow::Cow;

/// A single named sequence read from an assembly file.
///
/// Records borrow from the parser's buffers and are consumed immediately by
/// the metrics accumulator; nothing retains them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord<'a> {
    /// Record identifier (the first word of the FASTA definition line)
    pub name: Cow<'a, str>,

    /// Residue characters, alphabet unconstrained
    pub residues: &'a [u8],
}

impl<'a> SequenceRecord<'a> {
    pub fn new(name: impl Into<Cow<'a, str>>, residues: &'a [u8]) -> Self {
        Self {
            name: name.into(),
            residues,
        }
    }

    /// Number of residues, counting every character including ambiguity codes
    #[must_use]
    pub fn len(&self) -> u64 {
        self.residues.len() as u64
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Count of exact uppercase `G` and `C` characters.
    ///
    /// Lowercase soft-masked bases and IUPAC codes such as `S` are not folded in.
    #[must_use]
    pub fn gc_count(&self) -> u64 {
        self.residues
            .iter()
            .filter(|&&b| b == b'G' || b == b'C')
            .count() as u64
    }
}
