/// Contig lengths collected from one assembly file, in file order.
///
/// Call [`ContigLengths::sorted`] once every record has been added to get the
/// descending view used for N50 and the length extremes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContigLengths {
    lengths: Vec<u64>,
    total: u64,
}

impl ContigLengths {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, length: u64) {
        self.lengths.push(length);
        self.total += length;
    }

    /// Sum of all contig lengths (the genome size)
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.lengths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// Sort lengths in descending order
    #[must_use]
    pub fn sorted(mut self) -> SortedContigLengths {
        self.lengths.sort_unstable_by(|a, b| b.cmp(a));
        SortedContigLengths {
            lengths: self.lengths,
            total: self.total,
        }
    }
}

impl FromIterator<u64> for ContigLengths {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        let mut lengths = Self::new();
        for length in iter {
            lengths.push(length);
        }
        lengths
    }
}

/// Contig lengths sorted longest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedContigLengths {
    lengths: Vec<u64>,
    total: u64,
}

impl SortedContigLengths {
    /// Lengths, longest first
    #[must_use]
    pub fn as_slice(&self) -> &[u64] {
        &self.lengths
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.lengths.len()
    }

    #[must_use]
    pub fn longest(&self) -> u64 {
        self.lengths.first().copied().unwrap_or(0)
    }

    #[must_use]
    pub fn shortest(&self) -> u64 {
        self.lengths.last().copied().unwrap_or(0)
    }

    /// Calculate the N50 statistic.
    ///
    /// N50 is the length of the first contig (longest first) at which the
    /// cumulative length reaches at least half of the total. The half is
    /// compared exactly, so a total of 5 needs a cumulative length of 3.
    ///
    /// Returns 0 when the total length is 0, including the empty set.
    #[must_use]
    pub fn n50(&self) -> u64 {
        if self.total == 0 {
            return 0;
        }

        let mut cumulative: u64 = 0;
        for &length in &self.lengths {
            cumulative += length;
            if cumulative.saturating_mul(2) >= self.total {
                return length;
            }
        }

        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(lengths: &[u64]) -> SortedContigLengths {
        lengths.iter().copied().collect::<ContigLengths>().sorted()
    }

    #[test]
    fn test_sorted_descending() {
        let set = sorted(&[100, 300, 200, 300]);
        assert_eq!(set.as_slice(), &[300, 300, 200, 100]);
        assert_eq!(set.total(), 900);
        assert_eq!(set.longest(), 300);
        assert_eq!(set.shortest(), 100);
    }

    #[test]
    fn test_n50_two_contigs() {
        assert_eq!(sorted(&[100, 300]).n50(), 300);
    }

    #[test]
    fn test_n50_five_contigs() {
        // Total = 1500, half = 750
        // 500 + 400 = 900 >= 750, so N50 = 400
        assert_eq!(sorted(&[100, 200, 300, 400, 500]).n50(), 400);
    }

    #[test]
    fn test_n50_exact_half() {
        // 5 + 5 = 10, the first contig already covers exactly half
        assert_eq!(sorted(&[5, 5]).n50(), 5);
        // 4 + 3 + 3: half = 5, 4 < 5, 7 >= 5
        assert_eq!(sorted(&[3, 4, 3]).n50(), 3);
    }

    #[test]
    fn test_n50_odd_total_is_not_rounded_down() {
        // Total = 5, half = 2.5. A cumulative length of 2 does not reach it.
        assert_eq!(sorted(&[2, 1, 1, 1]).n50(), 1);
    }

    #[test]
    fn test_n50_single_contig() {
        assert_eq!(sorted(&[1234]).n50(), 1234);
    }

    #[test]
    fn test_empty_set() {
        let set = sorted(&[]);
        assert_eq!(set.n50(), 0);
        assert_eq!(set.longest(), 0);
        assert_eq!(set.shortest(), 0);
        assert_eq!(set.count(), 0);
    }

    #[test]
    fn test_zero_length_contigs() {
        let set = sorted(&[0, 0, 0]);
        assert_eq!(set.count(), 3);
        assert_eq!(set.n50(), 0);
    }

    #[test]
    fn test_n50_bounds_and_cumulative_property() {
        // Deterministic pseudo-random length sets
        let mut state: u64 = 0x2545_F491_4F6C_DD1D;
        let mut next = move || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        };

        for _ in 0..200 {
            let count = (next() % 40 + 1) as usize;
            let lengths: Vec<u64> = (0..count).map(|_| next() % 5_000 + 1).collect();
            let set = sorted(&lengths);
            let n50 = set.n50();

            assert!(n50 >= set.shortest(), "n50 {n50} below shortest");
            assert!(n50 <= set.longest(), "n50 {n50} above longest");

            let mut before: u64 = 0;
            let mut defining = None;
            for (i, &length) in set.as_slice().iter().enumerate() {
                if (before + length) * 2 >= set.total() {
                    defining = Some(i);
                    break;
                }
                before += length;
            }
            let defining = defining.expect("half the total is always reached");
            assert_eq!(set.as_slice()[defining], n50);
            assert!(before * 2 < set.total());
            assert!((before + n50) * 2 >= set.total());
        }
    }
}
