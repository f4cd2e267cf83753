//! Bitset of transaction ids, the vertical index behind support counting

/// Set of transaction indices, one bit per transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TidSet {
    words: Vec<u64>,
}

impl TidSet {
    /// Empty set sized for `capacity` transactions
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity.div_ceil(64)],
        }
    }

    pub(crate) fn insert(&mut self, tid: usize) {
        self.words[tid / 64] |= 1 << (tid % 64);
    }

    /// Transactions present in both sets
    pub(crate) fn intersect(&self, other: &TidSet) -> TidSet {
        TidSet {
            words: self
                .words
                .iter()
                .zip(&other.words)
                .map(|(a, b)| a & b)
                .collect(),
        }
    }

    pub(crate) fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Transaction ids in ascending order
    pub(crate) fn iter(&self) -> Ones<'_> {
        Ones {
            words: &self.words,
            index: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }
}

/// Iterator over the set bits of a [`TidSet`]
pub(crate) struct Ones<'a> {
    words: &'a [u64],
    index: usize,
    current: u64,
}

impl Iterator for Ones<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.current == 0 {
            self.index += 1;
            if self.index >= self.words.len() {
                return None;
            }
            self.current = self.words[self.index];
        }
        let bit = self.current.trailing_zeros() as usize;
        self.current &= self.current - 1;
        Some(self.index * 64 + bit)
    }
}
