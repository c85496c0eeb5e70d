// complexity-entropy/src/entropy/mod.rs
use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use libm::log2;

/// Empirical frequency table over a sequence of discrete symbols.
///
/// Counting happens in a single pass; the order in which symbols were seen
/// has no effect on any derived value.
#[derive(Debug, Clone)]
pub struct FrequencyTable<S: Ord> {
    counts: BTreeMap<S, usize>,
    total: usize,
}

impl<S: Ord> FrequencyTable<S> {
    /// Builds a frequency table from any sequence of symbols.
    pub fn from_symbols<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let mut counts = BTreeMap::new();
        let mut total = 0usize;
        for symbol in symbols {
            *counts.entry(symbol).or_insert(0) += 1;
            total += 1;
        }
        Self { counts, total }
    }

    /// Number of observed symbols, repeats included.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct symbols.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Occurrences of a single symbol (0 if never seen).
    pub fn count(&self, symbol: &S) -> usize {
        self.counts.get(symbol).copied().unwrap_or(0)
    }

    /// Empirical probability of each distinct symbol.
    pub fn probabilities(&self) -> Vec<f64> {
        if self.total == 0 {
            return Vec::new();
        }
        let total = self.total as f64;
        self.counts.values().map(|&c| c as f64 / total).collect()
    }

    /// Shannon entropy (base 2) of the table, in bits.
    ///
    /// An empty table has nothing to be uncertain about and yields `0.0`.
    pub fn entropy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }

        let total = self.total as f64;
        let mut entropy = 0.0;

        for &count in self.counts.values() {
            if count > 0 {
                let p = count as f64 / total;
                entropy -= p * log2(p);
            }
        }

        entropy
    }
}

/// Calculates the Shannon entropy of a sequence of symbols.
///
/// Returns the entropy in bits per symbol. Works for tags, word/tag pairs
/// and tag transitions alike; only equality and ordering of symbols matter.
pub fn entropy_of<S, I>(symbols: I) -> f64
where
    S: Ord,
    I: IntoIterator<Item = S>,
{
    FrequencyTable::from_symbols(symbols).entropy()
}
