// complexity-entropy/src/metrics/mod.rs
//! Sentence-level metrics built on top of [`entropy_of`].
//!
//! * Diversity: entropy of consecutive tag-pair transitions.
//! * Productivity: `H(word, tag) - H(tag) + 1`, i.e. the conditional entropy
//!   of a word given its tag plus a baseline of one.

use core::fmt;

use crate::entropy::entropy_of;

/// Baseline added to the conditional entropy so a sentence with no lexical
/// variation scores exactly `1.0`.
pub const PRODUCTIVITY_BASELINE: f64 = 1.0;

/// Words and tags were not positionally paired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthMismatch {
    pub words: usize,
    pub tags: usize,
}

impl fmt::Display for LengthMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} words cannot be paired with {} tags", self.words, self.tags)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LengthMismatch {}

/// Entropy of the first-order tag transition distribution of a sentence.
///
/// Sentences with fewer than two tags have no transitions and score `0.0`.
pub fn diversity<T: Ord>(tags: &[T]) -> f64 {
    if tags.len() < 2 {
        return 0.0;
    }
    entropy_of(tags.windows(2).map(|pair| (&pair[0], &pair[1])))
}

/// Conditional entropy of words given tags, plus [`PRODUCTIVITY_BASELINE`].
///
/// Computed as the joint entropy of `(word, tag)` pairs minus the entropy of
/// the tag marginal. `words[i]` is paired with `tags[i]`.
pub fn productivity<W: Ord, T: Ord>(words: &[W], tags: &[T]) -> Result<f64, LengthMismatch> {
    if words.len() != tags.len() {
        return Err(LengthMismatch { words: words.len(), tags: tags.len() });
    }

    let joint = entropy_of(words.iter().zip(tags.iter()));
    let marginal = entropy_of(tags.iter());

    Ok(joint - marginal + PRODUCTIVITY_BASELINE)
}
