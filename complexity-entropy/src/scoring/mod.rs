// complexity-entropy/src/scoring/mod.rs

use crate::metrics::{diversity, productivity, LengthMismatch};

/// The three per-sentence values that feed a document score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentenceMetrics {
    pub diversity: f64,
    pub productivity: f64,
    pub complexity: f64,
}

/// A sentence's complexity contribution: diversity weighted by productivity.
pub fn sentence_complexity(diversity: f64, productivity: f64) -> f64 {
    diversity * productivity
}

/// Computes diversity, productivity and their product for one sentence.
pub fn score_sequences<W: Ord, T: Ord>(words: &[W], tags: &[T]) -> Result<SentenceMetrics, LengthMismatch> {
    let productivity = productivity(words, tags)?;
    let diversity = diversity(tags);

    Ok(SentenceMetrics {
        diversity,
        productivity,
        complexity: sentence_complexity(diversity, productivity),
    })
}
