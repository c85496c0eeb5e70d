// complexity-core/src/scorer.rs
//! The document scorer.
//!
//! Each sentence is reduced to its content words and tags, scored for
//! diversity and productivity, and the per-sentence values are averaged over
//! the document. Scoring is a pure function of its input: no state survives
//! a call, and the same input always yields the same floats because the
//! sentences are summed in document order.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info};
use serde::Serialize;

use complexity_entropy::{compute_stats, score_sequences, DistributionStats, SentenceMetrics};

use crate::config::ScoringConfig;
use crate::errors::ComplexityError;
use crate::token::{AnnotatedSentence, TaggedSentence};

/// Document-level averages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreResult {
    /// Mean over sentences of `diversity * productivity`.
    pub complexity: f64,
    pub diversity: f64,
    pub productivity: f64,
}

/// Metrics for a single sentence of a scored document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentenceScore {
    /// Zero-based position in the document.
    pub index: usize,
    pub content_words: usize,
    pub diversity: f64,
    pub productivity: f64,
    pub complexity: f64,
}

/// How sentence complexities spread around the document average.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComplexitySpread {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl From<DistributionStats> for ComplexitySpread {
    fn from(stats: DistributionStats) -> Self {
        Self {
            mean: stats.mean,
            std_dev: stats.std_dev,
            min: stats.min,
            max: stats.max,
        }
    }
}

/// The full breakdown behind a [`ScoreResult`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentReport {
    #[serde(flatten)]
    pub result: ScoreResult,
    pub sentence_count: usize,
    pub spread: ComplexitySpread,
    pub sentences: Vec<SentenceScore>,
}

/// Scores annotated documents under a fixed configuration.
///
/// The scorer holds no per-document state and may be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct DocumentScorer {
    config: ScoringConfig,
}

impl DocumentScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Scores a single annotated sentence.
    pub fn score_sentence(&self, sentence: &AnnotatedSentence) -> Result<SentenceMetrics, ComplexityError> {
        let tagged = sentence.to_tagged(&self.config);
        score_sequences(&tagged.words, &tagged.tags).map_err(|e| ComplexityError::LengthMismatch {
            sentence: 0,
            words: e.words,
            tags: e.tags,
        })
    }

    /// Scores a document and returns the three averages.
    pub fn score_document(&self, sentences: &[AnnotatedSentence]) -> Result<ScoreResult, ComplexityError> {
        self.score_detailed(sentences).map(|report| report.result)
    }

    /// Scores a document and keeps the per-sentence breakdown.
    pub fn score_detailed(&self, sentences: &[AnnotatedSentence]) -> Result<DocumentReport, ComplexityError> {
        let tagged: Vec<TaggedSentence> = sentences.iter().map(|s| s.to_tagged(&self.config)).collect();
        self.score_tagged(&tagged)
    }

    /// Scores sentences that are already reduced to content words and tags.
    ///
    /// Every sentence is validated before anything is computed: a document
    /// with no sentences, or a sentence whose word and tag counts differ, is
    /// rejected as invalid input.
    pub fn score_tagged(&self, sentences: &[TaggedSentence]) -> Result<DocumentReport, ComplexityError> {
        for (index, sentence) in sentences.iter().enumerate() {
            if sentence.words.len() != sentence.tags.len() {
                return Err(ComplexityError::LengthMismatch {
                    sentence: index,
                    words: sentence.words.len(),
                    tags: sentence.tags.len(),
                });
            }
        }

        let scored: Vec<(usize, &TaggedSentence)> = sentences
            .iter()
            .enumerate()
            .filter(|(_, s)| !(self.config.skip_empty_sentences && s.is_empty()))
            .collect();

        if scored.is_empty() {
            return Err(ComplexityError::EmptyDocument);
        }

        let mut total_complexity = 0.0;
        let mut total_diversity = 0.0;
        let mut total_productivity = 0.0;
        let mut per_sentence = Vec::with_capacity(scored.len());

        for (index, sentence) in scored {
            let metrics = score_sequences(&sentence.words, &sentence.tags).map_err(|e| {
                ComplexityError::LengthMismatch { sentence: index, words: e.words, tags: e.tags }
            })?;

            debug!(
                "Sentence {}: {} content words, diversity {:.4}, productivity {:.4}",
                index,
                sentence.len(),
                metrics.diversity,
                metrics.productivity
            );

            total_complexity += metrics.complexity;
            total_diversity += metrics.diversity;
            total_productivity += metrics.productivity;

            per_sentence.push(SentenceScore {
                index,
                content_words: sentence.len(),
                diversity: metrics.diversity,
                productivity: metrics.productivity,
                complexity: metrics.complexity,
            });
        }

        let n = per_sentence.len() as f64;
        let result = ScoreResult {
            complexity: total_complexity / n,
            diversity: total_diversity / n,
            productivity: total_productivity / n,
        };

        let complexities: Vec<f64> = per_sentence.iter().map(|s| s.complexity).collect();
        let spread = ComplexitySpread::from(compute_stats(&complexities));

        info!(
            "Scored {} sentences: complexity {:.4}, diversity {:.4}, productivity {:.4}",
            per_sentence.len(),
            result.complexity,
            result.diversity,
            result.productivity
        );

        Ok(DocumentReport {
            result,
            sentence_count: per_sentence.len(),
            spread,
            sentences: per_sentence,
        })
    }
}

/// Scores a document with the default configuration.
pub fn score_document(sentences: &[AnnotatedSentence]) -> Result<ScoreResult, ComplexityError> {
    DocumentScorer::default().score_document(sentences)
}
