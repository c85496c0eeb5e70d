// File: complexity-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for scoring text in one call (non-interactive use).
//!
//! The annotator is always passed in by the caller; nothing here holds a
//! process-wide pipeline.

use log::info;

use crate::annotator::Annotator;
use crate::config::ScoringConfig;
use crate::errors::ComplexityError;
use crate::scorer::{DocumentReport, DocumentScorer, ScoreResult};

/// Annotates `text` and scores the resulting document.
///
/// # Arguments
///
/// * `annotator` - Turns the raw text into annotated sentences.
/// * `config` - Scoring settings (defaults merged with user overrides).
/// * `text` - The document to score.
pub fn headless_score_text(
    annotator: &dyn Annotator,
    config: ScoringConfig,
    text: &str,
) -> Result<ScoreResult, ComplexityError> {
    headless_report_text(annotator, config, text).map(|report| report.result)
}

/// Like [`headless_score_text`] but keeps the per-sentence breakdown.
pub fn headless_report_text(
    annotator: &dyn Annotator,
    config: ScoringConfig,
    text: &str,
) -> Result<DocumentReport, ComplexityError> {
    let document = annotator.annotate(text)?;
    info!(
        "Annotator '{}' produced {} sentences ({} tokens).",
        annotator.name(),
        document.sentences.len(),
        document.token_count()
    );

    DocumentScorer::new(config).score_detailed(&document.sentences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotator::{ConlluAnnotator, StaticAnnotator};
    use crate::token::{AnnotatedDocument, AnnotatedSentence, Token};

    #[test]
    fn test_headless_with_stub_annotator() -> anyhow::Result<()> {
        let doc = AnnotatedDocument::new(vec![AnnotatedSentence::new(vec![
            Token::new("the", "DET", "DT"),
            Token::new("dog", "NOUN", "NN"),
            Token::new("ran", "VERB", "VBD"),
        ])]);
        let annotator = StaticAnnotator::new(doc);

        let result = headless_score_text(&annotator, ScoringConfig::default(), "ignored")?;
        assert!((result.complexity - 1.0).abs() < 1e-10);
        Ok(())
    }

    #[test]
    fn test_headless_empty_text_is_rejected() {
        let err = headless_score_text(&ConlluAnnotator::new(), ScoringConfig::default(), "").unwrap_err();
        assert!(matches!(err, ComplexityError::EmptyDocument));
    }
}
