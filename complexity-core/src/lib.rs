// complexity-core/src/lib.rs
//! # Complexity Core Library
//!
//! `complexity-core` estimates the grammatical complexity of a document from
//! its part-of-speech tags. Every sentence is scored for two things:
//!
//! * **diversity** - the entropy of its consecutive tag pairs, and
//! * **productivity** - the conditional entropy of a word given its tag,
//!   plus one.
//!
//! A sentence's complexity is the product of the two; a document's scores are
//! the averages over its sentences.
//!
//! The library does no tagging. Annotated sentences come from an
//! [`Annotator`], which the caller constructs and passes in. CoNLL-U and JSON
//! readers are provided for text that a tagger has already processed.
//!
//! ## Modules
//!
//! * `token`: Tokens, annotated sentences and documents.
//! * `annotator`: The `Annotator` trait and the bundled readers.
//! * `config`: YAML scoring configuration, defaults and merging.
//! * `scorer`: The `DocumentScorer` and its result types.
//! * `headless`: One-call annotate-and-score helpers.
//! * `batch`: Scoring many documents and exporting the results as CSV.
//! * `errors`: The `ComplexityError` type.
//!
//! ## Usage Example
//!
//! ```rust
//! use complexity_core::{headless_score_text, ConlluAnnotator, ScoringConfig};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let conllu = "1\tThe\tthe\tDET\tDT\t_\t2\tdet\t_\t_\n\
//!                   2\tdog\tdog\tNOUN\tNN\t_\t3\tnsubj\t_\t_\n\
//!                   3\tran\trun\tVERB\tVBD\t_\t0\troot\t_\t_\n";
//!
//!     let config = ScoringConfig::load_default()?;
//!     let score = headless_score_text(&ConlluAnnotator::new(), config, conllu)?;
//!
//!     assert!((score.complexity - 1.0).abs() < 1e-10);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Scoring returns [`ComplexityError`]. An empty document or a sentence with
//! mismatched words and tags is rejected as invalid input; sentences that are
//! merely degenerate (no words, one word, a single repeated tag) score
//! normally. File and configuration helpers return `anyhow::Result`.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod annotator;
pub mod batch;
pub mod config;
pub mod errors;
pub mod headless;
pub mod scorer;
pub mod token;

/// Re-exports the annotator trait and the bundled implementations.
pub use annotator::{Annotator, AnnotatorKind, ConlluAnnotator, JsonAnnotator, StaticAnnotator};

/// Re-exports batch scoring and CSV export.
pub use batch::{
    default_export_path,
    downloads_dir,
    export_csv,
    score_batch,
    write_csv,
    BatchRow,
    DEFAULT_EXPORT_FILENAME,
};

/// Re-exports the configuration types.
pub use config::{merge_config, ScoringConfig, ScoringOverrides, TagSource};

/// Re-exports the custom error type for clear error reporting.
pub use errors::ComplexityError;

pub use headless::{headless_report_text, headless_score_text};

/// Re-exports the scorer and its result types.
pub use scorer::{score_document, ComplexitySpread, DocumentReport, DocumentScorer, ScoreResult, SentenceScore};

pub use token::{AnnotatedDocument, AnnotatedSentence, CoarseTag, TaggedSentence, Token};

/// Re-exports the low-level metric functions.
pub use complexity_entropy::{diversity, entropy_of, productivity, SentenceMetrics};
