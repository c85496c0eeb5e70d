//! errors.rs - Custom error types for the complexity-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `complexity-core` library.
///
/// Degenerate sentences (no content words, a single word, one repeated tag)
/// are not errors; they score normally.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ComplexityError {
    #[error("Invalid input: the document contains no sentences to score")]
    EmptyDocument,

    #[error("Invalid input: sentence {sentence} has {words} words but {tags} tags")]
    LengthMismatch {
        sentence: usize,
        words: usize,
        tags: usize,
    },

    #[error("Failed to read annotations at line {line}: {message}")]
    Annotation { line: usize, message: String },

    #[error("Unsupported input: {0}")]
    UnsupportedInput(String),

    #[error("Invalid scoring configuration: {0}")]
    Config(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),
}

impl ComplexityError {
    /// True for errors caused by the caller's input rather than the environment.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            ComplexityError::EmptyDocument
                | ComplexityError::LengthMismatch { .. }
                | ComplexityError::Annotation { .. }
                | ComplexityError::UnsupportedInput(_)
        )
    }
}
