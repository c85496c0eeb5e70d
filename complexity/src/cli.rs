// complexity/src/cli.rs
//! This file defines the command-line interface (CLI) for the complexity
//! application, including all available commands and their arguments.

use clap::{Parser, Subcommand, ValueEnum};
use complexity_core::AnnotatorKind;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "complexity",
    version = env!("CARGO_PKG_VERSION"),
    about = "Score the grammatical complexity of part-of-speech tagged text",
    long_about = "Complexity reads documents that a tagger has already annotated (CoNLL-U or JSON) and scores each one for diversity (entropy of consecutive tag pairs), productivity (conditional entropy of words given tags, plus one) and their product, averaged over sentences.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for the complexity crates)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Explicitly disable debug logging, even if RUST_LOG is set to DEBUG
    #[arg(long = "disable-debug", global = true, help = "Disable debug logging, overriding RUST_LOG.")]
    pub disable_debug: bool,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `complexity` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scores a single document from a file or stdin.
    #[command(about = "Score a single annotated document from a file or stdin.")]
    Score(ScoreCommand),

    /// Scores several documents and exports the results as CSV.
    #[command(about = "Score several annotated documents and export the results as CSV.")]
    Batch(BatchCommand),
}

/// Arguments for the `score` command.
#[derive(Parser, Debug)]
pub struct ScoreCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Annotation format of the input.
    #[arg(long = "format", short = 'f', value_name = "FORMAT", help = "Annotation format of the input; detected from the file extension when omitted (stdin defaults to conllu).")]
    pub format: Option<FormatChoice>,

    /// Path to a custom scoring configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom scoring configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Print a per-sentence breakdown after the document scores.
    #[arg(long = "per-sentence", help = "Print a per-sentence breakdown after the document scores.")]
    pub per_sentence: bool,

    /// Print the full report as JSON to stdout.
    #[arg(long = "json-stdout", conflicts_with = "per_sentence", help = "Print the full report as JSON to stdout.")]
    pub json_stdout: bool,
}

/// Arguments for the `batch` command.
#[derive(Parser, Debug)]
pub struct BatchCommand {
    /// Input documents.
    #[arg(value_name = "FILES", required = true, help = "Annotated documents to score (.conllu, .conll or .json).")]
    pub files: Vec<PathBuf>,

    /// Where to write the CSV export.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write the CSV here instead of the downloads folder.")]
    pub output: Option<PathBuf>,

    /// Force one annotation format for every file.
    #[arg(long = "format", short = 'f', value_name = "FORMAT", help = "Use this annotation format for every file instead of detecting it from the extension.")]
    pub format: Option<FormatChoice>,

    /// Path to a custom scoring configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom scoring configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Also print the results as a table.
    #[arg(long = "table", help = "Also print the results as a table on stdout.")]
    pub table: bool,
}

/// Enum for selecting the annotation format.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum FormatChoice {
    /// CoNLL-U, one token per line, blank line between sentences.
    Conllu,
    /// A JSON array of sentences of {text, upos, xpos} objects.
    Json,
}

impl From<FormatChoice> for AnnotatorKind {
    fn from(choice: FormatChoice) -> Self {
        match choice {
            FormatChoice::Conllu => AnnotatorKind::Conllu,
            FormatChoice::Json => AnnotatorKind::Json,
        }
    }
}
