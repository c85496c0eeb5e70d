//! The `score` command: annotate and score a single document.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use complexity_core::{headless_report_text, AnnotatorKind, ScoringConfig};

use crate::cli::ScoreCommand;
use crate::commands::warn_msg;
use crate::ui::output_format;
use crate::ui::theme::ThemeMap;

/// Picks the annotation format: an explicit choice wins, then the file
/// extension, then CoNLL-U for stdin.
pub fn resolve_kind(cmd: &ScoreCommand) -> Result<AnnotatorKind> {
    if let Some(choice) = cmd.format {
        return Ok(choice.into());
    }
    match &cmd.input_file {
        Some(path) => Ok(AnnotatorKind::from_path(path)?),
        None => Ok(AnnotatorKind::Conllu),
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

/// Runs the `score` command, writing results to stdout.
pub fn run_score(cmd: &ScoreCommand, theme: &ThemeMap) -> Result<()> {
    let kind = resolve_kind(cmd)?;
    let config = ScoringConfig::load(cmd.config.as_deref())?;
    debug!("Scoring with {:?} input and config {:?}", kind, config);

    let text = read_input(cmd.input_file.as_deref())?;
    let annotator = kind.build();
    let report = headless_report_text(annotator.as_ref(), config, &text)?;
    info!("Scored {} sentences.", report.sentence_count);

    let without_content = report.sentences.iter().filter(|s| s.content_words == 0).count();
    if without_content > 0 {
        warn_msg(
            format!("{} of {} sentences contain no content words", without_content, report.sentence_count),
            theme,
        );
    }

    let stdout = io::stdout();
    let enable_colors = stdout.is_terminal();
    let mut out = stdout.lock();

    if cmd.json_stdout {
        serde_json::to_writer_pretty(&mut out, &report).context("Failed to serialize report")?;
        writeln!(out)?;
        return Ok(());
    }

    output_format::print_score(&mut out, &report.result, theme, enable_colors)?;
    if cmd.per_sentence {
        writeln!(out)?;
        output_format::print_sentence_table(&mut out, &report, enable_colors)?;
    }
    out.flush()?;
    Ok(())
}
