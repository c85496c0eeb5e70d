//! The `batch` command: score several documents and export a CSV.

use anyhow::{anyhow, Context, Result};
use is_terminal::IsTerminal;
use log::debug;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use complexity_core::{default_export_path, export_csv, score_batch, AnnotatorKind, DocumentScorer, ScoringConfig};

use crate::cli::BatchCommand;
use crate::commands::{info_msg, success_msg};
use crate::ui::output_format;
use crate::ui::theme::ThemeMap;

/// Where the CSV goes: `--output`, or the downloads folder.
pub fn resolve_output_path(cmd: &BatchCommand) -> Result<PathBuf> {
    match &cmd.output {
        Some(path) => Ok(path.clone()),
        None => default_export_path()
            .ok_or_else(|| anyhow!("Could not determine a downloads folder; pass --output")),
    }
}

/// Runs the `batch` command. Nothing is written unless every file scores.
pub fn run_batch(cmd: &BatchCommand, theme: &ThemeMap) -> Result<()> {
    let config = ScoringConfig::load(cmd.config.as_deref())?;
    let scorer = DocumentScorer::new(config);
    let forced = cmd.format.map(AnnotatorKind::from);

    // Reject unsupported files before reading anything.
    if forced.is_none() {
        for path in &cmd.files {
            AnnotatorKind::from_path(path)?;
        }
    }

    let mut inputs = Vec::with_capacity(cmd.files.len());
    for path in &cmd.files {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?;
        debug!("Read {} bytes from {}", text.len(), path.display());
        inputs.push((path.as_path(), text));
    }

    let rows = score_batch(
        &scorer,
        |path| match forced {
            Some(kind) => Ok(kind),
            None => AnnotatorKind::from_path(path),
        },
        inputs.iter().map(|(path, text)| (*path, text.as_str())),
    )?;

    let output_path = resolve_output_path(cmd)?;
    if cmd.output.is_none() {
        info_msg(format!("No --output given, exporting to {}", output_path.display()), theme);
    }
    export_csv(&rows, &output_path)?;

    if cmd.table {
        let stdout = io::stdout();
        let enable_colors = stdout.is_terminal();
        let mut out = stdout.lock();
        output_format::print_batch_table(&mut out, &rows, enable_colors)?;
        out.flush()?;
    }

    success_msg(format!("Finished processing, check {}", output_path.display()), theme);
    Ok(())
}
