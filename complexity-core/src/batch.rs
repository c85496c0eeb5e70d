// complexity-core/src/batch.rs
//! Batch scoring and CSV export.
//!
//! Each input document is scored independently; the results are collected
//! into rows of `filename,complexity,diversity,productivity` and written as
//! CSV, by default into the user's downloads folder.

use anyhow::{Context, Result};
use log::{info, warn};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::annotator::AnnotatorKind;
use crate::errors::ComplexityError;
use crate::scorer::{DocumentScorer, ScoreResult};

/// File name used when no explicit output path is given.
pub const DEFAULT_EXPORT_FILENAME: &str = "document_complexity_scores.csv";

const CSV_HEADER: &str = "filename,complexity,diversity,productivity";

/// One scored document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRow {
    pub filename: String,
    pub complexity: f64,
    pub diversity: f64,
    pub productivity: f64,
}

impl BatchRow {
    pub fn new(filename: impl Into<String>, result: ScoreResult) -> Self {
        Self {
            filename: filename.into(),
            complexity: result.complexity,
            diversity: result.diversity,
            productivity: result.productivity,
        }
    }
}

/// Scores each `(filename, text)` pair, choosing the annotator per file.
///
/// Processing stops at the first unsupported or invalid document and the
/// error names that file; nothing is exported for a partial batch.
pub fn score_batch<'a, I>(
    scorer: &DocumentScorer,
    kind_for: impl Fn(&Path) -> Result<AnnotatorKind, ComplexityError>,
    inputs: I,
) -> Result<Vec<BatchRow>>
where
    I: IntoIterator<Item = (&'a Path, &'a str)>,
{
    let mut rows = Vec::new();

    for (path, text) in inputs {
        let display_name = display_name(path);
        let kind = kind_for(path)?;
        let document = kind
            .build()
            .annotate(text)
            .with_context(|| format!("Failed to read annotations from '{}'", display_name))?;
        let result = scorer
            .score_document(&document.sentences)
            .with_context(|| format!("Failed to score '{}'", display_name))?;

        info!("Scored '{}': complexity {:.4}", display_name, result.complexity);
        rows.push(BatchRow::new(display_name, result));
    }

    Ok(rows)
}

/// Writes rows as CSV with a header line.
pub fn write_csv<W: Write>(rows: &[BatchRow], mut writer: W) -> Result<()> {
    writeln!(writer, "{}", CSV_HEADER)?;
    for row in rows {
        writeln!(
            writer,
            "{},{},{},{}",
            csv_field(&row.filename),
            row.complexity,
            row.diversity,
            row.productivity
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes rows to `path`, creating parent directories as needed.
pub fn export_csv(rows: &[BatchRow], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }
    let file = fs::File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    write_csv(rows, std::io::BufWriter::new(file))?;
    info!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// The user's downloads folder, falling back to `~/Downloads`.
pub fn downloads_dir() -> Option<PathBuf> {
    dirs::download_dir().or_else(|| {
        warn!("No platform downloads folder found, falling back to ~/Downloads");
        dirs::home_dir().map(|home| home.join("Downloads"))
    })
}

/// Default export location: `<downloads>/document_complexity_scores.csv`.
pub fn default_export_path() -> Option<PathBuf> {
    downloads_dir().map(|dir| dir.join(DEFAULT_EXPORT_FILENAME))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Quotes a field when it contains a delimiter, quote or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONLLU: &str = "1\tThe\tthe\tDET\tDT\t_\t2\tdet\t_\t_\n\
2\tdog\tdog\tNOUN\tNN\t_\t3\tnsubj\t_\t_\n\
3\tran\trun\tVERB\tVBD\t_\t0\troot\t_\t_\n";

    #[test]
    fn test_csv_field_quoting() {
        assert_eq!(csv_field("plain.conllu"), "plain.conllu");
        assert_eq!(csv_field("a,b.json"), "\"a,b.json\"");
        assert_eq!(csv_field("say \"hi\".json"), "\"say \"\"hi\"\".json\"");
    }

    #[test]
    fn test_write_csv_layout() {
        let rows = vec![BatchRow {
            filename: "doc.conllu".to_string(),
            complexity: 1.0,
            diversity: 1.0,
            productivity: 1.0,
        }];
        let mut out = Vec::new();
        write_csv(&rows, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "filename,complexity,diversity,productivity\ndoc.conllu,1,1,1\n");
    }

    #[test]
    fn test_score_batch_uses_file_names() {
        let scorer = DocumentScorer::default();
        let inputs = vec![(Path::new("in/one.conllu"), CONLLU), (Path::new("two.conll"), CONLLU)];
        let rows = score_batch(&scorer, AnnotatorKind::from_path, inputs).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].filename, "one.conllu");
        assert!((rows[1].complexity - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_score_batch_rejects_unsupported_file() {
        let scorer = DocumentScorer::default();
        let inputs = vec![(Path::new("notes.txt"), "plain text")];
        let err = score_batch(&scorer, AnnotatorKind::from_path, inputs).unwrap_err();
        assert!(err.to_string().contains("only .conllu"));
    }

    #[test]
    fn test_score_batch_rejects_empty_document() {
        let scorer = DocumentScorer::default();
        let inputs = vec![(Path::new("empty.conllu"), "")];
        let err = score_batch(&scorer, AnnotatorKind::from_path, inputs).unwrap_err();
        assert!(format!("{:#}", err).contains("no sentences"));
    }

    #[test]
    fn test_export_csv_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(DEFAULT_EXPORT_FILENAME);
        export_csv(&[], &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), format!("{}\n", CSV_HEADER));
    }
}
