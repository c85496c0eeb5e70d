// complexity/src/ui/output_format.rs
//! Rendering of status messages, scores and tables.
//!
//! Every function writes to a caller-supplied writer and takes an
//! `enable_colors` flag so output redirected to a file stays plain.

use comfy_table::{presets::UTF8_FULL, Cell, Table};
use complexity_core::{BatchRow, DocumentReport, ScoreResult};
use owo_colors::OwoColorize;
use std::io::{self, Write};

use crate::ui::theme::{ThemeEntry, ThemeMap};

fn styled(text: &str, entry: ThemeEntry, theme: &ThemeMap, enable_colors: bool) -> String {
    if !enable_colors {
        return text.to_string();
    }
    match theme.get(&entry).and_then(|style| style.fg.as_ref()) {
        Some(color) => text.color(color.to_ansi_color()).to_string(),
        None => text.to_string(),
    }
}

fn print_tagged<W: Write>(
    writer: &mut W,
    tag: &str,
    msg: &str,
    entry: ThemeEntry,
    theme: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    writeln!(writer, "{} {}", styled(tag, entry, theme, enable_colors), msg)
}

pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_tagged(writer, "[INFO]", msg, ThemeEntry::Info, theme, enable_colors)
}

pub fn print_success_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_tagged(writer, "[OK]", msg, ThemeEntry::Success, theme, enable_colors)
}

pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_tagged(writer, "[WARN]", msg, ThemeEntry::Warn, theme, enable_colors)
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_tagged(writer, "[ERROR]", msg, ThemeEntry::Error, theme, enable_colors)
}

/// Prints the three document scores, one per line.
pub fn print_score<W: Write>(writer: &mut W, score: &ScoreResult, theme: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    for (name, value) in [
        ("Complexity score", score.complexity),
        ("Diversity", score.diversity),
        ("Productivity", score.productivity),
    ] {
        writeln!(
            writer,
            "{}: {}",
            styled(name, ThemeEntry::MetricName, theme, enable_colors),
            styled(&value.to_string(), ThemeEntry::MetricValue, theme, enable_colors)
        )?;
    }
    Ok(())
}

fn new_table(enable_colors: bool, header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    if !enable_colors {
        table.force_no_tty();
    }
    table.set_header(header);
    table
}

/// Prints per-sentence metrics and the spread of sentence complexity.
pub fn print_sentence_table<W: Write>(writer: &mut W, report: &DocumentReport, enable_colors: bool) -> io::Result<()> {
    let mut table = new_table(enable_colors, vec!["Sentence", "Words", "Diversity", "Productivity", "Complexity"]);
    for s in &report.sentences {
        table.add_row(vec![
            Cell::new(s.index + 1),
            Cell::new(s.content_words),
            Cell::new(format!("{:.4}", s.diversity)),
            Cell::new(format!("{:.4}", s.productivity)),
            Cell::new(format!("{:.4}", s.complexity)),
        ]);
    }
    writeln!(writer, "{}", table)?;
    writeln!(
        writer,
        "Sentence complexity: mean {:.4}, std dev {:.4}, min {:.4}, max {:.4}",
        report.spread.mean, report.spread.std_dev, report.spread.min, report.spread.max
    )
}

/// Prints batch results as a table.
pub fn print_batch_table<W: Write>(writer: &mut W, rows: &[BatchRow], enable_colors: bool) -> io::Result<()> {
    let mut table = new_table(enable_colors, vec!["File", "Complexity", "Diversity", "Productivity"]);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.filename),
            Cell::new(format!("{:.4}", row.complexity)),
            Cell::new(format!("{:.4}", row.diversity)),
            Cell::new(format!("{:.4}", row.productivity)),
        ]);
    }
    writeln!(writer, "{}", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::default_theme_map;

    #[test]
    fn test_print_score_plain() {
        let mut out = Vec::new();
        let score = ScoreResult { complexity: 1.0, diversity: 1.0, productivity: 1.0 };
        print_score(&mut out, &score, &default_theme_map(), false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Complexity score: 1\nDiversity: 1\nProductivity: 1\n"
        );
    }

    #[test]
    fn test_colored_output_contains_escape_codes() {
        let mut out = Vec::new();
        print_error_message(&mut out, "boom", &default_theme_map(), true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\u{1b}["));
        assert!(text.ends_with("boom\n"));
    }

    #[test]
    fn test_batch_table_lists_files() {
        let rows = vec![BatchRow {
            filename: "essay.conllu".to_string(),
            complexity: 2.5,
            diversity: 2.0,
            productivity: 1.25,
        }];
        let mut out = Vec::new();
        print_batch_table(&mut out, &rows, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("essay.conllu"));
        assert!(text.contains("2.5000"));
    }
}
