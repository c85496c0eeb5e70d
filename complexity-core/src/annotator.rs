// complexity-core/src/annotator.rs
//! Defines the `Annotator` trait and the annotators shipped with the crate.
//!
//! Tagging itself happens outside this crate. An annotator turns the text it
//! is handed into an [`AnnotatedDocument`]; the implementations here read
//! text that a tagger has already annotated, either as CoNLL-U or as JSON.
//! Callers that embed a real tagging pipeline implement the trait themselves
//! and pass it to the scorer explicitly.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use serde::Deserialize;
use std::path::Path;

use crate::errors::ComplexityError;
use crate::token::{AnnotatedDocument, AnnotatedSentence, Token};

/// Produces annotated sentences from raw document text.
///
/// Implementations are initialised once and shared; `annotate` takes `&self`
/// and must not keep per-document state.
pub trait Annotator: Send + Sync {
    /// Annotates a whole document.
    fn annotate(&self, text: &str) -> Result<AnnotatedDocument, ComplexityError>;

    /// Short name used in log messages.
    fn name(&self) -> &str;
}

/// Reads CoNLL-U formatted text.
///
/// Multiword-token ranges (`3-4`) and empty nodes (`5.1`) are skipped so that
/// only syntactic words are scored. An `_` in the XPOS column falls back to
/// the UPOS value.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConlluAnnotator;

const CONLLU_COLUMNS: usize = 10;

impl ConlluAnnotator {
    pub fn new() -> Self {
        Self
    }

    fn parse_token(line: &str, line_number: usize) -> Result<Option<Token>, ComplexityError> {
        let columns: Vec<&str> = line.split('\t').collect();
        if columns.len() != CONLLU_COLUMNS {
            return Err(ComplexityError::Annotation {
                line: line_number,
                message: format!("expected {} tab-separated columns, found {}", CONLLU_COLUMNS, columns.len()),
            });
        }

        let id = columns[0];
        if id.contains('-') || id.contains('.') {
            return Ok(None);
        }
        if id.parse::<usize>().is_err() {
            return Err(ComplexityError::Annotation {
                line: line_number,
                message: format!("invalid token id '{}'", id),
            });
        }

        let form = columns[1];
        let upos = columns[3];
        let xpos = if columns[4] == "_" { upos } else { columns[4] };

        Ok(Some(Token::new(form, upos, xpos)))
    }
}

impl Annotator for ConlluAnnotator {
    fn annotate(&self, text: &str) -> Result<AnnotatedDocument, ComplexityError> {
        let mut sentences = Vec::new();
        let mut current = Vec::new();

        for (index, raw_line) in text.lines().enumerate() {
            let line = raw_line.trim_end_matches('\r');
            if line.trim().is_empty() {
                if !current.is_empty() {
                    sentences.push(AnnotatedSentence::new(std::mem::take(&mut current)));
                }
                continue;
            }
            if line.starts_with('#') {
                continue;
            }
            if let Some(token) = Self::parse_token(line, index + 1)? {
                current.push(token);
            }
        }

        if !current.is_empty() {
            sentences.push(AnnotatedSentence::new(current));
        }

        debug!("CoNLL-U annotator read {} sentences.", sentences.len());
        Ok(AnnotatedDocument::new(sentences))
    }

    fn name(&self) -> &str {
        "conllu"
    }
}

#[derive(Debug, Deserialize)]
struct JsonToken {
    text: String,
    upos: String,
    #[serde(default)]
    xpos: Option<String>,
}

/// Reads a JSON array of sentences, each an array of
/// `{ "text": ..., "upos": ..., "xpos": ... }` objects.
///
/// `xpos` may be omitted or null, in which case `upos` is scored.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonAnnotator;

impl JsonAnnotator {
    pub fn new() -> Self {
        Self
    }
}

impl Annotator for JsonAnnotator {
    fn annotate(&self, text: &str) -> Result<AnnotatedDocument, ComplexityError> {
        if text.trim().is_empty() {
            return Ok(AnnotatedDocument::default());
        }

        let raw: Vec<Vec<JsonToken>> = serde_json::from_str(text).map_err(|e| ComplexityError::Annotation {
            line: e.line(),
            message: e.to_string(),
        })?;

        let sentences: Vec<AnnotatedSentence> = raw
            .into_iter()
            .filter(|tokens| !tokens.is_empty())
            .map(|tokens| {
                AnnotatedSentence::new(
                    tokens
                        .into_iter()
                        .map(|t| {
                            let fine = t.xpos.unwrap_or_else(|| t.upos.clone());
                            Token::new(t.text, t.upos, fine)
                        })
                        .collect(),
                )
            })
            .collect();

        debug!("JSON annotator read {} sentences.", sentences.len());
        Ok(AnnotatedDocument::new(sentences))
    }

    fn name(&self) -> &str {
        "json"
    }
}

/// Returns the same pre-built document for every input.
///
/// Useful for tests and for callers that already hold annotated sentences.
#[derive(Debug, Clone, Default)]
pub struct StaticAnnotator {
    document: AnnotatedDocument,
}

impl StaticAnnotator {
    pub fn new(document: AnnotatedDocument) -> Self {
        Self { document }
    }
}

impl Annotator for StaticAnnotator {
    fn annotate(&self, _text: &str) -> Result<AnnotatedDocument, ComplexityError> {
        Ok(self.document.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// The annotated-input formats understood out of the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotatorKind {
    Conllu,
    Json,
}

impl AnnotatorKind {
    /// Picks a format from a file extension (`.conllu`, `.conll`, `.json`).
    pub fn from_path(path: &Path) -> Result<Self, ComplexityError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("conllu") | Some("conll") => Ok(AnnotatorKind::Conllu),
            Some("json") => Ok(AnnotatorKind::Json),
            _ => Err(ComplexityError::UnsupportedInput(format!(
                "'{}': only .conllu, .conll and .json files are allowed",
                path.display()
            ))),
        }
    }

    /// Instantiates the annotator behind the `Annotator` trait.
    pub fn build(self) -> Box<dyn Annotator> {
        match self {
            AnnotatorKind::Conllu => Box::new(ConlluAnnotator::new()),
            AnnotatorKind::Json => Box::new(JsonAnnotator::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::CoarseTag;

    const SAMPLE: &str = "# sent_id = 1\n\
# text = The dog ran.\n\
1\tThe\tthe\tDET\tDT\t_\t2\tdet\t_\t_\n\
2\tdog\tdog\tNOUN\tNN\t_\t3\tnsubj\t_\t_\n\
3\tran\trun\tVERB\tVBD\t_\t0\troot\t_\t_\n\
4\t.\t.\tPUNCT\t.\t_\t3\tpunct\t_\t_\n\
\n\
1-2\tdon't\t_\t_\t_\t_\t_\t_\t_\t_\n\
1\tdo\tdo\tAUX\t_\t_\t0\troot\t_\t_\n\
2\tn't\tnot\tPART\tRB\t_\t1\tadvmod\t_\t_\n\
2.1\tx\tx\tX\tX\t_\t_\t_\t_\t_\n";

    #[test]
    fn test_conllu_reads_sentences() {
        let doc = ConlluAnnotator::new().annotate(SAMPLE).unwrap();
        assert_eq!(doc.sentences.len(), 2);
        assert_eq!(doc.sentences[0].tokens.len(), 4);
        assert_eq!(doc.sentences[0].tokens[3].coarse_tag, CoarseTag::Punct);
        assert_eq!(doc.sentences[0].tokens[2].fine_tag, "VBD");
    }

    #[test]
    fn test_conllu_skips_ranges_and_empty_nodes() {
        let doc = ConlluAnnotator::new().annotate(SAMPLE).unwrap();
        let second = &doc.sentences[1];
        let forms: Vec<&str> = second.tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(forms, vec!["do", "n't"]);
        // XPOS "_" falls back to UPOS
        assert_eq!(second.tokens[0].fine_tag, "AUX");
    }

    #[test]
    fn test_conllu_empty_input() {
        let doc = ConlluAnnotator::new().annotate("\n\n# only a comment\n").unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_conllu_reports_bad_line() {
        let err = ConlluAnnotator::new().annotate("1\tThe\tDET\n").unwrap_err();
        match err {
            ComplexityError::Annotation { line, .. } => assert_eq!(line, 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_json_reads_sentences() {
        let text = r#"[
            [{"text": "Dogs", "upos": "NOUN", "xpos": "NNS"}, {"text": "bark", "upos": "VERB"}],
            []
        ]"#;
        let doc = JsonAnnotator::new().annotate(text).unwrap();
        assert_eq!(doc.sentences.len(), 1);
        assert_eq!(doc.sentences[0].tokens[1].fine_tag, "VERB");
    }

    #[test]
    fn test_json_rejects_malformed_input() {
        let err = JsonAnnotator::new().annotate("{ not json").unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_kind_from_path() {
        assert_eq!(AnnotatorKind::from_path(Path::new("a.CONLLU")).unwrap(), AnnotatorKind::Conllu);
        assert_eq!(AnnotatorKind::from_path(Path::new("dir/b.json")).unwrap(), AnnotatorKind::Json);
        assert!(AnnotatorKind::from_path(Path::new("notes.txt")).is_err());
        assert!(AnnotatorKind::from_path(Path::new("README")).is_err());
    }

    #[test]
    fn test_static_annotator_ignores_input() {
        let doc = AnnotatedDocument::new(vec![AnnotatedSentence::new(vec![Token::new("hi", "INTJ", "UH")])]);
        let annotator = StaticAnnotator::new(doc.clone());
        assert_eq!(annotator.annotate("anything").unwrap(), doc);
        assert_eq!(annotator.name(), "static");
    }
}
