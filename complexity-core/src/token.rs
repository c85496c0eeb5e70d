// complexity-core/src/token.rs
//! Annotated-text data model consumed by the scorer.
//!
//! Annotators produce these values; nothing in this crate mutates them after
//! construction. A [`Token`] is a fixed-shape record so the scorer never
//! depends on how a particular tagger represents its output.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{ScoringConfig, TagSource};

/// Coarse grammatical category, following the Universal POS tagset.
///
/// Anything outside the tagset is kept verbatim in [`CoarseTag::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CoarseTag {
    /// Adjective
    Adj,
    /// Adposition
    Adp,
    /// Adverb
    Adv,
    /// Auxiliary
    Aux,
    /// Coordinating conjunction
    Cconj,
    /// Determiner
    Det,
    /// Interjection
    Intj,
    /// Noun
    Noun,
    /// Numeral
    Num,
    /// Particle
    Part,
    /// Pronoun
    Pron,
    /// Proper noun
    Propn,
    /// Punctuation
    Punct,
    /// Subordinating conjunction
    Sconj,
    /// Symbol
    Sym,
    /// Verb
    Verb,
    /// Other
    X,
    Other(String),
}

impl CoarseTag {
    pub fn as_str(&self) -> &str {
        match self {
            CoarseTag::Adj => "ADJ",
            CoarseTag::Adp => "ADP",
            CoarseTag::Adv => "ADV",
            CoarseTag::Aux => "AUX",
            CoarseTag::Cconj => "CCONJ",
            CoarseTag::Det => "DET",
            CoarseTag::Intj => "INTJ",
            CoarseTag::Noun => "NOUN",
            CoarseTag::Num => "NUM",
            CoarseTag::Part => "PART",
            CoarseTag::Pron => "PRON",
            CoarseTag::Propn => "PROPN",
            CoarseTag::Punct => "PUNCT",
            CoarseTag::Sconj => "SCONJ",
            CoarseTag::Sym => "SYM",
            CoarseTag::Verb => "VERB",
            CoarseTag::X => "X",
            CoarseTag::Other(s) => s,
        }
    }
}

impl From<&str> for CoarseTag {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADJ" => CoarseTag::Adj,
            "ADP" => CoarseTag::Adp,
            "ADV" => CoarseTag::Adv,
            "AUX" => CoarseTag::Aux,
            "CCONJ" | "CONJ" => CoarseTag::Cconj,
            "DET" => CoarseTag::Det,
            "INTJ" => CoarseTag::Intj,
            "NOUN" => CoarseTag::Noun,
            "NUM" => CoarseTag::Num,
            "PART" => CoarseTag::Part,
            "PRON" => CoarseTag::Pron,
            "PROPN" => CoarseTag::Propn,
            "PUNCT" => CoarseTag::Punct,
            "SCONJ" => CoarseTag::Sconj,
            "SYM" => CoarseTag::Sym,
            "VERB" => CoarseTag::Verb,
            "X" => CoarseTag::X,
            _ => CoarseTag::Other(s.trim().to_string()),
        }
    }
}

impl From<String> for CoarseTag {
    fn from(s: String) -> Self {
        CoarseTag::from(s.as_str())
    }
}

impl From<CoarseTag> for String {
    fn from(tag: CoarseTag) -> Self {
        tag.as_str().to_string()
    }
}

impl fmt::Display for CoarseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single annotated token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text as produced by the annotator.
    pub text: String,
    /// Coarse category, used to recognise punctuation.
    pub coarse_tag: CoarseTag,
    /// Fine-grained tag, the symbol scored by default.
    pub fine_tag: String,
}

impl Token {
    pub fn new(text: impl Into<String>, coarse_tag: impl Into<CoarseTag>, fine_tag: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            coarse_tag: coarse_tag.into(),
            fine_tag: fine_tag.into(),
        }
    }

    /// Whether this token is dropped before scoring under `config`.
    pub fn is_excluded(&self, config: &ScoringConfig) -> bool {
        config.is_punctuation(&self.coarse_tag)
    }

    fn scored_tag(&self, source: TagSource) -> String {
        match source {
            TagSource::Fine => self.fine_tag.clone(),
            TagSource::Coarse => self.coarse_tag.as_str().to_string(),
        }
    }

    fn scored_word(&self, lowercase: bool) -> String {
        if lowercase {
            self.text.to_lowercase()
        } else {
            self.text.clone()
        }
    }
}

/// An ordered sequence of tokens in original word order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedSentence {
    pub tokens: Vec<Token>,
}

impl AnnotatedSentence {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Filters out punctuation and returns the parallel word and tag
    /// sequences the metrics are computed over.
    ///
    /// Both sequences come from the same filtering pass, so `words[i]`
    /// always belongs to `tags[i]`.
    pub fn content_sequences(&self, config: &ScoringConfig) -> (Vec<String>, Vec<String>) {
        self.tokens
            .iter()
            .filter(|token| !token.is_excluded(config))
            .map(|token| (token.scored_word(config.lowercase), token.scored_tag(config.tag_source)))
            .unzip()
    }

    /// The filtered form of this sentence, ready for scoring.
    pub fn to_tagged(&self, config: &ScoringConfig) -> TaggedSentence {
        let (words, tags) = self.content_sequences(config);
        TaggedSentence { words, tags }
    }

    /// Plain text of the sentence, tokens joined by single spaces.
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect::<Vec<_>>().join(" ")
    }
}

/// A sentence reduced to its content words and their tags.
///
/// `words` and `tags` are paired by position. Values built by
/// [`AnnotatedSentence::to_tagged`] always have equal lengths; hand-built ones
/// are checked by the scorer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedSentence {
    pub words: Vec<String>,
    pub tags: Vec<String>,
}

impl TaggedSentence {
    pub fn new<W, T>(words: impl IntoIterator<Item = W>, tags: impl IntoIterator<Item = T>) -> Self
    where
        W: Into<String>,
        T: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// An annotated document: the output of one annotator call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedDocument {
    pub sentences: Vec<AnnotatedSentence>,
}

impl AnnotatedDocument {
    pub fn new(sentences: Vec<AnnotatedSentence>) -> Self {
        Self { sentences }
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(|s| s.tokens.len()).sum()
    }
}
