//! Configuration management for `complexity-core`.
//!
//! Scoring settings are read from YAML. The built-in defaults are embedded in
//! the binary; a user file only overrides the keys it sets.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::token::CoarseTag;

const DEFAULT_SCORING_YAML: &str = include_str!("../config/default_scoring.yaml");

static DEFAULT_CONFIG: Lazy<Result<ScoringConfig, String>> = Lazy::new(|| {
    serde_yml::from_str::<ConfigFile<ScoringConfig>>(DEFAULT_SCORING_YAML)
        .map(|file| file.scoring)
        .map_err(|e| e.to_string())
});

/// Which token tag is fed to the metrics.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TagSource {
    /// The language-specific tag (CoNLL-U XPOS).
    #[default]
    Fine,
    /// The universal category (CoNLL-U UPOS).
    Coarse,
}

/// Resolved settings used by the scorer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Coarse categories treated as punctuation and removed before scoring.
    pub punctuation_tags: Vec<String>,
    /// Lower-case words before comparing them.
    pub lowercase: bool,
    pub tag_source: TagSource,
    /// Drop sentences with no content words instead of averaging them in.
    pub skip_empty_sentences: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            punctuation_tags: vec!["PUNCT".to_string()],
            lowercase: true,
            tag_source: TagSource::Fine,
            skip_empty_sentences: false,
        }
    }
}

/// Partial settings as written in a user file. Unset keys keep the default.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoringOverrides {
    pub punctuation_tags: Option<Vec<String>>,
    pub lowercase: Option<bool>,
    pub tag_source: Option<TagSource>,
    pub skip_empty_sentences: Option<bool>,
}

/// Top-level layout of a configuration file.
#[derive(Debug, Default, Deserialize, Serialize)]
struct ConfigFile<T> {
    #[serde(default)]
    scoring: T,
}

impl ScoringConfig {
    /// Loads the embedded default configuration.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default scoring configuration from embedded string...");
        DEFAULT_CONFIG
            .clone()
            .map_err(|e| anyhow!("Failed to parse default scoring configuration: {}", e))
    }

    /// Loads the defaults and applies the overrides from `path`, if given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults = Self::load_default()?;
        let overrides = path.map(ScoringOverrides::load_from_file).transpose()?;
        Ok(merge_config(defaults, overrides))
    }

    /// Whether a coarse tag is configured as punctuation.
    pub fn is_punctuation(&self, tag: &CoarseTag) -> bool {
        self.punctuation_tags
            .iter()
            .any(|p| CoarseTag::from(p.as_str()) == *tag)
    }
}

impl ScoringOverrides {
    /// Loads scoring overrides from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading scoring configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let file: ConfigFile<ScoringOverrides> = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        validate_overrides(&file.scoring)?;
        Ok(file.scoring)
    }
}

/// Applies user overrides on top of the defaults.
pub fn merge_config(default_config: ScoringConfig, user_config: Option<ScoringOverrides>) -> ScoringConfig {
    let mut merged = default_config;

    if let Some(user) = user_config {
        if let Some(tags) = user.punctuation_tags {
            debug!("Overriding punctuation tags with user value: {:?}", tags);
            merged.punctuation_tags = tags;
        }
        if let Some(lowercase) = user.lowercase {
            debug!("Overriding lowercase with user value: {}", lowercase);
            merged.lowercase = lowercase;
        }
        if let Some(source) = user.tag_source {
            debug!("Overriding tag source with user value: {:?}", source);
            merged.tag_source = source;
        }
        if let Some(skip) = user.skip_empty_sentences {
            debug!("Overriding skip_empty_sentences with user value: {}", skip);
            merged.skip_empty_sentences = skip;
        }
    }

    merged
}

fn validate_overrides(overrides: &ScoringOverrides) -> Result<()> {
    let Some(tags) = &overrides.punctuation_tags else {
        return Ok(());
    };

    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    for tag in tags {
        if tag.trim().is_empty() {
            errors.push("`punctuation_tags` contains an empty tag name.".to_string());
        } else if !seen.insert(tag.trim().to_ascii_uppercase()) {
            warn!("Punctuation tag '{}' is listed more than once.", tag);
        }
    }

    if !errors.is_empty() {
        Err(anyhow!("Scoring configuration validation failed:\n{}", errors.join("\n")))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_defaults_match_default_impl() {
        assert_eq!(ScoringConfig::load_default().unwrap(), ScoringConfig::default());
    }

    #[test]
    fn test_is_punctuation_is_case_insensitive() {
        let config = ScoringConfig {
            punctuation_tags: vec!["punct".to_string(), "SYM".to_string()],
            ..ScoringConfig::default()
        };
        assert!(config.is_punctuation(&CoarseTag::Punct));
        assert!(config.is_punctuation(&CoarseTag::Sym));
        assert!(!config.is_punctuation(&CoarseTag::Noun));
    }

    #[test]
    fn test_merge_without_overrides_keeps_defaults() {
        let merged = merge_config(ScoringConfig::default(), None);
        assert_eq!(merged, ScoringConfig::default());
    }

    #[test]
    fn test_merge_partial_overrides() {
        let overrides = ScoringOverrides {
            tag_source: Some(TagSource::Coarse),
            ..ScoringOverrides::default()
        };
        let merged = merge_config(ScoringConfig::default(), Some(overrides));
        assert_eq!(merged.tag_source, TagSource::Coarse);
        assert!(merged.lowercase);
        assert_eq!(merged.punctuation_tags, vec!["PUNCT"]);
    }

    #[test]
    fn test_validate_rejects_empty_tag() {
        let overrides = ScoringOverrides {
            punctuation_tags: Some(vec!["PUNCT".to_string(), " ".to_string()]),
            ..ScoringOverrides::default()
        };
        assert!(validate_overrides(&overrides).is_err());
    }
}
