//! The exemplar corpus: labeled reference texts for each clause type.
//!
//! The corpus is loaded once at startup from a JSON object mapping clause
//! type to a list of exemplar strings, validated, and never mutated again.
//! Any corpus change requires a full matcher rebuild, not an incremental
//! update.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};

/// A static, versioned set of clause exemplars grouped by clause type.
///
/// One clause type maps to many exemplar strings. The backing map is a
/// `BTreeMap` so iteration order (and therefore the layout of the exemplar
/// index built from it) is deterministic across process restarts.
///
/// # Example
///
/// ```rust,ignore
/// use clausecheck_match::ClauseCorpus;
///
/// let corpus = ClauseCorpus::from_json_str(include_str!("../data/clause_examples.json"))?;
/// assert!(corpus.exemplar_count() > 0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ClauseCorpus {
    examples: BTreeMap<String, Vec<String>>,
}

impl ClauseCorpus {
    /// Build a corpus from an in-memory mapping, validating it.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::ConfigError`] if the mapping is empty, any
    /// clause type has no exemplars, or any exemplar text is blank.
    pub fn new(examples: BTreeMap<String, Vec<String>>) -> Result<Self> {
        let corpus = Self { examples };
        corpus.validate()?;
        Ok(corpus)
    }

    /// Parse a corpus from a JSON object of `clause_type -> [exemplar, ...]`.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::ConfigError`] on malformed JSON or an invalid
    /// corpus shape.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let examples: BTreeMap<String, Vec<String>> = serde_json::from_str(json)
            .map_err(|e| MatchError::ConfigError(format!("malformed exemplar corpus: {e}")))?;
        Self::new(examples)
    }

    /// Load and parse a corpus from a JSON file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::ConfigError`] if the file cannot be read or
    /// does not contain a valid corpus.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            MatchError::ConfigError(format!(
                "cannot read exemplar corpus '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_json_str(&json)
    }

    fn validate(&self) -> Result<()> {
        if self.examples.is_empty() {
            return Err(MatchError::ConfigError(
                "exemplar corpus is empty; nothing to index".to_string(),
            ));
        }
        for (clause_type, exemplars) in &self.examples {
            if exemplars.is_empty() {
                return Err(MatchError::ConfigError(format!(
                    "clause type '{clause_type}' has no exemplars"
                )));
            }
            if exemplars.iter().any(|e| e.trim().is_empty()) {
                return Err(MatchError::ConfigError(format!(
                    "clause type '{clause_type}' contains a blank exemplar"
                )));
            }
        }
        Ok(())
    }

    /// Read-only view of the full `clause_type -> exemplars` mapping.
    pub fn examples(&self) -> &BTreeMap<String, Vec<String>> {
        &self.examples
    }

    /// Number of distinct clause types.
    pub fn type_count(&self) -> usize {
        self.examples.len()
    }

    /// Total number of exemplars across all clause types.
    pub fn exemplar_count(&self) -> usize {
        self.examples.values().map(Vec::len).sum()
    }

    /// Flatten into parallel `(texts, types)` sequences.
    ///
    /// Index `i` refers to the same exemplar in both: `texts[i]` is the
    /// exemplar string and `types[i]` its clause type. Order is the map's
    /// deterministic iteration order.
    pub(crate) fn flatten(&self) -> (Vec<String>, Vec<String>) {
        let mut texts = Vec::with_capacity(self.exemplar_count());
        let mut types = Vec::with_capacity(self.exemplar_count());
        for (clause_type, exemplars) in &self.examples {
            for exemplar in exemplars {
                texts.push(exemplar.clone());
                types.push(clause_type.clone());
            }
        }
        (texts, types)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_corpus() {
        let corpus = ClauseCorpus::from_json_str(
            r#"{"confidentiality": ["Keep it secret."], "termination": ["May end it.", "30 days notice."]}"#,
        )
        .unwrap();
        assert_eq!(corpus.type_count(), 2);
        assert_eq!(corpus.exemplar_count(), 3);
    }

    #[test]
    fn empty_corpus_is_a_config_error() {
        let err = ClauseCorpus::from_json_str("{}").unwrap_err();
        assert!(matches!(err, MatchError::ConfigError(_)));
    }

    #[test]
    fn clause_type_without_exemplars_is_rejected() {
        let err = ClauseCorpus::from_json_str(r#"{"liability": []}"#).unwrap_err();
        assert!(matches!(err, MatchError::ConfigError(_)));
    }

    #[test]
    fn blank_exemplar_is_rejected() {
        let err = ClauseCorpus::from_json_str(r#"{"liability": ["   "]}"#).unwrap_err();
        assert!(matches!(err, MatchError::ConfigError(_)));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = ClauseCorpus::from_json_str("not json").unwrap_err();
        assert!(matches!(err, MatchError::ConfigError(_)));
    }

    #[test]
    fn flatten_keeps_parallel_order() {
        let corpus = ClauseCorpus::from_json_str(
            r#"{"a": ["x", "y"], "b": ["z"]}"#,
        )
        .unwrap();
        let (texts, types) = corpus.flatten();
        assert_eq!(texts, vec!["x", "y", "z"]);
        assert_eq!(types, vec!["a", "a", "b"]);
    }

    #[test]
    fn bundled_corpus_parses() {
        let corpus =
            ClauseCorpus::from_json_str(include_str!("../data/clause_examples.json")).unwrap();
        assert!(corpus.type_count() >= 6);
        assert!(corpus.exemplar_count() >= corpus.type_count());
    }
}
