//! Deterministic regex screening for expected contract boilerplate.
//!
//! Complements the semantic matcher: where the matcher finds what a chunk
//! *resembles*, the rule set flags whether standard clauses appear anywhere
//! in the document at all. Matching is case-insensitive over the full text.

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AuditError, Result};

/// One boilerplate check: a labeled pattern tested against the whole
/// document.
#[derive(Debug, Clone)]
pub struct Rule {
    id: String,
    description: String,
    pattern: Regex,
}

impl Rule {
    /// Create a rule from a regex pattern, compiled case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::ConfigError`] if the pattern does not compile.
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        pattern: &str,
    ) -> Result<Self> {
        let id = id.into();
        let pattern = Regex::new(&format!("(?i){pattern}")).map_err(|e| {
            AuditError::ConfigError(format!("invalid pattern for rule '{id}': {e}"))
        })?;
        Ok(Self { id, description: description.into(), pattern })
    }

    /// The rule's stable identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable description of what the rule looks for.
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// The outcome of one rule against one document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuleFlag {
    /// Identifier of the rule that produced this flag.
    pub id: String,
    /// Description of the checked boilerplate.
    pub description: String,
    /// Whether the pattern was found anywhere in the document.
    pub present: bool,
}

/// An ordered list of rules applied as a unit.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Build a rule set from an explicit list of rules.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The standard contract boilerplate screen: payment terms, liability,
    /// auto-renewal, termination, confidentiality, and penalty language.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::ConfigError`] if a built-in pattern fails to
    /// compile.
    pub fn standard() -> Result<Self> {
        Ok(Self::new(vec![
            Rule::new(
                "payment_terms",
                "Payment terms",
                r"(payment|invoice|due within|net\s*\d{1,2})",
            )?,
            Rule::new(
                "liability",
                "Liability / limitation of liability",
                r"(liability|limitation of liability|liable for)",
            )?,
            Rule::new(
                "auto_renewal",
                "Auto-renewal",
                r"(auto-?renew|automatically renew|renewal will be)",
            )?,
            Rule::new(
                "termination",
                "Termination clause",
                r"(terminate|termination|terminate for convenience)",
            )?,
            Rule::new(
                "confidentiality",
                "Confidentiality / NDA",
                r"(confidential|non[- ]disclosure|nda|confidential information)",
            )?,
            Rule::new(
                "penalty",
                "Penalty or late fee",
                r"(late fee|penalt|interest at .*%|liquidated damages)",
            )?,
        ]))
    }

    /// Number of rules in the set.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set contains no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Test every rule against `text`, producing one flag per rule in rule
    /// order.
    pub fn run(&self, text: &str) -> Vec<RuleFlag> {
        let flags: Vec<RuleFlag> = self
            .rules
            .iter()
            .map(|rule| RuleFlag {
                id: rule.id.clone(),
                description: rule.description.clone(),
                present: rule.pattern.is_match(text),
            })
            .collect();
        debug!(
            rule_count = flags.len(),
            present_count = flags.iter().filter(|f| f.present).count(),
            "ran boilerplate rules"
        );
        flags
    }
}
