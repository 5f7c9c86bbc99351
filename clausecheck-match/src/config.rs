//! Configuration for the clause matcher.

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};

/// Tunable parameters for clause matching.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatcherConfig {
    /// Soft character budget per chunk (oversized paragraphs still become
    /// one chunk).
    pub max_chars: usize,
    /// Number of nearest exemplars retrieved per chunk before thresholding.
    pub top_k: usize,
    /// Minimum cosine similarity for a match to survive.
    pub similarity_threshold: f32,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self { max_chars: 800, top_k: 3, similarity_threshold: 0.45 }
    }
}

impl MatcherConfig {
    /// Create a new builder for constructing a [`MatcherConfig`].
    pub fn builder() -> MatcherConfigBuilder {
        MatcherConfigBuilder::default()
    }
}

/// Builder for a validated [`MatcherConfig`].
#[derive(Debug, Clone, Default)]
pub struct MatcherConfigBuilder {
    config: MatcherConfig,
}

impl MatcherConfigBuilder {
    /// Set the soft character budget per chunk.
    pub fn max_chars(mut self, max_chars: usize) -> Self {
        self.config.max_chars = max_chars;
        self
    }

    /// Set the number of nearest exemplars retrieved per chunk.
    pub fn top_k(mut self, top_k: usize) -> Self {
        self.config.top_k = top_k;
        self
    }

    /// Set the minimum similarity score for a match to survive.
    pub fn similarity_threshold(mut self, threshold: f32) -> Self {
        self.config.similarity_threshold = threshold;
        self
    }

    /// Build the [`MatcherConfig`], validating the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::ConfigError`] if `max_chars == 0`,
    /// `top_k == 0`, or the threshold is not a finite number.
    pub fn build(self) -> Result<MatcherConfig> {
        if self.config.max_chars == 0 {
            return Err(MatchError::ConfigError("max_chars must be greater than zero".to_string()));
        }
        if self.config.top_k == 0 {
            return Err(MatchError::ConfigError("top_k must be greater than zero".to_string()));
        }
        if !self.config.similarity_threshold.is_finite() {
            return Err(MatchError::ConfigError(format!(
                "similarity_threshold must be finite, got {}",
                self.config.similarity_threshold
            )));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_parameters() {
        let config = MatcherConfig::default();
        assert_eq!(config.max_chars, 800);
        assert_eq!(config.top_k, 3);
        assert!((config.similarity_threshold - 0.45).abs() < f32::EPSILON);
    }

    #[test]
    fn builder_rejects_zero_max_chars() {
        assert!(MatcherConfig::builder().max_chars(0).build().is_err());
    }

    #[test]
    fn builder_rejects_zero_top_k() {
        assert!(MatcherConfig::builder().top_k(0).build().is_err());
    }

    #[test]
    fn builder_rejects_non_finite_threshold() {
        assert!(MatcherConfig::builder().similarity_threshold(f32::NAN).build().is_err());
    }

    #[test]
    fn builder_accepts_custom_parameters() {
        let config = MatcherConfig::builder()
            .max_chars(40)
            .top_k(1)
            .similarity_threshold(0.6)
            .build()
            .unwrap();
        assert_eq!(config.max_chars, 40);
        assert_eq!(config.top_k, 1);
    }
}
