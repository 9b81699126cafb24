//! # Text Chunker Configuration
use crate::regex::{GPT4_SPLIT_PATTERN, RegexWrapperPattern};

/// Declarative configuration for a [`crate::chunking::TextChunker`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkerConfig {
    /// Regex pattern for chunk splitting.
    pub pattern: RegexWrapperPattern,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self::from_pattern(GPT4_SPLIT_PATTERN)
    }
}

impl From<RegexWrapperPattern> for ChunkerConfig {
    fn from(pattern: RegexWrapperPattern) -> Self {
        Self { pattern }
    }
}

impl ChunkerConfig {
    /// Create a new chunker configuration with the given split pattern.
    ///
    /// ## Arguments
    /// * `pattern` - The chunk split pattern.
    pub fn from_pattern<P>(pattern: P) -> Self
    where
        P: Into<RegexWrapperPattern>,
    {
        Self {
            pattern: pattern.into(),
        }
    }

    /// Replace the split pattern.
    ///
    /// ## Arguments
    /// * `pattern` - The new chunk split pattern.
    ///
    /// ## Returns
    /// The updated `ChunkerConfig` instance.
    pub fn with_pattern<P>(
        self,
        pattern: P,
    ) -> Self
    where
        P: Into<RegexWrapperPattern>,
    {
        Self {
            pattern: pattern.into(),
        }
    }

    /// Get the split pattern.
    pub fn pattern(&self) -> &RegexWrapperPattern {
        &self.pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_gpt4() {
        let config = ChunkerConfig::default();
        assert_eq!(config.pattern(), &GPT4_SPLIT_PATTERN);

        let config = config.with_pattern(r"\w+");
        assert_eq!(
            config.pattern(),
            &RegexWrapperPattern::Adaptive(r"\w+".into())
        );
    }
}
