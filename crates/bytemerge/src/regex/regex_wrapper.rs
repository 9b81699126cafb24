//! # Regex Wrapper
//!
//! One split-pattern interface over the `regex` and `fancy_regex` engines.

use core::ops::Range;
use std::borrow::Cow;

/// A pattern failed to compile, or a `fancy_regex` scan failed.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorWrapper {
    /// From `regex`.
    #[error(transparent)]
    Basic(#[from] regex::Error),

    /// From `fancy_regex`.
    #[error(transparent)]
    Fancy(#[from] fancy_regex::Error),
}

/// A split pattern, tagged with the engine that should compile it.
///
/// Patterns borrow `'static` text when built from constants,
/// so the stock patterns are `const`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum RegexWrapperPattern {
    /// Compile with `regex`.
    Basic(Cow<'static, str>),

    /// Compile with `fancy_regex`; for look-around and possessive quantifiers.
    Fancy(Cow<'static, str>),

    /// Compile with `regex` if it accepts the pattern, else `fancy_regex`.
    Adaptive(Cow<'static, str>),
}

impl From<&str> for RegexWrapperPattern {
    fn from(pattern: &str) -> Self {
        Self::Adaptive(Cow::Owned(pattern.to_string()))
    }
}

impl From<String> for RegexWrapperPattern {
    fn from(pattern: String) -> Self {
        Self::Adaptive(Cow::Owned(pattern))
    }
}

fn compile_basic(pattern: &str) -> Result<RegexWrapper, ErrorWrapper> {
    Ok(RegexWrapper::Basic(regex::Regex::new(pattern)?))
}

fn compile_fancy(pattern: &str) -> Result<RegexWrapper, ErrorWrapper> {
    Ok(RegexWrapper::Fancy(fancy_regex::Regex::new(pattern)?))
}

impl RegexWrapperPattern {
    /// Compile the pattern.
    ///
    /// For [`RegexWrapperPattern::Adaptive`], a `regex` rejection is not an
    /// error; only the `fancy_regex` error is reported.
    pub fn compile(&self) -> Result<RegexWrapper, ErrorWrapper> {
        match self {
            Self::Basic(pattern) => compile_basic(pattern),
            Self::Fancy(pattern) => compile_fancy(pattern),
            Self::Adaptive(pattern) => {
                compile_basic(pattern).or_else(|_| compile_fancy(pattern))
            }
        }
    }
}

/// A compiled split pattern.
#[derive(Debug, Clone)]
pub enum RegexWrapper {
    /// A `regex::Regex`.
    Basic(regex::Regex),

    /// A `fancy_regex::Regex`.
    Fancy(fancy_regex::Regex),
}

impl RegexWrapper {
    /// The name of the engine this pattern compiled under.
    pub fn engine(&self) -> &'static str {
        match self {
            Self::Basic(_) => "regex",
            Self::Fancy(_) => "fancy_regex",
        }
    }

    /// Iterate the byte ranges of successive non-overlapping matches.
    pub fn find_iter<'r, 'h>(
        &'r self,
        haystack: &'h str,
    ) -> MatchRanges<'r, 'h> {
        match self {
            Self::Basic(regex) => MatchRanges::Basic(regex.find_iter(haystack)),
            Self::Fancy(regex) => MatchRanges::Fancy(regex.find_iter(haystack)),
        }
    }
}

/// Match ranges from [`RegexWrapper::find_iter`].
///
/// `fancy_regex` can fail mid-scan (e.g. on the backtrack limit);
/// that surfaces as an `Err` item.
pub enum MatchRanges<'r, 'h> {
    /// Matches from `regex`.
    Basic(regex::Matches<'r, 'h>),

    /// Matches from `fancy_regex`.
    Fancy(fancy_regex::Matches<'r, 'h>),
}

impl Iterator for MatchRanges<'_, '_> {
    type Item = Result<Range<usize>, ErrorWrapper>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Basic(matches) => matches.next().map(|m| Ok(m.range())),
            Self::Fancy(matches) => matches
                .next()
                .map(|m| m.map(|m| m.range()).map_err(ErrorWrapper::from)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adaptive_falls_back_to_fancy() {
        let re = RegexWrapperPattern::from(r"\w+").compile().unwrap();
        assert_eq!(re.engine(), "regex");

        let re = RegexWrapperPattern::from(r"\s+(?!\S)").compile().unwrap();
        assert_eq!(re.engine(), "fancy_regex");
    }

    #[test]
    fn test_bad_pattern() {
        assert!(matches!(
            RegexWrapperPattern::from(r"(").compile(),
            Err(ErrorWrapper::Fancy(_))
        ));
        assert!(matches!(
            RegexWrapperPattern::Basic(r"a(?!b)".into()).compile(),
            Err(ErrorWrapper::Basic(_))
        ));
    }

    #[test]
    fn test_find_iter_ranges() {
        let haystack = "ab cd";
        for pattern in [
            RegexWrapperPattern::Basic(r"\w+".into()),
            RegexWrapperPattern::Fancy(r"\w+".into()),
        ] {
            let re = pattern.compile().unwrap();
            let ranges = re
                .find_iter(haystack)
                .collect::<Result<Vec<_>, _>>()
                .unwrap();
            assert_eq!(ranges, vec![0..2, 3..5]);
        }
    }
}
