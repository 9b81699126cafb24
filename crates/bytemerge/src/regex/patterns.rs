//! # Chunking Patterns

use std::borrow::Cow;

use crate::regex::RegexWrapperPattern;

/// Join string literals into a regex alternation: `"a" | "b" | "c"`.
///
/// ```rust
/// use bytemerge::join_patterns;
///
/// assert_eq!(join_patterns!("a", "b", "c"), "a|b|c");
/// assert_eq!(join_patterns!("only"), "only");
/// ```
#[macro_export]
macro_rules! join_patterns {
    ($first:literal $(, $rest:literal)* $(,)?) => {
        concat!($first $(, "|", $rest)*)
    };
}

/// The GPT-2 chunking pattern.
pub const GPT2_SPLIT_PATTERN: RegexWrapperPattern =
    RegexWrapperPattern::Fancy(Cow::Borrowed(join_patterns!(
        r"'(?:[sdmt]|ll|ve|re)",
        r" ?\p{L}+",
        r" ?\p{N}+",
        r" ?[^\s\p{L}\p{N}]+",
        r"\s+(?!\S)",
        r"\s+",
    )));

/// The GPT-4 chunking pattern; the default.
///
/// Separates, in priority order:
/// * contractions (`'s`, `'ll`, ... case-insensitive),
/// * letter runs with at most one leading non-letter/non-digit,
/// * runs of 1-3 digits,
/// * punctuation runs with an optional leading space and trailing newline,
/// * whitespace ending in a newline,
/// * whitespace not followed by non-whitespace,
/// * any remaining whitespace run.
pub const GPT4_SPLIT_PATTERN: RegexWrapperPattern =
    RegexWrapperPattern::Fancy(Cow::Borrowed(join_patterns!(
        r"'(?i:[sdmt]|ll|ve|re)",
        r"[^\r\n\p{L}\p{N}]?+\p{L}+",
        r"\p{N}{1,3}",
        r" ?[^\s\p{L}\p{N}]++[\r\n]?",
        r"\s*[\r\n]",
        r"\s+(?!\S)",
        r"\s+",
    )));
