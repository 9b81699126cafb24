//! # Regex Utilities
//!
//! The stock split patterns need look-ahead and possessive quantifiers,
//! which only [`fancy_regex`] supports. [`regex`] is faster, so a pattern
//! of unknown flavour ([`RegexWrapperPattern::Adaptive`]) is compiled with
//! [`regex`] when it can be, and with [`fancy_regex`] otherwise.
//!
//! * [`RegexWrapperPattern`] - a pattern and the engine it targets.
//! * [`RegexWrapper`] - the compiled pattern.
//! * [`GPT2_SPLIT_PATTERN`], [`GPT4_SPLIT_PATTERN`] - stock split patterns.

pub mod patterns;
pub mod regex_wrapper;

#[doc(inline)]
pub use patterns::{GPT2_SPLIT_PATTERN, GPT4_SPLIT_PATTERN};
#[doc(inline)]
pub use regex_wrapper::{ErrorWrapper, MatchRanges, RegexWrapper, RegexWrapperPattern};
