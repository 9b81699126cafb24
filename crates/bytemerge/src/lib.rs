//! # `bytemerge` Byte-Level BPE Tokenizer
//!
//! `bytemerge` learns byte pair merges from a text corpus, and uses them
//! to convert text to and from token ids.
//!
//! See:
//! * [`chunking`] to split text into chunks; merges never cross a chunk.
//! * [`training`] to learn a [`vocab::MergeTable`] and [`vocab::Vocabulary`].
//! * [`encoders`] to encode text into tokens, lowest merge rank first.
//! * [`decoders`] to decode tokens into text.
//! * [`RegexBpeTokenizer`] for all of the above behind one facade.
//! * [`word_tokenizer`] for a whole-word tokenizer with an unknown-word fallback.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//! * ``rayon``
//!
//! #### feature: ``ahash``
//!
//! This swaps all HashMap/HashSet implementations for ``ahash``; which is a performance
//! win on many/(most?) modern CPUs.
//!
//! This is done by the ``types::BMHash{*}`` type alias machinery.
//!
//! #### feature: ``rayon``
//!
//! This enables batch parallelism wrappers using the ``rayon`` crate.
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//! This is only useful for timing tracing of the library itself.
//!
//! ## Logging
//!
//! Training reports through the [`log`] facade: progress at ``info``,
//! and every merge at ``debug``. No logger is installed by the library.
//!
//! ## Example
//!
//! ```rust
//! use bytemerge::{ChunkerConfig, RegexBpeTokenizer};
//!
//! let mut tokenizer: RegexBpeTokenizer<u32> =
//!     RegexBpeTokenizer::new(ChunkerConfig::default()).unwrap();
//!
//! let ambiguous = tokenizer
//!     .train("the cat sat on the mat; the cat sat", 270)
//!     .unwrap();
//! println!("ties while training: {ambiguous}");
//!
//! let text = "the mat sat on the cat";
//! let tokens = tokenizer.encode_ordinary(text).unwrap();
//! assert!(tokens.len() < text.len());
//! assert_eq!(tokenizer.decode(&tokens).unwrap(), text);
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod chunking;
pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod regex;
pub mod support;
pub mod tokenizer;
pub mod training;
pub mod types;
pub mod vocab;
pub mod word_tokenizer;

#[doc(inline)]
pub use chunking::{ChunkerConfig, TextChunker};
#[doc(inline)]
pub use decoders::{DictionaryDecoder, TokenDecoder};
#[doc(inline)]
pub use encoders::{MergeScanEncoder, TokenEncoder};
#[doc(inline)]
pub use errors::{BMResult, BytemergeError};
#[doc(inline)]
pub use tokenizer::{RegexBpeTokenizer, TrainingState};
#[doc(inline)]
pub use types::{Pair, TokenType};
#[doc(inline)]
pub use vocab::{MergeTable, SpecialVocab, Vocabulary};
#[doc(inline)]
pub use word_tokenizer::{WordTokenizer, WordTokenizerError};
