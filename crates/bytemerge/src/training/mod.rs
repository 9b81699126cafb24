//! # Vocabulary Training
//!
//! Support for learning byte pair merges from text.
//!
//! Training requires:
//! * [`crate::chunking::ChunkerConfig`] - a text splitting config.
//!   * This can be built from just a regex pattern.
//! * a target vocab size, ``>= 256``.
//!
//! ## Training Example
//!
//! ```rust
//! use bytemerge::{
//!     regex::GPT4_SPLIT_PATTERN,
//!     training::{BpeTrainerOptions, TrainResults},
//! };
//!
//! let mut trainer = BpeTrainerOptions::new(GPT4_SPLIT_PATTERN, 300)
//!     .init::<u32>()
//!     .unwrap();
//!
//! trainer
//!     .update_from_samples(["hello world", "hello there"])
//!     .unwrap();
//!
//! let TrainResults { merges, vocab, .. } = trainer.train().unwrap();
//! assert_eq!(vocab.len(), 256 + merges.len());
//! ```

mod bpe_trainer;
mod merge_selector;
mod pair_counts;
mod token_span_buffer;

#[doc(inline)]
pub use bpe_trainer::{BpeTrainer, BpeTrainerOptions, MergeRound, TrainResults};
#[doc(inline)]
pub use merge_selector::{MergeSelection, select_merge};
#[doc(inline)]
pub use pair_counts::{PairCountMap, PairCounts};
#[doc(inline)]
pub use token_span_buffer::{TokenSpanBuf, merge_tokens};
