//! # Vocabulary
//!
//! * [`MergeTable`] - the rank-ordered ``[(T, T) -> T]`` merges.
//! * [`Vocabulary`] - the ``{ T -> Vec<u8> }`` decode dictionary.
//! * [`SpecialVocab`] - reserved ``{ String -> T }`` special words.

pub mod merge_table;
pub mod special_vocab;
pub mod validators;
pub mod vocabulary;

#[doc(inline)]
pub use merge_table::{MergeRecord, MergeTable};
#[doc(inline)]
pub use special_vocab::SpecialVocab;
#[doc(inline)]
pub use vocabulary::{TokenSpanMap, Vocabulary};
