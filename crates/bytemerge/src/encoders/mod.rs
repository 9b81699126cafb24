//! # Token Encoders
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use bytemerge::{
//!     chunking::{ChunkerConfig, TextChunker},
//!     encoders::{MergeScanEncoder, TokenEncoder},
//!     vocab::MergeTable,
//! };
//!
//! let chunker = TextChunker::from_config(&ChunkerConfig::default()).unwrap();
//! let merges: MergeTable<u32> = MergeTable::from_pairs([(97, 97)]).unwrap();
//!
//! let encoder = MergeScanEncoder::init(Arc::new(chunker), Arc::new(merges));
//! assert_eq!(encoder.try_encode("aaaa").unwrap(), vec![256, 256]);
//! ```

mod merge_scan_encoder;
mod token_encoder;

#[doc(inline)]
pub use merge_scan_encoder::MergeScanEncoder;
#[doc(inline)]
pub use token_encoder::TokenEncoder;
