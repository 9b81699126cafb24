//! # Text Chunking
//!
//! Text is split into chunks before byte-level BPE; merges never cross
//! a chunk boundary.
//!
//! [`ChunkerConfig`] describes the split pattern;
//! [`TextChunker`] is the compiled, run-time chunker.

pub mod chunker_config;
pub mod text_chunker;

#[doc(inline)]
pub use chunker_config::ChunkerConfig;
#[doc(inline)]
pub use text_chunker::{ChunkRef, Chunks, TextChunker};
