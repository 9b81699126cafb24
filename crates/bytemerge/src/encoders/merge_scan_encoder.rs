//! # Merge Scan Encoder

use std::sync::Arc;

use crate::{
    chunking::TextChunker,
    encoders::TokenEncoder,
    training::merge_tokens,
    types::TokenType,
    vocab::MergeTable,
};

/// A [`TokenEncoder`] which greedily applies the lowest-ranked merge.
///
/// Per chunk: start from the raw byte tokens; while any adjacent pair is in
/// the merge table, merge every occurrence of the lowest-ranked one.
///
/// Each pass rescans the whole chunk.
#[derive(Debug, Clone)]
pub struct MergeScanEncoder<T: TokenType> {
    chunker: Arc<TextChunker>,
    merges: Arc<MergeTable<T>>,
}

impl<T: TokenType> MergeScanEncoder<T> {
    /// Create a new encoder.
    ///
    /// ## Arguments
    /// * `chunker` - The text chunker; must match the one used in training.
    /// * `merges` - The learned merges.
    pub fn init(
        chunker: Arc<TextChunker>,
        merges: Arc<MergeTable<T>>,
    ) -> Self {
        Self { chunker, merges }
    }

    /// Get the merge table.
    pub fn merges(&self) -> &Arc<MergeTable<T>> {
        &self.merges
    }

    /// Find the lowest-ranked mergeable pair in `tokens`.
    fn best_merge(
        &self,
        tokens: &[T],
    ) -> Option<(usize, (T, T))> {
        tokens
            .windows(2)
            .filter_map(|w| {
                let pair = (w[0], w[1]);
                self.merges.lookup_rank(&pair).map(|rank| (rank, pair))
            })
            .min_by_key(|&(rank, _)| rank)
    }
}

impl<T: TokenType> TokenEncoder<T> for MergeScanEncoder<T> {
    fn chunker(&self) -> &Arc<TextChunker> {
        &self.chunker
    }

    fn encode_append_chunk(
        &self,
        chunk: &[u8],
        tokens: &mut Vec<T>,
    ) {
        let mut work: Vec<T> = chunk.iter().map(|&b| b.into()).collect();

        while let Some((rank, pair)) = self.best_merge(&work) {
            let token = self.merges.records()[rank].token;
            work = merge_tokens(&work, pair, token);
        }

        tokens.extend(work);
    }
}
