//! # Parallel Encoder

use std::sync::Arc;

use crate::{
    chunking::TextChunker,
    encoders::TokenEncoder,
    errors::BMResult,
    types::TokenType,
};

/// Batch-Level Parallel Encoder Wrapper.
///
/// Enables ``rayon`` encoding of batches when available.
#[derive(Debug, Clone)]
pub struct ParallelRayonEncoder<T: TokenType, D: TokenEncoder<T>> {
    /// Inner encoder.
    pub inner: D,

    _marker: std::marker::PhantomData<T>,
}

impl<T, D> ParallelRayonEncoder<T, D>
where
    T: TokenType,
    D: TokenEncoder<T>,
{
    /// Create a new parallel encoder.
    ///
    /// ## Arguments
    /// * `inner` - The token encoder to wrap.
    ///
    /// ## Returns
    /// A new `ParallelRayonEncoder` instance.
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T, D> TokenEncoder<T> for ParallelRayonEncoder<T, D>
where
    T: TokenType,
    D: TokenEncoder<T>,
{
    fn chunker(&self) -> &Arc<TextChunker> {
        self.inner.chunker()
    }

    fn encode_append_chunk(
        &self,
        chunk: &[u8],
        tokens: &mut Vec<T>,
    ) {
        self.inner.encode_append_chunk(chunk, tokens)
    }

    fn try_encode_batch<S: AsRef<str> + Sync>(
        &self,
        batch: &[S],
    ) -> BMResult<Vec<Vec<T>>> {
        use rayon::prelude::*;

        batch
            .par_iter()
            .map(|text| self.inner.try_encode(text))
            .collect()
    }
}
