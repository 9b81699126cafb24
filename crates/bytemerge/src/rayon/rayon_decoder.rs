//! # Parallel Decoder

use crate::{
    decoders::TokenDecoder,
    errors::BMResult,
    support::strings::string_from_utf8_lossy,
    types::TokenType,
};

/// Batch-Level Parallel Decoder Wrapper.
///
/// Enables ``rayon`` decoding of batches when available.
#[derive(Debug, Clone)]
pub struct ParallelRayonDecoder<T: TokenType, D: TokenDecoder<T>> {
    /// Wrapped decoder.
    pub inner: D,

    _marker: std::marker::PhantomData<T>,
}

impl<T, D> ParallelRayonDecoder<T, D>
where
    T: TokenType,
    D: TokenDecoder<T>,
{
    /// Create a new parallel token decoder.
    ///
    /// ## Arguments
    /// * `inner` - The token decoder to wrap.
    ///
    /// ## Returns
    /// A new `ParallelRayonDecoder` instance.
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T, D> TokenDecoder<T> for ParallelRayonDecoder<T, D>
where
    T: TokenType,
    D: TokenDecoder<T>,
{
    fn try_decode_append(
        &self,
        tokens: &[T],
        buf: &mut Vec<u8>,
    ) -> BMResult<()> {
        self.inner.try_decode_append(tokens, buf)
    }

    fn try_decode_batch_to_bytes<V: AsRef<[T]> + Sync>(
        &self,
        batch: &[V],
    ) -> BMResult<Vec<Vec<u8>>> {
        use rayon::prelude::*;

        batch
            .par_iter()
            .map(|tokens| self.inner.try_decode_to_bytes(tokens.as_ref()))
            .collect()
    }

    fn try_decode_batch_to_strings<V: AsRef<[T]> + Sync>(
        &self,
        batch: &[V],
    ) -> BMResult<Vec<String>> {
        use rayon::prelude::*;

        batch
            .par_iter()
            .map(|tokens| {
                let buf = self.inner.try_decode_to_bytes(tokens.as_ref())?;
                Ok(string_from_utf8_lossy(buf))
            })
            .collect()
    }
}
