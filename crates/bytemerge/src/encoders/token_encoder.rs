//! # Token Encoder Trait

use std::sync::Arc;

use crate::{chunking::TextChunker, errors::BMResult, types::TokenType};

/// A trait for token encoders.
pub trait TokenEncoder<T: TokenType>: Send + Sync {
    /// Return the attached text chunker.
    ///
    /// ## Returns
    /// A reference to the internal `TextChunker` arc.
    fn chunker(&self) -> &Arc<TextChunker>;

    /// Encode a single chunk, appending to a target buffer.
    ///
    /// ## Arguments
    /// * `chunk` - The raw bytes of one chunk.
    /// * `tokens` - The target token buffer to append to.
    fn encode_append_chunk(
        &self,
        chunk: &[u8],
        tokens: &mut Vec<T>,
    );

    /// Encode text, appending to a target buffer.
    ///
    /// Each chunk is encoded independently; merges never cross chunks.
    ///
    /// ## Arguments
    /// * `text` - The string slice to encode.
    /// * `tokens` - The target token buffer to append to.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text, tokens)))]
    fn try_encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) -> BMResult<()> {
        for chunk in self.chunker().chunks(text) {
            let chunk = chunk?;
            self.encode_append_chunk(chunk.as_str(text).as_bytes(), tokens);
        }
        Ok(())
    }

    /// Encode text into tokens.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    ///
    /// ## Returns
    /// A `BMResult` containing the vector of tokens.
    fn try_encode<S: AsRef<str>>(
        &self,
        text: S,
    ) -> BMResult<Vec<T>> {
        let text = text.as_ref();
        let mut tokens = Vec::with_capacity(text.len() / 2);
        self.try_encode_append(text, &mut tokens)?;
        Ok(tokens)
    }

    /// Encode a batch of text into tokens.
    ///
    /// ## Arguments
    /// * `batch` - A slice of strings to encode.
    ///
    /// ## Returns
    /// A `BMResult` containing the vector of token vectors.
    fn try_encode_batch<S: AsRef<str> + Sync>(
        &self,
        batch: &[S],
    ) -> BMResult<Vec<Vec<T>>> {
        batch.iter().map(|s| self.try_encode(s)).collect()
    }
}
