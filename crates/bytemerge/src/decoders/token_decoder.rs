//! # Token Decoder Trait

use crate::{errors::BMResult, support::strings::string_from_utf8_lossy, types::TokenType};

/// Trait for token decoders.
pub trait TokenDecoder<T: TokenType>: Send + Sync {
    /// Decodes tokens, appending their bytes to a buffer.
    ///
    /// ## Arguments
    /// * `tokens` - A slice of tokens to decode.
    /// * `buf` - The target byte buffer.
    ///
    /// ## Returns
    /// An error on the first token the decoder does not know.
    fn try_decode_append(
        &self,
        tokens: &[T],
        buf: &mut Vec<u8>,
    ) -> BMResult<()>;

    /// Decodes tokens into bytes.
    ///
    /// ## Arguments
    /// * `tokens` - A slice of tokens to decode.
    ///
    /// ## Returns
    /// A `BMResult<Vec<u8>>`.
    fn try_decode_to_bytes(
        &self,
        tokens: &[T],
    ) -> BMResult<Vec<u8>> {
        let mut buf = Vec::with_capacity(tokens.len() * 4);
        self.try_decode_append(tokens, &mut buf)?;
        Ok(buf)
    }

    /// Decodes a batch of tokens.
    ///
    /// ## Arguments
    /// * `batch` - A batch of tokens.
    ///
    /// ## Returns
    /// A `BMResult<Vec<Vec<u8>>>`.
    fn try_decode_batch_to_bytes<V: AsRef<[T]> + Sync>(
        &self,
        batch: &[V],
    ) -> BMResult<Vec<Vec<u8>>> {
        batch
            .iter()
            .map(|tokens| self.try_decode_to_bytes(tokens.as_ref()))
            .collect()
    }

    /// Decodes tokens into a string.
    ///
    /// UTF-8 lossy decoding is used to handle invalid UTF-8 sequences;
    /// the bytes are joined before conversion, so a character split across
    /// tokens survives.
    ///
    /// ## Arguments
    /// * `tokens` - A slice of tokens to decode.
    ///
    /// ## Returns
    /// A `BMResult<String>`.
    fn try_decode_to_string(
        &self,
        tokens: &[T],
    ) -> BMResult<String> {
        self.try_decode_to_bytes(tokens).map(string_from_utf8_lossy)
    }

    /// Decodes a batch of tokens into strings.
    ///
    /// UTF-8 lossy decoding is used to handle invalid UTF-8 sequences.
    ///
    /// ## Arguments
    /// * `batch` - A batch of tokens.
    ///
    /// ## Returns
    /// A `BMResult<Vec<String>>`.
    fn try_decode_batch_to_strings<V: AsRef<[T]> + Sync>(
        &self,
        batch: &[V],
    ) -> BMResult<Vec<String>> {
        batch
            .iter()
            .map(|tokens| self.try_decode_to_string(tokens.as_ref()))
            .collect()
    }
}
