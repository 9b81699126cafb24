//! # Dictionary ``{ T -> Vec<u8> }`` Token Decoder

use std::sync::Arc;

use crate::{
    decoders::TokenDecoder,
    errors::BMResult,
    types::TokenType,
    vocab::Vocabulary,
};

/// A token dictionary [`TokenDecoder<T>`].
#[derive(Debug, Clone)]
pub struct DictionaryDecoder<T: TokenType> {
    /// Token to bytes mapping.
    ///
    /// Includes byte tokens, merge results and special words.
    pub vocab: Arc<Vocabulary<T>>,
}

impl<T: TokenType> DictionaryDecoder<T> {
    /// Creates a new Decoder.
    ///
    /// ## Arguments
    /// * `vocab` - The token to bytes vocabulary.
    ///
    /// ## Returns
    /// A new `DictionaryDecoder` instance.
    pub fn init(vocab: Arc<Vocabulary<T>>) -> Self {
        Self { vocab }
    }
}

impl<T: TokenType> TokenDecoder<T> for DictionaryDecoder<T> {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, tokens, buf)))]
    fn try_decode_append(
        &self,
        tokens: &[T],
        buf: &mut Vec<u8>,
    ) -> BMResult<()> {
        for &t in tokens {
            buf.extend_from_slice(self.vocab.try_span(t)?);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::BytemergeError,
        types::static_is_send_sync_check,
        vocab::{MergeTable, SpecialVocab},
    };

    fn build_decoder() -> DictionaryDecoder<u16> {
        let merges: MergeTable<u16> = MergeTable::from_pairs([(104, 105), (256, 33)]).unwrap();
        let specials = SpecialVocab::default().with_special_words([("<|eot|>", 5000)]);
        DictionaryDecoder::init(Arc::new(
            Vocabulary::from_merges(&merges, &specials).unwrap(),
        ))
    }

    #[test]
    fn test_dictionary_decoder() {
        let decoder = build_decoder();
        static_is_send_sync_check(&decoder);

        assert_eq!(decoder.try_decode_to_bytes(&[]).unwrap(), Vec::<u8>::new());
        assert_eq!(decoder.try_decode_to_string(&[257, 32, 256]).unwrap(), "hi! hi");
        assert_eq!(
            decoder.try_decode_to_string(&[256, 5000]).unwrap(),
            "hi<|eot|>"
        );
    }

    #[test]
    fn test_undefined_token() {
        let decoder = build_decoder();
        assert!(matches!(
            decoder.try_decode_to_bytes(&[104, 258]),
            Err(BytemergeError::UndefinedToken { token: 258 })
        ));
    }

    #[test]
    fn test_lossy_utf8() {
        let decoder = build_decoder();

        // A lone continuation byte.
        assert_eq!(
            decoder.try_decode_to_string(&[104, 0x80, 105]).unwrap(),
            "h\u{FFFD}i"
        );

        // A two-byte character split across tokens.
        assert_eq!(decoder.try_decode_to_string(&[0xc3, 0xa9]).unwrap(), "\u{e9}");
    }

    #[test]
    fn test_batches() {
        let decoder = build_decoder();
        let batch: Vec<Vec<u16>> = vec![vec![256], vec![], vec![257]];

        assert_eq!(
            decoder.try_decode_batch_to_strings(&batch).unwrap(),
            vec!["hi".to_string(), String::new(), "hi!".to_string()]
        );
        assert_eq!(
            decoder.try_decode_batch_to_bytes(&batch).unwrap(),
            vec![b"hi".to_vec(), vec![], b"hi!".to_vec()]
        );
    }
}
