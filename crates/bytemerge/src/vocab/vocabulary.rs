//! # Vocabulary ``{ T -> Vec<u8> }``

use crate::{
    errors::{BMResult, BytemergeError},
    types::{BMHashMap, TokenType},
    vocab::{MergeRecord, MergeTable, SpecialVocab, validators::U8_SIZE},
};

/// `{ T -> Vec<u8> }` map.
///
/// ## Style Hints
/// Instance names should prefer `token_spans`, or `token_span_map`.
pub type TokenSpanMap<T> = BMHashMap<T, Vec<u8>>;

/// Token id to byte sequence vocabulary.
///
/// * ``0..=255`` are always the single byte spans.
/// * ``256..`` are merge results; the span of ``(a, b) -> t`` is
///   ``span(a) ++ span(b)``.
/// * special tokens map to the UTF-8 bytes of their word.
///
/// A vocabulary is a pure function of a [`MergeTable`] and a [`SpecialVocab`];
/// see [`Vocabulary::from_merges`].
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary<T: TokenType> {
    token_spans: TokenSpanMap<T>,
}

impl<T: TokenType> Default for Vocabulary<T> {
    fn default() -> Self {
        let mut token_spans = TokenSpanMap::with_capacity(U8_SIZE);
        for b in 0..=u8::MAX {
            token_spans.insert(b.into(), vec![b]);
        }
        Self { token_spans }
    }
}

impl<T: TokenType> Vocabulary<T> {
    /// Derive a vocabulary from the base bytes, merges, and special words.
    ///
    /// ## Arguments
    /// * `merges` - the learned merges; replayed in rank order.
    /// * `specials` - reserved special words.
    pub fn from_merges(
        merges: &MergeTable<T>,
        specials: &SpecialVocab<T>,
    ) -> BMResult<Self> {
        let mut vocab = Self::default();
        vocab.token_spans.reserve(merges.len() + specials.len());
        for record in merges.iter() {
            vocab.extend_merge(record)?;
        }
        vocab.reserve_specials(specials)?;
        Ok(vocab)
    }

    /// Add the span for a merge result.
    pub fn extend_merge(
        &mut self,
        record: &MergeRecord<T>,
    ) -> BMResult<()> {
        let (a, b) = record.pair;
        let span = [self.try_span(a)?, self.try_span(b)?].concat();
        self.insert_new(record.token, span)
    }

    /// Add special words as literal UTF-8 spans.
    pub fn reserve_specials(
        &mut self,
        specials: &SpecialVocab<T>,
    ) -> BMResult<()> {
        for (word, token) in specials.iter() {
            self.insert_new(token, word.as_bytes().to_vec())?;
        }
        Ok(())
    }

    fn insert_new(
        &mut self,
        token: T,
        span: Vec<u8>,
    ) -> BMResult<()> {
        if let Some(existing) = self.token_spans.get(&token) {
            return Err(BytemergeError::VocabConflict(format!(
                "token {token:?} is already bound to {existing:?}"
            )));
        }
        self.token_spans.insert(token, span);
        Ok(())
    }

    /// Get the ``{ T -> Vec<u8> }`` map.
    pub fn token_spans(&self) -> &TokenSpanMap<T> {
        &self.token_spans
    }

    /// The number of tokens in the vocabulary.
    pub fn len(&self) -> usize {
        self.token_spans.len()
    }

    /// Is the vocabulary empty? (Never true; the byte tokens are always present.)
    pub fn is_empty(&self) -> bool {
        self.token_spans.is_empty()
    }

    /// Get the span for a token, if any.
    pub fn get_span(
        &self,
        token: T,
    ) -> Option<&[u8]> {
        self.token_spans.get(&token).map(Vec::as_slice)
    }

    /// Get the span for a token.
    ///
    /// ## Returns
    /// The span, or [`BytemergeError::UndefinedToken`].
    pub fn try_span(
        &self,
        token: T,
    ) -> BMResult<&[u8]> {
        self.get_span(token)
            .ok_or_else(|| BytemergeError::undefined_token(token))
    }

    /// The highest token in the vocabulary.
    pub fn max_token(&self) -> Option<T> {
        self.token_spans.keys().max().copied()
    }
}
