//! # Special Words Vocabulary

use crate::types::{BMHashMap, TokenType};

/// Token vocabulary for special words.
///
/// Reserved ``{ String -> T }`` entries; never produced by training, and
/// never part of merge selection.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct SpecialVocab<T: TokenType> {
    /// The map of special words to tokens.
    word_map: BMHashMap<String, T>,
}

impl<T: TokenType> From<BMHashMap<String, T>> for SpecialVocab<T> {
    fn from(word_map: BMHashMap<String, T>) -> Self {
        Self { word_map }
    }
}

impl<T: TokenType> SpecialVocab<T> {
    /// Get the word map.
    pub fn word_map(&self) -> &BMHashMap<String, T> {
        &self.word_map
    }

    /// Get the number of special words in the vocab.
    pub fn len(&self) -> usize {
        self.word_map.len()
    }

    /// Check if the vocab is empty.
    pub fn is_empty(&self) -> bool {
        self.word_map.is_empty()
    }

    /// Add a word to the vocab.
    pub fn add_str_word(
        &mut self,
        word: &str,
        token: T,
    ) {
        self.word_map.insert(word.to_string(), token);
    }

    /// Extend the vocabulary with the given special words.
    ///
    /// ## Arguments
    /// * `special_words` - An iterator of word strings and tokens.
    ///
    /// ## Returns
    /// The updated `SpecialVocab` instance.
    pub fn with_special_words<W, S>(
        self,
        special_words: W,
    ) -> Self
    where
        W: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
    {
        let mut vocab = self;
        for (word, token) in special_words {
            vocab.add_str_word(word.as_ref(), token);
        }
        vocab
    }

    /// Return the associated token for the word, if any.
    pub fn lookup_token(
        &self,
        word: &str,
    ) -> Option<T> {
        self.word_map.get(word).copied()
    }

    /// Get the associated word for a token, if any.
    pub fn lookup_word(
        &self,
        token: T,
    ) -> Option<&str> {
        self.word_map
            .iter()
            .find_map(|(word, &t)| (t == token).then_some(word.as_str()))
    }

    /// Iterate ``(word, token)`` entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, T)> {
        self.word_map.iter().map(|(w, &t)| (w.as_str(), t))
    }

    /// The lowest special token, if any.
    pub fn min_token(&self) -> Option<T> {
        self.word_map.values().min().copied()
    }
}
