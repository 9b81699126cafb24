//! # Whole-Word Tokenizer
//!
//! A fixed-vocabulary tokenizer over whole words, with an unknown-word
//! fallback. Words are the pattern matches of the text; unmatched gaps
//! (usually whitespace) are dropped. It shares the chunker with the BPE
//! tokenizer, but has its own id space ([`WordId`]) and its own errors
//! ([`WordTokenizerError`]).
//!
//! ```rust
//! use bytemerge::{
//!     ChunkerConfig,
//!     word_tokenizer::{WordTokenizer, build_word_vocab},
//! };
//!
//! let config = ChunkerConfig::from_pattern(r"\w+|[^\w\s]");
//! let vocab = build_word_vocab("Hello, world.", &config).unwrap();
//! let tokenizer = WordTokenizer::new(vocab, &config).unwrap();
//!
//! let ids = tokenizer.encode("Hello, world. Goodbye.").unwrap();
//! assert_eq!(ids[4], tokenizer.unknown_id());
//! assert_eq!(tokenizer.decode(&ids).unwrap(), "Hello, world. <|unk|>.");
//! ```

use crate::{
    chunking::{ChunkRef, ChunkerConfig, TextChunker},
    errors::BytemergeError,
    regex::ErrorWrapper,
    types::{BMHashMap, BMHashSet},
};

/// Word id type; independent of [`crate::TokenType`] ids.
pub type WordId = usize;

/// A ``{ word -> WordId }`` vocabulary.
pub type WordVocab = BMHashMap<String, WordId>;

/// The word every unknown chunk encodes to.
pub const UNKNOWN_WORD: &str = "<|unk|>";

/// The end-of-text word added by [`build_word_vocab`].
pub const END_OF_TEXT_WORD: &str = "<|endoftext|>";

/// Whitespace before this punctuation is removed on decode.
const PUNCTUATION_JOIN_PATTERN: &str = r#"\s+([,.:;?!"()'])"#;

/// Errors from the [`WordTokenizer`].
#[derive(Debug, thiserror::Error)]
pub enum WordTokenizerError {
    /// The vocabulary has no [`UNKNOWN_WORD`] entry.
    #[error("word vocabulary has no {UNKNOWN_WORD:?} entry")]
    MissingUnknownToken,

    /// Two words share an id, so decoding would be ambiguous.
    #[error("word id {id} is bound to both {first:?} and {second:?}")]
    DuplicateWordId {
        /// The shared id.
        id: WordId,
        /// One word bound to the id.
        first: String,
        /// Another word bound to the id.
        second: String,
    },

    /// A word id was not present in the vocabulary.
    #[error("undefined word id: {id}")]
    UndefinedWordId {
        /// The missing id.
        id: WordId,
    },

    /// The chunker failed.
    #[error(transparent)]
    Chunking(#[from] BytemergeError),
}

/// Result type for [`WordTokenizer`] operations.
pub type WordResult<T> = core::result::Result<T, WordTokenizerError>;

/// Iterate the words of `text`: the non-empty pattern matches.
fn split_words<'h>(
    chunker: &TextChunker,
    text: &'h str,
) -> impl Iterator<Item = WordResult<&'h str>> {
    chunker.chunks(text).filter_map(move |chunk| match chunk {
        Ok(ChunkRef::Match(range)) if !range.is_empty() => Some(Ok(&text[range])),
        Ok(_) => None,
        Err(err) => Some(Err(err.into())),
    })
}

/// Build a word vocabulary from the words of `text`.
///
/// Words are the distinct pattern matches, sorted, followed by
/// [`END_OF_TEXT_WORD`] and [`UNKNOWN_WORD`]; ids count up from 0.
pub fn build_word_vocab(
    text: &str,
    config: &ChunkerConfig,
) -> WordResult<WordVocab> {
    let chunker = TextChunker::from_config(config)?;

    let distinct = split_words(&chunker, text).collect::<WordResult<BMHashSet<&str>>>()?;
    let mut words: Vec<&str> = distinct
        .into_iter()
        .filter(|&w| w != END_OF_TEXT_WORD && w != UNKNOWN_WORD)
        .collect();
    words.sort_unstable();
    words.extend([END_OF_TEXT_WORD, UNKNOWN_WORD]);

    Ok(words
        .into_iter()
        .enumerate()
        .map(|(id, word)| (word.to_string(), id))
        .collect())
}

/// A whole-word tokenizer with an unknown-word fallback.
#[derive(Debug, Clone)]
pub struct WordTokenizer {
    chunker: TextChunker,
    word_to_id: WordVocab,
    id_to_word: BMHashMap<WordId, String>,
    unknown_id: WordId,
    joiner: regex::Regex,
}

impl WordTokenizer {
    /// Create a tokenizer over a fixed vocabulary.
    ///
    /// ## Arguments
    /// * `vocab` - The word vocabulary; must contain [`UNKNOWN_WORD`].
    /// * `config` - The chunker config.
    pub fn new(
        vocab: WordVocab,
        config: &ChunkerConfig,
    ) -> WordResult<Self> {
        let unknown_id = *vocab
            .get(UNKNOWN_WORD)
            .ok_or(WordTokenizerError::MissingUnknownToken)?;

        let mut id_to_word: BMHashMap<WordId, String> = BMHashMap::default();
        for (word, &id) in vocab.iter() {
            if let Some(first) = id_to_word.insert(id, word.clone()) {
                return Err(WordTokenizerError::DuplicateWordId {
                    id,
                    first,
                    second: word.clone(),
                });
            }
        }

        let joiner = regex::Regex::new(PUNCTUATION_JOIN_PATTERN)
            .map_err(|e| BytemergeError::from(ErrorWrapper::from(e)))?;

        Ok(Self {
            chunker: TextChunker::from_config(config)?,
            word_to_id: vocab,
            id_to_word,
            unknown_id,
            joiner,
        })
    }

    /// The number of words.
    pub fn len(&self) -> usize {
        self.word_to_id.len()
    }

    /// Is the vocabulary empty? (Never true; it holds [`UNKNOWN_WORD`].)
    pub fn is_empty(&self) -> bool {
        self.word_to_id.is_empty()
    }

    /// The id of [`UNKNOWN_WORD`].
    pub fn unknown_id(&self) -> WordId {
        self.unknown_id
    }

    /// Get the word vocabulary.
    pub fn vocab(&self) -> &WordVocab {
        &self.word_to_id
    }

    /// Look up the id of a word.
    pub fn lookup_id(
        &self,
        word: &str,
    ) -> Option<WordId> {
        self.word_to_id.get(word).copied()
    }

    /// Look up the word for an id.
    pub fn lookup_word(
        &self,
        id: WordId,
    ) -> Option<&str> {
        self.id_to_word.get(&id).map(String::as_str)
    }

    /// Encode text; words missing from the vocabulary become [`UNKNOWN_WORD`].
    pub fn encode(
        &self,
        text: &str,
    ) -> WordResult<Vec<WordId>> {
        split_words(&self.chunker, text)
            .map(|word| Ok(self.lookup_id(word?).unwrap_or(self.unknown_id)))
            .collect()
    }

    /// Decode ids into text.
    ///
    /// Words are joined by single spaces; whitespace before
    /// ``, . : ; ? ! " ( ) '`` is then removed.
    pub fn decode(
        &self,
        ids: &[WordId],
    ) -> WordResult<String> {
        let words = ids
            .iter()
            .map(|&id| {
                self.lookup_word(id)
                    .ok_or(WordTokenizerError::UndefinedWordId { id })
            })
            .collect::<WordResult<Vec<_>>>()?;

        Ok(self.joiner.replace_all(&words.join(" "), "$1").into_owned())
    }
}
