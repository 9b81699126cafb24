//! # Regex BPE Tokenizer
//!
//! [`RegexBpeTokenizer`] ties the pieces together: a chunker, a trainer
//! producing a [`MergeTable`] and a [`Vocabulary`], and the encoder and
//! decoder built over them.
//!
//! ```rust
//! use bytemerge::{ChunkerConfig, RegexBpeTokenizer};
//!
//! let mut tokenizer: RegexBpeTokenizer = RegexBpeTokenizer::new(ChunkerConfig::default()).unwrap();
//! tokenizer.train("aaaa", 257).unwrap();
//!
//! let tokens = tokenizer.encode_ordinary("aaaa").unwrap();
//! assert_eq!(tokens, vec![256, 256]);
//! assert_eq!(tokenizer.decode(&tokens).unwrap(), "aaaa");
//! ```

use core::ops::ControlFlow;
use std::sync::Arc;

use crate::{
    chunking::{ChunkerConfig, TextChunker},
    decoders::{DictionaryDecoder, TokenDecoder},
    encoders::{MergeScanEncoder, TokenEncoder},
    errors::BMResult,
    training::{BpeTrainer, BpeTrainerOptions, MergeRound, TrainResults},
    types::TokenType,
    vocab::{MergeTable, SpecialVocab, Vocabulary},
};

/// Training lifecycle of a [`RegexBpeTokenizer`].
///
/// There is no in-progress variant: training holds `&mut self`, so no
/// caller can observe the tokenizer mid-run. Round `i` of a run is
/// reported through [`MergeRound::index`] to the observer passed to
/// [`RegexBpeTokenizer::train_with_observer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrainingState {
    /// No training has run; only the byte tokens are defined.
    #[default]
    Untrained,

    /// Training has completed.
    Trained {
        /// Did any round have a tie for the max count?
        ambiguous: bool,
    },
}

/// A byte-level BPE tokenizer over a regex chunker.
///
/// The tables are held behind [`Arc`]s; [`RegexBpeTokenizer::encoder`] and
/// [`RegexBpeTokenizer::decoder`] hand out read-only snapshots which stay
/// valid across later retraining.
#[derive(Debug, Clone)]
pub struct RegexBpeTokenizer<T: TokenType = u32> {
    config: ChunkerConfig,
    chunker: Arc<TextChunker>,
    merges: Arc<MergeTable<T>>,
    specials: SpecialVocab<T>,
    vocab: Arc<Vocabulary<T>>,
    state: TrainingState,
}

impl<T: TokenType> RegexBpeTokenizer<T> {
    /// Create an untrained tokenizer.
    ///
    /// ## Arguments
    /// * `config` - The chunker config.
    ///
    /// ## Returns
    /// An error if the pattern fails to compile.
    pub fn new(config: ChunkerConfig) -> BMResult<Self> {
        let chunker = TextChunker::from_config(&config)?;
        Ok(Self {
            config,
            chunker: Arc::new(chunker),
            merges: Default::default(),
            specials: Default::default(),
            vocab: Default::default(),
            state: TrainingState::Untrained,
        })
    }

    /// Get the chunker config.
    pub fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    /// Get the training state.
    pub fn state(&self) -> TrainingState {
        self.state
    }

    /// Get the learned merges.
    pub fn merges(&self) -> &MergeTable<T> {
        &self.merges
    }

    /// Get the vocabulary; byte tokens, merges, and special words.
    pub fn vocab(&self) -> &Vocabulary<T> {
        &self.vocab
    }

    /// Get the registered special words.
    pub fn special_vocab(&self) -> &SpecialVocab<T> {
        &self.specials
    }

    /// Train on `text`, replacing any earlier merges.
    ///
    /// ## Arguments
    /// * `text` - The training corpus.
    /// * `vocab_size` - The target vocab size; must be ``>= 256``.
    ///
    /// ## Returns
    /// Whether any round had a tie for the max count.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn train(
        &mut self,
        text: &str,
        vocab_size: usize,
    ) -> BMResult<bool> {
        self.train_with_observer(text, vocab_size, |_| ControlFlow::Continue(()))
    }

    /// Train on `text`, reporting each round to `observer`.
    ///
    /// See [`BpeTrainer::train_with_observer`].
    pub fn train_with_observer<F>(
        &mut self,
        text: &str,
        vocab_size: usize,
        observer: F,
    ) -> BMResult<bool>
    where
        F: FnMut(&MergeRound<T>) -> ControlFlow<()>,
    {
        let mut trainer = self.trainer(vocab_size)?;
        trainer.update_from_text(text)?;
        self.install(trainer.train_with_observer(observer)?)
    }

    /// Train on independent samples, replacing any earlier merges.
    ///
    /// Pairs are never counted across sample boundaries.
    pub fn train_samples<I>(
        &mut self,
        samples: I,
        vocab_size: usize,
    ) -> BMResult<bool>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut trainer = self.trainer(vocab_size)?;
        trainer.update_from_samples(samples)?;
        self.install(trainer.train()?)
    }

    fn trainer(
        &self,
        vocab_size: usize,
    ) -> BMResult<BpeTrainer<T>> {
        BpeTrainerOptions::new(self.config.pattern.clone(), vocab_size).init()
    }

    /// Swap in new training results; the registered specials are reapplied.
    ///
    /// Leaves `self` untouched on error.
    fn install(
        &mut self,
        results: TrainResults<T>,
    ) -> BMResult<bool> {
        let TrainResults {
            merges,
            mut vocab,
            ambiguous,
        } = results;
        vocab.reserve_specials(&self.specials)?;

        self.merges = Arc::new(merges);
        self.vocab = Arc::new(vocab);
        self.state = TrainingState::Trained { ambiguous };
        Ok(ambiguous)
    }

    /// Reserve special words at caller-chosen ids.
    ///
    /// Each id must be free: not a byte token, not a merge result, and not
    /// another special word's id.
    ///
    /// ## Returns
    /// [`crate::BytemergeError::VocabConflict`] on a collision; the
    /// tokenizer is unchanged in that case.
    pub fn register_special_tokens<W, S>(
        &mut self,
        special_words: W,
    ) -> BMResult<()>
    where
        W: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
    {
        let specials = self.specials.clone().with_special_words(special_words);
        let vocab = Vocabulary::from_merges(&self.merges, &specials)?;

        self.specials = specials;
        self.vocab = Arc::new(vocab);
        Ok(())
    }

    /// Builder form of [`RegexBpeTokenizer::register_special_tokens`].
    pub fn with_special_tokens<W, S>(
        mut self,
        special_words: W,
    ) -> BMResult<Self>
    where
        W: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
    {
        self.register_special_tokens(special_words)?;
        Ok(self)
    }

    /// A read-only encoder over the current merges.
    pub fn encoder(&self) -> MergeScanEncoder<T> {
        MergeScanEncoder::init(self.chunker.clone(), self.merges.clone())
    }

    /// A read-only decoder over the current vocabulary.
    pub fn decoder(&self) -> DictionaryDecoder<T> {
        DictionaryDecoder::init(self.vocab.clone())
    }

    /// Encode text, ignoring special words.
    ///
    /// Special words in the text are encoded as ordinary bytes.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn encode_ordinary(
        &self,
        text: &str,
    ) -> BMResult<Vec<T>> {
        self.encoder().try_encode(text)
    }

    /// Decode tokens into text, replacing invalid UTF-8.
    ///
    /// ## Returns
    /// [`crate::BytemergeError::UndefinedToken`] for a token outside the vocabulary.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, tokens)))]
    pub fn decode(
        &self,
        tokens: &[T],
    ) -> BMResult<String> {
        self.decoder().try_decode_to_string(tokens)
    }

    /// Decode tokens into raw bytes.
    pub fn decode_to_bytes(
        &self,
        tokens: &[T],
    ) -> BMResult<Vec<u8>> {
        self.decoder().try_decode_to_bytes(tokens)
    }
}
