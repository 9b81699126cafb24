//! # Vocab Trainer

use core::ops::ControlFlow;

use crate::{
    chunking::{ChunkerConfig, TextChunker},
    errors::BMResult,
    regex::RegexWrapperPattern,
    training::{PairCounts, TokenSpanBuf, select_merge},
    types::{Pair, TokenType},
    vocab::{
        MergeRecord,
        MergeTable,
        Vocabulary,
        validators::{U8_SIZE, try_vocab_size},
    },
};

/// Options for [`BpeTrainer`].
#[derive(Debug, Clone, PartialEq)]
pub struct BpeTrainerOptions {
    /// The chunker used for text splitting.
    pub chunker: ChunkerConfig,

    /// The target vocab size.
    pub vocab_size: usize,
}

impl BpeTrainerOptions {
    /// Create new options.
    ///
    /// ## Arguments
    /// * `pattern` - The chunk split pattern.
    /// * `vocab_size` - The target vocabulary size.
    pub fn new<P: Into<RegexWrapperPattern>>(
        pattern: P,
        vocab_size: usize,
    ) -> Self {
        Self {
            chunker: ChunkerConfig::from_pattern(pattern),
            vocab_size,
        }
    }

    /// Sets the vocab size.
    ///
    /// ## Arguments
    /// * `vocab_size` - The desired vocabulary size; must be >= 256 (the size of the u8 space).
    pub fn with_vocab_size(
        self,
        vocab_size: usize,
    ) -> Self {
        Self { vocab_size, ..self }
    }

    /// Sets the regex pattern used for text splitting.
    pub fn with_pattern<P: Into<RegexWrapperPattern>>(
        self,
        pattern: P,
    ) -> Self {
        Self {
            chunker: self.chunker.with_pattern(pattern),
            ..self
        }
    }

    /// Sets the chunker configuration.
    pub fn with_chunker(
        self,
        chunker: ChunkerConfig,
    ) -> Self {
        Self { chunker, ..self }
    }

    /// Initializes a [`BpeTrainer`] from these options.
    pub fn init<T: TokenType>(self) -> BMResult<BpeTrainer<T>> {
        BpeTrainer::new(self)
    }
}

/// Progress report for one completed training round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeRound<T: TokenType> {
    /// Zero-based round index; also the merge's rank.
    pub index: usize,

    /// The merged pair.
    pub pair: Pair<T>,

    /// The minted token.
    pub token: T,

    /// The pair's corpus-wide count this round.
    pub count: usize,

    /// Did this round have a tie for the max count?
    pub ambiguous: bool,
}

/// Basic BPE train results.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainResults<T: TokenType> {
    /// The learned merges, in rank order.
    pub merges: MergeTable<T>,

    /// The byte alphabet grown by the learned merges.
    pub vocab: Vocabulary<T>,

    /// Did any round have a tie for the max count?
    pub ambiguous: bool,
}

/// Trainer for learning byte pair merges.
///
/// Training is a greedy loop; each round:
/// 1. counts adjacent pairs over every chunk,
/// 2. selects the most frequent pair (ties go to the first-seen pair),
/// 3. mints the next token and merges the pair in every chunk.
///
/// It stops after ``vocab_size - 256`` rounds, or when no pair remains.
pub struct BpeTrainer<T: TokenType> {
    /// Trainer options.
    pub options: BpeTrainerOptions,

    chunker: TextChunker,
    spans: Vec<TokenSpanBuf<T>>,
}

impl<T: TokenType> BpeTrainer<T> {
    /// Initializes a [`BpeTrainer`].
    ///
    /// ## Returns
    /// An error if the vocab size is below 256 or too large for `T`,
    /// or if the pattern fails to compile.
    pub fn new(options: BpeTrainerOptions) -> BMResult<Self> {
        try_vocab_size::<T>(options.vocab_size)?;
        let chunker = TextChunker::from_config(&options.chunker)?;
        Ok(Self {
            options,
            chunker,
            spans: Vec::new(),
        })
    }

    /// The number of chunks collected so far.
    pub fn num_spans(&self) -> usize {
        self.spans.len()
    }

    /// Chunk `text` and append its chunks as byte-token spans.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) -> BMResult<()> {
        let text = text.as_ref();
        for chunk in self.chunker.chunks(text) {
            let chunk = chunk?;
            self.spans
                .push(TokenSpanBuf::from_string(chunk.as_str(text)));
        }
        Ok(())
    }

    /// Update spans from a sample iterator; samples are chunked independently.
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) -> BMResult<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for sample in samples {
            self.update_from_text(sample)?;
        }
        Ok(())
    }

    /// Run training to completion.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn train(self) -> BMResult<TrainResults<T>> {
        self.train_with_observer(|_| ControlFlow::Continue(()))
    }

    /// Run training, reporting each completed round to `observer`.
    ///
    /// The merge table and vocabulary are consistent after every round;
    /// returning [`ControlFlow::Break`] stops training there and returns
    /// the merges learned so far.
    ///
    /// ## Returns
    /// An error if `options.vocab_size` was changed to an invalid size
    /// after construction.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, observer)))]
    pub fn train_with_observer<F>(
        self,
        mut observer: F,
    ) -> BMResult<TrainResults<T>>
    where
        F: FnMut(&MergeRound<T>) -> ControlFlow<()>,
    {
        // `options` is public; re-check the size it holds now.
        let num_merges = try_vocab_size::<T>(self.options.vocab_size)? - U8_SIZE;
        let mut spans = self.spans;

        log::info!(
            "Starting BPE training: {} merges to compute over {} chunks",
            num_merges,
            spans.len()
        );

        let mut merges: MergeTable<T> = MergeTable::new();
        let mut vocab: Vocabulary<T> = Vocabulary::default();
        let mut ambiguous = false;
        let mut last_log_percent = 0;

        for index in 0..num_merges {
            let counts = PairCounts::from_spans(spans.iter().map(TokenSpanBuf::tokens));

            let Some(selection) = select_merge(&counts) else {
                log::info!("No pairs left to merge after {} merges", index);
                break;
            };

            if selection.ambiguous {
                log::debug!(
                    "Round {}: {} pairs tied at count {}; took first-seen {:?}",
                    index,
                    counts.iter().filter(|&(_, c)| c == selection.count).count(),
                    selection.count,
                    selection.pair,
                );
            }
            ambiguous |= selection.ambiguous;

            let token = merges.push(selection.pair)?;
            vocab.extend_merge(&MergeRecord {
                pair: selection.pair,
                token,
            })?;
            for span in spans.iter_mut() {
                span.merge_pair(selection.pair, token);
            }

            log::debug!(
                "merge {}/{}: {:?} -> {} ({:?}) had {} occurrences",
                index + 1,
                num_merges,
                selection.pair,
                token,
                String::from_utf8_lossy(vocab.try_span(token)?),
                selection.count
            );

            let current_percent = ((index + 1) * 100) / num_merges;
            if current_percent > last_log_percent {
                log::info!(
                    "Progress: {}% ({}/{} merges) - Last merge: {:?} -> {:?} (frequency: {})",
                    current_percent,
                    index + 1,
                    num_merges,
                    selection.pair,
                    token,
                    selection.count
                );
                last_log_percent = current_percent;
            }

            let round = MergeRound {
                index,
                pair: selection.pair,
                token,
                count: selection.count,
                ambiguous: selection.ambiguous,
            };
            if observer(&round).is_break() {
                log::info!("Training stopped by observer after {} merges", index + 1);
                break;
            }
        }

        log::info!(
            "Finished training: {} merges completed (ties seen: {})",
            merges.len(),
            ambiguous
        );

        Ok(TrainResults {
            merges,
            vocab,
            ambiguous,
        })
    }
}
