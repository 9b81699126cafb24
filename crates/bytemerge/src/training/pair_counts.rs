//! # Pair Statistics

use crate::types::{BMOrderedMap, Pair, TokenType};

/// A map from [`Pair`] to its occurrence count, in first-seen order.
pub type PairCountMap<T> = BMOrderedMap<Pair<T>, usize>;

/// Adjacent pair counts, accumulated over independent token sequences.
///
/// Iteration order is the order in which each distinct pair was first
/// counted; [`crate::training::select_merge`] relies on it to break ties.
#[derive(Debug, Clone, PartialEq)]
pub struct PairCounts<T: TokenType> {
    counts: PairCountMap<T>,
}

impl<T: TokenType> Default for PairCounts<T> {
    fn default() -> Self {
        Self {
            counts: PairCountMap::default(),
        }
    }
}

impl<T: TokenType> PairCounts<T> {
    /// Count the pairs of a single sequence.
    pub fn from_tokens(tokens: &[T]) -> Self {
        let mut counts = Self::default();
        counts.update_from_tokens(tokens);
        counts
    }

    /// Count the pairs of many sequences.
    ///
    /// Pairs are never counted across sequence boundaries.
    pub fn from_spans<'a, I>(spans: I) -> Self
    where
        I: IntoIterator<Item = &'a [T]>,
    {
        let mut counts = Self::default();
        for span in spans {
            counts.update_from_tokens(span);
        }
        counts
    }

    /// Add the pairs of `tokens` to the counts.
    ///
    /// Sequences shorter than 2 contribute nothing.
    pub fn update_from_tokens(
        &mut self,
        tokens: &[T],
    ) {
        for w in tokens.windows(2) {
            *self.counts.entry((w[0], w[1])).or_default() += 1;
        }
    }

    /// The number of distinct pairs.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Were no pairs counted?
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The count of a pair; zero if never seen.
    pub fn get(
        &self,
        pair: &Pair<T>,
    ) -> usize {
        self.counts.get(pair).copied().unwrap_or(0)
    }

    /// Iterate ``(pair, count)`` in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (Pair<T>, usize)> + '_ {
        self.counts.iter().map(|(&pair, &count)| (pair, count))
    }

    /// Get the underlying ordered map.
    pub fn counts(&self) -> &PairCountMap<T> {
        &self.counts
    }
}
