//! # Token Span Buffer

use crate::types::{Pair, TokenType};

/// Replace every non-overlapping, left-to-right occurrence of `pair`.
///
/// Scans with a cursor: on a match emit `replacement` and skip both tokens;
/// otherwise emit the token and advance by one. So ``a a a`` with ``(a, a)``
/// becomes ``r a``, and ``a a a a`` becomes ``r r``.
///
/// # Arguments
/// * `tokens` - the source sequence.
/// * `pair` - the pair to merge.
/// * `replacement` - the token to replace `pair` with.
pub fn merge_tokens<T: TokenType>(
    tokens: &[T],
    pair: Pair<T>,
    replacement: T,
) -> Vec<T> {
    let n = tokens.len();
    let mut merged: Vec<T> = Vec::with_capacity(n);

    let mut i = 0;
    while i < n {
        if i + 1 < n && pair == (tokens[i], tokens[i + 1]) {
            merged.push(replacement);
            i += 2;
        } else {
            merged.push(tokens[i]);
            i += 1;
        }
    }
    merged
}

/// A mutable span of tokens (a chunk).
///
/// Iteratively rewritten during BPE vocabulary training.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenSpanBuf<T: TokenType> {
    tokens: Vec<T>,
}

impl<T: TokenType, S: AsRef<[T]>> From<S> for TokenSpanBuf<T> {
    fn from(tokens: S) -> Self {
        Self::from_tokens(tokens)
    }
}

impl<T: TokenType> TokenSpanBuf<T> {
    /// Create a new span buffer from tokens.
    pub fn from_tokens<S>(tokens: S) -> Self
    where
        S: AsRef<[T]>,
    {
        Self {
            tokens: tokens.as_ref().to_vec(),
        }
    }

    /// Create a new span buf of byte tokens.
    pub fn from_bytes<B: AsRef<[u8]>>(bytes: B) -> Self {
        Self {
            tokens: bytes.as_ref().iter().map(|&b| b.into()).collect(),
        }
    }

    /// Create a new span buf from the UTF-8 bytes of a string.
    pub fn from_string<S: AsRef<str>>(text: S) -> Self {
        Self::from_bytes(text.as_ref().as_bytes())
    }

    /// View the tokens as a slice.
    pub fn tokens(&self) -> &[T] {
        &self.tokens
    }

    /// Get the length of the span.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Is this span empty?
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get an iterator over [`Pair<T>`] windows of this span.
    pub fn pairs(&self) -> impl Iterator<Item = Pair<T>> + '_ {
        self.tokens.windows(2).map(|w| (w[0], w[1]))
    }

    /// Merge all non-overlapping occurrences of `pair -> replacement`.
    ///
    /// Rebuilds the buffer; see [`merge_tokens`].
    ///
    /// # Returns
    /// The number of merges performed.
    pub fn merge_pair(
        &mut self,
        pair: Pair<T>,
        replacement: T,
    ) -> usize {
        if self.tokens.len() < 2 {
            return 0;
        }
        let before = self.tokens.len();
        self.tokens = merge_tokens(&self.tokens, pair, replacement);
        before - self.tokens.len()
    }

    /// Merge all non-overlapping occurrences of `pair -> replacement`, in place.
    ///
    /// Same result as [`TokenSpanBuf::merge_pair`]; compacts the buffer
    /// with a read and a write cursor instead of allocating.
    ///
    /// # Returns
    /// The number of merges performed.
    pub fn merge_pair_in_place(
        &mut self,
        pair: Pair<T>,
        replacement: T,
    ) -> usize {
        let n = self.tokens.len();
        let mut read = 0;
        let mut write = 0;
        while read < n {
            if read + 1 < n && pair == (self.tokens[read], self.tokens[read + 1]) {
                self.tokens[write] = replacement;
                read += 2;
            } else {
                self.tokens[write] = self.tokens[read];
                read += 1;
            }
            write += 1;
        }
        self.tokens.truncate(write);
        n - write
    }

    /// Reduce the capacity of the internal vector to fit its contents.
    pub fn shrink_to_fit(&mut self) {
        self.tokens.shrink_to_fit();
    }

    /// Release the tokens.
    pub fn into_tokens(self) -> Vec<T> {
        self.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tokens() {
        let span: TokenSpanBuf<u32> = TokenSpanBuf::from_tokens(vec![1, 2, 3]);
        assert_eq!(span.tokens(), &[1, 2, 3]);
        assert_eq!(span.len(), 3);
        assert!(!span.is_empty());

        let span: TokenSpanBuf<u32> = [1, 2, 3].into();
        assert_eq!(span.into_tokens(), vec![1, 2, 3]);
    }

    #[test]
    fn test_span_from_str() {
        let span: TokenSpanBuf<u16> = TokenSpanBuf::from_string("hello");
        assert_eq!(span.tokens(), &[104, 101, 108, 108, 111]);

        let span: TokenSpanBuf<u32> = TokenSpanBuf::from_string("\u{00e9}");
        assert_eq!(span.tokens(), &[0xc3, 0xa9]);
    }

    #[test]
    fn test_span_pairs() {
        let span: TokenSpanBuf<u32> = TokenSpanBuf::from_tokens(vec![1, 2, 3]);
        assert_eq!(span.pairs().collect::<Vec<_>>(), vec![(1, 2), (2, 3)]);
    }

    #[test]
    fn test_merge_tokens_non_overlapping() {
        assert_eq!(merge_tokens::<u32>(&[97, 97, 97, 97], (97, 97), 256), vec![
            256, 256
        ]);
        assert_eq!(merge_tokens::<u32>(&[97, 97, 97], (97, 97), 256), vec![
            256, 97
        ]);
        assert_eq!(
            merge_tokens::<u32>(&[1, 2, 3, 1, 2, 2, 1], (1, 2), 9),
            vec![9, 3, 9, 2, 1]
        );
        assert_eq!(merge_tokens::<u32>(&[], (1, 2), 9), Vec::<u32>::new());
        assert_eq!(merge_tokens::<u32>(&[1], (1, 2), 9), vec![1]);
    }

    #[test]
    fn test_span_merge_pair() {
        let mut span: TokenSpanBuf<u32> = TokenSpanBuf::from_tokens(vec![1, 2, 3, 1, 2, 2, 1]);

        assert_eq!(span.merge_pair((1, 2), 1), 2);
        assert_eq!(span.tokens(), &[1, 3, 1, 2, 1]);

        assert_eq!(span.merge_pair((7, 7), 8), 0);
        assert_eq!(span.tokens(), &[1, 3, 1, 2, 1]);
    }

    #[test]
    fn test_span_merge_in_place_matches_rebuild() {
        let cases: Vec<(Vec<u32>, Pair<u32>)> = vec![
            (vec![5, 5, 5, 5, 5], (5, 5)),
            (vec![1, 2, 1, 2, 2, 1, 2], (1, 2)),
            (vec![2, 1], (1, 2)),
            (vec![], (1, 2)),
        ];

        for (tokens, pair) in cases {
            let mut rebuilt = TokenSpanBuf::from_tokens(&tokens);
            let mut in_place = TokenSpanBuf::from_tokens(&tokens);

            let a = rebuilt.merge_pair(pair, 300);
            let b = in_place.merge_pair_in_place(pair, 300);

            assert_eq!(a, b);
            assert_eq!(rebuilt, in_place);
        }

        let mut span: TokenSpanBuf<u32> = TokenSpanBuf::from_tokens(vec![5, 5, 5]);
        span.merge_pair_in_place((5, 5), 6);
        span.shrink_to_fit();
        assert_eq!(span.tokens(), &[6, 5]);
    }
}
