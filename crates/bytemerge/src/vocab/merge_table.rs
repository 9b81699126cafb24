//! # Merge Table ``[(T, T) -> T]``
//!
//! The ordered list of learned merges. Position in the list is the merge's
//! *rank*: rank 0 was learned first, and is applied first when encoding.

use crate::{
    errors::{BMResult, BytemergeError},
    types::{BMHashMap, Pair, TokenType},
    vocab::validators::{U8_SIZE, try_token},
};

/// A single learned merge: ``pair -> token``.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MergeRecord<T: TokenType> {
    /// The adjacent pair being merged.
    pub pair: Pair<T>,

    /// The token minted for the pair.
    pub token: T,
}

/// Rank-ordered table of learned merges.
///
/// Invariants, enforced by [`MergeTable::push`]:
/// * result tokens are ``256, 257, ...``, contiguous and in rank order;
/// * no pair appears twice;
/// * both parents of a pair are already defined (a byte, or an earlier result).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeTable<T: TokenType> {
    records: Vec<MergeRecord<T>>,
    ranks: BMHashMap<Pair<T>, usize>,
}

impl<T: TokenType> MergeTable<T> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from pairs, in rank order.
    ///
    /// ## Arguments
    /// * `pairs` - the pairs, first-learned first.
    pub fn from_pairs<I>(pairs: I) -> BMResult<Self>
    where
        I: IntoIterator<Item = Pair<T>>,
    {
        let mut table = Self::new();
        for pair in pairs {
            table.push(pair)?;
        }
        Ok(table)
    }

    /// The number of merges.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The merges, in rank order.
    pub fn records(&self) -> &[MergeRecord<T>] {
        &self.records
    }

    /// Iterate the merges in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &MergeRecord<T>> {
        self.records.iter()
    }

    /// The token the next [`MergeTable::push`] would mint.
    pub fn next_token(&self) -> BMResult<T> {
        try_token(U8_SIZE + self.records.len())
    }

    /// Is `token` a byte token or a result of this table?
    pub fn is_defined(
        &self,
        token: T,
    ) -> bool {
        token
            .to_usize()
            .is_some_and(|t| t < U8_SIZE + self.records.len())
    }

    /// Append a merge, minting the next token.
    ///
    /// ## Returns
    /// The minted token.
    pub fn push(
        &mut self,
        pair: Pair<T>,
    ) -> BMResult<T> {
        if self.ranks.contains_key(&pair) {
            return Err(BytemergeError::VocabConflict(format!(
                "merge pair {pair:?} is already in the table"
            )));
        }
        for parent in [pair.0, pair.1] {
            if !self.is_defined(parent) {
                return Err(BytemergeError::VocabConflict(format!(
                    "merge pair {pair:?} parent {parent:?} is not defined"
                )));
            }
        }

        let token = self.next_token()?;
        self.ranks.insert(pair, self.records.len());
        self.records.push(MergeRecord { pair, token });
        Ok(token)
    }

    /// Looks up the rank of a pair.
    pub fn lookup_rank(
        &self,
        pair: &Pair<T>,
    ) -> Option<usize> {
        self.ranks.get(pair).copied()
    }

    /// Looks up the token a pair merges into.
    pub fn lookup_token(
        &self,
        pair: &Pair<T>,
    ) -> Option<T> {
        self.lookup_rank(pair).map(|rank| self.records[rank].token)
    }

    /// The highest token produced by the table, if any.
    pub fn max_token(&self) -> Option<T> {
        self.records.last().map(|r| r.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_mints_contiguous_tokens() {
        type T = u32;
        let mut table: MergeTable<T> = MergeTable::new();
        assert!(table.is_empty());
        assert_eq!(table.next_token().unwrap(), 256);

        assert_eq!(table.push((97, 97)).unwrap(), 256);
        assert_eq!(table.push((256, 98)).unwrap(), 257);
        assert_eq!(table.push((257, 256)).unwrap(), 258);

        assert_eq!(table.len(), 3);
        assert_eq!(table.max_token(), Some(258));
        assert_eq!(
            table.iter().map(|r| r.token).collect::<Vec<_>>(),
            vec![256, 257, 258]
        );

        assert_eq!(table.lookup_rank(&(256, 98)), Some(1));
        assert_eq!(table.lookup_token(&(257, 256)), Some(258));
        assert_eq!(table.lookup_token(&(98, 97)), None);
    }

    #[test]
    fn test_push_rejects_duplicates_and_undefined_parents() {
        type T = u16;
        let mut table: MergeTable<T> = MergeTable::from_pairs([(1, 2)]).unwrap();

        assert!(matches!(
            table.push((1, 2)),
            Err(BytemergeError::VocabConflict(_))
        ));
        assert!(matches!(
            table.push((1, 300)),
            Err(BytemergeError::VocabConflict(_))
        ));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_token_type_overflow() {
        let mut table: MergeTable<u8> = MergeTable::new();
        assert!(matches!(
            table.push((1, 2)),
            Err(BytemergeError::VocabSizeOverflow { .. })
        ));
    }
}
