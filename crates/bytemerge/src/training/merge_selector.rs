//! # Merge Selection

use crate::{
    training::PairCounts,
    types::{Pair, TokenType},
};

/// The pair chosen for a training round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeSelection<T: TokenType> {
    /// The most frequent pair.
    pub pair: Pair<T>,

    /// Its occurrence count.
    pub count: usize,

    /// Did another pair share the maximum count?
    ///
    /// Observational only; it does not change `pair`.
    pub ambiguous: bool,
}

/// Select the most frequent pair.
///
/// Ties go to the pair counted first (see [`PairCounts::iter`]).
///
/// ## Returns
/// `None` if there are no pairs.
pub fn select_merge<T: TokenType>(counts: &PairCounts<T>) -> Option<MergeSelection<T>> {
    let mut best: Option<MergeSelection<T>> = None;
    for (pair, count) in counts.iter() {
        let replace = best.as_ref().is_none_or(|b| count > b.count);
        if replace {
            best = Some(MergeSelection {
                pair,
                count,
                ambiguous: false,
            });
        } else if let Some(b) = best.as_mut()
            && count == b.count
        {
            b.ambiguous = true;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let counts: PairCounts<u32> = PairCounts::default();
        assert_eq!(select_merge(&counts), None);
    }

    #[test]
    fn test_unique_max() {
        let counts: PairCounts<u32> = PairCounts::from_tokens(&[1, 2, 3, 1, 2]);
        assert_eq!(
            select_merge(&counts),
            Some(MergeSelection {
                pair: (1, 2),
                count: 2,
                ambiguous: false,
            })
        );
    }

    #[test]
    fn test_tie_goes_to_first_seen() {
        // (4, 5) is seen first, (1, 2) later; both count 2.
        let mut counts: PairCounts<u32> = PairCounts::default();
        counts.update_from_tokens(&[4, 5]);
        counts.update_from_tokens(&[1, 2, 1, 2]);
        counts.update_from_tokens(&[4, 5]);

        let selection = select_merge(&counts).unwrap();
        assert_eq!(selection.pair, (4, 5));
        assert_eq!(selection.count, 2);
        assert!(selection.ambiguous);
    }

    #[test]
    fn test_tie_below_max_is_not_ambiguous() {
        let mut counts: PairCounts<u32> = PairCounts::default();
        counts.update_from_tokens(&[1, 2]);
        counts.update_from_tokens(&[3, 4]);
        counts.update_from_tokens(&[5, 6, 5, 6]);

        let selection = select_merge(&counts).unwrap();
        assert_eq!(selection.pair, (5, 6));
        assert!(!selection.ambiguous);
    }
}
