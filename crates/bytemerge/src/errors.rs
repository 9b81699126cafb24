//! # Error Types

use crate::regex::ErrorWrapper;

/// Errors from bytemerge operations.
#[derive(Debug, thiserror::Error)]
pub enum BytemergeError {
    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// Vocab size is below the minimum (256, the u8 space).
    #[error("vocab size ({size}) must be >= 256")]
    VocabSizeTooSmall {
        /// The vocab size that was too small.
        size: usize,
    },

    /// A token was not present in the vocabulary.
    #[error("undefined token: {token}")]
    UndefinedToken {
        /// The token value, widened for reporting.
        token: u64,
    },

    /// Vocabulary data is inconsistent.
    #[error("{0}")]
    VocabConflict(String),

    /// The chunking pattern failed to compile, or failed while matching.
    #[error("pattern error: {0}")]
    Pattern(#[from] ErrorWrapper),
}

impl BytemergeError {
    /// Build an [`BytemergeError::UndefinedToken`] for any token type.
    pub fn undefined_token<T: num_traits::ToPrimitive>(token: T) -> Self {
        Self::UndefinedToken {
            token: token.to_u64().unwrap_or(u64::MAX),
        }
    }
}

/// Result type for bytemerge operations.
pub type BMResult<T> = core::result::Result<T, BytemergeError>;
