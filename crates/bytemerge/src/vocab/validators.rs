//! Validators for vocabulary sizes.
use crate::{
    errors::{BMResult, BytemergeError},
    types::TokenType,
};

/// The size of the u8 space; also the first merge token id.
pub const U8_SIZE: usize = u8::MAX as usize + 1;

/// Validates and returns the vocabulary size.
///
/// The size must be at least the size of the u8 space,
/// and every token `0..vocab_size` must be representable as `T`.
pub fn try_vocab_size<T: TokenType>(vocab_size: usize) -> BMResult<usize> {
    if vocab_size < U8_SIZE {
        Err(BytemergeError::VocabSizeTooSmall { size: vocab_size })
    } else if T::from_usize(vocab_size - 1).is_none() {
        Err(BytemergeError::VocabSizeOverflow { size: vocab_size })
    } else {
        Ok(vocab_size)
    }
}

/// Convert an index into a token, failing if `T` is too narrow.
pub fn try_token<T: TokenType>(index: usize) -> BMResult<T> {
    T::from_usize(index).ok_or(BytemergeError::VocabSizeOverflow { size: index + 1 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocab_size() {
        assert_eq!(try_vocab_size::<u16>(256).unwrap(), 256);

        assert!(matches!(
            try_vocab_size::<u16>(100),
            Err(BytemergeError::VocabSizeTooSmall { size: 100 })
        ));
        assert!(try_vocab_size::<u16>(0).is_err());

        assert_eq!(
            try_vocab_size::<u16>(u16::MAX as usize + 1).unwrap(),
            u16::MAX as usize + 1
        );
        assert!(matches!(
            try_vocab_size::<u16>(u16::MAX as usize + 2),
            Err(BytemergeError::VocabSizeOverflow { .. })
        ));

        assert_eq!(try_vocab_size::<u8>(256).unwrap(), 256);
        assert!(try_vocab_size::<u8>(257).is_err());
    }

    #[test]
    fn test_try_token() {
        assert_eq!(try_token::<u8>(255).unwrap(), 255);
        assert!(try_token::<u8>(256).is_err());
        assert_eq!(try_token::<u32>(70_000).unwrap(), 70_000);
    }
}
