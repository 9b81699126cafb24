//! # Token Decoders
//!
//! Decoding never fails on malformed UTF-8; only on undefined tokens.

mod dictionary_decoder;
mod token_decoder;

#[doc(inline)]
pub use dictionary_decoder::DictionaryDecoder;
#[doc(inline)]
pub use token_decoder::TokenDecoder;
