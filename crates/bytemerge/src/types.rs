//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

/// A type that can be used as a token id.
///
/// These are constrained to be unsigned primitive integers, wide enough
/// to hold every byte value; such that the max token in a vocabulary is
/// less than `T::max()`.
pub trait TokenType:
    'static
    + From<u8>
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> TokenType for T where
    T: 'static
        + From<u8>
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

/// A pair of adjacent tokens.
pub type Pair<T> = (T, T);

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// The hasher used by the maps in this crate.
        pub type BMBuildHasher = ahash::RandomState;

        /// Type Alias for hash maps in this crate.
        pub type BMHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type BMHashSet<V> = ahash::AHashSet<V>;
    } else {
        /// The hasher used by the maps in this crate.
        pub type BMBuildHasher = std::collections::hash_map::RandomState;

        /// Type Alias for hash maps in this crate.
        pub type BMHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type BMHashSet<V> = std::collections::HashSet<V>;
    }
}

/// Insertion-ordered hash map.
///
/// Iteration visits entries in the order their keys were first inserted.
pub type BMOrderedMap<K, V> = indexmap::IndexMap<K, V, BMBuildHasher>;

/// Compile-time check that a value is `Send + Sync`.
#[cfg(test)]
pub(crate) fn static_is_send_sync_check<T: Send + Sync>(_: &T) {}
