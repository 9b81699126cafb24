//! # Rayon Utilities
//!
//! [`rayon`] powered wrappers for parallel encoders and decoders.
//!
//! Only batches are parallelized; each sample is still encoded or decoded
//! on one thread against shared, read-only tables.

mod rayon_decoder;
mod rayon_encoder;

pub use rayon_decoder::ParallelRayonDecoder;
pub use rayon_encoder::ParallelRayonEncoder;
