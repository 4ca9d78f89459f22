//! Streaming hash engines.
//!
//! - [`Xxh32`] - 32-bit engine (16-byte blocks)
//! - [`Xxh64`] - 64-bit engine (32-byte blocks)
//! - [`Hasher`] - Width-erased engine built from a [`crate::HashConfig`]
//! - [`StreamingHasher`] - The contract all engines share

use std::fmt;

use bytes::Bytes;

use crate::config::Algorithm;
use crate::error::XxhError;

mod any;
mod xxh32;
mod xxh64;

pub use any::Hasher;
pub use xxh32::{Xxh32, sum32};
pub use xxh64::{Xxh64, Xxh64Builder, sum64};

/// An incremental, seedable, resumable checksum engine.
///
/// # Usage
///
/// ```
/// use xxhrs::{StreamingHasher, Xxh64};
///
/// // One-shot
/// let expected = Xxh64::hash_with_seed(b"hello world", 0);
///
/// // Streaming, in any chunking
/// let mut hasher = Xxh64::with_seed(0);
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// assert_eq!(hasher.value(), expected);
/// ```
///
/// # Implementor Requirements
///
/// - `update` must be associative: feeding `a` then `b` is the same as
///   feeding `a ‖ b`
/// - `finalize()` must be idempotent and must not change the engine
/// - `reset()` must restore the state produced by `with_seed(self.seed())`
/// - `unmarshal_state` must leave the engine untouched on error
pub trait StreamingHasher: Clone + Default + fmt::Debug + Send + Sync {
    /// Native seed type.
    type Seed: Copy + Default + Eq + fmt::Debug;

    /// Native integer form of the digest.
    type Output: Copy + Eq + fmt::Debug + fmt::LowerHex;

    /// Byte form of the digest.
    type Digest: Copy + Eq + fmt::Debug + fmt::Display + AsRef<[u8]> + Into<crate::AnyDigest>;

    /// The algorithm this engine implements.
    const ALGORITHM: Algorithm;

    /// Digest size in bytes.
    const DIGEST_SIZE: usize;

    /// Block size in bytes.
    const BLOCK_SIZE: usize;

    /// Creates an engine in its seed-derived initial state.
    #[must_use]
    fn with_seed(seed: Self::Seed) -> Self;

    /// Feeds more input. Never fails and always consumes all of `data`.
    fn update(&mut self, data: &[u8]);

    /// Computes the digest of everything fed so far.
    #[must_use]
    fn finalize(&self) -> Self::Digest;

    /// Computes the digest as if `extra` had been fed first, without
    /// changing this engine.
    #[must_use]
    fn finalize_with(&self, extra: &[u8]) -> Self::Digest {
        if extra.is_empty() {
            return self.finalize();
        }
        let mut fork = self.clone();
        fork.update(extra);
        fork.finalize()
    }

    /// Computes the digest as a native integer.
    #[must_use]
    fn value(&self) -> Self::Output;

    /// Returns the engine to its seed-derived initial state.
    fn reset(&mut self);

    /// Replaces the seed, then resets.
    fn reseed(&mut self, seed: Self::Seed);

    /// Returns the current seed.
    fn seed(&self) -> Self::Seed;

    /// Returns the number of bytes fed since the last reset.
    fn total_len(&self) -> u64;

    /// Digest size in bytes.
    fn size(&self) -> usize {
        Self::DIGEST_SIZE
    }

    /// Block size in bytes.
    fn block_size(&self) -> usize {
        Self::BLOCK_SIZE
    }

    /// Serializes the engine state for later resumption.
    #[must_use]
    fn marshal_state(&self) -> Bytes;

    /// Replaces the engine state with a snapshot from [`marshal_state`].
    ///
    /// # Errors
    ///
    /// Returns [`XxhError::InvalidFormat`] if the record is not a valid
    /// snapshot for this algorithm. The engine is left untouched.
    ///
    /// [`marshal_state`]: StreamingHasher::marshal_state
    fn unmarshal_state(&mut self, state: &[u8]) -> Result<(), XxhError>;

    /// Hashes `data` in one shot with a fresh engine.
    #[must_use]
    fn hash_with_seed(data: &[u8], seed: Self::Seed) -> Self::Output {
        let mut hasher = Self::with_seed(seed);
        hasher.update(data);
        hasher.value()
    }

    /// Wraps a reader so that everything read through it is hashed.
    ///
    /// See [`crate::HashReader`].
    fn reader<R: std::io::Read>(self, inner: R) -> crate::HashReader<R, Self> {
        crate::HashReader::new(inner, self)
    }
}
