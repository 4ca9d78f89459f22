//! Width-erased engine selected at runtime.

use std::io;

use bytes::Bytes;

use super::{StreamingHasher, Xxh32, Xxh64};
use crate::config::{Algorithm, HashConfig};
use crate::digest::AnyDigest;
use crate::error::XxhError;
use crate::state::{MAGIC_LEN, XXH32_MAGIC, XXH64_MAGIC};

/// A hasher whose width is chosen from a [`HashConfig`] at runtime.
///
/// Useful for tools where the algorithm is a user option. Each instance owns
/// its state; hash independent inputs concurrently by giving every unit of
/// work its own `Hasher`.
///
/// # Example
///
/// ```
/// use xxhrs::{Algorithm, HashConfig, Hasher};
///
/// let config = HashConfig::new(Algorithm::Xxh32, 0)?;
/// let mut hasher = Hasher::new(config)?;
/// hasher.update(b"abc");
///
/// assert_eq!(hasher.finalize().to_string(), "32d153ff");
/// # Ok::<(), xxhrs::XxhError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hasher {
    /// XXH32 engine.
    Xxh32(Xxh32),
    /// XXH64 engine.
    Xxh64(Xxh64),
}

impl Hasher {
    /// Creates a hasher for the configured algorithm and seed.
    ///
    /// # Errors
    ///
    /// Returns [`XxhError::InvalidConfig`] if the seed does not fit the
    /// configured algorithm (see [`HashConfig::validate`]).
    pub fn new(config: HashConfig) -> Result<Self, XxhError> {
        config.validate()?;
        Ok(match config.algorithm() {
            Algorithm::Xxh32 => Hasher::Xxh32(Xxh32::with_seed(narrow_seed(config.seed())?)),
            Algorithm::Xxh64 => Hasher::Xxh64(Xxh64::with_seed(config.seed())),
        })
    }

    /// Restores a hasher from a snapshot of either width, dispatching on
    /// the snapshot's magic tag.
    ///
    /// # Errors
    ///
    /// Returns [`XxhError::InvalidFormat`] if the tag is unknown or the
    /// record is malformed.
    pub fn from_state(state: &[u8]) -> Result<Self, XxhError> {
        match state.get(..MAGIC_LEN) {
            Some(tag) if tag == XXH32_MAGIC => Xxh32::from_state(state).map(Hasher::Xxh32),
            Some(tag) if tag == XXH64_MAGIC => Xxh64::from_state(state).map(Hasher::Xxh64),
            _ => Err(XxhError::invalid_format("unknown magic tag")),
        }
    }

    /// Returns the algorithm this hasher runs.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Hasher::Xxh32(_) => Algorithm::Xxh32,
            Hasher::Xxh64(_) => Algorithm::Xxh64,
        }
    }

    /// Returns the seed, widened to 64 bits.
    pub fn seed(&self) -> u64 {
        match self {
            Hasher::Xxh32(h) => u64::from(h.seed()),
            Hasher::Xxh64(h) => h.seed(),
        }
    }

    /// Feeds more input.
    pub fn update(&mut self, data: &[u8]) {
        match self {
            Hasher::Xxh32(h) => h.update(data),
            Hasher::Xxh64(h) => h.update(data),
        }
    }

    /// Computes the digest of everything fed so far.
    pub fn finalize(&self) -> AnyDigest {
        match self {
            Hasher::Xxh32(h) => AnyDigest::Xxh32(h.finalize()),
            Hasher::Xxh64(h) => AnyDigest::Xxh64(h.finalize()),
        }
    }

    /// Computes the digest as if `extra` had been fed first, without
    /// changing this hasher.
    pub fn finalize_with(&self, extra: &[u8]) -> AnyDigest {
        match self {
            Hasher::Xxh32(h) => AnyDigest::Xxh32(h.finalize_with(extra)),
            Hasher::Xxh64(h) => AnyDigest::Xxh64(h.finalize_with(extra)),
        }
    }

    /// Returns the hasher to its seed-derived initial state.
    pub fn reset(&mut self) {
        match self {
            Hasher::Xxh32(h) => h.reset(),
            Hasher::Xxh64(h) => h.reset(),
        }
    }

    /// Replaces the seed, then resets.
    ///
    /// # Errors
    ///
    /// Returns [`XxhError::InvalidConfig`] if `seed` does not fit an XXH32
    /// hasher; the hasher is unchanged in that case.
    pub fn reseed(&mut self, seed: u64) -> Result<(), XxhError> {
        match self {
            Hasher::Xxh32(h) => h.reseed(narrow_seed(seed)?),
            Hasher::Xxh64(h) => h.reseed(seed),
        }
        Ok(())
    }

    /// Returns the number of bytes fed since the last reset.
    pub fn total_len(&self) -> u64 {
        match self {
            Hasher::Xxh32(h) => h.total_len(),
            Hasher::Xxh64(h) => h.total_len(),
        }
    }

    /// Digest size in bytes.
    pub fn size(&self) -> usize {
        self.algorithm().digest_size()
    }

    /// Block size in bytes.
    pub fn block_size(&self) -> usize {
        self.algorithm().block_size()
    }

    /// Serializes the hasher state.
    pub fn marshal_state(&self) -> Bytes {
        match self {
            Hasher::Xxh32(h) => h.marshal_state(),
            Hasher::Xxh64(h) => h.marshal_state(),
        }
    }

    /// Restores a snapshot of the same width as this hasher.
    ///
    /// # Errors
    ///
    /// Returns [`XxhError::InvalidFormat`] if `state` is malformed or was
    /// taken from the other width. The hasher is unchanged in that case.
    pub fn unmarshal_state(&mut self, state: &[u8]) -> Result<(), XxhError> {
        match self {
            Hasher::Xxh32(h) => h.unmarshal_state(state),
            Hasher::Xxh64(h) => h.unmarshal_state(state),
        }
    }
}

impl Default for Hasher {
    fn default() -> Self {
        Hasher::Xxh64(Xxh64::new())
    }
}

fn narrow_seed(seed: u64) -> Result<u32, XxhError> {
    u32::try_from(seed).map_err(|_| XxhError::InvalidConfig {
        message: "seed does not fit the algorithm width",
    })
}

impl From<Xxh32> for Hasher {
    fn from(hasher: Xxh32) -> Self {
        Hasher::Xxh32(hasher)
    }
}

impl From<Xxh64> for Hasher {
    fn from(hasher: Xxh64) -> Self {
        Hasher::Xxh64(hasher)
    }
}

impl io::Write for Hasher {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
