//! Width-erased digest.

use std::fmt;

use super::{Digest32, Digest64};
use crate::config::Algorithm;

/// A digest of either width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnyDigest {
    /// XXH32 digest.
    Xxh32(Digest32),
    /// XXH64 digest.
    Xxh64(Digest64),
}

impl AnyDigest {
    /// Returns the algorithm that produced this digest.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            AnyDigest::Xxh32(_) => Algorithm::Xxh32,
            AnyDigest::Xxh64(_) => Algorithm::Xxh64,
        }
    }

    /// Returns the digest bytes (4 or 8, big-endian).
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            AnyDigest::Xxh32(d) => d.as_ref(),
            AnyDigest::Xxh64(d) => d.as_ref(),
        }
    }

    /// Returns the digest value, widened to 64 bits.
    pub fn to_u64(&self) -> u64 {
        match self {
            AnyDigest::Xxh32(d) => u64::from(d.to_u32()),
            AnyDigest::Xxh64(d) => d.to_u64(),
        }
    }

    /// Returns the zero-padded lowercase hex rendering.
    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }

    /// Parses a hex digest for the given algorithm.
    pub fn from_hex(algorithm: Algorithm, hex_str: &str) -> Option<Self> {
        match algorithm {
            Algorithm::Xxh32 => Digest32::from_hex(hex_str).map(AnyDigest::Xxh32),
            Algorithm::Xxh64 => Digest64::from_hex(hex_str).map(AnyDigest::Xxh64),
        }
    }
}

impl From<Digest32> for AnyDigest {
    fn from(digest: Digest32) -> Self {
        AnyDigest::Xxh32(digest)
    }
}

impl From<Digest64> for AnyDigest {
    fn from(digest: Digest64) -> Self {
        AnyDigest::Xxh64(digest)
    }
}

impl AsRef<[u8]> for AnyDigest {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Display for AnyDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyDigest::Xxh32(d) => fmt::Display::fmt(d, f),
            AnyDigest::Xxh64(d) => fmt::Display::fmt(d, f),
        }
    }
}
