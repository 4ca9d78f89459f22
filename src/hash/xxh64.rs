//! XXH64 streaming engine.

use std::hash::BuildHasher;
use std::io;

use bytes::{Buf, Bytes};

use super::StreamingHasher;
use crate::buffer::Pending;
use crate::config::Algorithm;
use crate::digest::Digest64;
use crate::error::XxhError;
use crate::state::{Snapshot, XXH64_MAGIC};

const PRIME64_1: u64 = 0x9E37_79B1_85EB_CA87;
const PRIME64_2: u64 = 0xC2B2_AE3D_27D4_EB4F;
const PRIME64_3: u64 = 0x1656_67B1_9E37_79F9;
const PRIME64_4: u64 = 0x85EB_CA77_C2B2_AE63;
const PRIME64_5: u64 = 0x27D4_EB2F_1656_67C5;

const BLOCK_SIZE: usize = 32;
const DIGEST_SIZE: usize = 8;

#[inline]
const fn round(acc: u64, input: u64) -> u64 {
    acc.wrapping_add(input.wrapping_mul(PRIME64_2))
        .rotate_left(31)
        .wrapping_mul(PRIME64_1)
}

#[inline]
const fn merge_round(acc: u64, lane: u64) -> u64 {
    (acc ^ round(0, lane))
        .wrapping_mul(PRIME64_1)
        .wrapping_add(PRIME64_4)
}

#[inline]
const fn avalanche(mut acc: u64) -> u64 {
    acc ^= acc >> 33;
    acc = acc.wrapping_mul(PRIME64_2);
    acc ^= acc >> 29;
    acc = acc.wrapping_mul(PRIME64_3);
    acc ^= acc >> 32;
    acc
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Lanes([u64; 4]);

impl Lanes {
    const fn new(seed: u64) -> Self {
        Self([
            seed.wrapping_add(PRIME64_1).wrapping_add(PRIME64_2),
            seed.wrapping_add(PRIME64_2),
            seed,
            seed.wrapping_sub(PRIME64_1),
        ])
    }

    #[inline]
    fn consume(&mut self, mut block: &[u8]) {
        debug_assert_eq!(block.len(), BLOCK_SIZE);
        for lane in &mut self.0 {
            *lane = round(*lane, block.get_u64_le());
        }
    }

    fn converge(&self) -> u64 {
        let [l0, l1, l2, l3] = self.0;
        let acc = l0
            .rotate_left(1)
            .wrapping_add(l1.rotate_left(7))
            .wrapping_add(l2.rotate_left(12))
            .wrapping_add(l3.rotate_left(18));
        self.0.iter().fold(acc, |acc, &lane| merge_round(acc, lane))
    }
}

/// Streaming XXH64 hasher.
///
/// Same contract as [`crate::Xxh32`], with 32-byte blocks and an 8-byte
/// digest. Also usable as a [`std::hash::Hasher`]; see [`Xxh64Builder`].
///
/// # Example
///
/// ```
/// use xxhrs::Xxh64;
///
/// let mut hasher = Xxh64::new();
/// hasher.update(b"the quick brown fox jumps over the lazy dog");
/// assert_eq!(hasher.finalize().to_string(), "ed714233c5a9a792");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xxh64 {
    seed: u64,
    total_len: u64,
    lanes: Lanes,
    pending: Pending<BLOCK_SIZE>,
}

impl Xxh64 {
    /// Creates a hasher with seed `0`.
    pub const fn new() -> Self {
        Self::with_seed(0)
    }

    /// Creates a hasher with the given seed.
    pub const fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            total_len: 0,
            lanes: Lanes::new(seed),
            pending: Pending::new(),
        }
    }

    /// Feeds more input.
    pub fn update(&mut self, mut data: &[u8]) {
        self.total_len = self.total_len.wrapping_add(data.len() as u64);

        if !self.pending.is_empty() {
            data = self.pending.fill(data);
            match self.pending.take_block() {
                Some(block) => self.lanes.consume(&block),
                None => return,
            }
        }

        let mut blocks = data.chunks_exact(BLOCK_SIZE);
        for block in &mut blocks {
            self.lanes.consume(block);
        }
        self.pending.stash(blocks.remainder());
    }

    /// Computes the digest of everything fed so far.
    pub fn finalize(&self) -> Digest64 {
        Digest64::from_u64(self.digest())
    }

    /// Computes the digest as a native `u64`.
    pub fn digest(&self) -> u64 {
        let mut acc = if self.total_len >= BLOCK_SIZE as u64 {
            self.lanes.converge()
        } else {
            self.seed.wrapping_add(PRIME64_5)
        };
        acc = acc.wrapping_add(self.total_len);

        // Tail order is 8-byte words, then at most one 4-byte word, then
        // single bytes.
        let mut tail = self.pending.as_slice();
        while tail.remaining() >= 8 {
            acc ^= round(0, tail.get_u64_le());
            acc = acc
                .rotate_left(27)
                .wrapping_mul(PRIME64_1)
                .wrapping_add(PRIME64_4);
        }
        if tail.remaining() >= 4 {
            acc ^= u64::from(tail.get_u32_le()).wrapping_mul(PRIME64_1);
            acc = acc
                .rotate_left(23)
                .wrapping_mul(PRIME64_2)
                .wrapping_add(PRIME64_3);
        }
        while tail.has_remaining() {
            acc ^= u64::from(tail.get_u8()).wrapping_mul(PRIME64_5);
            acc = acc.rotate_left(11).wrapping_mul(PRIME64_1);
        }

        avalanche(acc)
    }

    /// Returns the hasher to its seed-derived initial state.
    pub fn reset(&mut self) {
        self.lanes = Lanes::new(self.seed);
        self.pending.clear();
        self.total_len = 0;
    }

    /// Replaces the seed, then resets.
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.reset();
    }

    /// Returns the seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the number of bytes fed since the last reset.
    pub fn total_len(&self) -> u64 {
        self.total_len
    }

    /// Serializes the hasher state.
    pub fn marshal_state(&self) -> Bytes {
        Snapshot {
            total_len: self.total_len,
            seed: self.seed,
            lanes: self.lanes.0,
            pending: self.pending.as_slice(),
        }
        .encode(XXH64_MAGIC)
    }

    /// Restores a state produced by [`Xxh64::marshal_state`].
    ///
    /// # Errors
    ///
    /// Returns [`XxhError::InvalidFormat`] if `state` is not a valid XXH64
    /// snapshot; `self` is unchanged in that case.
    pub fn unmarshal_state(&mut self, state: &[u8]) -> Result<(), XxhError> {
        *self = Self::from_state(state)?;
        Ok(())
    }

    /// Builds a hasher from a state produced by [`Xxh64::marshal_state`].
    pub fn from_state(state: &[u8]) -> Result<Self, XxhError> {
        let snapshot = Snapshot::<u64>::decode(XXH64_MAGIC, BLOCK_SIZE, state)?;
        let lanes = Lanes(snapshot.lanes);
        if snapshot.total_len < BLOCK_SIZE as u64 && lanes != Lanes::new(snapshot.seed) {
            return Err(XxhError::invalid_format("lanes do not match seed"));
        }
        let mut pending = Pending::new();
        pending.stash(snapshot.pending);

        Ok(Self {
            seed: snapshot.seed,
            total_len: snapshot.total_len,
            lanes,
            pending,
        })
    }
}

impl Default for Xxh64 {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamingHasher for Xxh64 {
    type Seed = u64;
    type Output = u64;
    type Digest = Digest64;

    const ALGORITHM: Algorithm = Algorithm::Xxh64;
    const DIGEST_SIZE: usize = DIGEST_SIZE;
    const BLOCK_SIZE: usize = BLOCK_SIZE;

    fn with_seed(seed: u64) -> Self {
        Xxh64::with_seed(seed)
    }

    fn update(&mut self, data: &[u8]) {
        Xxh64::update(self, data);
    }

    fn finalize(&self) -> Digest64 {
        Xxh64::finalize(self)
    }

    fn value(&self) -> u64 {
        self.digest()
    }

    fn reset(&mut self) {
        Xxh64::reset(self);
    }

    fn reseed(&mut self, seed: u64) {
        Xxh64::reseed(self, seed);
    }

    fn seed(&self) -> u64 {
        self.seed
    }

    fn total_len(&self) -> u64 {
        self.total_len
    }

    fn marshal_state(&self) -> Bytes {
        Xxh64::marshal_state(self)
    }

    fn unmarshal_state(&mut self, state: &[u8]) -> Result<(), XxhError> {
        Xxh64::unmarshal_state(self, state)
    }
}

impl io::Write for Xxh64 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl std::hash::Hasher for Xxh64 {
    fn finish(&self) -> u64 {
        self.digest()
    }

    fn write(&mut self, bytes: &[u8]) {
        self.update(bytes);
    }
}

/// A [`BuildHasher`] producing seeded [`Xxh64`] hashers.
///
/// ```
/// use std::collections::HashMap;
/// use xxhrs::Xxh64Builder;
///
/// let mut map: HashMap<&str, u32, _> = HashMap::with_hasher(Xxh64Builder::with_seed(7));
/// map.insert("answer", 42);
/// assert_eq!(map["answer"], 42);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Xxh64Builder {
    seed: u64,
}

impl Xxh64Builder {
    /// Creates a builder whose hashers all start from `seed`.
    pub const fn with_seed(seed: u64) -> Self {
        Self { seed }
    }
}

impl BuildHasher for Xxh64Builder {
    type Hasher = Xxh64;

    fn build_hasher(&self) -> Xxh64 {
        Xxh64::with_seed(self.seed)
    }
}

/// Computes the XXH64 digest of `data` with a fresh hasher.
///
/// ```
/// let digest = xxhrs::sum64(b"the quick brown fox jumps over the lazy dog", 0);
/// assert_eq!(digest, 0xed71_4233_c5a9_a792);
/// ```
pub fn sum64(data: &[u8], seed: u64) -> u64 {
    let mut hasher = Xxh64::with_seed(seed);
    hasher.update(data);
    hasher.digest()
}
