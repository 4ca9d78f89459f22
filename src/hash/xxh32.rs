//! XXH32 streaming engine.

use std::io;

use bytes::{Buf, Bytes};

use super::StreamingHasher;
use crate::buffer::Pending;
use crate::config::Algorithm;
use crate::digest::Digest32;
use crate::error::XxhError;
use crate::state::{Snapshot, XXH32_MAGIC};

const PRIME32_1: u32 = 0x9E37_79B1;
const PRIME32_2: u32 = 0x85EB_CA77;
const PRIME32_3: u32 = 0xC2B2_AE3D;
const PRIME32_4: u32 = 0x27D4_EB2F;
const PRIME32_5: u32 = 0x1656_67B1;

const BLOCK_SIZE: usize = 16;
const DIGEST_SIZE: usize = 4;

#[inline]
const fn round(acc: u32, input: u32) -> u32 {
    acc.wrapping_add(input.wrapping_mul(PRIME32_2))
        .rotate_left(13)
        .wrapping_mul(PRIME32_1)
}

#[inline]
const fn avalanche(mut acc: u32) -> u32 {
    acc ^= acc >> 15;
    acc = acc.wrapping_mul(PRIME32_2);
    acc ^= acc >> 13;
    acc = acc.wrapping_mul(PRIME32_3);
    acc ^= acc >> 16;
    acc
}

/// The four accumulator lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Lanes([u32; 4]);

impl Lanes {
    const fn new(seed: u32) -> Self {
        Self([
            seed.wrapping_add(PRIME32_1).wrapping_add(PRIME32_2),
            seed.wrapping_add(PRIME32_2),
            seed,
            seed.wrapping_sub(PRIME32_1),
        ])
    }

    /// Runs one 16-byte block through the round function, one
    /// little-endian word per lane.
    #[inline]
    fn consume(&mut self, mut block: &[u8]) {
        debug_assert_eq!(block.len(), BLOCK_SIZE);
        for lane in &mut self.0 {
            *lane = round(*lane, block.get_u32_le());
        }
    }

    fn converge(&self) -> u32 {
        let [l0, l1, l2, l3] = self.0;
        l0.rotate_left(1)
            .wrapping_add(l1.rotate_left(7))
            .wrapping_add(l2.rotate_left(12))
            .wrapping_add(l3.rotate_left(18))
    }
}

/// Streaming XXH32 hasher.
///
/// Bytes may be fed in any chunking; the digest is identical to hashing the
/// concatenated input in one call. Finalizing borrows the hasher immutably,
/// so it can be repeated, interleaved with further updates, or done from
/// several threads at once.
///
/// # Example
///
/// ```
/// use xxhrs::Xxh32;
///
/// let mut hasher = Xxh32::with_seed(0);
/// hasher.update(b"the quick brown fox");
/// assert_eq!(hasher.digest(), 0x9adf_0164);
///
/// hasher.update(b" jumps over the lazy dog");
/// assert_eq!(hasher.digest(), 0x6671_6377);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xxh32 {
    seed: u32,
    total_len: u64,
    lanes: Lanes,
    pending: Pending<BLOCK_SIZE>,
}

impl Xxh32 {
    /// Creates a hasher with seed `0`.
    pub const fn new() -> Self {
        Self::with_seed(0)
    }

    /// Creates a hasher with the given seed.
    pub const fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            total_len: 0,
            lanes: Lanes::new(seed),
            pending: Pending::new(),
        }
    }

    /// Feeds more input.
    ///
    /// Bytes held over from the previous call are completed into a block
    /// first; whole blocks are then consumed straight from `data`, and the
    /// incomplete trailing stride is kept for the next call.
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
    pub fn finalize(&self) -> Digest32 {
        Digest32::from_u32(self.digest())
    }

    /// Computes the digest as a native `u32`.
    pub fn digest(&self) -> u32 {
        let mut acc = if self.total_len >= BLOCK_SIZE as u64 {
            self.lanes.converge()
        } else {
            self.seed.wrapping_add(PRIME32_5)
        };
        // The length is folded in modulo 2^32.
        acc = acc.wrapping_add(self.total_len as u32);

        let mut tail = self.pending.as_slice();
        while tail.remaining() >= 4 {
            acc = acc.wrapping_add(tail.get_u32_le().wrapping_mul(PRIME32_3));
            acc = acc.rotate_left(17).wrapping_mul(PRIME32_4);
        }
        while tail.has_remaining() {
            acc = acc.wrapping_add(u32::from(tail.get_u8()).wrapping_mul(PRIME32_5));
            acc = acc.rotate_left(11).wrapping_mul(PRIME32_1);
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
    pub fn reseed(&mut self, seed: u32) {
        self.seed = seed;
        self.reset();
    }

    /// Returns the seed.
    pub fn seed(&self) -> u32 {
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
        .encode(XXH32_MAGIC)
    }

    /// Restores a state produced by [`Xxh32::marshal_state`].
    ///
    /// # Errors
    ///
    /// Returns [`XxhError::InvalidFormat`] if `state` is not a valid XXH32
    /// snapshot; `self` is unchanged in that case.
    pub fn unmarshal_state(&mut self, state: &[u8]) -> Result<(), XxhError> {
        *self = Self::from_state(state)?;
        Ok(())
    }

    /// Builds a hasher from a state produced by [`Xxh32::marshal_state`].
    pub fn from_state(state: &[u8]) -> Result<Self, XxhError> {
        let snapshot = Snapshot::<u32>::decode(XXH32_MAGIC, BLOCK_SIZE, state)?;
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

impl Default for Xxh32 {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamingHasher for Xxh32 {
    type Seed = u32;
    type Output = u32;
    type Digest = Digest32;

    const ALGORITHM: Algorithm = Algorithm::Xxh32;
    const DIGEST_SIZE: usize = DIGEST_SIZE;
    const BLOCK_SIZE: usize = BLOCK_SIZE;

    fn with_seed(seed: u32) -> Self {
        Xxh32::with_seed(seed)
    }

    fn update(&mut self, data: &[u8]) {
        Xxh32::update(self, data);
    }

    fn finalize(&self) -> Digest32 {
        Xxh32::finalize(self)
    }

    fn value(&self) -> u32 {
        self.digest()
    }

    fn reset(&mut self) {
        Xxh32::reset(self);
    }

    fn reseed(&mut self, seed: u32) {
        Xxh32::reseed(self, seed);
    }

    fn seed(&self) -> u32 {
        self.seed
    }

    fn total_len(&self) -> u64 {
        self.total_len
    }

    fn marshal_state(&self) -> Bytes {
        Xxh32::marshal_state(self)
    }

    fn unmarshal_state(&mut self, state: &[u8]) -> Result<(), XxhError> {
        Xxh32::unmarshal_state(self, state)
    }
}

impl io::Write for Xxh32 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Computes the XXH32 digest of `data` with a fresh hasher.
///
/// ```
/// assert_eq!(xxhrs::sum32(b"hello world", 0), 0xcebb_6622);
/// ```
pub fn sum32(data: &[u8], seed: u32) -> u32 {
    let mut hasher = Xxh32::with_seed(seed);
    hasher.update(data);
    hasher.digest()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PANGRAM: &[u8] = b"the quick brown fox jumps over the lazy dog";

    #[test]
    fn test_known_vectors() {
        assert_eq!(sum32(b"", 0), 0x02cc_5d05);
        assert_eq!(sum32(b"abc", 0), 0x32d1_53ff);
        assert_eq!(sum32(b"abcd", 0), 0xa364_3705);
        assert_eq!(sum32(b"hello world", 0), 0xcebb_6622);
        assert_eq!(sum32(b"I love programming in GO!", 0), 0x4fe3_561f);
        assert_eq!(sum32(PANGRAM, 0), 0x6671_6377);
    }

    #[test]
    fn test_seeded_vectors() {
        assert_eq!(sum32(b"", 1), 0x0b2c_b792);
        assert_eq!(sum32(PANGRAM, 1), 0xce67_0f2c);
    }

    #[test]
    fn test_lane_init_wraps() {
        let lanes = Lanes::new(u32::MAX);
        assert_eq!(lanes.0[2], u32::MAX);
        assert_eq!(lanes.0[3], u32::MAX.wrapping_sub(PRIME32_1));
    }

    #[test]
    fn test_pending_stays_below_block() {
        let mut hasher = Xxh32::new();
        for len in 0..64 {
            hasher.update(&vec![0xAB; len]);
            assert!(hasher.pending.len() < BLOCK_SIZE);
            assert_eq!(hasher.pending.len() as u64, hasher.total_len() % 16);
        }
    }

    #[test]
    fn test_byte_at_a_time() {
        let mut hasher = Xxh32::new();
        for byte in PANGRAM {
            hasher.update(std::slice::from_ref(byte));
        }
        assert_eq!(hasher.digest(), sum32(PANGRAM, 0));
    }

    #[test]
    fn test_finalize_does_not_mutate() {
        let mut hasher = Xxh32::new();
        hasher.update(&PANGRAM[..21]);
        let before = hasher.clone();

        let first = hasher.finalize();
        let second = hasher.finalize();
        assert_eq!(first, second);
        assert_eq!(hasher, before);
    }

    #[test]
    fn test_reseed() {
        let mut hasher = Xxh32::with_seed(5);
        hasher.update(PANGRAM);
        hasher.reseed(1);
        assert_eq!(hasher.total_len(), 0);
        hasher.update(PANGRAM);
        assert_eq!(hasher.digest(), 0xce67_0f2c);
    }

    #[test]
    fn test_io_write() {
        use std::io::Write;

        let mut hasher = Xxh32::new();
        let written = hasher.write(b"hello ").unwrap();
        assert_eq!(written, 6);
        hasher.write_all(b"world").unwrap();
        hasher.flush().unwrap();
        assert_eq!(hasher.digest(), 0xcebb_6622);
    }

    #[test]
    fn test_state_keeps_large_flag() {
        let mut hasher = Xxh32::new();
        hasher.update(&[7u8; 20]);
        let restored = Xxh32::from_state(&hasher.marshal_state()).unwrap();
        assert_eq!(restored, hasher);
        assert_eq!(restored.digest(), sum32(&[7u8; 20], 0));
    }

    #[test]
    fn test_total_len_wraps_after_restore() {
        let mut record = Xxh32::new().marshal_state().to_vec();
        record[6..14].copy_from_slice(&(u64::MAX - 15).to_be_bytes());
        let mut hasher = Xxh32::from_state(&record).unwrap();

        hasher.update(&[0u8; 37]);
        assert_eq!(hasher.total_len(), 21);
        let _ = hasher.digest();
    }

    #[test]
    fn test_state_rejects_foreign_lanes() {
        let mut hasher = Xxh32::new();
        hasher.update(b"abc");
        let mut record = hasher.marshal_state().to_vec();
        // Corrupt lane0 of a short-input snapshot
        record[6 + 8 + 4] ^= 0xFF;

        let mut target = Xxh32::with_seed(9);
        assert!(target.unmarshal_state(&record).is_err());
        assert_eq!(target, Xxh32::with_seed(9));
    }
}
