//! Binary state snapshots for resumable hashing.
//!
//! Every engine serializes to the same fixed layout, with all scalars
//! big-endian:
//!
//! ```text
//! [magic: 6 bytes][total_len: u64][seed: W][lane0..lane3: W][pending_len: u8][pending]
//! ```
//!
//! `W` is the engine's native word (`u32` for XXH32, `u64` for XXH64). The
//! total length is always 64 bits wide so that an XXH32 stream longer than
//! 4 GiB still restores with its large-input flag intact.
//!
//! Decoding validates the whole record before the caller touches its engine,
//! so a failed restore never leaves a half-updated hasher behind.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::XxhError;

/// Length of every magic tag.
pub const MAGIC_LEN: usize = 6;

/// Magic tag of an XXH32 snapshot (family name + format version).
pub const XXH32_MAGIC: &[u8; MAGIC_LEN] = b"xxh32\x01";

/// Magic tag of an XXH64 snapshot (family name + format version).
pub const XXH64_MAGIC: &[u8; MAGIC_LEN] = b"xxh64\x01";

/// A native lane word that can be written to and read from a snapshot.
pub(crate) trait LaneWord: Copy {
    const BYTES: usize;

    fn put(self, buf: &mut BytesMut);

    fn get(buf: &mut &[u8]) -> Self;
}

impl LaneWord for u32 {
    const BYTES: usize = 4;

    fn put(self, buf: &mut BytesMut) {
        buf.put_u32(self);
    }

    fn get(buf: &mut &[u8]) -> Self {
        buf.get_u32()
    }
}

impl LaneWord for u64 {
    const BYTES: usize = 8;

    fn put(self, buf: &mut BytesMut) {
        buf.put_u64(self);
    }

    fn get(buf: &mut &[u8]) -> Self {
        buf.get_u64()
    }
}

/// Decoded engine fields, borrowed from the record they came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Snapshot<'a, W> {
    pub(crate) total_len: u64,
    pub(crate) seed: W,
    pub(crate) lanes: [W; 4],
    pub(crate) pending: &'a [u8],
}

impl<W: LaneWord> Snapshot<'_, W> {
    /// Size of the fixed part of a record, before the pending bytes.
    const HEADER_LEN: usize = MAGIC_LEN + 8 + W::BYTES * 5 + 1;

    /// Encodes the snapshot under `magic`.
    pub(crate) fn encode(&self, magic: &[u8; MAGIC_LEN]) -> Bytes {
        let mut buf = BytesMut::with_capacity(Self::HEADER_LEN + self.pending.len());
        buf.put_slice(magic);
        buf.put_u64(self.total_len);
        self.seed.put(&mut buf);
        for lane in self.lanes {
            lane.put(&mut buf);
        }
        // Pending is always shorter than a block (at most 31 bytes).
        buf.put_u8(self.pending.len() as u8);
        buf.put_slice(self.pending);
        buf.freeze()
    }
}

impl<'a, W: LaneWord> Snapshot<'a, W> {
    /// Decodes and validates a record written for an engine with the given
    /// magic tag and block size.
    pub(crate) fn decode(
        magic: &[u8; MAGIC_LEN],
        block_size: usize,
        record: &'a [u8],
    ) -> Result<Self, XxhError> {
        if record.len() < Self::HEADER_LEN {
            return Err(XxhError::invalid_format("record too short"));
        }
        let (tag, mut buf) = record.split_at(MAGIC_LEN);
        if tag != magic {
            return Err(XxhError::invalid_format("magic tag mismatch"));
        }

        let total_len = buf.get_u64();
        let seed = W::get(&mut buf);
        let lanes = [
            W::get(&mut buf),
            W::get(&mut buf),
            W::get(&mut buf),
            W::get(&mut buf),
        ];
        let pending_len = usize::from(buf.get_u8());

        if pending_len >= block_size {
            return Err(XxhError::invalid_format(
                "pending length is not below the block size",
            ));
        }
        if buf.remaining() != pending_len {
            return Err(XxhError::invalid_format(
                "record length does not match pending length",
            ));
        }
        if total_len % block_size as u64 != pending_len as u64 {
            return Err(XxhError::invalid_format(
                "pending length does not match total length",
            ));
        }

        Ok(Self {
            total_len,
            seed,
            lanes,
            pending: buf,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Snapshot<'static, u32> {
        Snapshot {
            total_len: 19,
            seed: 7,
            lanes: [1, 2, 3, 4],
            pending: b"abc",
        }
    }

    #[test]
    fn test_layout() {
        let record = sample().encode(XXH32_MAGIC);

        assert_eq!(record.len(), MAGIC_LEN + 8 + 4 * 5 + 1 + 3);
        assert_eq!(&record[..MAGIC_LEN], XXH32_MAGIC);
        assert_eq!(&record[MAGIC_LEN..MAGIC_LEN + 8], &19u64.to_be_bytes());
        assert_eq!(&record[MAGIC_LEN + 8..MAGIC_LEN + 12], &7u32.to_be_bytes());
        assert_eq!(record[MAGIC_LEN + 28], 3);
        assert_eq!(&record[MAGIC_LEN + 29..], b"abc");
    }

    #[test]
    fn test_decode_encoded() {
        let record = sample().encode(XXH32_MAGIC);
        let decoded = Snapshot::<u32>::decode(XXH32_MAGIC, 16, &record).unwrap();
        assert_eq!(decoded, sample());
    }

    #[test]
    fn test_wrong_magic() {
        let record = sample().encode(XXH32_MAGIC);
        let err = Snapshot::<u32>::decode(XXH64_MAGIC, 16, &record).unwrap_err();
        assert!(matches!(err, XxhError::InvalidFormat { .. }));
    }

    #[test]
    fn test_truncated_record() {
        let record = sample().encode(XXH32_MAGIC);
        for len in 0..record.len() {
            assert!(
                Snapshot::<u32>::decode(XXH32_MAGIC, 16, &record[..len]).is_err(),
                "prefix of {} bytes should be rejected",
                len
            );
        }
    }

    #[test]
    fn test_trailing_bytes() {
        let mut record = sample().encode(XXH32_MAGIC).to_vec();
        record.push(0);
        assert!(Snapshot::<u32>::decode(XXH32_MAGIC, 16, &record).is_err());
    }

    #[test]
    fn test_pending_not_below_block() {
        let snapshot = Snapshot::<u32> {
            total_len: 16,
            pending: &[0u8; 16],
            ..sample()
        };
        let record = snapshot.encode(XXH32_MAGIC);
        assert!(Snapshot::<u32>::decode(XXH32_MAGIC, 16, &record).is_err());
    }

    #[test]
    fn test_pending_inconsistent_with_total() {
        let snapshot = Snapshot::<u32> {
            total_len: 20,
            ..sample()
        };
        let record = snapshot.encode(XXH32_MAGIC);
        assert!(Snapshot::<u32>::decode(XXH32_MAGIC, 16, &record).is_err());
    }
}
