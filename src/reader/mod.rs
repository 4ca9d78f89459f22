//! Hashing adapters for [`std::io::Read`] sources.
//!
//! - [`HashReader`] - Pass-through reader that hashes what it yields
//! - [`digest_reader`] - Drain a reader into a hasher and return the digest
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use xxhrs::{digest_reader, Xxh32};
//!
//! let digest = digest_reader(Xxh32::new(), Cursor::new(b"hello world"))?;
//! assert_eq!(digest.to_u32(), 0xcebb_6622);
//! # Ok::<(), xxhrs::XxhError>(())
//! ```

use std::io::{self, Read};

use crate::buffer::Buffer;
use crate::error::XxhError;
use crate::hash::StreamingHasher;

/// Wraps a reader and hashes every byte read through it.
///
/// Short reads are handled: only the bytes actually returned by the inner
/// reader are hashed.
///
/// # Example
///
/// ```
/// use std::io::{self, Cursor};
/// use xxhrs::{StreamingHasher, Xxh64};
///
/// let mut reader = Xxh64::new().reader(Cursor::new(b"abc".to_vec()));
/// let mut copy = Vec::new();
/// io::copy(&mut reader, &mut copy)?;
///
/// assert_eq!(copy, b"abc");
/// assert_eq!(reader.finalize().to_u64(), xxhrs::sum64(b"abc", 0));
/// # Ok::<(), io::Error>(())
/// ```
#[derive(Debug)]
pub struct HashReader<R, H> {
    inner: R,
    hasher: H,
}

impl<R: Read, H: StreamingHasher> HashReader<R, H> {
    /// Wraps `inner`, feeding everything read into `hasher`.
    pub fn new(inner: R, hasher: H) -> Self {
        Self { inner, hasher }
    }

    /// Returns the hasher.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Returns the digest of everything read so far.
    pub fn finalize(&self) -> H::Digest {
        self.hasher.finalize()
    }

    /// Returns a reference to the inner reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Consumes the adapter and returns the reader and hasher.
    pub fn into_parts(self) -> (R, H) {
        (self.inner, self.hasher)
    }
}

impl<R: Read, H: StreamingHasher> Read for HashReader<R, H> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.hasher.update(&buf[..n]);
        Ok(n)
    }
}

/// Reads `reader` to the end, feeding `hasher`, and returns the digest.
///
/// The hasher may already hold input (for example after
/// [`StreamingHasher::unmarshal_state`]); the reader's bytes are appended.
/// Interrupted reads are retried.
///
/// # Errors
///
/// Returns [`XxhError::Io`] if the reader fails. Whatever was read before
/// the failure is discarded along with the hasher.
pub fn digest_reader<H, R>(mut hasher: H, mut reader: R) -> Result<H::Digest, XxhError>
where
    H: StreamingHasher,
    R: Read,
{
    let mut buffer = Buffer::take();
    loop {
        let n = match reader.read(buffer.as_mut_slice()) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(XxhError::Io(e)),
        };
        hasher.update(buffer.filled(n));
    }
    Ok(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::{Xxh32, Xxh64, sum32, sum64};

    /// Yields at most `step` bytes per read and one interruption up front.
    struct Trickle<'a> {
        data: &'a [u8],
        step: usize,
        interrupted: bool,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(io::Error::new(io::ErrorKind::Interrupted, "again"));
            }
            let n = self.step.min(buf.len()).min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }
    }

    #[test]
    fn test_digest_reader_large_input() {
        let data: Vec<u8> = (0..100_000).map(|i| (i * 7 + 13) as u8).collect();
        let digest = digest_reader(Xxh64::new(), Cursor::new(&data)).unwrap();
        assert_eq!(digest.to_u64(), sum64(&data, 0));
    }

    #[test]
    fn test_digest_reader_short_reads() {
        let data = b"the quick brown fox jumps over the lazy dog";
        let reader = Trickle {
            data,
            step: 5,
            interrupted: false,
        };
        let digest = digest_reader(Xxh32::new(), reader).unwrap();
        assert_eq!(digest.to_u32(), 0x6671_6377);
    }

    #[test]
    fn test_digest_reader_error() {
        let err = digest_reader(Xxh32::new(), Broken).unwrap_err();
        assert!(matches!(err, XxhError::Io(_)));
    }

    #[test]
    fn test_digest_reader_appends_to_state() {
        let mut hasher = Xxh32::with_seed(4);
        hasher.update(b"hello ");
        let digest = digest_reader(hasher, Cursor::new(b"world")).unwrap();
        assert_eq!(digest.to_u32(), sum32(b"hello world", 4));
    }

    #[test]
    fn test_hash_reader_pass_through() {
        let data: Vec<u8> = (0..1000).map(|i| (i % 256) as u8).collect();
        let mut reader = HashReader::new(Cursor::new(data.clone()), Xxh32::new());

        let mut out = Vec::new();
        reader.read_to_end(&mut out).unwrap();

        assert_eq!(out, data);
        assert_eq!(reader.finalize().to_u32(), sum32(&data, 0));
        let (_, hasher) = reader.into_parts();
        assert_eq!(hasher.total_len(), 1000);
    }
}
