//! Fixed-width digest values.

use std::fmt;

/// The finalized output of a hasher, stored big-endian.
///
/// A digest owns no engine state. It renders as lowercase hexadecimal,
/// zero-padded to twice its width, which is the format checksum utilities
/// print in front of the subject name.
///
/// # Example
///
/// ```
/// use xxhrs::{Digest32, Xxh32};
///
/// let mut hasher = Xxh32::new();
/// hasher.update(b"abc");
/// let digest: Digest32 = hasher.finalize();
///
/// assert_eq!(digest.to_u32(), 0x32d1_53ff);
/// assert_eq!(digest.to_string(), "32d153ff");
/// assert_eq!(Digest32::from_hex("32d153ff"), Some(digest));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digest<const N: usize>([u8; N]);

/// A 4-byte XXH32 digest.
pub type Digest32 = Digest<4>;

/// An 8-byte XXH64 digest.
pub type Digest64 = Digest<8>;

impl<const N: usize> Digest<N> {
    /// The size of the digest in bytes.
    pub const SIZE: usize = N;

    /// Creates a digest from big-endian bytes.
    pub const fn new(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    /// Creates a digest from a slice.
    ///
    /// Returns `None` if the slice is not exactly `N` bytes.
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        let bytes: [u8; N] = slice.try_into().ok()?;
        Some(Self(bytes))
    }

    /// Returns the digest bytes.
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    /// Returns the digest as a lowercase hex string of `2 * N` characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parses a digest from a hex string.
    ///
    /// Upper- and lowercase digits are accepted. Returns `None` if the
    /// string is not valid hex or not exactly `2 * N` characters.
    pub fn from_hex(hex_str: &str) -> Option<Self> {
        let mut bytes = [0u8; N];
        hex::decode_to_slice(hex_str, &mut bytes).ok()?;
        Some(Self(bytes))
    }
}

impl Digest32 {
    /// Returns the digest as the native XXH32 value.
    pub const fn to_u32(&self) -> u32 {
        u32::from_be_bytes(self.0)
    }

    pub(crate) const fn from_u32(value: u32) -> Self {
        Self(value.to_be_bytes())
    }
}

impl Digest64 {
    /// Returns the digest as the native XXH64 value.
    pub const fn to_u64(&self) -> u64 {
        u64::from_be_bytes(self.0)
    }

    pub(crate) const fn from_u64(value: u64) -> Self {
        Self(value.to_be_bytes())
    }
}

impl From<Digest32> for u32 {
    fn from(digest: Digest32) -> Self {
        digest.to_u32()
    }
}

impl From<Digest64> for u64 {
    fn from(digest: Digest64) -> Self {
        digest.to_u64()
    }
}

impl<const N: usize> AsRef<[u8]> for Digest<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> fmt::Display for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl<const N: usize> fmt::LowerHex for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice() {
        let digest = Digest32::from_slice(&[0xde, 0xad, 0xbe, 0xef]).unwrap();
        assert_eq!(digest.to_u32(), 0xdead_beef);

        // Wrong size
        assert!(Digest32::from_slice(&[0u8; 3]).is_none());
        assert!(Digest64::from_slice(&[0u8; 9]).is_none());
    }

    #[test]
    fn test_hex_is_zero_padded() {
        assert_eq!(Digest32::from_u32(0x0e18_cbea).to_hex(), "0e18cbea");
        assert_eq!(Digest64::from_u64(0x1).to_string(), "0000000000000001");
    }

    #[test]
    fn test_from_hex() {
        let digest = Digest64::from_hex("ED714233C5A9A792").unwrap();
        assert_eq!(digest.to_u64(), 0xed71_4233_c5a9_a792);

        assert!(Digest64::from_hex("ed714233c5a9a7").is_none());
        assert!(Digest32::from_hex("zzzzzzzz").is_none());
    }

    #[test]
    fn test_big_endian_layout() {
        let digest = Digest32::from_u32(0x0102_0304);
        assert_eq!(digest.as_bytes(), &[1, 2, 3, 4]);
        assert_eq!(u32::from(digest), 0x0102_0304);
    }

    #[test]
    fn test_checksum_line_format() {
        let digest = Digest64::from_u64(0x59f3_208c_a1d7_b1b4);
        let line = format!("{}  {}", digest, "lorem.txt");
        assert_eq!(line, "59f3208ca1d7b1b4  lorem.txt");
    }
}
