//! Configuration for width-erased hashing.
//!
//! - [`Algorithm`] - Which XXH family member to run
//! - [`HashConfig`] - Algorithm plus seed, consumed by [`crate::Hasher::new`]

use std::fmt;
use std::str::FromStr;

use crate::error::XxhError;

/// Default seed used by every constructor that does not take one.
pub const DEFAULT_SEED: u64 = 0;

/// A supported hash width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// 32-bit XXH32: 16-byte blocks, 4-byte digest.
    Xxh32,
    /// 64-bit XXH64: 32-byte blocks, 8-byte digest.
    #[default]
    Xxh64,
}

impl Algorithm {
    /// Maps a requested width in bits to an algorithm.
    ///
    /// `0` selects the default (XXH64), matching checksum tools where the
    /// width flag is optional.
    ///
    /// # Errors
    ///
    /// Returns [`XxhError::UnsupportedVariant`] for anything other than
    /// `0`, `32` or `64`.
    ///
    /// # Example
    ///
    /// ```
    /// use xxhrs::{Algorithm, XxhError};
    ///
    /// assert_eq!(Algorithm::from_bits(32)?, Algorithm::Xxh32);
    /// assert_eq!(Algorithm::from_bits(0)?, Algorithm::Xxh64);
    /// assert!(matches!(
    ///     Algorithm::from_bits(128),
    ///     Err(XxhError::UnsupportedVariant { bits: 128 })
    /// ));
    /// # Ok::<(), XxhError>(())
    /// ```
    pub fn from_bits(bits: u32) -> Result<Self, XxhError> {
        match bits {
            0 | 64 => Ok(Algorithm::Xxh64),
            32 => Ok(Algorithm::Xxh32),
            _ => Err(XxhError::UnsupportedVariant { bits }),
        }
    }

    /// Returns the digest width in bits.
    pub const fn bits(&self) -> u32 {
        match self {
            Algorithm::Xxh32 => 32,
            Algorithm::Xxh64 => 64,
        }
    }

    /// Returns the digest width in bytes.
    pub const fn digest_size(&self) -> usize {
        match self {
            Algorithm::Xxh32 => 4,
            Algorithm::Xxh64 => 8,
        }
    }

    /// Returns the block (stripe) width in bytes.
    pub const fn block_size(&self) -> usize {
        match self {
            Algorithm::Xxh32 => 16,
            Algorithm::Xxh64 => 32,
        }
    }

    /// Returns the largest seed this algorithm accepts.
    pub const fn max_seed(&self) -> u64 {
        match self {
            Algorithm::Xxh32 => u32::MAX as u64,
            Algorithm::Xxh64 => u64::MAX,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Xxh32 => f.write_str("xxh32"),
            Algorithm::Xxh64 => f.write_str("xxh64"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = XxhError;

    /// Accepts `xxh32`/`xxh64` (any case) or a bare width such as `32`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let digits = lower.strip_prefix("xxh").unwrap_or(&lower);
        let bits = digits.parse::<u32>().map_err(|_| XxhError::InvalidConfig {
            message: "algorithm must be xxh32, xxh64, 32 or 64",
        })?;
        Self::from_bits(bits)
    }
}

/// Configuration for a width-erased [`crate::Hasher`].
///
/// # Example
///
/// ```
/// use xxhrs::{Algorithm, HashConfig};
///
/// let config = HashConfig::new(Algorithm::Xxh32, 7)?;
/// assert_eq!(config.seed(), 7);
///
/// // Seeds wider than the algorithm are rejected
/// assert!(HashConfig::new(Algorithm::Xxh32, u64::MAX).is_err());
///
/// // Builder pattern
/// let config = HashConfig::default()
///     .with_algorithm(Algorithm::Xxh64)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// # Ok::<(), xxhrs::XxhError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashConfig {
    algorithm: Algorithm,
    seed: u64,
}

impl HashConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`XxhError::InvalidConfig`] if `seed` does not fit the
    /// algorithm's native width.
    pub fn new(algorithm: Algorithm, seed: u64) -> Result<Self, XxhError> {
        let config = Self { algorithm, seed };
        config.validate()?;
        Ok(config)
    }

    /// Sets the algorithm.
    ///
    /// Note: This does not validate the configuration.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the seed.
    ///
    /// Note: This does not validate the configuration.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Returns the seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<(), XxhError> {
        if self.seed > self.algorithm.max_seed() {
            return Err(XxhError::InvalidConfig {
                message: "seed does not fit the algorithm width",
            });
        }
        Ok(())
    }
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            seed: DEFAULT_SEED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HashConfig::default();
        assert_eq!(config.algorithm(), Algorithm::Xxh64);
        assert_eq!(config.seed(), DEFAULT_SEED);
    }

    #[test]
    fn test_builder_pattern() {
        let config = HashConfig::default()
            .with_algorithm(Algorithm::Xxh32)
            .with_seed(99);

        assert_eq!(config.algorithm(), Algorithm::Xxh32);
        assert_eq!(config.seed(), 99);
    }

    #[test]
    fn test_invalid_seed_width() {
        assert!(HashConfig::new(Algorithm::Xxh32, u64::from(u32::MAX) + 1).is_err());
        assert!(HashConfig::new(Algorithm::Xxh32, u64::from(u32::MAX)).is_ok());
        assert!(HashConfig::new(Algorithm::Xxh64, u64::MAX).is_ok());
    }

    #[test]
    fn test_validate_after_builder() {
        let config = HashConfig::default()
            .with_seed(u64::MAX)
            .with_algorithm(Algorithm::Xxh32);
        assert!(matches!(
            config.validate(),
            Err(XxhError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_from_bits() {
        assert_eq!(Algorithm::from_bits(64).unwrap(), Algorithm::Xxh64);
        assert_eq!(Algorithm::from_bits(32).unwrap(), Algorithm::Xxh32);
        assert!(matches!(
            Algorithm::from_bits(16),
            Err(XxhError::UnsupportedVariant { bits: 16 })
        ));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("xxh32".parse::<Algorithm>().unwrap(), Algorithm::Xxh32);
        assert_eq!("XXH64".parse::<Algorithm>().unwrap(), Algorithm::Xxh64);
        assert_eq!("32".parse::<Algorithm>().unwrap(), Algorithm::Xxh32);
        assert!(matches!(
            "xxh128".parse::<Algorithm>(),
            Err(XxhError::UnsupportedVariant { bits: 128 })
        ));
        assert!(matches!(
            "sha256".parse::<Algorithm>(),
            Err(XxhError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_sizes() {
        assert_eq!(Algorithm::Xxh32.digest_size(), 4);
        assert_eq!(Algorithm::Xxh32.block_size(), 16);
        assert_eq!(Algorithm::Xxh64.digest_size(), 8);
        assert_eq!(Algorithm::Xxh64.block_size(), 32);
        assert_eq!(Algorithm::Xxh64.to_string(), "xxh64");
    }
}
