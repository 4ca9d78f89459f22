//! Error types for xxhrs.

use thiserror::Error;

/// Errors that can occur while configuring, restoring, or feeding a hasher.
///
/// The streaming engines themselves never fail: `update`, `finalize` and
/// `reset` are infallible. Errors only arise at the edges (state restore,
/// configuration, and the I/O adapters).
#[derive(Debug, Error)]
pub enum XxhError {
    /// An I/O error occurred while reading input data.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A serialized state record could not be decoded.
    ///
    /// The target hasher is left untouched when this is returned.
    #[error("invalid state format: {reason}")]
    InvalidFormat {
        /// Description of what was wrong with the record.
        reason: &'static str,
    },

    /// A hash width other than 32 or 64 bits was requested.
    #[error("unsupported hash variant: {bits} bits")]
    UnsupportedVariant {
        /// The requested width.
        bits: u32,
    },

    /// Invalid configuration parameter.
    #[error("invalid config: {message}")]
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl XxhError {
    pub(crate) const fn invalid_format(reason: &'static str) -> Self {
        XxhError::InvalidFormat { reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err: XxhError = io_err.into();
        assert!(matches!(err, XxhError::Io(_)));
    }

    #[test]
    fn test_io_error_source() {
        use std::error::Error as _;

        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "short");
        let err = XxhError::from(io_err);
        assert!(err.source().is_some());

        let err = XxhError::invalid_format("bad magic");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_display() {
        let err = XxhError::invalid_format("bad magic");
        assert_eq!(err.to_string(), "invalid state format: bad magic");

        let err = XxhError::UnsupportedVariant { bits: 128 };
        assert_eq!(err.to_string(), "unsupported hash variant: 128 bits");
    }
}
