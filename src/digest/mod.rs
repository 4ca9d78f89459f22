//! Digest types.
//!
//! - [`Digest`] - Fixed-width big-endian digest bytes
//! - [`AnyDigest`] - Digest of either width, produced by [`crate::Hasher`]

mod any;
mod fixed;

pub use any::AnyDigest;
pub use fixed::{Digest, Digest32, Digest64};
