//! xxhrs
//!
//! Streaming XXH32 and XXH64 checksums for Rust.
//!
//! `xxhrs` turns a byte stream into a fast, seedable, non-cryptographic
//! checksum. It is designed as a small, composable primitive for:
//!
//! - file and transfer integrity checks
//! - checksum tools (`<hex>  <name>` lines)
//! - hashing long streams that must survive a restart
//!
//! Every engine guarantees:
//! - identical digests no matter how the input is split across `update` calls
//! - `finalize` borrows immutably and can be repeated at any point
//! - state snapshots (`marshal_state`) that resume bit-for-bit
//!
//! The crate intentionally:
//! - does NOT open files or walk directories
//! - does NOT manage concurrency (one hasher per unit of work)
//! - does NOT provide cryptographic guarantees
//!
//! # One-shot
//!
//! ```
//! assert_eq!(xxhrs::sum32(b"abc", 0), 0x32d1_53ff);
//! assert_eq!(
//!     xxhrs::sum64(b"the quick brown fox jumps over the lazy dog", 0),
//!     0xed71_4233_c5a9_a792,
//! );
//! ```
//!
//! # Streaming and resuming
//!
//! ```
//! use xxhrs::Xxh64;
//!
//! let mut hasher = Xxh64::new();
//! hasher.update(b"the quick brown fox");
//!
//! // Persist mid-stream...
//! let state = hasher.marshal_state();
//!
//! // ...and pick up later.
//! let mut resumed = Xxh64::from_state(&state)?;
//! resumed.update(b" jumps over the lazy dog");
//! assert_eq!(resumed.finalize().to_string(), "ed714233c5a9a792");
//! # Ok::<(), xxhrs::XxhError>(())
//! ```
//!
//! # Readers
//!
//! ```no_run
//! use std::fs::File;
//! use xxhrs::{digest_reader, XxhError, Xxh64};
//!
//! fn main() -> Result<(), XxhError> {
//!     let file = File::open("data.bin")?;
//!     let digest = digest_reader(Xxh64::new(), file)?;
//!     println!("{}  {}", digest, "data.bin");
//!     Ok(())
//! }
//! ```
//!
//! # Async (feature = "async-io")
//!
//! ```ignore
//! use futures_io::AsyncRead;
//! use xxhrs::{digest_async, Xxh32};
//!
//! async fn demo<R: AsyncRead + Unpin>(reader: R) -> Result<(), xxhrs::XxhError> {
//!     let digest = digest_async(Xxh32::new(), reader).await?;
//!     println!("{}", digest);
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod digest;
mod error;
mod hash;
mod reader;
mod state;

mod buffer; // internal (pending bytes + thread-local read buffers)

#[cfg(feature = "async-io")]
mod async_stream;

//
// Public surface
//

pub use config::{Algorithm, DEFAULT_SEED, HashConfig};
pub use digest::{AnyDigest, Digest, Digest32, Digest64};
pub use error::XxhError;
pub use hash::{Hasher, StreamingHasher, Xxh32, Xxh64, Xxh64Builder, sum32, sum64};
pub use reader::{HashReader, digest_reader};
pub use state::{XXH32_MAGIC, XXH64_MAGIC};

#[cfg(feature = "async-io")]
pub use async_stream::{AsyncHashReader, digest_async};
