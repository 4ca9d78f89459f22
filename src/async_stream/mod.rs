//! Async hashing support.
//!
//! This module hashes data from `futures-io::AsyncRead` sources, making it
//! runtime-agnostic and compatible with tokio, async-std, smol, and other
//! async runtimes.
//!
//! - [`AsyncHashReader`] - Pass-through async reader that hashes what it yields
//! - [`digest_async`] - Drain an async reader and return the digest
//!
//! This module requires the `async-io` feature to be enabled.

mod stream;

pub use stream::{AsyncHashReader, digest_async};
