//! Async hashing adapters.
//!
//! This module hashes data from `futures-io::AsyncRead` sources, making it
//! runtime-agnostic and compatible with tokio, async-std, smol, and other
//! async runtimes.
//!
//! # Example
//!
//! ```ignore
//! use futures_io::AsyncRead;
//! use xxhrs::{digest_async, Xxh64};
//!
//! async fn demo<R: AsyncRead + Unpin>(reader: R) -> Result<(), xxhrs::XxhError> {
//!     let digest = digest_async(Xxh64::new(), reader).await?;
//!     println!("{}", digest);
//!     Ok(())
//! }
//! ```

use std::future::poll_fn;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::ready;
use futures_io::AsyncRead;
use pin_project_lite::pin_project;

use crate::buffer::Buffer;
use crate::error::XxhError;
use crate::hash::StreamingHasher;

pin_project! {
    /// An async reader that hashes every byte read through it.
    ///
    /// This uses `futures_io::AsyncRead` which is runtime-agnostic.
    /// Works with tokio (via `tokio_util::compat`), async-std, smol, or any
    /// futures-compatible runtime.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use futures_util::AsyncReadExt;
    /// use xxhrs::{AsyncHashReader, Xxh32};
    ///
    /// async fn example(data: &[u8]) -> std::io::Result<u32> {
    ///     let mut reader = AsyncHashReader::new(data, Xxh32::new());
    ///     let mut sink = Vec::new();
    ///     reader.read_to_end(&mut sink).await?;
    ///     Ok(reader.finalize().to_u32())
    /// }
    /// ```
    #[derive(Debug)]
    pub struct AsyncHashReader<R, H> {
        #[pin]
        inner: R,
        hasher: H,
    }
}

impl<R: AsyncRead, H: StreamingHasher> AsyncHashReader<R, H> {
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

    /// Consumes the adapter and returns the reader and hasher.
    pub fn into_parts(self) -> (R, H) {
        (self.inner, self.hasher)
    }
}

impl<R: AsyncRead, H: StreamingHasher> AsyncRead for AsyncHashReader<R, H> {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut [u8],
    ) -> Poll<io::Result<usize>> {
        let this = self.project();
        let n = ready!(this.inner.poll_read(cx, buf))?;
        this.hasher.update(&buf[..n]);
        Poll::Ready(Ok(n))
    }
}

/// Reads an async reader to the end, feeding `hasher`, and returns the digest.
///
/// Uses `futures_io::AsyncRead` for runtime-agnostic async I/O. The hasher
/// does no I/O of its own; dropping the returned future at any point simply
/// abandons the hasher.
///
/// # Runtime Compatibility
///
/// For tokio users, you can use `tokio_util::compat` to convert
/// `tokio::io::AsyncRead` to `futures_io::AsyncRead`:
///
/// ```ignore
/// use tokio_util::compat::TokioAsyncReadCompatExt;
/// use xxhrs::{digest_async, Xxh64};
///
/// let file = tokio::fs::File::open("file").await?;
/// let digest = digest_async(Xxh64::new(), file.compat()).await?;
/// ```
///
/// # Errors
///
/// Returns [`XxhError::Io`] if the reader fails. Interrupted reads are
/// retried.
pub async fn digest_async<H, R>(mut hasher: H, mut reader: R) -> Result<H::Digest, XxhError>
where
    H: StreamingHasher,
    R: AsyncRead + Unpin,
{
    let mut buffer = Buffer::take();
    loop {
        let read = poll_fn(|cx| Pin::new(&mut reader).poll_read(cx, buffer.as_mut_slice())).await;
        let n = match read {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(XxhError::Io(e)),
        };
        hasher.update(buffer.filled(n));
    }
    Ok(hasher.finalize())
}
