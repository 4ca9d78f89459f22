//! Fixed-capacity carry-over buffer for bytes that do not yet form a block.

use std::fmt;

/// Bytes received but not yet consumed by the block processor.
///
/// Capacity is one block (`N` bytes), but outside of [`Pending::fill`] the
/// buffer never holds a full block: a full buffer must be drained with
/// [`Pending::take_block`] before the engine returns to its caller.
#[derive(Clone, Copy)]
pub(crate) struct Pending<const N: usize> {
    bytes: [u8; N],
    len: usize,
}

impl<const N: usize> Pending<N> {
    /// Creates an empty buffer.
    pub(crate) const fn new() -> Self {
        Self {
            bytes: [0; N],
            len: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Tops the buffer up from the front of `data`.
    ///
    /// Returns the part of `data` that did not fit.
    pub(crate) fn fill<'a>(&mut self, data: &'a [u8]) -> &'a [u8] {
        let take = (N - self.len).min(data.len());
        let (head, rest) = data.split_at(take);
        self.bytes[self.len..self.len + take].copy_from_slice(head);
        self.len += take;
        rest
    }

    /// Drains the buffer if it holds a complete block.
    pub(crate) fn take_block(&mut self) -> Option<[u8; N]> {
        if self.len < N {
            return None;
        }
        self.len = 0;
        Some(self.bytes)
    }

    /// Stores the incomplete trailing stride of a write.
    ///
    /// The buffer must be empty and `tail` shorter than a block.
    pub(crate) fn stash(&mut self, tail: &[u8]) {
        debug_assert!(self.is_empty());
        debug_assert!(tail.len() < N);
        self.bytes[..tail.len()].copy_from_slice(tail);
        self.len = tail.len();
    }

    pub(crate) fn clear(&mut self) {
        self.len = 0;
    }
}

impl<const N: usize> Default for Pending<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PartialEq for Pending<N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<const N: usize> Eq for Pending<N> {}

impl<const N: usize> fmt::Debug for Pending<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pending")
            .field("len", &self.len)
            .field("bytes", &self.as_slice())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_partial() {
        let mut pending = Pending::<16>::new();
        let rest = pending.fill(b"hello");
        assert!(rest.is_empty());
        assert_eq!(pending.as_slice(), b"hello");
        assert!(pending.take_block().is_none());
    }

    #[test]
    fn test_fill_to_block() {
        let mut pending = Pending::<4>::new();
        pending.stash(b"ab");
        let rest = pending.fill(b"cdefg");
        assert_eq!(rest, b"efg");

        let block = pending.take_block().expect("buffer should hold a block");
        assert_eq!(&block, b"abcd");
        assert!(pending.is_empty());
    }

    #[test]
    fn test_stash_restores_held_bytes() {
        let mut pending = Pending::<4>::new();
        pending.stash(b"abc");
        assert_eq!(pending.len(), 3);
        assert_eq!(pending.as_slice(), b"abc");
    }

    #[test]
    fn test_equality_ignores_stale_bytes() {
        let mut a = Pending::<4>::new();
        a.stash(b"xyz");
        a.clear();
        assert_eq!(a, Pending::<4>::new());
    }
}
