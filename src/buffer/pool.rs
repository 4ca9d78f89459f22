//! Thread-local buffer pool for read loops.

use std::cell::RefCell;

/// Size of a pooled read buffer (8 KiB).
pub const READ_BUFFER_SIZE: usize = 8 * 1024;

/// Maximum number of buffers to keep per thread.
pub const MAX_POOL_SIZE: usize = 4;

/// A reusable, zero-initialized read buffer of [`READ_BUFFER_SIZE`] bytes.
pub struct Buffer {
    data: Vec<u8>,
}

impl Buffer {
    /// Takes a buffer from the thread-local pool or creates a new one.
    pub fn take() -> Self {
        THREAD_BUFFER_POOL.with(|pool| {
            let mut pool = pool.borrow_mut();
            match pool.pop() {
                Some(data) => Self { data },
                None => Self {
                    data: vec![0u8; READ_BUFFER_SIZE],
                },
            }
        })
    }

    /// Returns the whole buffer for a reader to fill.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Returns the first `len` bytes, as filled by the last read.
    pub fn filled(&self, len: usize) -> &[u8] {
        &self.data[..len]
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        if self.data.len() != READ_BUFFER_SIZE {
            return;
        }
        THREAD_BUFFER_POOL.with(|pool| {
            let mut pool = pool.borrow_mut();
            if pool.len() < MAX_POOL_SIZE {
                pool.push(std::mem::take(&mut self.data));
            }
        });
    }
}

// Thread-local buffer pool
thread_local! {
    static THREAD_BUFFER_POOL: RefCell<Vec<Vec<u8>>> = const { RefCell::new(Vec::new()) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_take() {
        let mut buf = Buffer::take();
        assert_eq!(buf.as_mut_slice().len(), READ_BUFFER_SIZE);
    }

    #[test]
    fn test_buffer_filled() {
        let mut buf = Buffer::take();
        buf.as_mut_slice()[..5].copy_from_slice(b"hello");
        assert_eq!(buf.filled(5), b"hello");
    }

    #[test]
    fn test_buffer_reuse() {
        {
            let mut buf = Buffer::take();
            buf.as_mut_slice()[0] = 0xFF;
        }

        // The buffer should come back from the pool at full length
        let mut buf2 = Buffer::take();
        assert_eq!(buf2.as_mut_slice().len(), READ_BUFFER_SIZE);
    }
}
