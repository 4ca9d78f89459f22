//! Internal byte buffers.
//!
//! - [`Pending`] - the sub-block carry-over buffer owned by every engine
//! - [`Buffer`] - thread-local pooled read buffers for the reader adapters
//!
//! Both are implementation details and not part of the public API.

mod pending;
mod pool;

pub(crate) use pending::Pending;
pub(crate) use pool::Buffer;
