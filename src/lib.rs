//! Fixed-capacity ring buffer and a bounded FIFO queue built on it.
//!
//! [`RingBuffer`] never overwrites: a write to a full buffer is rejected and
//! a read from an empty one returns `None`. [`BoundedQueue`] gives it queue
//! naming through the [`Queue`] trait. The remaining modules drive the
//! `ringq` demo binary.

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod queue;
pub mod util;

pub use queue::{BoundedQueue, Queue};
pub use util::ring_buffer::RingBuffer;
