//! circq - Fixed-Capacity Circular Queue
//!
//! A bounded FIFO over a preallocated slot array, safe to share between any
//! number of producer and consumer threads. A single lock guards every
//! operation; full and empty conditions are reported immediately instead of
//! blocking.
//!
//! ```
//! use circq::RingBuffer;
//!
//! let rb = RingBuffer::new(2)?;
//! assert!(rb.enqueue("a"));
//! assert!(rb.enqueue("b"));
//! assert!(!rb.enqueue("c"));
//! assert_eq!(rb.front(), (0, Some("a")));
//! assert_eq!(rb.dequeue(), Some("a"));
//! # Ok::<(), circq::RingBufferError>(())
//! ```

pub mod core;
pub mod error;
#[cfg(feature = "subscriber")]
pub mod trace;

pub use crate::core::{RingBuffer, NO_INDEX};
pub use crate::error::{Result, RingBufferError};
