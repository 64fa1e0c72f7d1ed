//! Core module: lock-guarded circular queue
//!
//! Prinsip desain:
//! - Satu lock per queue, dipegang selama seluruh operasi
//! - Fail-fast: penuh/kosong adalah return value, tidak pernah menunggu
//! - No-Allocation: semua slot di-alokasi saat init

mod ring_buffer;

pub use ring_buffer::{RingBuffer, NO_INDEX};
