//! Lock-Guarded Multi-Producer Circular Queue
//!
//! Ring berkapasitas tetap di atas array slot yang di-prealokasi. Dua cursor
//! (`front`, `rear`) menandai slot terisi paling lama dan paling baru; queue
//! kosong tidak punya cursor sama sekali, dan itulah yang dilaporkan sebagai
//! index `-1`.
//!
//! Setiap operasi memegang `parking_lot::Mutex` yang sama dari awal sampai
//! akhir, jadi check-and-mutate atomic dan snapshot selalu konsisten.
//! Penuh/kosong tidak pernah block: `enqueue` langsung return `false` dan
//! `dequeue` langsung return `None`.

use std::fmt;

use parking_lot::Mutex;

use crate::error::{Result, RingBufferError};

/// Index yang dilaporkan `front()`/`rear()` saat queue kosong.
pub const NO_INDEX: isize = -1;

/// Posisi slot terisi paling lama dan paling baru.
///
/// Keduanya ada atau keduanya tidak ada, jadi cukup satu `Option`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Cursors {
    front: usize,
    rear: usize,
}

/// State di balik lock
struct State<T> {
    slots: Box<[Option<T>]>,
    cursors: Option<Cursors>,
}

impl<T> State<T> {
    #[inline(always)]
    fn next(&self, index: usize) -> usize {
        (index + 1) % self.slots.len()
    }

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.cursors.is_none()
    }

    #[inline(always)]
    fn is_full(&self) -> bool {
        match self.cursors {
            Some(c) => self.next(c.rear) == c.front,
            // rear -1 maju ke 0, tidak pernah sama dengan front -1
            None => false,
        }
    }

    fn len(&self) -> usize {
        match self.cursors {
            Some(c) => {
                let cap = self.slots.len();
                (c.rear + cap - c.front) % cap + 1
            }
            None => 0,
        }
    }
}

/// Fixed-capacity FIFO queue safe to share between threads.
///
/// Wrap it in an `Arc` to hand it to several producers; all methods take
/// `&self`.
pub struct RingBuffer<T> {
    state: Mutex<State<T>>,
    capacity: usize,
}

impl<T> RingBuffer<T> {
    /// Membuat queue kosong dengan `capacity` slot.
    ///
    /// Alokasi hanya terjadi sekali di sini.
    /// Setelah itu, tidak ada alokasi di hot path.
    ///
    /// # Errors
    /// `RingBufferError::InvalidCapacity` jika `capacity == 0`
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(RingBufferError::invalid_capacity(0i64));
        }

        let slots: Vec<Option<T>> = (0..capacity).map(|_| None).collect();

        tracing::debug!(capacity, "ring buffer allocated");

        Ok(Self {
            state: Mutex::new(State {
                slots: slots.into_boxed_slice(),
                cursors: None,
            }),
            capacity,
        })
    }

    /// Cek apakah queue kosong
    pub fn is_empty(&self) -> bool {
        self.state.lock().is_empty()
    }

    /// True when advancing `rear` by one would land on `front`.
    ///
    /// The answer is only valid for the snapshot it was taken from; another
    /// thread may enqueue or dequeue right after the lock is released.
    pub fn is_full(&self) -> bool {
        self.state.lock().is_full()
    }

    /// Tambah `value` di rear
    ///
    /// Returns `true` jika berhasil, `false` jika queue penuh (state tidak berubah).
    pub fn enqueue(&self, value: T) -> bool {
        let mut state = self.state.lock();

        if state.is_full() {
            return false;
        }

        let cursors = match state.cursors {
            Some(c) => Cursors {
                front: c.front,
                rear: state.next(c.rear),
            },
            None => Cursors { front: 0, rear: 0 },
        };

        state.slots[cursors.rear] = Some(value);
        state.cursors = Some(cursors);
        true
    }

    /// Ambil value dari front
    ///
    /// Returns `Some(T)` jika ada data, `None` jika queue kosong.
    pub fn dequeue(&self) -> Option<T> {
        let mut state = self.state.lock();
        let c = state.cursors?;

        let value = state.slots[c.front].take();

        state.cursors = if c.front == c.rear {
            None
        } else {
            Some(Cursors {
                front: state.next(c.front),
                rear: c.rear,
            })
        };

        value
    }

    /// Jumlah elemen, dihitung dari posisi cursor
    pub fn len(&self) -> usize {
        self.state.lock().len()
    }

    /// Kapasitas queue
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T: Clone> RingBuffer<T> {
    /// Front index and the value stored there.
    ///
    /// Returns `(NO_INDEX, None)` when the queue is empty.
    pub fn front(&self) -> (isize, Option<T>) {
        let state = self.state.lock();
        match state.cursors {
            Some(c) => (c.front as isize, state.slots[c.front].clone()),
            None => (NO_INDEX, None),
        }
    }

    /// Rear index and the value stored there.
    ///
    /// Returns `(NO_INDEX, None)` when the queue is empty.
    pub fn rear(&self) -> (isize, Option<T>) {
        let state = self.state.lock();
        match state.cursors {
            Some(c) => (c.rear as isize, state.slots[c.rear].clone()),
            None => (NO_INDEX, None),
        }
    }
}

impl<T> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        let (front, rear) = match state.cursors {
            Some(c) => (c.front as isize, c.rear as isize),
            None => (NO_INDEX, NO_INDEX),
        };
        f.debug_struct("RingBuffer")
            .field("capacity", &self.capacity)
            .field("len", &state.len())
            .field("front", &front)
            .field("rear", &rear)
            .finish()
    }
}
