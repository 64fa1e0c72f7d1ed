//! circq demo driver
//!
//! Membuat satu queue, menjalankan `capacity + 1` producer secara bersamaan,
//! lalu melaporkan snapshot cursor, mengosongkan queue, dan enqueue satu
//! value lagi.
//!
//! Usage:
//!   cargo run --release --bin circq_demo -- [--capacity N] [--producers N] [--final-value V]

use std::error::Error;
use std::sync::Arc;
use std::thread;

use clap::Parser;

use circq::trace::{init_tracing, DEFAULT_FILTER, VERBOSE_FILTER};
use circq::{RingBuffer, RingBufferError};

/// Driver configuration
#[derive(Parser, Debug)]
#[command(name = "circq_demo", about = "Concurrent enqueue walkthrough for circq")]
struct DriverConfig {
    /// Number of slots in the queue
    #[arg(long, default_value_t = 5, allow_hyphen_values = true)]
    capacity: i64,

    /// Concurrent producers, each enqueueing one distinct value (default: capacity + 1)
    #[arg(long)]
    producers: Option<usize>,

    /// Value enqueued once the queue has been drained
    #[arg(long, default_value = "bingo")]
    final_value: String,

    /// Debug-level tracing (RUST_LOG still takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

impl DriverConfig {
    fn capacity(&self) -> Result<usize, RingBufferError> {
        usize::try_from(self.capacity)
            .ok()
            .filter(|c| *c > 0)
            .ok_or_else(|| RingBufferError::invalid_capacity(self.capacity))
    }

    /// Jumlah producer; default satu lebih banyak dari kapasitas
    fn producers(&self, capacity: usize) -> usize {
        self.producers.unwrap_or(capacity + 1)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = DriverConfig::parse();
    init_tracing(if config.verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    });

    let capacity = config.capacity()?;
    let producers = config.producers(capacity);
    tracing::info!(capacity, producers, "starting circq demo");

    let queue: Arc<RingBuffer<String>> = Arc::new(RingBuffer::new(capacity)?);
    println!("IsEmpty: {}", queue.is_empty());

    let handles: Vec<_> = (1..=producers)
        .map(|i| {
            let queue = Arc::clone(&queue);
            thread::spawn(move || {
                let accepted = queue.enqueue(i.to_string());
                if accepted {
                    println!("Enqueued: {}", i);
                } else {
                    println!("Failed to enqueue: {}", i);
                }
                accepted
            })
        })
        .collect();

    let mut accepted = 0usize;
    for handle in handles {
        if handle.join().map_err(|_| "producer thread panicked")? {
            accepted += 1;
        }
    }
    tracing::info!(
        accepted,
        rejected = producers - accepted,
        "all producers finished"
    );

    println!("IsFull: {}", queue.is_full());
    report_cursors(&queue);

    while let Some(value) = queue.dequeue() {
        println!("Dequeued: {}", value);
    }
    report_cursors(&queue);

    let accepted = queue.enqueue(config.final_value.clone());
    tracing::info!(accepted, value = %config.final_value, "enqueued after drain");
    report_cursors(&queue);

    tracing::debug!(?queue, "final state");
    Ok(())
}

fn report_cursors(queue: &RingBuffer<String>) {
    let (index, value) = queue.front();
    println!("Front: index={}, val={}", index, display(value.as_deref()));
    let (index, value) = queue.rear();
    println!("Rear: index={}, val={}", index, display(value.as_deref()));
}

fn display(value: Option<&str>) -> &str {
    value.unwrap_or("<none>")
}
