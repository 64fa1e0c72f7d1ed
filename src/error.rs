//! Error types for circq

/// Result type alias for circq operations
pub type Result<T> = std::result::Result<T, RingBufferError>;

/// Hard failures raised by the ring buffer.
///
/// Full and empty conditions are not errors: `enqueue` reports them as
/// `false` and `dequeue`/`front`/`rear` as an absent value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RingBufferError {
    /// Capacity must be a positive integer
    #[error("Invalid capacity: {capacity} (must be at least 1)")]
    InvalidCapacity { capacity: i64 },
}

impl RingBufferError {
    /// Create an invalid capacity error
    pub fn invalid_capacity(capacity: impl Into<i64>) -> Self {
        Self::InvalidCapacity {
            capacity: capacity.into(),
        }
    }
}
