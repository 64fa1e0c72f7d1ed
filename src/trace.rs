//! Tracing bootstrap for the demo driver.
//!
//! Enable with `--features subscriber` (pulled in by the default `demo`
//! feature). Library users that install their own subscriber can build with
//! `default-features = false`.
//!
//! The queue itself only emits a `debug!` event at construction; full and
//! empty outcomes are return values and are never logged by the library.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "circq=info,circq_demo=info";

/// Filter used by `--verbose`.
pub const VERBOSE_FILTER: &str = "circq=debug,circq_demo=debug";

/// Initialize the global subscriber with thread ids and uptime timestamps.
///
/// `RUST_LOG` wins over `fallback`. Calling this twice is harmless: the second
/// registration is ignored.
pub fn init_tracing(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(false)
                .with_line_number(false)
                .with_timer(fmt::time::uptime()),
        )
        .with(filter)
        .try_init();
}
