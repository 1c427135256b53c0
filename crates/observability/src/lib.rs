//! Tracing/logging setup shared by binaries and test harnesses that embed
//! the analytics crates. Library crates only emit `tracing` events.

/// Initialize process-wide tracing with defaults.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use self::tracing::{LogFormat, ObservabilityConfig, init_with};
