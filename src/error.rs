//! Error types for timer construction

use std::time::Duration;
use thiserror::Error;

/// Errors reported when building a timer.
///
/// Construction is the only fallible surface: once a timer exists, every
/// control operation is a total function (redundant transitions are no-ops).
#[derive(Debug, Error)]
pub enum TimerError {
    /// The requested interval was zero. A zero interval is always a caller
    /// bug and is rejected rather than clamped to some arbitrary minimum.
    #[error("timer interval must be greater than zero (got {interval:?})")]
    InvalidInterval { interval: Duration },
}
