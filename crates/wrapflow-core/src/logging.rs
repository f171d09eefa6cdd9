#![forbid(unsafe_code)]

//! Logging and tracing support.
//!
//! This module re-exports tracing macros when the `tracing` feature is
//! enabled. When the feature is disabled, no-op macros are provided so
//! callers never need their own `cfg` guards.

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, error, info, trace, trace_span, warn};

// When tracing is not enabled, provide no-op macros
#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// No-op trace macro when tracing is disabled.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// No-op trace_span macro when tracing is disabled.
    #[macro_export]
    macro_rules! trace_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }

    /// No-op debug macro when tracing is disabled.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// No-op debug_span macro when tracing is disabled.
    #[macro_export]
    macro_rules! debug_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }

    /// No-op info macro when tracing is disabled.
    #[macro_export]
    macro_rules! info {
        ($($arg:tt)*) => {};
    }

    /// No-op warn macro when tracing is disabled.
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }

    /// No-op error macro when tracing is disabled.
    #[macro_export]
    macro_rules! error {
        ($($arg:tt)*) => {};
    }
}

// Macros are exported at crate root via #[macro_export], so nothing to
// re-export from noop_macros here.

/// Install a JSON subscriber for production logging.
///
/// Reads the filter from the `WRAPFLOW_LOG` environment variable, falling
/// back to `info`. Does nothing if a global subscriber is already set.
#[cfg(feature = "tracing-json")]
pub fn init_json_logging() {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_env("WRAPFLOW_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init();
}

/// A no-op span for when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Enter the no-op span (does nothing).
    pub fn enter(&self) -> NoopGuard {
        NoopGuard
    }
}

/// A no-op span guard.
#[cfg(not(feature = "tracing"))]
pub struct NoopGuard;
