#![forbid(unsafe_code)]

//! Core: geometric primitives and size proposals for flow layout.

pub mod geometry;
pub mod logging;

pub use geometry::{Point, ProposedSize, Rect, Size};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, error, info, trace, trace_span, warn};
