#![forbid(unsafe_code)]

//! Wrapflow public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports the flow packer and geometry types from the internal crates
//! and offers a lightweight prelude for day-to-day usage.
//!
//! # Example
//!
//! ```
//! use wrapflow::prelude::*;
//!
//! let layout = FlowLayout::new()
//!     .horizontal_alignment(HorizontalAlignment::Center)
//!     .spacing(6.0);
//!
//! let tags = [Size::new(40.0, 12.0), Size::new(28.0, 12.0), Size::new(52.0, 16.0)];
//! let result = layout.compute(ProposedSize::width(90.0), &tags);
//!
//! assert_eq!(result.len(), tags.len());
//! result.place_with(&tags, |index, origin, size| {
//!     // Hand each item's frame to the host here.
//!     let _ = (index, origin, size);
//! });
//! ```

// --- Core re-exports -------------------------------------------------------

pub use wrapflow_core::geometry::{Point, ProposedSize, Rect, Size};

// --- Layout re-exports -----------------------------------------------------

pub use wrapflow_layout::{
    FlowDirection, FlowLayout, FlowReport, FlowResult, FlowRow, HorizontalAlignment,
    VerticalAlignment,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        FlowDirection, FlowLayout, FlowResult, HorizontalAlignment, Point, ProposedSize, Rect,
        Size, VerticalAlignment,
    };

    pub use crate::{core, layout};
}

pub use wrapflow_core as core;
pub use wrapflow_layout as layout;
