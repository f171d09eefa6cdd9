#![forbid(unsafe_code)]

//! Flow-wrap row packing and placement.
//!
//! This crate provides the flow packer: a pure function from container
//! bounds, an ordered list of item sizes, and a configuration to an overall
//! required size plus one origin per item. Items are packed left-to-right
//! and wrap to a new row when the next item no longer fits, like
//! word-wrapped text.
//!
//! - [`FlowLayout`] - configuration builder and the `compute` entry points
//! - [`FlowResult`] - overall size and per-item origins, in input order
//! - [`FlowRow`] - read-only row introspection
//! - [`report`] - human-readable row diagnostics
//!
//! # Example
//!
//! ```
//! use wrapflow_layout::{FlowLayout, ProposedSize, Size};
//!
//! let layout = FlowLayout::new().horizontal_spacing(5.0);
//! let sizes = [Size::new(30.0, 10.0); 3];
//! let result = layout.compute(ProposedSize::width(100.0), &sizes);
//!
//! // 30 + 5 + 30 + 5 + 30 fits a width of 100 exactly: one row.
//! assert_eq!(result.origins[0].x, 0.0);
//! assert_eq!(result.origins[1].x, 35.0);
//! assert_eq!(result.origins[2].x, 70.0);
//! assert_eq!(result.size, Size::new(100.0, 10.0));
//! ```
//!
//! # Intrinsic Sizing
//!
//! Hosts that measure subviews lazily can supply a measurer callback
//! instead of a size slice via [`FlowLayout::compute_with_measurer`]:
//!
//! ```
//! use wrapflow_layout::{FlowLayout, ProposedSize, Size};
//!
//! let layout = FlowLayout::new();
//! let result = layout.compute_with_measurer(ProposedSize::width(40.0), 8, |idx| {
//!     Size::new(10.0 + idx as f32, 4.0)
//! });
//! assert_eq!(result.origins.len(), 8);
//! ```

use std::ops::Range;

pub mod report;

pub use report::FlowReport;
pub use wrapflow_core::geometry::{Point, ProposedSize, Rect, Size};

use wrapflow_core::trace;

/// The order in which items within a row are placed.
///
/// Direction affects placement only; grouping always follows input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FlowDirection {
    /// Left to right (input order).
    #[default]
    Forward,
    /// Right to left (reversed placement order within each row).
    Reverse,
}

/// Where a row's items sit within the container width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlignment {
    /// Rows start at the container's left edge.
    #[default]
    Leading,
    /// Rows are centered in the leftover width.
    Center,
    /// Rows end at the container's right edge.
    Trailing,
}

/// Where an item sits within its row's height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlignment {
    /// Items align to the row's top edge.
    #[default]
    Top,
    /// Items are centered in the row height.
    Center,
    /// Items align to the row's bottom edge.
    Bottom,
}

/// One packed row of items.
///
/// Rows partition the input into contiguous, order-preserving groups: a
/// row's [`range`](Self::range) indexes directly into the caller's size
/// slice. Rows are created during grouping and never merged or split.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowRow {
    /// Vertical offset of the row's top edge from the container top.
    pub top: f32,
    /// Row height: the maximum item height in the row.
    pub height: f32,
    /// Sum of item widths, excluding inter-item spacing.
    pub item_widths: f32,
    /// Contiguous range of input indices assigned to this row.
    pub range: Range<usize>,
}

impl FlowRow {
    /// Number of items in the row. Always at least 1 for a packed row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.range.len()
    }

    /// Whether the row holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// The row's bottom edge.
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Minimum width needed to show the row without overlap:
    /// item widths plus `(count - 1)` gaps.
    #[must_use]
    pub fn min_width(&self, horizontal_spacing: f32) -> f32 {
        let gaps = self.len().saturating_sub(1) as f32 * horizontal_spacing;
        self.item_widths + gaps
    }
}

/// A flow-wrap layout container.
///
/// Plain configuration data; every compute call is a pure function of its
/// inputs with no state retained between calls, so one `FlowLayout` can be
/// shared freely across threads and passes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlowLayout {
    direction: FlowDirection,
    horizontal_alignment: HorizontalAlignment,
    vertical_alignment: VerticalAlignment,
    horizontal_spacing: f32,
    vertical_spacing: f32,
}

impl FlowLayout {
    /// Create a layout with default configuration: forward direction,
    /// leading/top alignment, zero spacing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placement direction.
    #[must_use]
    pub fn direction(mut self, direction: FlowDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Set the horizontal alignment of rows within the container.
    #[must_use]
    pub fn horizontal_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.horizontal_alignment = alignment;
        self
    }

    /// Set the vertical alignment of items within their row.
    #[must_use]
    pub fn vertical_alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.vertical_alignment = alignment;
        self
    }

    /// Set the gap between adjacent items in a row.
    #[must_use]
    pub fn horizontal_spacing(mut self, spacing: f32) -> Self {
        self.horizontal_spacing = spacing;
        self
    }

    /// Set the gap between consecutive rows.
    #[must_use]
    pub fn vertical_spacing(mut self, spacing: f32) -> Self {
        self.vertical_spacing = spacing;
        self
    }

    /// Set both spacings at once.
    #[must_use]
    pub fn spacing(self, spacing: f32) -> Self {
        self.horizontal_spacing(spacing).vertical_spacing(spacing)
    }

    /// Compute the flow arrangement for pre-measured item sizes.
    ///
    /// The proposal's width is authoritative (this layout never shrinks to
    /// content horizontally); unspecified dimensions resolve to zero. The
    /// returned height is the bottommost row's bottom edge.
    #[must_use]
    pub fn compute(&self, proposal: ProposedSize, sizes: &[Size]) -> FlowResult {
        let container = proposal.resolve_or_zero();
        let (rows, content_height) = self.group_rows(container.width, sizes);

        let mut origins = vec![Point::ZERO; sizes.len()];
        for row in &rows {
            self.place_row(row, sizes, container.width, &mut origins);
        }

        trace!(
            items = sizes.len(),
            rows = rows.len(),
            container_width = container.width,
            content_height,
            "flow pass"
        );

        FlowResult {
            size: Size::new(container.width, content_height),
            origins,
        }
    }

    /// Compute the flow arrangement, pulling item sizes from a measurer.
    ///
    /// The measurer receives each input index and must return the item's
    /// unconstrained natural size. It is called exactly once per item per
    /// pass and is treated as a pure function of the item.
    #[must_use]
    pub fn compute_with_measurer<F>(
        &self,
        proposal: ProposedSize,
        count: usize,
        mut measurer: F,
    ) -> FlowResult
    where
        F: FnMut(usize) -> Size,
    {
        let sizes: Vec<Size> = (0..count).map(&mut measurer).collect();
        self.compute(proposal, &sizes)
    }

    /// Group items into rows without placing them.
    ///
    /// Useful for diagnostics and row-level introspection; [`compute`]
    /// performs the same grouping internally.
    ///
    /// [`compute`]: Self::compute
    #[must_use]
    pub fn rows(&self, proposal: ProposedSize, sizes: &[Size]) -> Vec<FlowRow> {
        self.group_rows(proposal.resolve_or_zero().width, sizes).0
    }

    /// Partition items into rows and derive the overall content height.
    ///
    /// The wrap decision is a lookahead: a row is terminated when the *next*
    /// item would overflow the container's right edge, so the first item of
    /// a row is always retained even when it alone exceeds the container
    /// width. An exact fit (widths plus gaps equal to the container width)
    /// does not wrap.
    pub(crate) fn group_rows(&self, container_width: f32, sizes: &[Size]) -> (Vec<FlowRow>, f32) {
        let mut rows = Vec::new();
        if sizes.is_empty() {
            return (rows, 0.0);
        }

        let mut content_height = 0.0f32;
        let mut cursor = 0.0f32;
        let mut row = FlowRow {
            top: 0.0,
            height: 0.0,
            item_widths: 0.0,
            range: 0..0,
        };

        for (i, size) in sizes.iter().enumerate() {
            row.range.end = i + 1;
            row.item_widths += size.width;
            row.height = row.height.max(size.height);
            content_height = content_height.max(row.top + size.height);
            cursor += size.width + self.horizontal_spacing;

            // Lookahead wrap test; the cursor already carries the gap that
            // would separate the current item from the next.
            if let Some(next) = sizes.get(i + 1)
                && cursor + next.width > container_width
            {
                let top = content_height + self.vertical_spacing;
                let fresh = FlowRow {
                    top,
                    height: 0.0,
                    item_widths: 0.0,
                    range: i + 1..i + 1,
                };
                rows.push(std::mem::replace(&mut row, fresh));
                cursor = 0.0;
            }
        }

        rows.push(row);
        (rows, content_height)
    }

    /// Assign origins for one row.
    fn place_row(&self, row: &FlowRow, sizes: &[Size], container_width: f32, origins: &mut [Point]) {
        if row.is_empty() {
            return;
        }

        // May go negative for rows wider than the container; returned
        // unclamped.
        let remaining = container_width - row.min_width(self.horizontal_spacing);
        let start = match self.horizontal_alignment {
            HorizontalAlignment::Leading => 0.0,
            HorizontalAlignment::Center => remaining / 2.0,
            HorizontalAlignment::Trailing => remaining,
        };

        let mut cursor = start;
        match self.direction {
            FlowDirection::Forward => {
                for i in row.range.clone() {
                    cursor = self.place_item(i, row, sizes[i], cursor, origins);
                }
            }
            FlowDirection::Reverse => {
                for i in row.range.clone().rev() {
                    cursor = self.place_item(i, row, sizes[i], cursor, origins);
                }
            }
        }
    }

    /// Place a single item at the cursor and return the advanced cursor.
    fn place_item(
        &self,
        index: usize,
        row: &FlowRow,
        size: Size,
        cursor: f32,
        origins: &mut [Point],
    ) -> f32 {
        let shift = match self.vertical_alignment {
            VerticalAlignment::Top => 0.0,
            VerticalAlignment::Center => (row.height - size.height) / 2.0,
            VerticalAlignment::Bottom => row.height - size.height,
        };
        origins[index] = Point::new(cursor, row.top + shift);
        cursor + size.width + self.horizontal_spacing
    }
}

/// The outcome of one flow pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowResult {
    /// Overall size: width equals the resolved proposed width, height is
    /// the bottommost row's bottom edge.
    pub size: Size,
    /// Placement origin (top-left corner) per item, in input order.
    pub origins: Vec<Point>,
}

impl FlowResult {
    /// Number of placed items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.origins.len()
    }

    /// Whether the pass placed no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }

    /// The computed frame of one item.
    #[must_use]
    pub fn frame(&self, index: usize, size: Size) -> Rect {
        Rect::from_origin(self.origins[index], size)
    }

    /// Drive the host's placement callback once per item, in input order.
    ///
    /// The callback receives the input index, the assigned origin, and the
    /// item's size envelope.
    pub fn place_with<F>(&self, sizes: &[Size], mut place: F)
    where
        F: FnMut(usize, Point, Size),
    {
        for (i, &origin) in self.origins.iter().enumerate() {
            place(i, origin, sizes[i]);
        }
    }
}
