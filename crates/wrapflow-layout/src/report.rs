#![forbid(unsafe_code)]

//! Row diagnostics for flow layouts.
//!
//! [`FlowReport`] captures the grouping a [`FlowLayout`] would produce for a
//! given proposal and renders it as a small table, one line per row. Handy
//! when a wrap decision looks wrong: the report shows where each row starts,
//! how tall it is, and how much width it actually needs.

use std::fmt;

use crate::{FlowLayout, FlowRow};
use wrapflow_core::geometry::{ProposedSize, Size};

/// A snapshot of one flow pass's row structure.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowReport {
    container_width: f32,
    horizontal_spacing: f32,
    content_height: f32,
    rows: Vec<FlowRow>,
}

impl FlowReport {
    /// Capture the rows the layout would produce for these inputs.
    #[must_use]
    pub fn new(layout: &FlowLayout, proposal: ProposedSize, sizes: &[Size]) -> Self {
        let container_width = proposal.resolve_or_zero().width;
        let (rows, content_height) = layout.group_rows(container_width, sizes);
        Self {
            container_width,
            horizontal_spacing: layout.horizontal_spacing,
            content_height,
            rows,
        }
    }

    /// The captured rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[FlowRow] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Overall content height (bottommost row's bottom edge).
    #[must_use]
    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    /// Whether any row needs more width than the container offers.
    #[must_use]
    pub fn has_overflow(&self) -> bool {
        self.rows
            .iter()
            .any(|row| row.min_width(self.horizontal_spacing) > self.container_width)
    }
}

impl fmt::Display for FlowReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "flow: {} row(s), container width {:.1}, content height {:.1}",
            self.rows.len(),
            self.container_width,
            self.content_height
        )?;
        writeln!(f, "  row  items        top   height  min-width")?;
        for (i, row) in self.rows.iter().enumerate() {
            let min_width = row.min_width(self.horizontal_spacing);
            let marker = if min_width > self.container_width {
                " (overflow)"
            } else {
                ""
            };
            writeln!(
                f,
                "  {:>3}  {:>4}..{:<4} {:>6.1} {:>7.1} {:>10.1}{marker}",
                i, row.range.start, row.range.end, row.top, row.height, min_width
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_matches_rows() {
        let layout = FlowLayout::new().horizontal_spacing(10.0);
        let sizes = [Size::new(30.0, 10.0); 3];
        let report = FlowReport::new(&layout, ProposedSize::width(100.0), &sizes);

        assert_eq!(report.row_count(), 2);
        assert_eq!(report.content_height(), 20.0);
        assert_eq!(report.rows(), layout.rows(ProposedSize::width(100.0), &sizes));
        assert!(!report.has_overflow());
    }

    #[test]
    fn report_flags_overflowing_rows() {
        let layout = FlowLayout::new();
        let sizes = [Size::new(80.0, 10.0)];
        let report = FlowReport::new(&layout, ProposedSize::width(50.0), &sizes);

        assert!(report.has_overflow());
        let rendered = report.to_string();
        assert!(rendered.contains("overflow"));
        assert!(rendered.contains("1 row(s)"));
    }

    #[test]
    fn empty_input_renders_header_only() {
        let layout = FlowLayout::new();
        let report = FlowReport::new(&layout, ProposedSize::width(50.0), &[]);

        assert_eq!(report.row_count(), 0);
        assert_eq!(report.content_height(), 0.0);
        assert_eq!(report.to_string().lines().count(), 2);
    }
}
