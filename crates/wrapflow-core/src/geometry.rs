#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All values are `f32` in container-local coordinates (origin at top-left,
//! y growing downward). Origins may legitimately be negative: a row that
//! overflows its container and is center- or trailing-aligned starts left of
//! the container edge, and the layout reports that honestly rather than
//! clamping.

/// A position in container-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal offset from the container's left edge.
    pub x: f32,
    /// Vertical offset from the container's top edge.
    pub y: f32,
}

impl Point {
    /// The origin (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Size {
    /// The zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Check whether either dimension is zero (or negative).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// A rectangle for layout bounds and computed frames.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from origin with given size.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Create a rectangle from an origin point and size.
    #[inline]
    pub const fn from_origin(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Top-left corner.
    #[inline]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Width/height as a [`Size`].
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Left edge. Alias for `self.x`.
    #[inline]
    pub const fn left(&self) -> f32 {
        self.x
    }

    /// Top edge. Alias for `self.y`.
    #[inline]
    pub const fn top(&self) -> f32 {
        self.y
    }

    /// Right edge.
    #[inline]
    pub const fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    #[inline]
    pub const fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Check if the rectangle has zero (or negative) area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check if a point is inside the rectangle.
    ///
    /// The left/top edges are inclusive, the right/bottom edges exclusive.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Create a new rectangle that is the union of this rectangle and another.
    ///
    /// The result is the smallest rectangle that contains both.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());

        Rect {
            x,
            y,
            width: right - x,
            height: bottom - y,
        }
    }
}

/// A size proposal from the host, with possibly unspecified dimensions.
///
/// Flow layout resolves unspecified dimensions to zero before measuring:
/// the proposed width is authoritative for wrapping, and the height always
/// fits content regardless of what the host proposed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProposedSize {
    /// Proposed width, or `None` if the host leaves it unspecified.
    pub width: Option<f32>,
    /// Proposed height, or `None` if the host leaves it unspecified.
    pub height: Option<f32>,
}

impl ProposedSize {
    /// A proposal with both dimensions unspecified.
    pub const UNSPECIFIED: Self = Self {
        width: None,
        height: None,
    };

    /// Create a proposal with both dimensions specified.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    /// Create a proposal that fixes only the width.
    #[inline]
    pub const fn width(width: f32) -> Self {
        Self {
            width: Some(width),
            height: None,
        }
    }

    /// Resolve to a concrete size, treating unspecified dimensions as zero.
    #[inline]
    pub fn resolve_or_zero(&self) -> Size {
        Size::new(self.width.unwrap_or(0.0), self.height.unwrap_or(0.0))
    }
}

impl From<Size> for ProposedSize {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}
