//! Display-space geometry shared by the editor, the handles and the mapper.
//!
//! # Coordinate System
//!
//! - Units are display points (the viewport's coordinate space), not pixels
//! - Origin is the top-left corner of the viewport
//! - `y` grows downwards

use serde::{Deserialize, Serialize};

/// A point in display coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared euclidean distance to another point.
    pub fn distance_sq(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// A width/height pair in display coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when both extents are finite and strictly positive.
    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Bounding box of a measured UI element, as reported by a layout pass.
///
/// Uses the `{x, y, width, height}` shape layout callbacks report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl LayoutRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Grow the rectangle by `amount` on every side.
    pub fn inflate(&self, amount: f64) -> Self {
        Self {
            x: self.x - amount,
            y: self.y - amount,
            width: self.width + amount * 2.0,
            height: self.height + amount * 2.0,
        }
    }

    /// Inclusive containment test.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }
}

/// The user-adjustable crop rectangle, in display coordinates.
///
/// Invariants maintained by the editor:
/// - `width >= min_size` and `height >= min_size`
/// - `top >= 0`, `left >= 0`
/// - `top + height <= viewport.height`, `left + width <= viewport.width`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CropRect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl CropRect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Build a rectangle from its four edge positions.
    pub fn from_edges(edges: Edges) -> Self {
        Self {
            top: edges.top,
            left: edges.left,
            width: edges.right - edges.left,
            height: edges.bottom - edges.top,
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn edges(&self) -> Edges {
        Edges {
            top: self.top,
            left: self.left,
            right: self.right(),
            bottom: self.bottom(),
        }
    }

    /// Check the rectangle invariants against a viewport and a minimum size.
    ///
    /// A small tolerance absorbs floating point noise from edge arithmetic.
    pub fn is_valid_within(&self, viewport: Size, min_size: f64) -> bool {
        const EPS: f64 = 1e-9;
        self.top >= -EPS
            && self.left >= -EPS
            && self.width + EPS >= min_size
            && self.height + EPS >= min_size
            && self.bottom() <= viewport.height + EPS
            && self.right() <= viewport.width + EPS
    }

    /// Clamp an arbitrary rectangle into the viewport, keeping at least
    /// `min_size` along each axis where the viewport allows it.
    ///
    /// Size is reduced first (to fit the viewport), then the position is
    /// shifted so the rectangle lies inside. Non-finite fields collapse to 0.
    pub fn fitted_to(&self, viewport: Size, min_size: f64) -> Self {
        let (left, width) = fit_axis(self.left, self.width, viewport.width, min_size);
        let (top, height) = fit_axis(self.top, self.height, viewport.height, min_size);
        Self {
            top,
            left,
            width,
            height,
        }
    }
}

/// Edge positions of a rectangle: the representation the editor's
/// constraint rules operate on.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Edges {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

fn fit_axis(start: f64, extent: f64, limit: f64, min_size: f64) -> (f64, f64) {
    let limit = finite_or_zero(limit).max(0.0);
    let extent = finite_or_zero(extent).max(min_size).min(limit);
    let start = finite_or_zero(start).clamp(0.0, limit - extent);
    (start, extent)
}
