//! Corner identities and the corner → moving-edge table.

use serde::{Deserialize, Serialize};

use crate::geometry::{CropRect, Point};

/// One of the four draggable corners of the crop rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// The horizontal edge a corner drags. The other one stays pinned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalEdge {
    Left,
    Right,
}

/// The vertical edge a corner drags. The other one stays pinned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalEdge {
    Top,
    Bottom,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// Edges that follow the drag.
    ///
    /// | corner      | moving        | pinned        |
    /// |-------------|---------------|---------------|
    /// | TopLeft     | top, left     | bottom, right |
    /// | TopRight    | top, right    | bottom, left  |
    /// | BottomLeft  | bottom, left  | top, right    |
    /// | BottomRight | bottom, right | top, left     |
    pub const fn moving_edges(self) -> (HorizontalEdge, VerticalEdge) {
        match self {
            Corner::TopLeft => (HorizontalEdge::Left, VerticalEdge::Top),
            Corner::TopRight => (HorizontalEdge::Right, VerticalEdge::Top),
            Corner::BottomLeft => (HorizontalEdge::Left, VerticalEdge::Bottom),
            Corner::BottomRight => (HorizontalEdge::Right, VerticalEdge::Bottom),
        }
    }

    /// The diagonally opposite corner, which stays fixed during a drag.
    pub const fn opposite(self) -> Corner {
        match self {
            Corner::TopLeft => Corner::BottomRight,
            Corner::TopRight => Corner::BottomLeft,
            Corner::BottomLeft => Corner::TopRight,
            Corner::BottomRight => Corner::TopLeft,
        }
    }

    pub fn moves_top(self) -> bool {
        matches!(self.moving_edges().1, VerticalEdge::Top)
    }

    pub fn moves_left(self) -> bool {
        matches!(self.moving_edges().0, HorizontalEdge::Left)
    }

    /// Position of this corner on a rectangle.
    pub fn point_on(self, rect: &CropRect) -> Point {
        let x = if self.moves_left() {
            rect.left
        } else {
            rect.right()
        };
        let y = if self.moves_top() {
            rect.top
        } else {
            rect.bottom()
        };
        Point::new(x, y)
    }
}
