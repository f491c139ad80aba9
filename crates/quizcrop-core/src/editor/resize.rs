//! Corner-drag resize rule.
//!
//! One rule covers all four corners: the corner picks a moving edge on each
//! axis (see [`Corner::moving_edges`]), the opposite edges stay at their
//! baseline positions, and each moving edge is clamped in a fixed order:
//!
//! 1. viewport bounds
//! 2. obstacle limits
//! 3. minimum size against the pinned edge
//!
//! Minimum size is applied last so opposing edges never cross, even when an
//! obstacle would push them past each other.

use super::corner::{Corner, HorizontalEdge, VerticalEdge};
use super::obstacles::EdgeLimits;
use crate::geometry::{CropRect, Size};

/// Resize `baseline` by dragging `corner` by the translation accumulated
/// since the gesture began.
///
/// Non-finite translations are treated as zero. The result satisfies the
/// [`CropRect`] invariants whenever `baseline` does.
pub fn resize_from_corner(
    baseline: &CropRect,
    corner: Corner,
    translation_x: f64,
    translation_y: f64,
    viewport: Size,
    limits: EdgeLimits,
    min_size: f64,
) -> CropRect {
    let dx = if translation_x.is_finite() { translation_x } else { 0.0 };
    let dy = if translation_y.is_finite() { translation_y } else { 0.0 };

    let mut edges = baseline.edges();
    let (horizontal, vertical) = corner.moving_edges();

    match horizontal {
        HorizontalEdge::Left => {
            edges.left = drag_low_edge(edges.left + dx, 0.0, edges.right, min_size);
        }
        HorizontalEdge::Right => {
            let ceiling = viewport.width.min(limits.max_right);
            edges.right = drag_high_edge(
                edges.right + dx,
                ceiling,
                edges.left,
                min_size,
                viewport.width,
            );
        }
    }

    match vertical {
        VerticalEdge::Top => {
            let floor = limits.min_top.max(0.0);
            edges.top = drag_low_edge(edges.top + dy, floor, edges.bottom, min_size);
        }
        VerticalEdge::Bottom => {
            let ceiling = viewport.height.min(limits.max_bottom);
            edges.bottom = drag_high_edge(
                edges.bottom + dy,
                ceiling,
                edges.top,
                min_size,
                viewport.height,
            );
        }
    }

    CropRect::from_edges(edges)
}

/// Move a top/left edge. `pinned` is the opposite (bottom/right) edge.
#[inline]
fn drag_low_edge(target: f64, floor: f64, pinned: f64, min_size: f64) -> f64 {
    target.max(floor).min(pinned - min_size).max(0.0)
}

/// Move a bottom/right edge. `pinned` is the opposite (top/left) edge.
#[inline]
fn drag_high_edge(target: f64, ceiling: f64, pinned: f64, min_size: f64, extent: f64) -> f64 {
    target.min(ceiling).max(pinned + min_size).min(extent)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
