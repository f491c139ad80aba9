//! Fixed UI chrome the crop rectangle must stay clear of.

use serde::{Deserialize, Serialize};

use super::corner::{Corner, HorizontalEdge, VerticalEdge};
use crate::config::{BottomBarRule, DeleteButtonRule, ObstaclePolicy};
use crate::geometry::LayoutRect;

/// Measured obstacle rectangles. `None` means the element has not been laid
/// out yet, and its clamp is skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Obstacles {
    pub delete_button: Option<LayoutRect>,
    pub bottom_bar: Option<LayoutRect>,
}

impl Obstacles {
    /// No obstacles measured.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_delete_button(mut self, rect: LayoutRect) -> Self {
        self.delete_button = Some(rect);
        self
    }

    pub fn with_bottom_bar(mut self, rect: LayoutRect) -> Self {
        self.bottom_bar = Some(rect);
        self
    }

    /// Limits the obstacles place on the edges `corner` moves.
    ///
    /// Only moving edges are restricted; pinned edges keep their baseline.
    pub fn limits_for(&self, corner: Corner, policy: ObstaclePolicy, padding: f64) -> EdgeLimits {
        let (horizontal, vertical) = corner.moving_edges();
        let mut limits = EdgeLimits::unbounded();

        if let Some(button) = self.delete_button {
            if policy.delete_button != DeleteButtonRule::Ignore && vertical == VerticalEdge::Top {
                limits.min_top = button.bottom() + padding;
            }
            if policy.delete_button == DeleteButtonRule::BelowAndLeftOf
                && horizontal == HorizontalEdge::Right
            {
                limits.max_right = button.x - padding;
            }
        }

        if let Some(bar) = self.bottom_bar {
            if policy.bottom_bar == BottomBarRule::Above && vertical == VerticalEdge::Bottom {
                limits.max_bottom = bar.y - padding;
            }
        }

        limits
    }
}

/// Obstacle-derived bounds on edge positions. The left edge has no
/// obstacle next to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeLimits {
    pub min_top: f64,
    pub max_right: f64,
    pub max_bottom: f64,
}

impl EdgeLimits {
    pub fn unbounded() -> Self {
        Self {
            min_top: f64::NEG_INFINITY,
            max_right: f64::INFINITY,
            max_bottom: f64::INFINITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obstacles() -> Obstacles {
        Obstacles::none()
            .with_delete_button(LayoutRect::new(300.0, 50.0, 44.0, 44.0))
            .with_bottom_bar(LayoutRect::new(0.0, 700.0, 390.0, 144.0))
    }

    #[test]
    fn test_top_corners_respect_delete_button() {
        let policy = ObstaclePolicy::default();
        for corner in [Corner::TopLeft, Corner::TopRight] {
            let limits = obstacles().limits_for(corner, policy, 10.0);
            assert_eq!(limits.min_top, 104.0);
            assert_eq!(limits.max_bottom, f64::INFINITY);
        }
    }

    #[test]
    fn test_bottom_corners_respect_bottom_bar() {
        let policy = ObstaclePolicy::default();
        for corner in [Corner::BottomLeft, Corner::BottomRight] {
            let limits = obstacles().limits_for(corner, policy, 10.0);
            assert_eq!(limits.max_bottom, 690.0);
            assert_eq!(limits.min_top, f64::NEG_INFINITY);
        }
    }

    #[test]
    fn test_right_edge_clamp_is_opt_in() {
        let default_limits = obstacles().limits_for(Corner::TopRight, ObstaclePolicy::default(), 10.0);
        assert_eq!(default_limits.max_right, f64::INFINITY);

        let policy = ObstaclePolicy {
            delete_button: DeleteButtonRule::BelowAndLeftOf,
            ..ObstaclePolicy::default()
        };
        let limits = obstacles().limits_for(Corner::BottomRight, policy, 10.0);
        assert_eq!(limits.max_right, 290.0);

        // Left-moving corners never get a right-edge limit
        let limits = obstacles().limits_for(Corner::TopLeft, policy, 10.0);
        assert_eq!(limits.max_right, f64::INFINITY);
    }

    #[test]
    fn test_ignore_policy() {
        let policy = ObstaclePolicy {
            delete_button: DeleteButtonRule::Ignore,
            bottom_bar: BottomBarRule::Ignore,
        };
        for corner in Corner::ALL {
            assert_eq!(
                obstacles().limits_for(corner, policy, 10.0),
                EdgeLimits::unbounded()
            );
        }
    }

    #[test]
    fn test_missing_layout_is_skipped() {
        let limits = Obstacles::none().limits_for(Corner::TopRight, ObstaclePolicy::default(), 10.0);
        assert_eq!(limits, EdgeLimits::unbounded());
    }
}
