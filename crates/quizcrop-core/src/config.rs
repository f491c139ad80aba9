//! Tunable constants for the crop editor.
//!
//! Every field has a default matching the shipped app, and the whole struct
//! deserializes with `#[serde(default)]` so a caller can override only the
//! values it cares about.

use serde::{Deserialize, Serialize};

use crate::geometry::{CropRect, Size};

/// Minimum crop width/height, equal to the corner marker size.
pub const MIN_CROP_SIZE: f64 = 30.0;

/// Gap kept between the crop rectangle and an obstacle.
pub const OBSTACLE_PADDING: f64 = 10.0;

/// Default crop width as a fraction of the viewport width.
pub const CROP_WIDTH_PCT: f64 = 0.9;

/// Default crop height as a fraction of the viewport height.
pub const CROP_HEIGHT_PCT: f64 = 0.3;

/// Default crop top as a fraction of the viewport height.
pub const CROP_TOP_PCT: f64 = 0.2;

/// Editor configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Minimum crop width and height in display units.
    pub min_size: f64,
    /// Gap between crop edges and obstacles.
    pub obstacle_padding: f64,
    /// How the default rectangle is placed in the viewport.
    pub layout: DefaultLayout,
    /// Corner marker geometry.
    pub handles: HandleConfig,
    /// Which obstacle clamps are applied.
    pub policy: ObstaclePolicy,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            min_size: MIN_CROP_SIZE,
            obstacle_padding: OBSTACLE_PADDING,
            layout: DefaultLayout::default(),
            handles: HandleConfig::default(),
            policy: ObstaclePolicy::default(),
        }
    }
}

impl EditorConfig {
    /// The centered default rectangle for a viewport.
    pub fn default_rect(&self, viewport: Size) -> CropRect {
        self.layout.rect_for(viewport)
    }
}

/// Percentage constants for the default crop rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DefaultLayout {
    pub width_pct: f64,
    pub height_pct: f64,
    pub top_pct: f64,
}

impl Default for DefaultLayout {
    fn default() -> Self {
        Self {
            width_pct: CROP_WIDTH_PCT,
            height_pct: CROP_HEIGHT_PCT,
            top_pct: CROP_TOP_PCT,
        }
    }
}

impl DefaultLayout {
    /// Horizontally centered rectangle sized by the percentages.
    pub fn rect_for(&self, viewport: Size) -> CropRect {
        let width = viewport.width * self.width_pct;
        let height = viewport.height * self.height_pct;
        CropRect {
            top: viewport.height * self.top_pct,
            left: (viewport.width - width) / 2.0,
            width,
            height,
        }
    }
}

/// Corner marker and touch-target sizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HandleConfig {
    pub marker_size: f64,
    pub hit_slop: f64,
}

impl Default for HandleConfig {
    fn default() -> Self {
        Self {
            marker_size: MIN_CROP_SIZE,
            hit_slop: 20.0,
        }
    }
}

/// How the crop rectangle avoids the delete button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeleteButtonRule {
    /// Top edge stays below the button.
    #[default]
    BelowOnly,
    /// Top edge stays below the button and the right edge stays left of it.
    BelowAndLeftOf,
    /// No clamp.
    Ignore,
}

/// How the crop rectangle avoids the bottom control bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BottomBarRule {
    /// Bottom edge stays above the bar.
    #[default]
    Above,
    /// No clamp.
    Ignore,
}

/// Obstacle-avoidance policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ObstaclePolicy {
    pub delete_button: DeleteButtonRule,
    pub bottom_bar: BottomBarRule,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::de::value::{Error as ValueError, MapDeserializer};

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_partial_config_uses_camel_case_keys() {
        let entries = vec![("minSize", 50.0), ("obstaclePadding", 4.0)];
        let config =
            EditorConfig::deserialize(MapDeserializer::<_, ValueError>::new(entries.into_iter()))
                .unwrap();

        assert_eq!(config.min_size, 50.0);
        assert_eq!(config.obstacle_padding, 4.0);
        assert_eq!(config.layout, DefaultLayout::default());
        assert_eq!(config.handles, HandleConfig::default());
    }

    #[test]
    fn test_nested_config_keys_are_camel_case() {
        let layout = DefaultLayout::deserialize(MapDeserializer::<_, ValueError>::new(
            vec![("widthPct", 0.5)].into_iter(),
        ))
        .unwrap();
        assert!(approx_eq(layout.width_pct, 0.5));
        assert!(approx_eq(layout.top_pct, CROP_TOP_PCT));

        let handles = HandleConfig::deserialize(MapDeserializer::<_, ValueError>::new(
            vec![("hitSlop", 8.0)].into_iter(),
        ))
        .unwrap();
        assert!(approx_eq(handles.hit_slop, 8.0));
        assert!(approx_eq(handles.marker_size, 30.0));
    }

    #[test]
    fn test_default_rect_on_phone_viewport() {
        let rect = EditorConfig::default().default_rect(Size::new(390.0, 844.0));

        assert!(approx_eq(rect.top, 168.8));
        assert!(approx_eq(rect.left, 19.5));
        assert!(approx_eq(rect.width, 351.0));
        assert!(approx_eq(rect.height, 253.2));
    }

    #[test]
    fn test_default_rect_is_centered() {
        let rect = EditorConfig::default().default_rect(Size::new(1000.0, 500.0));
        assert!(approx_eq(rect.left, 1000.0 - rect.right()));
    }

    #[test]
    fn test_default_policy() {
        let policy = ObstaclePolicy::default();
        assert_eq!(policy.delete_button, DeleteButtonRule::BelowOnly);
        assert_eq!(policy.bottom_bar, BottomBarRule::Above);
    }

    #[test]
    fn test_custom_layout() {
        let mut config = EditorConfig::default();
        config.layout.width_pct = 0.5;
        config.layout.top_pct = 0.0;

        let rect = config.default_rect(Size::new(400.0, 800.0));
        assert!(approx_eq(rect.left, 100.0));
        assert!(approx_eq(rect.width, 200.0));
        assert!(approx_eq(rect.top, 0.0));
    }
}
