//! Corner handle geometry: touch targets, hit testing and the marker
//! rectangles the outline overlay draws.

use serde::{Deserialize, Serialize};

use super::corner::Corner;
use super::obstacles::Obstacles;
use crate::config::HandleConfig;
use crate::geometry::{CropRect, LayoutRect, Point};

/// Touch rectangle of a corner handle.
///
/// The rectangle is `marker_size + hit_slop` square and overhangs the crop
/// rectangle by `hit_slop` on the outer side of left/top corners.
pub fn handle_rect(corner: Corner, crop: &CropRect, handles: &HandleConfig) -> LayoutRect {
    let marker = handles.marker_size;
    let slop = handles.hit_slop;
    let x = if corner.moves_left() {
        crop.left - slop
    } else {
        crop.right() - marker
    };
    let y = if corner.moves_top() {
        crop.top - slop
    } else {
        crop.bottom() - marker
    };
    LayoutRect::new(x, y, marker + slop, marker + slop)
}

/// Find the corner handle under `point`.
///
/// Each handle accepts touches up to `hit_slop` outside its rectangle. On a
/// small crop the handles overlap, so the corner nearest to the point wins.
pub fn hit_test(crop: &CropRect, point: Point, handles: &HandleConfig) -> Option<Corner> {
    Corner::ALL
        .into_iter()
        .filter(|corner| {
            handle_rect(*corner, crop, handles)
                .inflate(handles.hit_slop)
                .contains(point)
        })
        .min_by(|a, b| {
            let da = a.point_on(crop).distance_sq(point);
            let db = b.point_on(crop).distance_sq(point);
            da.total_cmp(&db)
        })
}

/// Marker square drawn inside a corner of the crop outline.
pub fn marker_rect(corner: Corner, crop: &CropRect, marker_size: f64) -> LayoutRect {
    let x = if corner.moves_left() {
        crop.left
    } else {
        crop.right() - marker_size
    };
    let y = if corner.moves_top() {
        crop.top
    } else {
        crop.bottom() - marker_size
    };
    LayoutRect::new(x, y, marker_size, marker_size)
}

/// A corner marker ready for drawing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CornerMarker {
    pub corner: Corner,
    pub rect: LayoutRect,
}

/// Everything the outline layer needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overlay {
    pub crop: CropRect,
    pub delete_button: Option<LayoutRect>,
    pub bottom_bar: Option<LayoutRect>,
    pub markers: [CornerMarker; 4],
}

impl Overlay {
    pub fn new(crop: CropRect, obstacles: &Obstacles, marker_size: f64) -> Self {
        let markers = Corner::ALL.map(|corner| CornerMarker {
            corner,
            rect: marker_rect(corner, &crop, marker_size),
        });
        Self {
            crop,
            delete_button: obstacles.delete_button,
            bottom_bar: obstacles.bottom_bar,
            markers,
        }
    }
}
