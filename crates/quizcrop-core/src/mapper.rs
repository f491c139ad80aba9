//! Display-to-pixel coordinate mapping under "contain" scaling.
//!
//! The photo preview shows the full image uniformly scaled to fit the
//! viewport and centered, leaving letterbox margins on one axis. This module
//! converts a crop rectangle drawn over that preview back into a pixel
//! region of the original image.
//!
//! # Algorithm
//!
//! ```text
//! scale    = min(viewport_w / image_w, viewport_h / image_h)
//! offset   = (viewport - image * scale) / 2
//! display  = clamp(crop - offset, 0, image * scale)
//! pixels   = round(display / scale), clamped to the image
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{CropRect, Size};

/// Errors from mapping a crop rectangle to pixels.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    /// The rectangle maps to an empty pixel region, e.g. it lies entirely
    /// in a letterbox margin.
    #[error("Degenerate crop: region maps to {width}x{height} pixels")]
    DegenerateCrop { width: u32, height: u32 },

    /// Image or viewport size cannot produce a scale factor.
    #[error(
        "Invalid dimensions: image {image_width}x{image_height}, viewport {viewport_width}x{viewport_height}"
    )]
    InvalidDimensions {
        image_width: u32,
        image_height: u32,
        viewport_width: f64,
        viewport_height: f64,
    },
}

/// Axis-aligned crop region in original-image pixels.
///
/// Invariants: `origin_x + width <= image width`,
/// `origin_y + height <= image height`, `width > 0`, `height > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixelCropRegion {
    pub origin_x: u32,
    pub origin_y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelCropRegion {
    pub fn new(origin_x: u32, origin_y: u32, width: u32, height: u32) -> Self {
        Self {
            origin_x,
            origin_y,
            width,
            height,
        }
    }

    /// True when the region is non-empty and lies inside an image of the
    /// given size.
    pub fn fits_within(&self, image_width: u32, image_height: u32) -> bool {
        self.width > 0
            && self.height > 0
            && u64::from(self.origin_x) + u64::from(self.width) <= u64::from(image_width)
            && u64::from(self.origin_y) + u64::from(self.height) <= u64::from(image_height)
    }
}

/// Placement of an image displayed with contain scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainFit {
    /// Display units per image pixel.
    pub scale: f64,
    /// Size of the scaled image in display units.
    pub displayed: Size,
    /// Left letterbox margin.
    pub offset_x: f64,
    /// Top letterbox margin.
    pub offset_y: f64,
}

impl ContainFit {
    /// Compute the fit of an `image_width` x `image_height` image in `viewport`.
    pub fn new(image_width: u32, image_height: u32, viewport: Size) -> Result<Self, MapError> {
        if image_width == 0 || image_height == 0 || !viewport.is_usable() {
            return Err(MapError::InvalidDimensions {
                image_width,
                image_height,
                viewport_width: viewport.width,
                viewport_height: viewport.height,
            });
        }

        let img_w = f64::from(image_width);
        let img_h = f64::from(image_height);
        let scale = (viewport.width / img_w).min(viewport.height / img_h);
        let displayed = Size::new(img_w * scale, img_h * scale);

        Ok(Self {
            scale,
            displayed,
            offset_x: (viewport.width - displayed.width) / 2.0,
            offset_y: (viewport.height - displayed.height) / 2.0,
        })
    }
}

/// Map a display-space crop rectangle to a pixel region of the original
/// image.
///
/// Parts of the rectangle in the letterbox margins are clipped away.
///
/// # Errors
///
/// - [`MapError::InvalidDimensions`] for an empty image or unusable viewport
/// - [`MapError::DegenerateCrop`] when the clipped region rounds to zero
///   pixels on either axis; the caller must not crop in that case
pub fn map_to_pixels(
    crop: &CropRect,
    image_width: u32,
    image_height: u32,
    viewport: Size,
) -> Result<PixelCropRegion, MapError> {
    let fit = ContainFit::new(image_width, image_height, viewport)?;

    let (origin_x, width) = map_axis(
        crop.left,
        crop.right(),
        fit.offset_x,
        fit.displayed.width,
        fit.scale,
        image_width,
    );
    let (origin_y, height) = map_axis(
        crop.top,
        crop.bottom(),
        fit.offset_y,
        fit.displayed.height,
        fit.scale,
        image_height,
    );

    if width == 0 || height == 0 {
        return Err(MapError::DegenerateCrop { width, height });
    }

    let region = PixelCropRegion::new(origin_x, origin_y, width, height);
    log::debug!("mapped {:?} to {:?}", crop, region);
    Ok(region)
}

/// Map one axis: returns (origin, length) in pixels.
fn map_axis(start: f64, end: f64, offset: f64, displayed: f64, scale: f64, limit: u32) -> (u32, u32) {
    let lo = (start - offset).clamp(0.0, displayed);
    let hi = (end - offset).clamp(0.0, displayed);
    // NaN survives clamp; treat it as an empty span
    let span = if (hi - lo).is_finite() { (hi - lo).max(0.0) } else { 0.0 };
    let lo = if lo.is_finite() { lo } else { 0.0 };

    let limit = f64::from(limit);
    let origin = (lo / scale).round().clamp(0.0, limit);
    let length = (span / scale).round().clamp(0.0, limit - origin);

    (origin as u32, length as u32)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
