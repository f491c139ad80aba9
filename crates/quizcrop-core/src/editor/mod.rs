//! Interactive crop-rectangle editor.
//!
//! The editor owns the live [`CropRect`] and updates it from corner-drag
//! gestures. Gesture input follows the pan-recognizer contract: every update
//! carries the translation accumulated since the gesture began, not a
//! per-frame delta. The editor snapshots the rectangle on
//! [`CropEditor::begin_drag`] and resolves every update against that
//! snapshot, so nothing accumulates between frames.
//!
//! # Gesture Lifecycle
//!
//! ```text
//! begin_drag(corner) -> update_drag(corner, tx, ty, obstacles)* -> end_drag(corner)
//! ```
//!
//! An update without a preceding begin is tolerated: the live rectangle
//! becomes the baseline and a warning is logged.

mod corner;
mod handles;
mod obstacles;
mod resize;

pub use corner::{Corner, HorizontalEdge, VerticalEdge};
pub use handles::{handle_rect, hit_test, marker_rect, CornerMarker, Overlay};
pub use obstacles::{EdgeLimits, Obstacles};
pub use resize::resize_from_corner;

use crate::config::EditorConfig;
use crate::geometry::{CropRect, Point, Size};

/// Baseline captured at the start of a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    pub corner: Corner,
    pub baseline: CropRect,
}

/// Crop editor state for one photo-review session.
#[derive(Debug, Clone)]
pub struct CropEditor {
    config: EditorConfig,
    viewport: Size,
    rect: CropRect,
    session: Option<GestureSession>,
}

impl CropEditor {
    /// Create an editor showing the default rectangle for `viewport`.
    pub fn new(viewport: Size, config: EditorConfig) -> Self {
        let rect = config
            .default_rect(viewport)
            .fitted_to(viewport, config.min_size);
        Self {
            config,
            viewport,
            rect,
            session: None,
        }
    }

    /// The live rectangle.
    pub fn rect(&self) -> CropRect {
        self.rect
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The open gesture, if any.
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Start a drag on `corner`, snapshotting the live rectangle.
    pub fn begin_drag(&mut self, corner: Corner) {
        if let Some(open) = self.session {
            log::debug!(
                "begin_drag({:?}) replaces open {:?} gesture",
                corner,
                open.corner
            );
        } else {
            log::debug!("begin_drag({:?}) at {:?}", corner, self.rect);
        }
        self.session = Some(GestureSession {
            corner,
            baseline: self.rect,
        });
    }

    /// Apply the translation accumulated since the drag began.
    ///
    /// Obstacles are the latest measured layout; pass [`Obstacles::none`]
    /// before the layout pass has run. Returns the new live rectangle.
    pub fn update_drag(
        &mut self,
        corner: Corner,
        translation_x: f64,
        translation_y: f64,
        obstacles: &Obstacles,
    ) -> CropRect {
        let baseline = self.baseline_for(corner);
        let limits = obstacles.limits_for(corner, self.config.policy, self.config.obstacle_padding);
        self.rect = resize_from_corner(
            &baseline,
            corner,
            translation_x,
            translation_y,
            self.viewport,
            limits,
            self.config.min_size,
        );
        self.rect
    }

    /// Close the drag. The live rectangle is left as the last update set it.
    pub fn end_drag(&mut self, corner: Corner) {
        match self.session.take() {
            Some(session) if session.corner != corner => {
                log::warn!(
                    "end_drag({:?}) closes a gesture started on {:?}",
                    corner,
                    session.corner
                );
            }
            Some(_) => log::debug!("end_drag({:?}) at {:?}", corner, self.rect),
            None => log::debug!("end_drag({:?}) without an open gesture", corner),
        }
    }

    /// Replace the rectangle, e.g. for a new photo or a retake.
    ///
    /// The rectangle is fitted into the viewport first, and any open gesture
    /// is dropped.
    pub fn reset(&mut self, rect: CropRect) {
        let fitted = rect.fitted_to(self.viewport, self.config.min_size);
        if fitted != rect {
            log::debug!("reset rect {:?} fitted to {:?}", rect, fitted);
        }
        self.rect = fitted;
        self.session = None;
    }

    /// Reset to the configured default rectangle.
    pub fn reset_to_default(&mut self) {
        self.reset(self.config.default_rect(self.viewport));
    }

    /// Adopt a new viewport size (rotation, window resize). The live
    /// rectangle is fitted into it.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.reset(self.rect);
    }

    /// Corner handle under a touch point.
    pub fn hit_test(&self, point: Point) -> Option<Corner> {
        hit_test(&self.rect, point, &self.config.handles)
    }

    /// Drawing snapshot for the outline layer.
    pub fn overlay(&self, obstacles: &Obstacles) -> Overlay {
        Overlay::new(self.rect, obstacles, self.config.handles.marker_size)
    }

    fn baseline_for(&mut self, corner: Corner) -> CropRect {
        match self.session {
            Some(session) if session.corner == corner => session.baseline,
            Some(session) => {
                log::warn!(
                    "update_drag({:?}) during a {:?} gesture; rebasing on the live rect",
                    corner,
                    session.corner
                );
                self.rebase(corner)
            }
            None => {
                log::warn!(
                    "update_drag({:?}) without begin_drag; using the live rect as baseline",
                    corner
                );
                self.rebase(corner)
            }
        }
    }

    fn rebase(&mut self, corner: Corner) -> CropRect {
        self.session = Some(GestureSession {
            corner,
            baseline: self.rect,
        });
        self.rect
    }
}
