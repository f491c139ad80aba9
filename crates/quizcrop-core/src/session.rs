//! Photo-review session: one captured photo, its subject and its crop.
//!
//! [`ReviewSession`] is the state behind the review screen. It owns the
//! [`CropEditor`], remembers the latest obstacle layout, and guards the
//! single asynchronous step (the platform crop) so that at most one crop is
//! in flight and a result for a replaced photo is discarded.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::EditorConfig;
use crate::crop::CropError;
use crate::editor::{Corner, CropEditor, Obstacles, Overlay};
use crate::encode::OutputFormat;
use crate::geometry::{CropRect, LayoutRect, Size};
use crate::mapper::{map_to_pixels, MapError, PixelCropRegion};
use crate::photo::{CapturedPhoto, CroppedPhoto, PhotoHandle};
use crate::subject::DEFAULT_SUBJECT;

/// Errors from session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No photo has been captured.
    #[error("No photo to crop")]
    NoPhoto,

    /// A crop for the current photo has not resolved yet.
    #[error("A crop is already in flight for {0}")]
    CropInFlight(PhotoHandle),

    /// A crop result arrived for a photo that is no longer current.
    /// `expected` is the photo now awaited, `None` after a retake.
    #[error("Stale crop result for {actual} (current photo is {})", handle_or_none(.expected))]
    StalePhoto {
        expected: Option<PhotoHandle>,
        actual: PhotoHandle,
    },

    /// A crop result arrived although no crop was requested.
    #[error("Unexpected crop result for {0}: no crop in flight")]
    NoPendingCrop(PhotoHandle),

    /// The rectangle maps to no pixels.
    #[error(transparent)]
    Degenerate(#[from] MapError),

    /// The crop collaborator failed.
    #[error(transparent)]
    Crop(#[from] CropError),
}

fn handle_or_none(handle: &Option<PhotoHandle>) -> &str {
    handle.as_ref().map_or("none", PhotoHandle::as_str)
}

/// Everything the crop collaborator needs for one crop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropRequest {
    pub photo: CapturedPhoto,
    pub region: PixelCropRegion,
    pub subject: String,
    pub format: OutputFormat,
}

/// State of the review screen.
#[derive(Debug, Clone)]
pub struct ReviewSession {
    editor: CropEditor,
    obstacles: Obstacles,
    photo: Option<CapturedPhoto>,
    subject: String,
    format: OutputFormat,
    pending: Option<PhotoHandle>,
}

impl ReviewSession {
    pub fn new(viewport: Size, config: EditorConfig) -> Self {
        Self {
            editor: CropEditor::new(viewport, config),
            obstacles: Obstacles::none(),
            photo: None,
            subject: DEFAULT_SUBJECT.to_string(),
            format: OutputFormat::default(),
            pending: None,
        }
    }

    /// Use `format` for crop output instead of the default JPEG.
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn editor(&self) -> &CropEditor {
        &self.editor
    }

    pub fn photo(&self) -> Option<&CapturedPhoto> {
        self.photo.as_ref()
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Set the subject label. Any string is accepted.
    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.subject = subject.into();
    }

    pub fn obstacles(&self) -> &Obstacles {
        &self.obstacles
    }

    pub fn is_crop_in_flight(&self) -> bool {
        self.pending.is_some()
    }

    /// The live crop rectangle.
    pub fn rect(&self) -> CropRect {
        self.editor.rect()
    }

    /// Install a newly captured photo and reset the crop rectangle.
    ///
    /// A crop still in flight for the previous photo becomes stale.
    pub fn capture(&mut self, photo: CapturedPhoto) {
        log::debug!(
            "captured {} ({}x{})",
            photo.handle,
            photo.pixel_width,
            photo.pixel_height
        );
        self.drop_pending();
        self.photo = Some(photo);
        self.editor.reset_to_default();
    }

    /// Discard the photo and reset the crop rectangle.
    pub fn retake(&mut self) {
        log::debug!("retake");
        self.drop_pending();
        self.photo = None;
        self.editor.reset_to_default();
    }

    /// Record the measured delete-button frame, or `None` before layout.
    pub fn set_delete_button_layout(&mut self, rect: Option<LayoutRect>) {
        self.obstacles.delete_button = rect;
    }

    /// Record the measured bottom-bar frame, or `None` before layout.
    pub fn set_bottom_bar_layout(&mut self, rect: Option<LayoutRect>) {
        self.obstacles.bottom_bar = rect;
    }

    /// Adopt a new viewport size.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.editor.set_viewport(viewport);
    }

    pub fn begin_drag(&mut self, corner: Corner) {
        self.editor.begin_drag(corner);
    }

    pub fn update_drag(&mut self, corner: Corner, translation_x: f64, translation_y: f64) -> CropRect {
        self.editor
            .update_drag(corner, translation_x, translation_y, &self.obstacles)
    }

    pub fn end_drag(&mut self, corner: Corner) {
        self.editor.end_drag(corner);
    }

    /// Drawing snapshot for the outline layer.
    pub fn overlay(&self) -> Overlay {
        self.editor.overlay(&self.obstacles)
    }

    /// Map the live rectangle to pixels and mark a crop as in flight.
    ///
    /// # Errors
    ///
    /// - [`SessionError::NoPhoto`] before a capture
    /// - [`SessionError::CropInFlight`] while a previous request is pending
    /// - [`SessionError::Degenerate`] when the rectangle maps to no pixels
    pub fn confirm(&mut self) -> Result<CropRequest, SessionError> {
        let photo = self.photo.as_ref().ok_or(SessionError::NoPhoto)?;
        if let Some(pending) = &self.pending {
            log::warn!("confirm while a crop for {} is in flight", pending);
            return Err(SessionError::CropInFlight(pending.clone()));
        }

        let region = map_to_pixels(
            &self.editor.rect(),
            photo.pixel_width,
            photo.pixel_height,
            self.editor.viewport(),
        )?;
        log::debug!("confirm {}: region {:?}", photo.handle, region);

        self.pending = Some(photo.handle.clone());
        Ok(CropRequest {
            photo: photo.clone(),
            region,
            subject: self.subject.clone(),
            format: self.format,
        })
    }

    /// Accept the crop collaborator's answer for `handle`.
    ///
    /// A result for a photo other than the one in flight is discarded with
    /// [`SessionError::StalePhoto`] and leaves the pending crop untouched.
    /// A failure clears the pending crop and leaves the rectangle as it
    /// was, so the user can confirm again or retake.
    pub fn complete_crop(
        &mut self,
        handle: &PhotoHandle,
        result: Result<CroppedPhoto, CropError>,
    ) -> Result<CroppedPhoto, SessionError> {
        match &self.pending {
            Some(pending) if pending == handle => {}
            Some(pending) => {
                log::warn!("discarding crop result for {}; awaiting {}", handle, pending);
                return Err(SessionError::StalePhoto {
                    expected: Some(pending.clone()),
                    actual: handle.clone(),
                });
            }
            None => {
                let current = self.photo.as_ref().map(|p| &p.handle);
                log::warn!("discarding crop result for {}; none in flight", handle);
                return Err(if current == Some(handle) {
                    SessionError::NoPendingCrop(handle.clone())
                } else {
                    SessionError::StalePhoto {
                        expected: current.cloned(),
                        actual: handle.clone(),
                    }
                });
            }
        }

        self.pending = None;
        match result {
            Ok(cropped) => {
                log::debug!(
                    "crop of {} done: {} ({}x{})",
                    handle,
                    cropped.handle,
                    cropped.pixel_width,
                    cropped.pixel_height
                );
                Ok(cropped)
            }
            Err(err) => {
                log::warn!("crop of {} failed: {}", handle, err);
                Err(SessionError::Crop(err))
            }
        }
    }

    fn drop_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            log::debug!("dropping in-flight crop for {}", pending);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MIN_CROP_SIZE;

    const VIEWPORT: Size = Size {
        width: 390.0,
        height: 844.0,
    };

    fn session() -> ReviewSession {
        ReviewSession::new(VIEWPORT, EditorConfig::default())
    }

    fn photo(handle: &str) -> CapturedPhoto {
        CapturedPhoto::new(handle, 3000, 4000)
    }

    fn cropped(handle: &str) -> CroppedPhoto {
        CroppedPhoto {
            handle: PhotoHandle::new(handle),
            pixel_width: 2700,
            pixel_height: 1946,
        }
    }

    #[test]
    fn test_new_session_defaults() {
        let s = session();
        assert_eq!(s.subject(), "MATH");
        assert!(s.photo().is_none());
        assert!(!s.is_crop_in_flight());
        assert_eq!(s.overlay().crop, s.rect());
    }

    #[test]
    fn test_confirm_without_photo() {
        let mut s = session();
        assert!(matches!(s.confirm(), Err(SessionError::NoPhoto)));
    }

    #[test]
    fn test_confirm_builds_request() {
        let mut s = session();
        s.capture(photo("a"));
        s.set_subject("SCIENCE");

        let request = s.confirm().unwrap();
        assert_eq!(request.photo.handle.as_str(), "a");
        assert_eq!(request.subject, "SCIENCE");
        assert_eq!(request.format, OutputFormat::default());
        assert!(request.region.fits_within(3000, 4000));
        assert!(s.is_crop_in_flight());
    }

    #[test]
    fn test_confirm_twice_is_rejected() {
        let mut s = session();
        s.capture(photo("a"));
        s.confirm().unwrap();
        assert!(matches!(s.confirm(), Err(SessionError::CropInFlight(_))));
    }

    #[test]
    fn test_complete_crop_success_clears_pending() {
        let mut s = session();
        s.capture(photo("a"));
        s.confirm().unwrap();

        let out = s
            .complete_crop(&PhotoHandle::new("a"), Ok(cropped("a-crop")))
            .unwrap();
        assert_eq!(out.handle.as_str(), "a-crop");
        assert!(!s.is_crop_in_flight());
    }

    #[test]
    fn test_failed_crop_keeps_rect_and_allows_retry() {
        let mut s = session();
        s.capture(photo("a"));
        s.begin_drag(Corner::BottomRight);
        s.update_drag(Corner::BottomRight, -40.0, -40.0);
        s.end_drag(Corner::BottomRight);
        let rect = s.rect();

        s.confirm().unwrap();
        let err = s
            .complete_crop(&PhotoHandle::new("a"), Err(CropError::Io("denied".into())))
            .unwrap_err();

        assert!(matches!(err, SessionError::Crop(CropError::Io(_))));
        assert_eq!(s.rect(), rect);
        assert!(s.confirm().is_ok());
    }

    #[test]
    fn test_result_after_retake_is_stale() {
        let mut s = session();
        s.capture(photo("a"));
        s.confirm().unwrap();
        s.retake();
        s.capture(photo("b"));

        let err = s
            .complete_crop(&PhotoHandle::new("a"), Ok(cropped("a-crop")))
            .unwrap_err();
        assert!(matches!(
            err,
            SessionError::StalePhoto { expected: Some(ref expected), ref actual }
                if expected.as_str() == "b" && actual.as_str() == "a"
        ));
    }

    #[test]
    fn test_late_result_after_retake_without_recapture() {
        let mut s = session();
        s.capture(photo("a"));
        s.confirm().unwrap();
        s.retake();

        let err = s
            .complete_crop(&PhotoHandle::new("a"), Err(CropError::Io("late".into())))
            .unwrap_err();
        assert!(matches!(
            err,
            SessionError::StalePhoto { expected: None, ref actual } if actual.as_str() == "a"
        ));
        assert_eq!(
            err.to_string(),
            "Stale crop result for a (current photo is none)"
        );
        assert!(s.photo().is_none());
        assert!(!s.is_crop_in_flight());
    }

    #[test]
    fn test_stale_result_leaves_pending_crop() {
        let mut s = session();
        s.capture(photo("a"));
        s.confirm().unwrap();
        s.capture(photo("b"));
        s.confirm().unwrap();

        assert!(s
            .complete_crop(&PhotoHandle::new("a"), Ok(cropped("a-crop")))
            .is_err());
        assert!(s.is_crop_in_flight());
        assert!(s
            .complete_crop(&PhotoHandle::new("b"), Ok(cropped("b-crop")))
            .is_ok());
    }

    #[test]
    fn test_unrequested_result() {
        let mut s = session();
        s.capture(photo("a"));
        let err = s
            .complete_crop(&PhotoHandle::new("a"), Ok(cropped("a-crop")))
            .unwrap_err();
        assert!(matches!(err, SessionError::NoPendingCrop(_)));
    }

    #[test]
    fn test_capture_resets_rect() {
        let mut s = session();
        let default = s.rect();
        s.capture(photo("a"));
        s.begin_drag(Corner::TopLeft);
        s.update_drag(Corner::TopLeft, 50.0, 50.0);
        assert_ne!(s.rect(), default);

        s.capture(photo("b"));
        assert_eq!(s.rect(), default);
        assert!(!s.editor().is_dragging());
    }

    #[test]
    fn test_drag_respects_obstacles() {
        let mut s = session();
        s.set_delete_button_layout(Some(LayoutRect::new(340.0, 150.0, 40.0, 40.0)));
        s.set_bottom_bar_layout(Some(LayoutRect::new(0.0, 744.0, 390.0, 100.0)));

        s.begin_drag(Corner::TopLeft);
        let rect = s.update_drag(Corner::TopLeft, 0.0, -500.0);
        assert!(rect.top >= 200.0 - 1e-9);

        s.end_drag(Corner::TopLeft);
        s.begin_drag(Corner::BottomRight);
        let rect = s.update_drag(Corner::BottomRight, 0.0, 2000.0);
        assert!(rect.bottom() <= 734.0 + 1e-9);
        assert!(rect.height >= MIN_CROP_SIZE);
    }

    #[test]
    fn test_degenerate_confirm_does_not_mark_in_flight() {
        // A 40:1 strip is displayed 9.75 units tall around y = 422; the
        // rectangle is dragged to end above it, entirely in the letterbox.
        let mut s = session();
        s.capture(CapturedPhoto::new("strip", 4000, 100));
        s.begin_drag(Corner::BottomRight);
        s.update_drag(Corner::BottomRight, 0.0, -200.0);
        s.end_drag(Corner::BottomRight);

        let result = s.confirm();
        assert!(matches!(
            result,
            Err(SessionError::Degenerate(MapError::DegenerateCrop { height: 0, .. }))
        ));
        assert!(!s.is_crop_in_flight());
    }

    #[test]
    fn test_output_format_override() {
        let mut s = session().with_output_format(OutputFormat::Png);
        s.capture(photo("a"));
        assert_eq!(s.confirm().unwrap().format, OutputFormat::Png);
    }
}
