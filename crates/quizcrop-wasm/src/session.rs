//! Review-session bindings.
//!
//! `ReviewSession` is the object the review screen holds on to. Gesture
//! callbacks forward corner drags, layout callbacks report the obstacle
//! frames, and the confirm button asks for a crop request.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const session = new ReviewSession(390, 844, undefined);
//! session.capture(photo.uri, photo.width, photo.height);
//! session.set_bottom_bar_layout({ x: 0, y: 744, width: 390, height: 100 });
//!
//! // pan handler on a corner marker
//! session.begin_drag("topLeft");
//! const rect = session.update_drag("topLeft", e.translationX, e.translationY);
//! session.end_drag("topLeft");
//!
//! const request = session.confirm();
//! ```

use crate::types::{corner_name, js_error, parse_corner};
use quizcrop_core::{
    config::EditorConfig, CapturedPhoto, CropError, CroppedPhoto, LayoutRect, PhotoHandle, Point,
    SessionError, Size,
};
use wasm_bindgen::prelude::*;

/// Photo-review session wrapper for JavaScript
#[wasm_bindgen]
pub struct ReviewSession {
    inner: quizcrop_core::ReviewSession,
}

#[wasm_bindgen]
impl ReviewSession {
    /// Create a session for a viewport. `config` is a partial
    /// `EditorConfig` object, or `undefined` for the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(viewport_width: f64, viewport_height: f64, config: JsValue) -> Result<ReviewSession, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            EditorConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(js_error)?
        };
        Ok(Self::with_config(viewport_width, viewport_height, config))
    }

    /// Install a newly captured photo; resets the crop rectangle.
    pub fn capture(&mut self, handle: String, pixel_width: u32, pixel_height: u32) {
        self.inner
            .capture(CapturedPhoto::new(PhotoHandle::new(handle), pixel_width, pixel_height));
    }

    /// Discard the photo; resets the crop rectangle.
    pub fn retake(&mut self) {
        self.inner.retake();
    }

    #[wasm_bindgen(getter)]
    pub fn subject(&self) -> String {
        self.inner.subject().to_string()
    }

    #[wasm_bindgen(setter)]
    pub fn set_subject(&mut self, subject: String) {
        self.inner.set_subject(subject);
    }

    #[wasm_bindgen(getter)]
    pub fn crop_in_flight(&self) -> bool {
        self.inner.is_crop_in_flight()
    }

    /// Delete-button frame `{ x, y, width, height }`, or `null` to clear.
    pub fn set_delete_button_layout(&mut self, layout: JsValue) -> Result<(), JsValue> {
        let rect: Option<LayoutRect> = serde_wasm_bindgen::from_value(layout).map_err(js_error)?;
        self.inner.set_delete_button_layout(rect);
        Ok(())
    }

    /// Bottom-bar frame `{ x, y, width, height }`, or `null` to clear.
    pub fn set_bottom_bar_layout(&mut self, layout: JsValue) -> Result<(), JsValue> {
        let rect: Option<LayoutRect> = serde_wasm_bindgen::from_value(layout).map_err(js_error)?;
        self.inner.set_bottom_bar_layout(rect);
        Ok(())
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.inner.set_viewport(Size::new(width, height));
    }

    pub fn begin_drag(&mut self, corner: &str) -> Result<(), JsValue> {
        self.inner.begin_drag(parse_corner(corner)?);
        Ok(())
    }

    /// Apply the translation accumulated since `begin_drag`; returns the
    /// new rectangle `{ top, left, width, height }`.
    pub fn update_drag(&mut self, corner: &str, translation_x: f64, translation_y: f64) -> Result<JsValue, JsValue> {
        let rect = self
            .inner
            .update_drag(parse_corner(corner)?, translation_x, translation_y);
        serde_wasm_bindgen::to_value(&rect).map_err(js_error)
    }

    pub fn end_drag(&mut self, corner: &str) -> Result<(), JsValue> {
        self.inner.end_drag(parse_corner(corner)?);
        Ok(())
    }

    /// The live rectangle `{ top, left, width, height }`.
    pub fn rect(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.rect()).map_err(js_error)
    }

    /// Rectangle, obstacles and corner markers for the outline layer.
    pub fn overlay(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.overlay()).map_err(js_error)
    }

    /// Corner whose handle is under the touch point, if any.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<String> {
        self.inner
            .editor()
            .hit_test(Point::new(x, y))
            .map(|corner| corner_name(corner).to_string())
    }

    /// Map the rectangle to pixels and mark a crop as in flight.
    ///
    /// Returns `{ photo, region, subject, format }`. Throws without a photo,
    /// while another crop is in flight, or for a degenerate rectangle.
    pub fn confirm(&mut self) -> Result<JsValue, JsValue> {
        let request = self.inner.confirm().map_err(js_error)?;
        serde_wasm_bindgen::to_value(&request).map_err(js_error)
    }

    /// Report a finished crop `{ handle, pixelWidth, pixelHeight }` for the
    /// photo `handle`. Throws for a stale or unrequested result.
    pub fn complete_crop(&mut self, handle: String, cropped: JsValue) -> Result<JsValue, JsValue> {
        let cropped: CroppedPhoto = serde_wasm_bindgen::from_value(cropped).map_err(js_error)?;
        let done = self
            .inner
            .complete_crop(&PhotoHandle::new(handle), Ok(cropped))
            .map_err(js_error)?;
        serde_wasm_bindgen::to_value(&done).map_err(js_error)
    }

    /// Report a failed crop for the photo `handle`. The rectangle is kept so
    /// the user can confirm again. Throws only for a stale or unrequested
    /// result.
    pub fn fail_crop(&mut self, handle: String, message: String) -> Result<(), JsValue> {
        self.record_failure(&PhotoHandle::new(handle), message)
            .map_err(js_error)
    }
}

impl ReviewSession {
    pub(crate) fn with_config(viewport_width: f64, viewport_height: f64, config: EditorConfig) -> Self {
        Self {
            inner: quizcrop_core::ReviewSession::new(Size::new(viewport_width, viewport_height), config),
        }
    }

    fn record_failure(&mut self, handle: &PhotoHandle, message: String) -> Result<(), SessionError> {
        match self.inner.complete_crop(handle, Err(CropError::Io(message))) {
            Err(SessionError::Crop(_)) => Ok(()),
            Err(other) => Err(other),
            Ok(_) => Ok(()),
        }
    }
}
