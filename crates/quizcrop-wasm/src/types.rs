//! WASM-compatible wrapper types and conversions.
//!
//! This module provides JavaScript-friendly types that wrap the core QuizCrop
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use std::fmt::Display;

use quizcrop_core::{Corner, DecodedImage};
use wasm_bindgen::prelude::*;

/// A decoded photo wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is made
/// to JavaScript memory as a `Uint8Array`. Keep the image in WASM memory between
/// decode and crop and only extract pixels when the UI needs them.
#[wasm_bindgen]
pub struct JsDecodedImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsDecodedImage {
    /// Create a new JsDecodedImage from dimensions and RGB pixel data
    /// (3 bytes per pixel, row-major order).
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsDecodedImage {
        JsDecodedImage {
            width,
            height,
            pixels,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of bytes in the pixel buffer (width * height * 3).
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGB pixel data as Uint8Array (a copy).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }
}

impl JsDecodedImage {
    pub(crate) fn from_decoded(img: DecodedImage) -> Self {
        Self {
            width: img.width,
            height: img.height,
            pixels: img.pixels,
        }
    }

    /// Convert back to a core DecodedImage. Clones the pixel data.
    pub(crate) fn to_decoded(&self) -> DecodedImage {
        DecodedImage {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}

/// Parse a corner name as sent by the gesture layer.
///
/// Accepts `topLeft`, `topRight`, `bottomLeft`, `bottomRight`.
pub(crate) fn corner_from_str(name: &str) -> Option<Corner> {
    match name {
        "topLeft" => Some(Corner::TopLeft),
        "topRight" => Some(Corner::TopRight),
        "bottomLeft" => Some(Corner::BottomLeft),
        "bottomRight" => Some(Corner::BottomRight),
        _ => None,
    }
}

pub(crate) fn corner_name(corner: Corner) -> &'static str {
    match corner {
        Corner::TopLeft => "topLeft",
        Corner::TopRight => "topRight",
        Corner::BottomLeft => "bottomLeft",
        Corner::BottomRight => "bottomRight",
    }
}

pub(crate) fn parse_corner(name: &str) -> Result<Corner, JsValue> {
    corner_from_str(name).ok_or_else(|| js_error(format!("Unknown corner: {}", name)))
}

/// Convert any error into a thrown JS `Error`.
pub(crate) fn js_error(err: impl Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_decoded_image_creation() {
        let img = JsDecodedImage::new(100, 50, vec![0u8; 100 * 50 * 3]);
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.byte_length(), 15000);
    }

    #[test]
    fn test_from_decoded_round_trip() {
        let decoded = DecodedImage::new(4, 2, vec![7u8; 4 * 2 * 3]);
        let js_img = JsDecodedImage::from_decoded(decoded);
        assert_eq!((js_img.width(), js_img.height()), (4, 2));

        let back = js_img.to_decoded();
        assert_eq!(back.pixels, js_img.pixels());
    }

    #[test]
    fn test_corner_names() {
        for corner in Corner::ALL {
            assert_eq!(corner_from_str(corner_name(corner)), Some(corner));
        }
        assert_eq!(corner_from_str("middle"), None);
        assert_eq!(corner_from_str("TopLeft"), None);
    }
}
