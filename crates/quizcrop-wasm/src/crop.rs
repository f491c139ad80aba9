//! WASM bindings for mapping, decoding, cropping and encoding.
//!
//! These cover hosts that run the whole crop in WASM: decode the captured
//! bytes, map the editor rectangle to pixels, crop and encode.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const photo = probe_photo(uri, bytes);
//! const image = decode_photo(bytes);
//! const region = map_crop_to_pixels(rect, photo.pixelWidth, photo.pixelHeight, 390, 844);
//! const jpeg = crop_to_jpeg(image, region.originX, region.originY, region.width, region.height, 90);
//! ```

use crate::types::{js_error, JsDecodedImage};
use quizcrop_core::{encode, mapper, photo, CropRect, PhotoHandle, PixelCropRegion, Size};
use wasm_bindgen::prelude::*;

/// Map a display-space crop rectangle (`{ top, left, width, height }`) to a
/// pixel region `{ originX, originY, width, height }` of the original image.
///
/// Throws when the rectangle maps to zero pixels on either axis.
#[wasm_bindgen]
pub fn map_crop_to_pixels(
    crop: JsValue,
    image_width: u32,
    image_height: u32,
    viewport_width: f64,
    viewport_height: f64,
) -> Result<JsValue, JsValue> {
    let crop: CropRect = serde_wasm_bindgen::from_value(crop).map_err(js_error)?;
    let region = mapper::map_to_pixels(
        &crop,
        image_width,
        image_height,
        Size::new(viewport_width, viewport_height),
    )
    .map_err(js_error)?;
    serde_wasm_bindgen::to_value(&region).map_err(js_error)
}

/// Decode captured JPEG/PNG bytes with EXIF orientation applied.
#[wasm_bindgen]
pub fn decode_photo(bytes: &[u8]) -> Result<JsDecodedImage, JsValue> {
    photo::decode_photo(bytes)
        .map(JsDecodedImage::from_decoded)
        .map_err(js_error)
}

/// Read the displayed pixel size from the header without decoding.
///
/// Returns `{ handle, pixelWidth, pixelHeight }`, ready for `capture`.
#[wasm_bindgen]
pub fn probe_photo(handle: String, bytes: &[u8]) -> Result<JsValue, JsValue> {
    let photo = photo::probe_photo(PhotoHandle::new(handle), bytes).map_err(js_error)?;
    serde_wasm_bindgen::to_value(&photo).map_err(js_error)
}

/// Copy a pixel region out of an image.
#[wasm_bindgen]
pub fn crop_image(
    image: &JsDecodedImage,
    origin_x: u32,
    origin_y: u32,
    width: u32,
    height: u32,
) -> Result<JsDecodedImage, JsValue> {
    let region = PixelCropRegion::new(origin_x, origin_y, width, height);
    quizcrop_core::crop_region(&image.to_decoded(), region)
        .map(JsDecodedImage::from_decoded)
        .map_err(js_error)
}

/// Crop a pixel region and encode it as JPEG (quality 1-100).
#[wasm_bindgen]
pub fn crop_to_jpeg(
    image: &JsDecodedImage,
    origin_x: u32,
    origin_y: u32,
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, JsValue> {
    let region = PixelCropRegion::new(origin_x, origin_y, width, height);
    quizcrop_core::crop_to_jpeg(&image.to_decoded(), region, quality).map_err(js_error)
}

/// Encode RGB pixel data (3 bytes per pixel, row-major) to JPEG bytes.
#[wasm_bindgen]
pub fn encode_jpeg(pixels: &[u8], width: u32, height: u32, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(pixels, width, height, quality).map_err(js_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_image(width: u32, height: u32) -> JsDecodedImage {
        let pixels: Vec<u8> = (0..(width * height * 3) as usize)
            .map(|i| (i % 256) as u8)
            .collect();
        JsDecodedImage::new(width, height, pixels)
    }

    #[test]
    fn test_crop_image() {
        let img = test_image(100, 80);
        let result = crop_image(&img, 10, 20, 30, 40).ok().unwrap();
        assert_eq!(result.width(), 30);
        assert_eq!(result.height(), 40);
        assert_eq!(result.byte_length(), 30 * 40 * 3);
    }

    #[test]
    fn test_crop_to_jpeg() {
        let img = test_image(64, 64);
        let jpeg = crop_to_jpeg(&img, 0, 0, 32, 16, 90).ok().unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_encode_then_decode() {
        let img = test_image(16, 8);
        let jpeg = encode_jpeg(&img.pixels(), 16, 8, 90).ok().unwrap();
        let decoded = decode_photo(&jpeg).ok().unwrap();
        assert_eq!((decoded.width(), decoded.height()), (16, 8));
    }
}
