//! Pixel cropping of decoded photos.
//!
//! This is the in-process implementation of the crop collaborator: it takes
//! a [`PixelCropRegion`] from the mapper and copies that region out of the
//! source image. Platforms with a native crop API can skip it and feed the
//! region to their own crop call.

use thiserror::Error;

use crate::encode::{encode, EncodeError, OutputFormat};
use crate::mapper::PixelCropRegion;
use crate::photo::DecodedImage;

/// Errors from the crop step.
#[derive(Debug, Error)]
pub enum CropError {
    /// The region has zero width or height.
    #[error("Empty crop region: {width}x{height}")]
    EmptyRegion { width: u32, height: u32 },

    /// The region extends past the image.
    #[error("Crop region {region:?} does not fit a {image_width}x{image_height} image")]
    RegionOutOfBounds {
        region: PixelCropRegion,
        image_width: u32,
        image_height: u32,
    },

    /// The pixel buffer does not hold `width * height` RGB pixels.
    #[error("Invalid pixel data: expected {expected} bytes, got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// The cropped image could not be encoded.
    #[error("Failed to encode crop: {0}")]
    Encode(#[from] EncodeError),

    /// A platform crop call failed (reported by an external collaborator).
    #[error("Crop I/O error: {0}")]
    Io(String),
}

/// Copy `region` out of `image`.
///
/// # Errors
///
/// `EmptyRegion` for a zero-sized region, `RegionOutOfBounds` when the
/// region does not lie inside the image, `InvalidPixelData` when the
/// buffer length does not match the image size.
pub fn crop_region(image: &DecodedImage, region: PixelCropRegion) -> Result<DecodedImage, CropError> {
    if region.width == 0 || region.height == 0 {
        return Err(CropError::EmptyRegion {
            width: region.width,
            height: region.height,
        });
    }
    if !region.fits_within(image.width, image.height) {
        return Err(CropError::RegionOutOfBounds {
            region,
            image_width: image.width,
            image_height: image.height,
        });
    }

    let expected = image.stride() * image.height as usize;
    if image.pixels.len() != expected {
        return Err(CropError::InvalidPixelData {
            expected,
            actual: image.pixels.len(),
        });
    }

    // Fast path: full-frame region
    if region.origin_x == 0
        && region.origin_y == 0
        && region.width == image.width
        && region.height == image.height
    {
        return Ok(image.clone());
    }

    let src_stride = image.stride();
    let row_bytes = region.width as usize * 3;
    let x_offset = region.origin_x as usize * 3;
    let mut pixels = Vec::with_capacity(row_bytes * region.height as usize);

    for y in region.origin_y..region.origin_y + region.height {
        let start = y as usize * src_stride + x_offset;
        pixels.extend_from_slice(&image.pixels[start..start + row_bytes]);
    }

    Ok(DecodedImage::new(region.width, region.height, pixels))
}

/// Crop and encode in one step, producing the bytes handed to the analysis
/// stage.
pub fn crop_to_bytes(
    image: &DecodedImage,
    region: PixelCropRegion,
    format: OutputFormat,
) -> Result<Vec<u8>, CropError> {
    let cropped = crop_region(image, region)?;
    Ok(encode(&cropped, format)?)
}

/// Crop and encode as JPEG.
pub fn crop_to_jpeg(
    image: &DecodedImage,
    region: PixelCropRegion,
    quality: u8,
) -> Result<Vec<u8>, CropError> {
    crop_to_bytes(image, region, OutputFormat::Jpeg { quality })
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn create_test_image(width: u32, height: u32) -> DecodedImage {
        let pixels = (0..(width * height * 3) as usize)
            .map(|i| (i / 3 % 251) as u8)
            .collect();
        DecodedImage::new(width, height, pixels)
    }

    /// Strategy for an image size and a region that fits inside it.
    fn image_and_region() -> impl Strategy<Value = ((u32, u32), PixelCropRegion)> {
        (1u32..=64, 1u32..=64).prop_flat_map(|(w, h)| {
            (0..w, 0..h).prop_flat_map(move |(x, y)| {
                (1..=w - x, 1..=h - y)
                    .prop_map(move |(rw, rh)| ((w, h), PixelCropRegion::new(x, y, rw, rh)))
            })
        })
    }

    proptest! {
        /// Property: Output has exactly the region's size.
        #[test]
        fn prop_output_matches_region(((w, h), region) in image_and_region()) {
            let img = create_test_image(w, h);
            let out = crop_region(&img, region).unwrap();

            prop_assert_eq!(out.width, region.width);
            prop_assert_eq!(out.height, region.height);
            prop_assert_eq!(out.pixels.len(), (region.width * region.height * 3) as usize);
        }

        /// Property: Every output pixel equals the source pixel it came from.
        #[test]
        fn prop_pixels_come_from_region(((w, h), region) in image_and_region()) {
            let img = create_test_image(w, h);
            let out = crop_region(&img, region).unwrap();

            for y in 0..region.height {
                for x in 0..region.width {
                    let src = (((region.origin_y + y) * w + region.origin_x + x) * 3) as usize;
                    let dst = ((y * region.width + x) * 3) as usize;
                    prop_assert_eq!(&out.pixels[dst..dst + 3], &img.pixels[src..src + 3]);
                }
            }
        }
    }
}
