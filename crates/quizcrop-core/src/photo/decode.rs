//! Decoding of captured photos with EXIF orientation handling.
//!
//! Phone cameras often store pixels in sensor orientation and record the
//! rotation in EXIF. The preview shows the corrected image, so both the
//! pixel size fed to the mapper and the pixels fed to the crop must be
//! corrected the same way.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageReader};

use super::{CapturedPhoto, DecodeError, DecodedImage, Orientation, PhotoHandle};

/// Decode photo bytes (JPEG or PNG), applying EXIF orientation correction.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format cannot be recognized,
/// `DecodeError::CorruptedFile` if decoding fails and `DecodeError::Empty`
/// for a zero-sized image.
pub fn decode_photo(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let orientation = read_orientation(bytes);
    let img = open_reader(bytes)?
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let decoded = DecodedImage::from_rgb_image(apply_orientation(img, orientation).into_rgb8());
    if decoded.is_empty() {
        return Err(DecodeError::Empty);
    }
    Ok(decoded)
}

/// Build a [`CapturedPhoto`] record from the header alone, without decoding
/// pixel data.
///
/// The reported size is the displayed size: width and height are swapped for
/// orientations that rotate by 90 or 270 degrees.
pub fn probe_photo(handle: PhotoHandle, bytes: &[u8]) -> Result<CapturedPhoto, DecodeError> {
    let orientation = read_orientation(bytes);
    let (width, height) = open_reader(bytes)?
        .into_dimensions()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if width == 0 || height == 0 {
        return Err(DecodeError::Empty);
    }

    let (pixel_width, pixel_height) = if orientation.swaps_dimensions() {
        (height, width)
    } else {
        (width, height)
    };
    Ok(CapturedPhoto {
        handle,
        pixel_width,
        pixel_height,
    })
}

fn open_reader(bytes: &[u8]) -> Result<ImageReader<Cursor<&[u8]>>, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;
    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }
    Ok(reader)
}

/// EXIF orientation, `Normal` when absent or unreadable.
pub fn read_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);
    Reader::new()
        .read_from_container(&mut cursor)
        .ok()
        .and_then(|exif| {
            exif.get_field(Tag::Orientation, In::PRIMARY)
                .and_then(|field| field.value.get_uint(0))
        })
        .map(Orientation::from)
        .unwrap_or_default()
}

fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}
