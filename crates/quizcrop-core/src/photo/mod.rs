//! Captured photos: records, decoding and orientation.
//!
//! The camera collaborator hands over encoded bytes plus a platform handle.
//! This module turns them into a [`CapturedPhoto`] (what the editor and the
//! mapper need) and, when the crop runs in-process, a [`DecodedImage`].

mod decode;
mod types;

pub use decode::{decode_photo, probe_photo, read_orientation};
pub use types::{CapturedPhoto, CroppedPhoto, DecodeError, DecodedImage, Orientation, PhotoHandle};
