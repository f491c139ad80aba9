//! QuizCrop Core - crop editing for photographed questions
//!
//! This crate provides the core logic behind the photo-review screen: the
//! interactive corner-drag crop editor, the display-to-pixel coordinate
//! mapper, and the pixel crop/encode step that produces the image sent on
//! for analysis.

pub mod config;
pub mod crop;
pub mod editor;
pub mod encode;
pub mod geometry;
pub mod mapper;
pub mod photo;
pub mod session;
pub mod subject;

pub use config::EditorConfig;
pub use crop::{crop_region, crop_to_bytes, crop_to_jpeg, CropError};
pub use editor::{Corner, CropEditor, Obstacles, Overlay};
pub use encode::{encode, EncodeError, OutputFormat};
pub use geometry::{CropRect, LayoutRect, Point, Size};
pub use mapper::{map_to_pixels, MapError, PixelCropRegion};
pub use photo::{decode_photo, probe_photo, CapturedPhoto, CroppedPhoto, DecodedImage, PhotoHandle};
pub use session::{CropRequest, ReviewSession, SessionError};
