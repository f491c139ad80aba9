//! QuizCrop WASM - WebAssembly bindings for QuizCrop
//!
//! This crate exposes the quizcrop-core crop editor, coordinate mapper and
//! crop pipeline to the JavaScript review screen.
//!
//! # Module Structure
//!
//! - `session` - The review session: photo, subject, corner drags, confirm
//! - `crop` - Mapping, decode, crop and JPEG encode
//! - `subject` - Subject catalog and carousel index
//! - `types` - WASM-compatible wrapper types
//! - `logging` - Console backend for the `log` facade
//!
//! # Usage
//!
//! ```typescript
//! import init, { ReviewSession } from '@quizcrop/wasm';
//!
//! await init();
//!
//! const session = new ReviewSession(window.innerWidth, window.innerHeight, undefined);
//! session.capture(uri, width, height);
//! ```

use wasm_bindgen::prelude::*;

mod crop;
mod logging;
mod session;
mod subject;
mod types;

// Re-export public types
pub use crop::{crop_image, crop_to_jpeg, decode_photo, encode_jpeg, map_crop_to_pixels, probe_photo};
pub use logging::set_log_level;
pub use session::ReviewSession;
pub use subject::{carousel_index, default_subject_index, subjects};
pub use types::JsDecodedImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logging::init(log::LevelFilter::Warn);
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
