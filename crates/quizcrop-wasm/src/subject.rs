//! Subject carousel bindings.

use quizcrop_core::subject;
use wasm_bindgen::prelude::*;

/// Subject labels in carousel order.
#[wasm_bindgen]
pub fn subjects() -> Vec<String> {
    subject::SUBJECTS.iter().map(|s| s.to_string()).collect()
}

/// Index of the subject preselected when the carousel first renders.
#[wasm_bindgen]
pub fn default_subject_index() -> usize {
    subject::DEFAULT_SUBJECT_INDEX
}

/// Active carousel item for a scroll offset, or `undefined` when empty.
#[wasm_bindgen]
pub fn carousel_index(scroll_offset: f64, item_width: f64, item_spacing: f64, count: usize) -> Option<usize> {
    subject::carousel_index(scroll_offset, item_width, item_spacing, count)
}
