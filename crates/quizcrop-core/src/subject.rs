//! Subject labels offered by the selection carousel.
//!
//! The core treats the subject as a free-form label; this catalog is what
//! the shipped carousel shows.

/// Subjects in carousel order.
pub const SUBJECTS: [&str; 7] = [
    "HISTORY", "SCIENCE", "MATH", "ENGLISH", "SPANISH", "FRENCH", "CODING",
];

/// Subject selected before the user scrolls.
pub const DEFAULT_SUBJECT: &str = "MATH";

/// Index of [`DEFAULT_SUBJECT`] in [`SUBJECTS`].
pub const DEFAULT_SUBJECT_INDEX: usize = 2;

/// Active item of a horizontally scrolling carousel.
///
/// The item whose center is nearest the left edge of the scroll window plus
/// half an item wins:
///
/// ```text
/// index = round((scroll_offset + item_width / 2) / (item_width + item_spacing))
/// ```
///
/// clamped to `[0, count - 1]`. Returns `None` for an empty carousel.
pub fn carousel_index(
    scroll_offset: f64,
    item_width: f64,
    item_spacing: f64,
    count: usize,
) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let pitch = item_width + item_spacing;
    if pitch.is_nan() || pitch <= 0.0 {
        return Some(0);
    }
    let raw = (scroll_offset + item_width / 2.0) / pitch;
    if raw.is_nan() || raw <= 0.0 {
        return Some(0);
    }
    // Float-to-int `as` saturates, so huge offsets land on the last item.
    let index = raw.round() as usize;
    Some(index.min(count - 1))
}

/// Subject label under the given scroll offset.
pub fn subject_at(scroll_offset: f64, item_width: f64, item_spacing: f64) -> &'static str {
    carousel_index(scroll_offset, item_width, item_spacing, SUBJECTS.len())
        .map_or(DEFAULT_SUBJECT, |i| SUBJECTS[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_subject_in_catalog() {
        assert_eq!(SUBJECTS[DEFAULT_SUBJECT_INDEX], DEFAULT_SUBJECT);
    }

    #[test]
    fn test_carousel_index_at_rest() {
        assert_eq!(carousel_index(0.0, 100.0, 20.0, 7), Some(0));
        // (240 + 50) / 120 = 2.42
        assert_eq!(carousel_index(240.0, 100.0, 20.0, 7), Some(2));
    }

    #[test]
    fn test_carousel_index_rounds_to_nearest() {
        // (130 + 50) / 120 = 1.5 rounds up
        assert_eq!(carousel_index(130.0, 100.0, 20.0, 7), Some(2));
        // (100 + 50) / 120 = 1.25
        assert_eq!(carousel_index(100.0, 100.0, 20.0, 7), Some(1));
    }

    #[test]
    fn test_carousel_index_clamped() {
        assert_eq!(carousel_index(-500.0, 100.0, 20.0, 7), Some(0));
        assert_eq!(carousel_index(10_000.0, 100.0, 20.0, 7), Some(6));
        assert_eq!(carousel_index(f64::INFINITY, 100.0, 20.0, 7), Some(6));
        assert_eq!(carousel_index(f64::NAN, 100.0, 20.0, 7), Some(0));
    }

    #[test]
    fn test_carousel_index_empty() {
        assert_eq!(carousel_index(0.0, 100.0, 20.0, 0), None);
    }

    #[test]
    fn test_carousel_index_zero_pitch() {
        assert_eq!(carousel_index(50.0, 0.0, 0.0, 7), Some(0));
    }

    #[test]
    fn test_subject_at() {
        assert_eq!(subject_at(0.0, 100.0, 20.0), "HISTORY");
        assert_eq!(subject_at(240.0, 100.0, 20.0), "MATH");
        assert_eq!(subject_at(1e6, 100.0, 20.0), "CODING");
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
