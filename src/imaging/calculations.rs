//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Calculate output dimensions for a width-driven resize.
///
/// The height follows from the source aspect ratio. A `target_width` of 0
/// keeps the native width. Upscaling is allowed.
///
/// # Arguments
/// * `original` - Native image dimensions (width, height)
/// * `target_width` - Requested output width, or 0 for the native width
///
/// # Returns
/// * `(width, height)` - Output dimensions, each at least 1 when the source is non-empty
///
/// # Examples
/// ```
/// # use imgshrink::imaging::calculate_target_dimensions;
/// assert_eq!(calculate_target_dimensions((2000, 1500), 500), (500, 375));
/// assert_eq!(calculate_target_dimensions((640, 480), 0), (640, 480));
/// ```
pub fn calculate_target_dimensions(original: (u32, u32), target_width: u32) -> (u32, u32) {
    let (orig_w, orig_h) = original;

    if target_width == 0 || target_width == orig_w || orig_w == 0 {
        return original;
    }

    let h = (orig_h as f64 * target_width as f64 / orig_w as f64).round() as u32;
    (target_width, h.max(1))
}
