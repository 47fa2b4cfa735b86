//! WCAG contrast ratios expressed on tones
//!
//! Tone is L*, so these helpers convert through Y before applying the usual
//! `(lighter + 5) / (darker + 5)` formula. The inverse operators return
//! `-1.0` when no tone in range can reach the requested ratio.

use crate::color::{lstar_from_y, y_from_lstar};

/// Slack allowed when checking whether a computed tone really reaches the
/// requested ratio.
const CONTRAST_RATIO_EPSILON: f64 = 0.04;

/// Extra tone added to every answer; solving for a color rounds to 8 bits
/// and can lose a little contrast.
const LUMINANCE_GAMUT_MAP_TOLERANCE: f64 = 0.4;

/// Contrast ratio between two relative luminances (0..=100).
pub fn ratio_of_ys(y1: f64, y2: f64) -> f64 {
    let lighter = y1.max(y2);
    let darker = if lighter == y2 { y1 } else { y2 };
    (lighter + 5.0) / (darker + 5.0)
}

/// Contrast ratio between two tones, in 1.0..=21.0.
///
/// ```
/// use material_color::contrast::ratio_of_tones;
///
/// assert!((ratio_of_tones(0.0, 100.0) - 21.0).abs() < 1e-3);
/// assert_eq!(ratio_of_tones(50.0, 50.0), 1.0);
/// ```
pub fn ratio_of_tones(tone_a: f64, tone_b: f64) -> f64 {
    let tone_a = tone_a.clamp(0.0, 100.0);
    let tone_b = tone_b.clamp(0.0, 100.0);
    ratio_of_ys(y_from_lstar(tone_a), y_from_lstar(tone_b))
}

/// A tone at or above `tone` with at least `ratio` contrast, or `-1.0`.
pub fn lighter(tone: f64, ratio: f64) -> f64 {
    if !(0.0..=100.0).contains(&tone) {
        return -1.0;
    }
    let dark_y = y_from_lstar(tone);
    let light_y = ratio * (dark_y + 5.0) - 5.0;
    let real_contrast = ratio_of_ys(light_y, dark_y);
    let delta = (real_contrast - ratio).abs();
    if real_contrast < ratio && delta > CONTRAST_RATIO_EPSILON {
        return -1.0;
    }
    let result = lstar_from_y(light_y) + LUMINANCE_GAMUT_MAP_TOLERANCE;
    if !(0.0..=100.0).contains(&result) {
        return -1.0;
    }
    result
}

/// A tone at or below `tone` with at least `ratio` contrast, or `-1.0`.
pub fn darker(tone: f64, ratio: f64) -> f64 {
    if !(0.0..=100.0).contains(&tone) {
        return -1.0;
    }
    let light_y = y_from_lstar(tone);
    let dark_y = (light_y + 5.0) / ratio - 5.0;
    let real_contrast = ratio_of_ys(light_y, dark_y);
    let delta = (real_contrast - ratio).abs();
    if real_contrast < ratio && delta > CONTRAST_RATIO_EPSILON {
        return -1.0;
    }
    let result = lstar_from_y(dark_y) - LUMINANCE_GAMUT_MAP_TOLERANCE;
    if !(0.0..=100.0).contains(&result) {
        return -1.0;
    }
    result
}

/// Like [`lighter`], but falls back to 100 instead of failing.
pub fn lighter_unsafe(tone: f64, ratio: f64) -> f64 {
    let safe = lighter(tone, ratio);
    if safe < 0.0 {
        100.0
    } else {
        safe
    }
}

/// Like [`darker`], but falls back to 0 instead of failing.
pub fn darker_unsafe(tone: f64, ratio: f64) -> f64 {
    let safe = darker(tone, ratio);
    if safe < 0.0 {
        0.0
    } else {
        safe
    }
}
