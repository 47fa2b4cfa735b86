//! Dark yellow-greens
//!
//! Dark, saturated yellow-greens read as bile or decay to most people. Such
//! colors are detected and lightened before they land in a scheme.

use crate::color::Hct;

/// True for dark yellow-green hues with noticeable chroma.
///
/// ```
/// use material_color::{is_disliked, Hct};
///
/// assert!(is_disliked(&Hct::from(100.0, 50.0, 50.0)));
/// assert!(!is_disliked(&Hct::from(100.0, 50.0, 70.0)));
/// ```
pub fn is_disliked(hct: &Hct) -> bool {
    let hue_passes = (90.0..=111.0).contains(&hct.hue().round());
    let chroma_passes = hct.chroma().round() > 16.0;
    let tone_passes = hct.tone().round() < 65.0;
    hue_passes && chroma_passes && tone_passes
}

/// Lightens a disliked color to tone 70; other colors pass through.
pub fn fix_if_disliked(hct: Hct) -> Hct {
    if is_disliked(&hct) {
        Hct::from(hct.hue(), hct.chroma(), 70.0)
    } else {
        hct
    }
}
