//! Blending colors in HCT and CAM16-UCS

use crate::color::{Argb, Cam16, Hct};
use crate::math::{difference_degrees, rotation_direction, sanitize_degrees};

/// Largest hue shift [`harmonize`] applies.
const MAX_HARMONIZE_ROTATION: f64 = 15.0;

/// Shifts `design_color`'s hue toward `source_color`'s, by half the distance
/// but at most 15 degrees, keeping its chroma and tone.
///
/// ```
/// use material_color::{harmonize, Argb};
///
/// assert_eq!(harmonize(Argb(0xFFFF0000), Argb(0xFF0000FF)), Argb(0xFFFB0057));
/// ```
pub fn harmonize(design_color: Argb, source_color: Argb) -> Argb {
    let from = Hct::from_argb(design_color);
    let to = Hct::from_argb(source_color);
    let difference = difference_degrees(from.hue(), to.hue());
    let rotation = (difference * 0.5).min(MAX_HARMONIZE_ROTATION);
    let output_hue =
        sanitize_degrees(from.hue() + rotation * rotation_direction(from.hue(), to.hue()));
    Hct::from(output_hue, from.chroma(), from.tone()).to_argb()
}

/// Interpolates every CAM16-UCS coordinate; `amount` 0.0 is `from`, 1.0 is `to`.
pub fn cam16_ucs(from: Argb, to: Argb, amount: f64) -> Argb {
    let from = Cam16::from(from);
    let to = Cam16::from(to);
    let jstar = from.jstar + (to.jstar - from.jstar) * amount;
    let astar = from.astar + (to.astar - from.astar) * amount;
    let bstar = from.bstar + (to.bstar - from.bstar) * amount;
    Cam16::from_ucs(jstar, astar, bstar).to_argb()
}

/// Blends only the hue, taken from a CAM16-UCS interpolation; chroma and
/// tone stay those of `from`.
pub fn hct_hue(from: Argb, to: Argb, amount: f64) -> Argb {
    let ucs = Cam16::from(cam16_ucs(from, to, amount));
    let from_cam = Cam16::from(from);
    Hct::from(ucs.hue, from_cam.chroma, from.lstar()).to_argb()
}
