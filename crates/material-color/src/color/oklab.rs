//! Oklab perceptual color space and its polar form Oklch
//!
//! # References
//!
//! Björn Ottosson, "A perceptual color space for image processing"
//! <https://bottosson.github.io/posts/oklab/>

use super::argb::Argb;
use super::linear_rgb::LinearRgb;
use crate::math::sanitize_degrees;

/// A color in Oklab.
///
/// - `l`: lightness, 0.0 (black) to 1.0 (white) for in-gamut colors
/// - `a`: green-red axis
/// - `b`: blue-yellow axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Oklab {
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Converts back to linear RGB on the kernel's 0..=100 scale. Not clamped.
    pub fn to_linear_rgb(self) -> LinearRgb {
        let l_ = self.l + 0.3963377774 * self.a + 0.2158037573 * self.b;
        let m_ = self.l - 0.1055613458 * self.a - 0.0638541728 * self.b;
        let s_ = self.l - 0.0894841775 * self.a - 1.2914855480 * self.b;

        let l = l_ * l_ * l_;
        let m = m_ * m_ * m_;
        let s = s_ * s_ * s_;

        LinearRgb::new(
            100.0 * (4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s),
            100.0 * (-1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s),
            100.0 * (-0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s),
        )
    }

    pub fn to_argb(self) -> Argb {
        self.to_linear_rgb().to_argb()
    }
}

impl From<LinearRgb> for Oklab {
    fn from(rgb: LinearRgb) -> Self {
        let (r, g, b) = (rgb.r / 100.0, rgb.g / 100.0, rgb.b / 100.0);
        let l = 0.4122214708 * r + 0.5363325363 * g + 0.0514459929 * b;
        let m = 0.2119034982 * r + 0.6806995451 * g + 0.1073969566 * b;
        let s = 0.0883024619 * r + 0.2817188376 * g + 0.6299787005 * b;

        let l_ = l.cbrt();
        let m_ = m.cbrt();
        let s_ = s.cbrt();

        Oklab {
            l: 0.2104542553 * l_ + 0.7936177850 * m_ - 0.0040720468 * s_,
            a: 1.9779984951 * l_ - 2.4285922050 * m_ + 0.4505937099 * s_,
            b: 0.0259040371 * l_ + 0.7827717662 * m_ - 0.8086757660 * s_,
        }
    }
}

impl From<Argb> for Oklab {
    fn from(argb: Argb) -> Self {
        Oklab::from(LinearRgb::from(argb))
    }
}

/// Oklab in polar coordinates: lightness, chroma, hue in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl From<Oklab> for Oklch {
    fn from(lab: Oklab) -> Self {
        Self {
            l: lab.l,
            c: lab.a.hypot(lab.b),
            h: sanitize_degrees(lab.b.atan2(lab.a).to_degrees()),
        }
    }
}

impl From<Oklch> for Oklab {
    fn from(lch: Oklch) -> Self {
        let h = lch.h.to_radians();
        Self {
            l: lch.l,
            a: lch.c * h.cos(),
            b: lch.c * h.sin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PALETTE_TOLERANCE: f64 = 1e-4;

    #[test]
    fn test_oklab_matches_palette_crate() {
        use palette::{IntoColor, LinSrgb, Oklab as PaletteOklab};

        let test_colors = [
            (1.0, 0.0, 0.0),
            (0.0, 1.0, 0.0),
            (0.0, 0.0, 1.0),
            (0.5, 0.5, 0.5),
            (1.0, 1.0, 1.0),
        ];

        for (r, g, b) in test_colors {
            let ours = Oklab::from(LinearRgb::new(r * 100.0, g * 100.0, b * 100.0));
            let theirs: PaletteOklab<f64> = LinSrgb::new(r, g, b).into_color();

            assert!(
                (ours.l - theirs.l).abs() < PALETTE_TOLERANCE,
                "L mismatch for ({r}, {g}, {b}): ours={}, palette={}",
                ours.l,
                theirs.l
            );
            assert!(
                (ours.a - theirs.a).abs() < PALETTE_TOLERANCE,
                "a mismatch for ({r}, {g}, {b}): ours={}, palette={}",
                ours.a,
                theirs.a
            );
            assert!(
                (ours.b - theirs.b).abs() < PALETTE_TOLERANCE,
                "b mismatch for ({r}, {g}, {b}): ours={}, palette={}",
                ours.b,
                theirs.b
            );
        }
    }

    #[test]
    fn test_oklab_round_trip() {
        for argb in [0xFFFF0000u32, 0xFF00FF00, 0xFF0000FF, 0xFF4285F4, 0xFF000000, 0xFFFFFFFF] {
            assert_eq!(Oklab::from(Argb(argb)).to_argb(), Argb(argb));
        }
    }

    #[test]
    fn test_oklch_gray_has_no_chroma() {
        let lch = Oklch::from(Oklab::from(Argb(0xFF808080)));
        assert!(lch.c < 1e-4);
        let back = Oklab::from(Oklch { l: 0.6, c: 0.1, h: 120.0 });
        assert!((Oklch::from(back).h - 120.0).abs() < 1e-9);
    }
}
