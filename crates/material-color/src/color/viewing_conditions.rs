//! CAM16 viewing conditions
//!
//! Everything the appearance model needs about the environment a color is
//! seen in, precomputed once so per-color conversions stay cheap.

use std::f64::consts::PI;
use std::sync::OnceLock;

use super::cam16::CAT16;
use super::lut::y_from_lstar;
use super::xyz::WHITE_POINT_D65;
use crate::math::{lerp, matrix_multiply};

/// Precomputed CAM16 environment parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewingConditions {
    pub n: f64,
    pub aw: f64,
    pub nbb: f64,
    pub ncb: f64,
    pub c: f64,
    pub nc: f64,
    pub rgb_d: [f64; 3],
    pub fl: f64,
    pub fl_root: f64,
    pub z: f64,
}

static STANDARD: OnceLock<ViewingConditions> = OnceLock::new();

impl ViewingConditions {
    /// Builds viewing conditions from physical parameters.
    ///
    /// - `white_point`: XYZ of the adopted white, Y = 100
    /// - `adapting_luminance`: cd/m² of the adapting field
    /// - `background_lstar`: L* of the background, floored at 0.1
    /// - `surround`: 0.0 (dark) to 2.0 (average)
    /// - `discounting_illuminant`: whether the eye fully adapts to the illuminant
    pub fn make(
        white_point: [f64; 3],
        adapting_luminance: f64,
        background_lstar: f64,
        surround: f64,
        discounting_illuminant: bool,
    ) -> Self {
        let background_lstar = background_lstar.max(0.1);
        let [r_w, g_w, b_w] = matrix_multiply(white_point, &CAT16);

        let f = 0.8 + surround / 10.0;
        let c = if f >= 0.9 {
            lerp(0.59, 0.69, (f - 0.9) * 10.0)
        } else {
            lerp(0.525, 0.59, (f - 0.8) * 10.0)
        };
        let degree: f64 = if discounting_illuminant {
            1.0
        } else {
            f * (1.0 - (1.0 / 3.6) * ((-adapting_luminance - 42.0) / 92.0).exp())
        };
        let d = degree.clamp(0.0, 1.0);
        let nc = f;
        let rgb_d = [
            d * (100.0 / r_w) + 1.0 - d,
            d * (100.0 / g_w) + 1.0 - d,
            d * (100.0 / b_w) + 1.0 - d,
        ];

        let k = 1.0 / (5.0 * adapting_luminance + 1.0);
        let k4 = k * k * k * k;
        let k4f = 1.0 - k4;
        let fl = k4 * adapting_luminance + 0.1 * k4f * k4f * (5.0 * adapting_luminance).cbrt();
        let n = y_from_lstar(background_lstar) / white_point[1];
        let z = 1.48 + n.sqrt();
        let nbb = 0.725 / n.powf(0.2);
        let ncb = nbb;

        let adapted = [r_w, g_w, b_w]
            .iter()
            .zip(rgb_d)
            .map(|(white, d)| {
                let af = (fl * d * white / 100.0).powf(0.42);
                400.0 * af / (af + 27.13)
            })
            .collect::<Vec<_>>();
        let aw = (2.0 * adapted[0] + adapted[1] + 0.05 * adapted[2]) * nbb;

        Self {
            n,
            aw,
            nbb,
            ncb,
            c,
            nc,
            rgb_d,
            fl,
            fl_root: fl.powf(0.25),
            z,
        }
    }

    /// sRGB-like conditions: D65 white, a 200 lux environment, mid-gray
    /// background and average surround.
    pub fn standard() -> &'static ViewingConditions {
        STANDARD.get_or_init(|| Self::with_background_lstar(50.0))
    }

    /// Standard conditions against a different background lightness.
    pub fn with_background_lstar(lstar: f64) -> Self {
        Self::make(
            WHITE_POINT_D65,
            200.0 / PI * y_from_lstar(50.0) / 100.0,
            lstar,
            2.0,
            false,
        )
    }
}

impl Default for ViewingConditions {
    fn default() -> Self {
        *Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_conditions_are_cached() {
        let a = ViewingConditions::standard();
        let b = ViewingConditions::standard();
        assert!(std::ptr::eq(a, b));
        assert_eq!(ViewingConditions::default(), *a);
    }

    #[test]
    fn test_standard_parameters() {
        let vc = ViewingConditions::standard();
        // Average surround.
        assert!((vc.c - 0.69).abs() < 1e-12);
        assert!((vc.nc - 1.0).abs() < 1e-12);
        // Mid-gray background: Y is about 18.4.
        assert!((vc.n - 0.18418651851244416).abs() < 1e-12);
        assert!(vc.fl > 0.0 && vc.fl_root > 0.0);
    }

    #[test]
    fn test_background_lstar_is_floored() {
        let black = ViewingConditions::with_background_lstar(0.0);
        let floored = ViewingConditions::with_background_lstar(0.1);
        assert_eq!(black, floored);
    }
}
