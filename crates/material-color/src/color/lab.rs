//! CIELAB and its cylindrical form LCh(ab)

use super::argb::Argb;
use super::lut::{lab_f, lab_inv_f};
use super::xyz::{Xyz, WHITE_POINT_D65};
use crate::math::sanitize_degrees;

/// A color in CIELAB (D65). `l` is 0..=100; `a`/`b` are unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Squared Euclidean distance, the metric the k-means stage clusters with.
    #[inline]
    pub fn distance_squared(self, other: Lab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        dl * dl + da * da + db * db
    }

    pub fn to_xyz(self) -> Xyz {
        let fy = (self.l + 16.0) / 116.0;
        let fx = self.a / 500.0 + fy;
        let fz = fy - self.b / 200.0;
        Xyz::new(
            lab_inv_f(fx) * WHITE_POINT_D65[0],
            lab_inv_f(fy) * WHITE_POINT_D65[1],
            lab_inv_f(fz) * WHITE_POINT_D65[2],
        )
    }

    pub fn to_argb(self) -> Argb {
        self.to_xyz().to_argb()
    }
}

impl From<Xyz> for Lab {
    fn from(xyz: Xyz) -> Self {
        let fx = lab_f(xyz.x / WHITE_POINT_D65[0]);
        let fy = lab_f(xyz.y / WHITE_POINT_D65[1]);
        let fz = lab_f(xyz.z / WHITE_POINT_D65[2]);
        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl From<Argb> for Lab {
    fn from(argb: Argb) -> Self {
        Lab::from(Xyz::from(argb))
    }
}

/// Cylindrical CIELAB: lightness, chroma and hue angle in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LchAb {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl From<Lab> for LchAb {
    fn from(lab: Lab) -> Self {
        Self {
            l: lab.l,
            c: lab.a.hypot(lab.b),
            h: sanitize_degrees(lab.b.atan2(lab.a).to_degrees()),
        }
    }
}

impl From<LchAb> for Lab {
    fn from(lch: LchAb) -> Self {
        let h = lch.h.to_radians();
        Self {
            l: lch.l,
            a: lch.c * h.cos(),
            b: lch.c * h.sin(),
        }
    }
}
