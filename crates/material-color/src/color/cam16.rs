//! CAM16 color appearance model
//!
//! Hue, chroma and lightness as a human observer perceives them under a
//! given set of [`ViewingConditions`]. The UCS coordinates (`jstar`,
//! `astar`, `bstar`) form a space where Euclidean distance tracks perceived
//! difference.

use super::argb::Argb;
use super::viewing_conditions::ViewingConditions;
use super::xyz::Xyz;
use crate::math::{matrix_multiply, sanitize_degrees, signum, Matrix3};

/// XYZ to cone responses.
pub const CAT16: Matrix3 = [
    [0.401288, 0.650173, -0.051461],
    [-0.250268, 1.204414, 0.045854],
    [-0.002079, 0.048952, 0.953127],
];

/// Cone responses back to XYZ.
pub const CAT16_INVERSE: Matrix3 = [
    [1.86206786, -1.01125463, 0.14918677],
    [0.38752654, 0.62144744, -0.00897398],
    [-0.01584150, -0.03412294, 1.04996444],
];

/// A color described by CAM16 appearance correlates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cam16 {
    /// Hue angle in degrees, 0.0..360.0.
    pub hue: f64,
    /// Colorfulness relative to a similarly lit white.
    pub chroma: f64,
    /// Lightness J.
    pub j: f64,
    /// Brightness Q.
    pub q: f64,
    /// Colorfulness M.
    pub m: f64,
    /// Saturation s.
    pub s: f64,
    pub jstar: f64,
    pub astar: f64,
    pub bstar: f64,
}

impl Cam16 {
    /// Appearance of `xyz` under `vc`.
    pub fn from_xyz_in_vc(xyz: Xyz, vc: &ViewingConditions) -> Self {
        let [r_c, g_c, b_c] = matrix_multiply(xyz.to_array(), &CAT16);
        let adapt = |component: f64| {
            let af = (vc.fl * component.abs() / 100.0).powf(0.42);
            signum(component) * 400.0 * af / (af + 27.13)
        };
        let r_a = adapt(vc.rgb_d[0] * r_c);
        let g_a = adapt(vc.rgb_d[1] * g_c);
        let b_a = adapt(vc.rgb_d[2] * b_c);

        // Redness-greenness and yellowness-blueness.
        let a = (11.0 * r_a - 12.0 * g_a + b_a) / 11.0;
        let b = (r_a + g_a - 2.0 * b_a) / 9.0;
        let u = (20.0 * r_a + 20.0 * g_a + 21.0 * b_a) / 20.0;
        let p2 = (40.0 * r_a + 20.0 * g_a + b_a) / 20.0;

        let hue = sanitize_degrees(b.atan2(a).to_degrees());
        let hue_radians = hue.to_radians();

        let ac = p2 * vc.nbb;
        let j = 100.0 * (ac / vc.aw).powf(vc.c * vc.z);
        let q = 4.0 / vc.c * (j / 100.0).sqrt() * (vc.aw + 4.0) * vc.fl_root;

        let hue_prime = if hue < 20.14 { hue + 360.0 } else { hue };
        let e_hue = 0.25 * ((hue_prime.to_radians() + 2.0).cos() + 3.8);
        let p1 = 50000.0 / 13.0 * e_hue * vc.nc * vc.ncb;
        let t = p1 * a.hypot(b) / (u + 0.305);
        let alpha = t.powf(0.9) * (1.64 - 0.29f64.powf(vc.n)).powf(0.73);

        let chroma = alpha * (j / 100.0).sqrt();
        let m = chroma * vc.fl_root;
        let s = 50.0 * (alpha * vc.c / (vc.aw + 4.0)).sqrt();

        let jstar = (1.0 + 100.0 * 0.007) * j / (1.0 + 0.007 * j);
        let mstar = 1.0 / 0.0228 * (0.0228 * m).ln_1p();

        Self {
            hue,
            chroma,
            j,
            q,
            m,
            s,
            jstar,
            astar: mstar * hue_radians.cos(),
            bstar: mstar * hue_radians.sin(),
        }
    }

    /// Builds a CAM16 color from lightness, chroma and hue under standard
    /// viewing conditions.
    pub fn from_jch(j: f64, chroma: f64, hue: f64) -> Self {
        Self::from_jch_in_vc(j, chroma, hue, ViewingConditions::standard())
    }

    pub fn from_jch_in_vc(j: f64, chroma: f64, hue: f64, vc: &ViewingConditions) -> Self {
        let q = 4.0 / vc.c * (j / 100.0).sqrt() * (vc.aw + 4.0) * vc.fl_root;
        let m = chroma * vc.fl_root;
        let alpha = chroma / (j / 100.0).sqrt();
        let s = 50.0 * (alpha * vc.c / (vc.aw + 4.0)).sqrt();

        let hue_radians = hue.to_radians();
        let jstar = (1.0 + 100.0 * 0.007) * j / (1.0 + 0.007 * j);
        let mstar = 1.0 / 0.0228 * (0.0228 * m).ln_1p();
        Self {
            hue,
            chroma,
            j,
            q,
            m,
            s,
            jstar,
            astar: mstar * hue_radians.cos(),
            bstar: mstar * hue_radians.sin(),
        }
    }

    /// Builds a CAM16 color from UCS coordinates under standard conditions.
    pub fn from_ucs(jstar: f64, astar: f64, bstar: f64) -> Self {
        Self::from_ucs_in_vc(jstar, astar, bstar, ViewingConditions::standard())
    }

    pub fn from_ucs_in_vc(jstar: f64, astar: f64, bstar: f64, vc: &ViewingConditions) -> Self {
        let mstar = astar.hypot(bstar);
        let m = ((mstar * 0.0228).exp() - 1.0) / 0.0228;
        let chroma = m / vc.fl_root;
        let hue = sanitize_degrees(bstar.atan2(astar).to_degrees());
        let j = jstar / (1.0 - (jstar - 100.0) * 0.007);
        Self::from_jch_in_vc(j, chroma, hue, vc)
    }

    /// Perceived distance between two colors in CAM16-UCS.
    pub fn distance(&self, other: &Cam16) -> f64 {
        let d_j = self.jstar - other.jstar;
        let d_a = self.astar - other.astar;
        let d_b = self.bstar - other.bstar;
        let d_e_prime = (d_j * d_j + d_a * d_a + d_b * d_b).sqrt();
        1.41 * d_e_prime.powf(0.63)
    }

    /// The XYZ value that produces this appearance under `vc`.
    pub fn xyz_in_vc(&self, vc: &ViewingConditions) -> Xyz {
        let alpha = if self.chroma == 0.0 || self.j == 0.0 {
            0.0
        } else {
            self.chroma / (self.j / 100.0).sqrt()
        };
        let t = (alpha / (1.64 - 0.29f64.powf(vc.n)).powf(0.73)).powf(1.0 / 0.9);
        let hue_radians = self.hue.to_radians();

        let e_hue = 0.25 * ((hue_radians + 2.0).cos() + 3.8);
        let ac = vc.aw * (self.j / 100.0).powf(1.0 / vc.c / vc.z);
        let p1 = e_hue * (50000.0 / 13.0) * vc.nc * vc.ncb;
        let p2 = ac / vc.nbb;

        let (h_sin, h_cos) = hue_radians.sin_cos();
        let gamma = 23.0 * (p2 + 0.305) * t / (23.0 * p1 + 11.0 * t * h_cos + 108.0 * t * h_sin);
        let a = gamma * h_cos;
        let b = gamma * h_sin;

        let r_a = (460.0 * p2 + 451.0 * a + 288.0 * b) / 1403.0;
        let g_a = (460.0 * p2 - 891.0 * a - 261.0 * b) / 1403.0;
        let b_a = (460.0 * p2 - 220.0 * a - 6300.0 * b) / 1403.0;

        let unadapt = |component: f64| {
            let base = (27.13 * component.abs() / (400.0 - component.abs())).max(0.0);
            signum(component) * (100.0 / vc.fl) * base.powf(1.0 / 0.42)
        };
        let r_f = unadapt(r_a) / vc.rgb_d[0];
        let g_f = unadapt(g_a) / vc.rgb_d[1];
        let b_f = unadapt(b_a) / vc.rgb_d[2];

        let [x, y, z] = matrix_multiply([r_f, g_f, b_f], &CAT16_INVERSE);
        Xyz::new(x, y, z)
    }

    /// The sRGB color with this appearance under standard conditions.
    pub fn to_argb(&self) -> Argb {
        self.xyz_in_vc(ViewingConditions::standard()).to_argb()
    }
}

impl From<Argb> for Cam16 {
    fn from(argb: Argb) -> Self {
        Cam16::from_xyz_in_vc(Xyz::from(argb), ViewingConditions::standard())
    }
}
