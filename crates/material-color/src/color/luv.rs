//! CIELUV and LCh(uv)

use super::argb::Argb;
use super::lut::{lab_f, lab_inv_f};
use super::xyz::{Xyz, WHITE_POINT_D65};
use crate::math::sanitize_degrees;

/// A color in CIELUV (D65).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Luv {
    pub l: f64,
    pub u: f64,
    pub v: f64,
}

/// Chromaticity coordinates u', v' of an XYZ value. Black has a zero
/// denominator and maps to (0, 0).
fn uv_prime(x: f64, y: f64, z: f64) -> (f64, f64) {
    let denominator = x + 15.0 * y + 3.0 * z;
    if denominator == 0.0 {
        (0.0, 0.0)
    } else {
        (4.0 * x / denominator, 9.0 * y / denominator)
    }
}

impl Luv {
    #[inline]
    pub fn new(l: f64, u: f64, v: f64) -> Self {
        Self { l, u, v }
    }

    pub fn to_xyz(self) -> Xyz {
        if self.l <= 0.0 {
            return Xyz::new(0.0, 0.0, 0.0);
        }
        let [xw, yw, zw] = WHITE_POINT_D65;
        let (ur, vr) = uv_prime(xw, yw, zw);
        let u_prime = self.u / (13.0 * self.l) + ur;
        let v_prime = self.v / (13.0 * self.l) + vr;
        let y = yw * lab_inv_f((self.l + 16.0) / 116.0);
        if v_prime == 0.0 {
            return Xyz::new(0.0, y, 0.0);
        }
        let x = y * 9.0 * u_prime / (4.0 * v_prime);
        let z = y * (12.0 - 3.0 * u_prime - 20.0 * v_prime) / (4.0 * v_prime);
        Xyz::new(x, y, z)
    }

    pub fn to_argb(self) -> Argb {
        self.to_xyz().to_argb()
    }
}

impl From<Xyz> for Luv {
    fn from(xyz: Xyz) -> Self {
        let [xw, yw, zw] = WHITE_POINT_D65;
        let (ur, vr) = uv_prime(xw, yw, zw);
        let (u_prime, v_prime) = uv_prime(xyz.x, xyz.y, xyz.z);
        let l = 116.0 * lab_f(xyz.y / yw) - 16.0;
        if xyz.x + 15.0 * xyz.y + 3.0 * xyz.z == 0.0 {
            return Self { l, u: 0.0, v: 0.0 };
        }
        Self {
            l,
            u: 13.0 * l * (u_prime - ur),
            v: 13.0 * l * (v_prime - vr),
        }
    }
}

impl From<Argb> for Luv {
    fn from(argb: Argb) -> Self {
        Luv::from(Xyz::from(argb))
    }
}

/// Cylindrical CIELUV.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LchUv {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl From<Luv> for LchUv {
    fn from(luv: Luv) -> Self {
        Self {
            l: luv.l,
            c: luv.u.hypot(luv.v),
            h: sanitize_degrees(luv.v.atan2(luv.u).to_degrees()),
        }
    }
}

impl From<LchUv> for Luv {
    fn from(lch: LchUv) -> Self {
        let h = lch.h.to_radians();
        Self {
            l: lch.l,
            u: lch.c * h.cos(),
            v: lch.c * h.sin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_has_no_division_by_zero() {
        let luv = Luv::from(Argb::BLACK);
        assert_eq!(luv.u, 0.0);
        assert_eq!(luv.v, 0.0);
        assert!(luv.l.abs() < 1e-9);
        assert_eq!(luv.to_argb(), Argb::BLACK);
    }

    #[test]
    fn test_white_is_neutral() {
        let luv = Luv::from(Argb::WHITE);
        assert!((luv.l - 100.0).abs() < 1e-6);
        assert!(luv.u.abs() < 0.01);
        assert!(luv.v.abs() < 0.01);
    }

    #[test]
    fn test_luv_round_trip() {
        for argb in [0xFFFF0000u32, 0xFF00FF00, 0xFF0000FF, 0xFF4285F4, 0xFF7F7F7F] {
            assert_eq!(Luv::from(Argb(argb)).to_argb(), Argb(argb));
        }
    }

    #[test]
    fn test_lch_uv_hue_is_normalised() {
        let lch = LchUv::from(Luv::from(Argb(0xFF0000FF)));
        assert!(lch.h >= 0.0 && lch.h < 360.0);
        assert!(lch.c > 100.0);
    }
}
