//! Linear RGB color type
//!
//! Linear RGB represents light intensity directly. The kernel keeps channels
//! on a 0..=100 scale so the XYZ matrices line up with Y in percent.

use super::argb::Argb;
use super::lut::{delinearized, linearized};

/// A color in linear RGB, each channel in 0.0..=100.0 for in-gamut colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl LinearRgb {
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    #[inline]
    pub fn from_array(values: [f64; 3]) -> Self {
        Self::new(values[0], values[1], values[2])
    }

    /// Gamma-encodes back to an opaque [`Argb`], rounding and clamping each channel.
    pub fn to_argb(self) -> Argb {
        Argb::from_rgb(delinearized(self.r), delinearized(self.g), delinearized(self.b))
    }
}

impl From<Argb> for LinearRgb {
    fn from(argb: Argb) -> Self {
        Self {
            r: linearized(argb.red()),
            g: linearized(argb.green()),
            b: linearized(argb.blue()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_is_one_hundred() {
        let white = LinearRgb::from(Argb::WHITE);
        assert!((white.r - 100.0).abs() < 1e-9);
        assert!((white.g - 100.0).abs() < 1e-9);
        assert!((white.b - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip_through_linear() {
        for argb in [0xFF123456u32, 0xFF00FF7F, 0xFFFEFEFE, 0xFF010203] {
            let argb = Argb(argb);
            assert_eq!(LinearRgb::from(argb).to_argb(), argb);
        }
    }

    #[test]
    fn test_to_argb_drops_alpha() {
        let translucent = Argb(0x40FF0000);
        assert_eq!(LinearRgb::from(translucent).to_argb(), Argb(0xFFFF0000));
    }
}
