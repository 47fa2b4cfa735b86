//! CIE XYZ under D65

use super::argb::Argb;
use super::linear_rgb::LinearRgb;
use crate::math::{matrix_multiply, Matrix3};

/// Linear sRGB (0..=100) to XYZ.
pub const SRGB_TO_XYZ: Matrix3 = [
    [0.41233895, 0.35762064, 0.18051042],
    [0.2126, 0.7152, 0.0722],
    [0.01932141, 0.11916382, 0.95034478],
];

/// XYZ to linear sRGB (0..=100).
pub const XYZ_TO_SRGB: Matrix3 = [
    [3.2413774792388685, -1.5376652402851851, -0.49885366846268053],
    [-0.9691452513005321, 1.8758853451067872, 0.04156585616912061],
    [0.05562093689691305, -0.20395524564742123, 1.0571799111220335],
];

/// D65 reference white, Y normalised to 100.
pub const WHITE_POINT_D65: [f64; 3] = [95.047, 100.0, 108.883];

/// A CIE XYZ tristimulus value (Y on a 0..=100 scale).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Converts to the nearest displayable sRGB color.
    pub fn to_argb(self) -> Argb {
        LinearRgb::from(self).to_argb()
    }
}

impl From<LinearRgb> for Xyz {
    fn from(rgb: LinearRgb) -> Self {
        let [x, y, z] = matrix_multiply(rgb.to_array(), &SRGB_TO_XYZ);
        Self { x, y, z }
    }
}

impl From<Xyz> for LinearRgb {
    fn from(xyz: Xyz) -> Self {
        LinearRgb::from_array(matrix_multiply(xyz.to_array(), &XYZ_TO_SRGB))
    }
}

impl From<Argb> for Xyz {
    fn from(argb: Argb) -> Self {
        Xyz::from(LinearRgb::from(argb))
    }
}
