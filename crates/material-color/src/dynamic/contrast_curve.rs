//! Contrast ratio targets across the contrast-level knob

use crate::math::lerp;

/// Four contrast ratios addressed by a contrast level in -1..=1.
///
/// The level is interpolated piecewise linearly over the breakpoints
/// -1 (`low`), 0 (`normal`), 0.5 (`medium`) and 1 (`high`). Levels outside
/// that range take the nearest endpoint.
///
/// ```
/// use material_color::dynamic::ContrastCurve;
///
/// let curve = ContrastCurve::new(3.0, 4.5, 7.0, 11.0);
/// assert_eq!(curve.get(0.0), 4.5);
/// assert_eq!(curve.get(0.25), 5.75);
/// assert_eq!(curve.get(2.0), 11.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastCurve {
    pub low: f64,
    pub normal: f64,
    pub medium: f64,
    pub high: f64,
}

impl ContrastCurve {
    pub const fn new(low: f64, normal: f64, medium: f64, high: f64) -> Self {
        Self {
            low,
            normal,
            medium,
            high,
        }
    }

    /// The ratio at `contrast_level`.
    pub fn get(&self, contrast_level: f64) -> f64 {
        if contrast_level <= -1.0 {
            self.low
        } else if contrast_level < 0.0 {
            lerp(self.low, self.normal, contrast_level + 1.0)
        } else if contrast_level < 0.5 {
            lerp(self.normal, self.medium, contrast_level / 0.5)
        } else if contrast_level < 1.0 {
            lerp(self.medium, self.high, (contrast_level - 0.5) / 0.5)
        } else {
            self.high
        }
    }

    /// The 2025 curves, keyed by the ratio wanted at standard contrast.
    pub(crate) fn standard(default_ratio: f64) -> Self {
        match default_ratio {
            r if r == 1.5 => Self::new(1.5, 1.5, 3.0, 5.5),
            r if r == 3.0 => Self::new(3.0, 3.0, 4.5, 7.0),
            r if r == 4.5 => Self::new(4.5, 4.5, 7.0, 11.0),
            r if r == 6.0 => Self::new(6.0, 6.0, 7.0, 11.0),
            r if r == 7.0 => Self::new(7.0, 7.0, 11.0, 21.0),
            r if r == 9.0 => Self::new(9.0, 9.0, 11.0, 21.0),
            r if r == 11.0 => Self::new(11.0, 11.0, 21.0, 21.0),
            r if r == 21.0 => Self::new(21.0, 21.0, 21.0, 21.0),
            r => Self::new(r, r, 7.0, 21.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoints() {
        let curve = ContrastCurve::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(curve.get(-1.0), 1.0);
        assert_eq!(curve.get(0.0), 2.0);
        assert_eq!(curve.get(0.5), 3.0);
        assert_eq!(curve.get(1.0), 4.0);
    }

    #[test]
    fn test_interpolates_between_breakpoints() {
        let curve = ContrastCurve::new(1.0, 2.0, 3.0, 4.0);
        assert!((curve.get(-0.5) - 1.5).abs() < 1e-12);
        assert!((curve.get(0.75) - 3.5).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_range_levels_clamp_to_endpoints() {
        let curve = ContrastCurve::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(curve.get(-7.0), 1.0);
        assert_eq!(curve.get(3.0), 4.0);
    }

    #[test]
    fn test_standard_curves() {
        assert_eq!(ContrastCurve::standard(4.5), ContrastCurve::new(4.5, 4.5, 7.0, 11.0));
        assert_eq!(ContrastCurve::standard(2.0), ContrastCurve::new(2.0, 2.0, 7.0, 21.0));
    }
}
