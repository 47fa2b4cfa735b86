//! HCT: hue, chroma, tone
//!
//! Hue and chroma come from CAM16, tone is L*. Tone differences map directly
//! to contrast ratios, which is what makes the space useful for building
//! accessible schemes. An [`Hct`] always carries the concrete [`Argb`] it
//! describes, so its three coordinates are the *achieved* values rather than
//! the requested ones.

use std::fmt;

use super::argb::Argb;
use super::cam16::Cam16;
use super::lut::lstar_from_y;
use super::solver::solve_to_argb;
use super::viewing_conditions::ViewingConditions;

/// A color in HCT, anchored to a displayable sRGB value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hct {
    hue: f64,
    chroma: f64,
    tone: f64,
    argb: Argb,
}

impl Hct {
    /// Solves for the displayable color nearest to the requested coordinates.
    ///
    /// Hue is normalised into 0..360, tone clamped to 0..=100, and chroma
    /// reduced to the gamut maximum when it is out of reach.
    ///
    /// ```
    /// use material_color::Hct;
    ///
    /// let hct = Hct::from(120.0, 60.0, 50.0);
    /// assert_eq!(hct.to_argb().0, 0xFF6D7F00);
    /// assert!((hct.tone() - 50.0).abs() < 0.5);
    /// ```
    pub fn from(hue: f64, chroma: f64, tone: f64) -> Self {
        Self::from_argb(solve_to_argb(hue, chroma, tone))
    }

    pub fn from_argb(argb: Argb) -> Self {
        let cam = Cam16::from(argb);
        Self {
            hue: cam.hue,
            chroma: cam.chroma,
            tone: argb.lstar(),
            argb,
        }
    }

    #[inline]
    pub fn hue(&self) -> f64 {
        self.hue
    }

    #[inline]
    pub fn chroma(&self) -> f64 {
        self.chroma
    }

    #[inline]
    pub fn tone(&self) -> f64 {
        self.tone
    }

    #[inline]
    pub fn to_argb(&self) -> Argb {
        self.argb
    }

    /// Same chroma and tone, new hue.
    pub fn with_hue(&self, hue: f64) -> Self {
        Self::from(hue, self.chroma, self.tone)
    }

    pub fn with_chroma(&self, chroma: f64) -> Self {
        Self::from(self.hue, chroma, self.tone)
    }

    pub fn with_tone(&self, tone: f64) -> Self {
        Self::from(self.hue, self.chroma, tone)
    }

    /// How this color looks when seen under `vc` instead of the standard
    /// conditions, expressed as a color under the standard conditions.
    ///
    /// Used to preview a color against a different background.
    pub fn in_viewing_conditions(&self, vc: &ViewingConditions) -> Self {
        let cam = Cam16::from(self.argb);
        let viewed = cam.xyz_in_vc(vc);
        let recast = Cam16::from_xyz_in_vc(viewed, ViewingConditions::standard());
        Self::from(recast.hue, recast.chroma, lstar_from_y(viewed.y))
    }

    /// Hue in the blue band used by the 2025 tone heuristics.
    pub fn is_blue(&self) -> bool {
        is_blue_hue(self.hue)
    }

    pub fn is_yellow(&self) -> bool {
        is_yellow_hue(self.hue)
    }

    pub fn is_cyan(&self) -> bool {
        is_cyan_hue(self.hue)
    }
}

#[inline]
pub(crate) fn is_blue_hue(hue: f64) -> bool {
    (250.0..270.0).contains(&hue)
}

#[inline]
pub(crate) fn is_yellow_hue(hue: f64) -> bool {
    (105.0..125.0).contains(&hue)
}

#[inline]
pub(crate) fn is_cyan_hue(hue: f64) -> bool {
    (170.0..207.0).contains(&hue)
}

impl From<Argb> for Hct {
    fn from(argb: Argb) -> Self {
        Hct::from_argb(argb)
    }
}

impl From<Hct> for Argb {
    fn from(hct: Hct) -> Self {
        hct.argb
    }
}

impl fmt::Display for Hct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HCT({:.0}, {:.0}, {:.0})",
            self.hue, self.chroma, self.tone
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blue_coordinates() {
        let blue = Hct::from_argb(Argb(0xFF0000FF));
        assert!((blue.hue() - 282.788).abs() < 1e-3);
        assert!((blue.chroma() - 87.231).abs() < 1e-3);
        assert!((blue.tone() - 32.303).abs() < 1e-3);
    }

    #[test]
    fn test_from_reports_achieved_values() {
        let hct = Hct::from(120.0, 60.0, 50.0);
        assert_eq!(hct.to_argb(), Argb(0xFF6D7F00));
        assert!((hct.hue() - 120.13).abs() < 0.01);
        assert!((hct.chroma() - 52.84).abs() < 0.01);
        assert!((hct.tone() - 50.01).abs() < 0.01);
    }

    #[test]
    fn test_round_trip_preserves_argb() {
        for argb in [0xFF4285F4u32, 0xFFFF0000, 0xFF00FF00, 0xFF123456] {
            let hct = Hct::from_argb(Argb(argb));
            assert_eq!(Hct::from(hct.hue(), hct.chroma(), hct.tone()).to_argb(), Argb(argb));
        }
    }

    #[test]
    fn test_tone_is_clamped() {
        assert_eq!(Hct::from(30.0, 40.0, 120.0).to_argb(), Argb::WHITE);
        assert_eq!(Hct::from(30.0, 40.0, -5.0).to_argb(), Argb::BLACK);
    }

    #[test]
    fn test_hue_bands() {
        let blue = Hct::from(260.0, 40.0, 50.0);
        assert!(blue.is_blue());
        assert!(!blue.is_yellow());
        assert!(Hct::from(115.0, 40.0, 80.0).is_yellow());
        assert!(Hct::from(190.0, 30.0, 60.0).is_cyan());
    }

    #[test]
    fn test_standard_viewing_conditions_are_identity() {
        let hct = Hct::from_argb(Argb(0xFF4285F4));
        let same = hct.in_viewing_conditions(ViewingConditions::standard());
        assert_eq!(same.to_argb(), hct.to_argb());
    }
}
