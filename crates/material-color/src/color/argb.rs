//! Packed 32-bit sRGB color
//!
//! [`Argb`] is the currency of the whole crate: quantizer input and output,
//! palette tones and scheme roles are all packed `0xAARRGGBB` values.

use std::fmt;
use std::str::FromStr;

use crate::dynamic::UnknownOption;

use super::error::ParseColorError;
use super::lut::{delinearized, lab_f, linearized, y_from_lstar};

/// An sRGB color packed as `0xAARRGGBB`.
///
/// Equality, ordering and hashing all use the packed integer.
///
/// # Example
///
/// ```
/// use material_color::Argb;
///
/// let red = Argb::from_rgb(255, 0, 0);
/// assert_eq!(red, Argb(0xFFFF0000));
/// assert_eq!(red.red(), 255);
/// assert!(red.is_opaque());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Argb(pub u32);

impl Argb {
    /// Opaque black.
    pub const BLACK: Argb = Argb(0xFF000000);
    /// Opaque white.
    pub const WHITE: Argb = Argb(0xFFFFFFFF);

    /// Packs four 8-bit channels.
    #[inline]
    pub fn from_components(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Argb(
            (alpha as u32) << 24 | (red as u32) << 16 | (green as u32) << 8 | blue as u32,
        )
    }

    /// Packs an opaque color from its red, green and blue channels.
    #[inline]
    pub fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::from_components(255, red, green, blue)
    }

    /// The achromatic color with the given L*.
    pub fn from_lstar(lstar: f64) -> Self {
        let component = delinearized(y_from_lstar(lstar));
        Self::from_rgb(component, component, component)
    }

    #[inline]
    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub fn blue(self) -> u8 {
        self.0 as u8
    }

    /// True when alpha is 255.
    #[inline]
    pub fn is_opaque(self) -> bool {
        self.alpha() == 255
    }

    /// Relative luminance Y (0..=100).
    pub fn luminance(self) -> f64 {
        0.2126 * linearized(self.red())
            + 0.7152 * linearized(self.green())
            + 0.0722 * linearized(self.blue())
    }

    /// Perceptual lightness L* (0..=100), the "tone" of HCT.
    pub fn lstar(self) -> f64 {
        116.0 * lab_f(self.luminance() / 100.0) - 16.0
    }

    /// Formats the color in the requested hex layout.
    ///
    /// ```
    /// use material_color::{Argb, HexStyle};
    ///
    /// let color = Argb(0x80112233);
    /// assert_eq!(color.to_hex(HexStyle::Argb), "#80112233");
    /// assert_eq!(color.to_hex(HexStyle::Rgba), "#11223380");
    /// assert_eq!(color.to_hex(HexStyle::Rgb), "#112233");
    /// ```
    pub fn to_hex(self, style: HexStyle) -> String {
        match style {
            HexStyle::Argb => format!("#{:08X}", self.0),
            HexStyle::Rgba => format!(
                "#{:02X}{:02X}{:02X}{:02X}",
                self.red(),
                self.green(),
                self.blue(),
                self.alpha()
            ),
            HexStyle::Rgb => format!("#{:06X}", self.0 & 0x00FF_FFFF),
        }
    }
}

impl From<u32> for Argb {
    fn from(value: u32) -> Self {
        Argb(value)
    }
}

impl From<Argb> for u32 {
    fn from(value: Argb) -> Self {
        value.0
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl FromStr for Argb {
    type Err = ParseColorError;

    /// Parses `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`.
    ///
    /// Short forms duplicate each nibble (`#F00` is `#FF0000`). Missing alpha
    /// means opaque.
    ///
    /// ```
    /// use material_color::Argb;
    ///
    /// let red: Argb = "#f00".parse().unwrap();
    /// assert_eq!(red, Argb(0xFFFF0000));
    ///
    /// let translucent: Argb = "#FF000080".parse().unwrap();
    /// assert_eq!(translucent, Argb(0x80FF0000));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.is_empty() {
            return Err(ParseColorError::Empty);
        }

        let digits = s
            .chars()
            .map(|c| c.to_digit(16).map(|d| d as u8).ok_or(ParseColorError::InvalidDigit(c)))
            .collect::<Result<Vec<u8>, _>>()?;

        let (r, g, b, a) = match digits.as_slice() {
            [r, g, b] => (r * 17, g * 17, b * 17, 255),
            [r, g, b, a] => (r * 17, g * 17, b * 17, a * 17),
            [r1, r2, g1, g2, b1, b2] => (r1 << 4 | r2, g1 << 4 | g2, b1 << 4 | b2, 255),
            [r1, r2, g1, g2, b1, b2, a1, a2] => {
                (r1 << 4 | r2, g1 << 4 | g2, b1 << 4 | b2, a1 << 4 | a2)
            }
            other => return Err(ParseColorError::InvalidLength(other.len())),
        };
        Ok(Argb::from_components(a, r, g, b))
    }
}

/// Output layouts for hex strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HexStyle {
    /// `#AARRGGBB`
    #[default]
    Argb,
    /// `#RRGGBBAA`
    Rgba,
    /// `#RRGGBB`, alpha dropped
    Rgb,
}

impl FromStr for HexStyle {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "argb" => Ok(HexStyle::Argb),
            "rgba" => Ok(HexStyle::Rgba),
            "rgb" => Ok(HexStyle::Rgb),
            _ => Err(UnknownOption {
                kind: "hex style",
                value: s.to_string(),
                expected: "argb, rgba, rgb",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels() {
        let color = Argb(0x80112233);
        assert_eq!(color.alpha(), 0x80);
        assert_eq!(color.red(), 0x11);
        assert_eq!(color.green(), 0x22);
        assert_eq!(color.blue(), 0x33);
        assert!(!color.is_opaque());
        assert_eq!(Argb::from_components(0x80, 0x11, 0x22, 0x33), color);
    }

    #[test]
    fn test_parse_all_hex_layouts() {
        assert_eq!("#F00".parse::<Argb>().unwrap(), Argb(0xFFFF0000));
        assert_eq!("#F008".parse::<Argb>().unwrap(), Argb(0x88FF0000));
        assert_eq!("#00ff00".parse::<Argb>().unwrap(), Argb(0xFF00FF00));
        assert_eq!("0000FF".parse::<Argb>().unwrap(), Argb(0xFF0000FF));
        assert_eq!("#11223344".parse::<Argb>().unwrap(), Argb(0x44112233));
        assert_eq!("  #abc  ".parse::<Argb>().unwrap(), Argb(0xFFAABBCC));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!("".parse::<Argb>(), Err(ParseColorError::Empty));
        assert_eq!("#".parse::<Argb>(), Err(ParseColorError::Empty));
        assert_eq!("#12345".parse::<Argb>(), Err(ParseColorError::InvalidLength(5)));
        assert_eq!("#GG0000".parse::<Argb>(), Err(ParseColorError::InvalidDigit('G')));
        assert_eq!("+12".parse::<Argb>(), Err(ParseColorError::InvalidDigit('+')));
    }

    #[test]
    fn test_hex_output_styles() {
        let color = Argb(0xFF4285F4);
        assert_eq!(color.to_hex(HexStyle::Argb), "#FF4285F4");
        assert_eq!(color.to_hex(HexStyle::Rgba), "#4285F4FF");
        assert_eq!(color.to_hex(HexStyle::Rgb), "#4285F4");
        assert_eq!(color.to_string(), "#FF4285F4");
    }

    #[test]
    fn test_hex_style_from_str() {
        assert_eq!("RGBA".parse::<HexStyle>(), Ok(HexStyle::Rgba));
        let err = "hsl".parse::<HexStyle>().unwrap_err();
        assert_eq!(err.kind, "hex style");
        assert_eq!(
            err.to_string(),
            "unknown hex style 'hsl' (expected one of: argb, rgba, rgb)"
        );
    }

    #[test]
    fn test_lstar_of_extremes() {
        assert!(Argb::BLACK.lstar().abs() < 1e-9);
        assert!((Argb::WHITE.lstar() - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_from_lstar_is_gray() {
        let gray = Argb::from_lstar(50.0);
        assert_eq!(gray.red(), gray.green());
        assert_eq!(gray.green(), gray.blue());
        assert!((gray.lstar() - 50.0).abs() < 0.5);
    }
}
