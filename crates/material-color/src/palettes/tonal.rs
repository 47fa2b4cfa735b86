//! Tonal palettes: one hue and chroma, every tone

use std::cell::RefCell;
use std::collections::HashMap;

use crate::color::{is_yellow_hue, Argb, Hct};

/// Chroma large enough to be out of gamut at every hue and tone, used to
/// probe the maximum chroma available at a tone.
const MAX_CHROMA_VALUE: f64 = 200.0;

/// All tones of a single hue and chroma.
///
/// Tones are solved lazily and cached, so asking for the same tone twice is
/// cheap. The cache makes the palette `!Sync`; clone it to hand it to another
/// thread.
///
/// # Example
///
/// ```
/// use material_color::{Argb, TonalPalette};
///
/// let palette = TonalPalette::from_argb(Argb(0xFF0000FF));
/// assert_eq!(palette.tone(100.0), Argb::WHITE);
/// assert_eq!(palette.tone(90.0), Argb(0xFFE0E0FF));
/// ```
#[derive(Debug, Clone)]
pub struct TonalPalette {
    hue: f64,
    chroma: f64,
    key_color: Hct,
    cache: RefCell<HashMap<u64, Argb>>,
}

impl TonalPalette {
    /// Palette sharing the hue and chroma of `argb`.
    pub fn from_argb(argb: Argb) -> Self {
        Self::from_hct(Hct::from_argb(argb))
    }

    /// Palette whose key color is `hct` itself.
    pub fn from_hct(hct: Hct) -> Self {
        Self::with_key_color(hct.hue(), hct.chroma(), hct)
    }

    /// Palette for an arbitrary hue and chroma; the key color is searched for.
    pub fn from_hue_and_chroma(hue: f64, chroma: f64) -> Self {
        let key_color = KeyColor::new(hue, chroma).create();
        Self::with_key_color(hue, chroma, key_color)
    }

    fn with_key_color(hue: f64, chroma: f64, key_color: Hct) -> Self {
        Self {
            hue,
            chroma,
            key_color,
            cache: RefCell::new(HashMap::new()),
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

    /// The color at the tone closest to 50 where this palette's chroma is
    /// fully reachable.
    #[inline]
    pub fn key_color(&self) -> Hct {
        self.key_color
    }

    /// The sRGB color at `tone`.
    ///
    /// Yellow palettes at tone 99 would otherwise turn visibly green; that
    /// tone is the average of tones 98 and 100 instead.
    pub fn tone(&self, tone: f64) -> Argb {
        if let Some(&cached) = self.cache.borrow().get(&tone.to_bits()) {
            return cached;
        }
        let color = if tone == 99.0 && is_yellow_hue(self.hue) {
            average_argb(self.tone(98.0), self.tone(100.0))
        } else {
            Hct::from(self.hue, self.chroma, tone).to_argb()
        };
        self.cache.borrow_mut().insert(tone.to_bits(), color);
        color
    }

    pub fn get_hct(&self, tone: f64) -> Hct {
        Hct::from_argb(self.tone(tone))
    }
}

impl PartialEq for TonalPalette {
    fn eq(&self, other: &Self) -> bool {
        self.hue == other.hue && self.chroma == other.chroma
    }
}

fn average_argb(a: Argb, b: Argb) -> Argb {
    let mid = |x: u8, y: u8| ((x as f64 + y as f64) / 2.0).round() as u8;
    Argb::from_rgb(
        mid(a.red(), b.red()),
        mid(a.green(), b.green()),
        mid(a.blue(), b.blue()),
    )
}

/// Binary search for a palette's key color.
struct KeyColor {
    hue: f64,
    requested_chroma: f64,
    chroma_cache: HashMap<i32, f64>,
}

impl KeyColor {
    fn new(hue: f64, requested_chroma: f64) -> Self {
        Self {
            hue,
            requested_chroma,
            chroma_cache: HashMap::new(),
        }
    }

    /// Finds the tone closest to 50 whose maximum chroma reaches the request.
    ///
    /// Maximum chroma is not monotonic in tone, but it rises to a single peak
    /// and falls again, so a binary search that walks uphill when the current
    /// tone falls short still converges.
    fn create(mut self) -> Hct {
        const PIVOT_TONE: i32 = 50;
        const TONE_STEP_SIZE: i32 = 1;
        const EPSILON: f64 = 0.01;

        let mut lower_tone = 0;
        let mut upper_tone = 100;
        while lower_tone < upper_tone {
            let mid_tone = (lower_tone + upper_tone) / 2;
            let is_ascending = self.max_chroma(mid_tone) < self.max_chroma(mid_tone + TONE_STEP_SIZE);
            let sufficient_chroma = self.max_chroma(mid_tone) >= self.requested_chroma - EPSILON;

            if sufficient_chroma {
                // Either range could hold the answer; keep the half nearer the pivot.
                if (lower_tone - PIVOT_TONE).abs() < (upper_tone - PIVOT_TONE).abs() {
                    upper_tone = mid_tone;
                } else {
                    if lower_tone == mid_tone {
                        return Hct::from(self.hue, self.requested_chroma, lower_tone as f64);
                    }
                    lower_tone = mid_tone;
                }
            } else if is_ascending {
                lower_tone = mid_tone + TONE_STEP_SIZE;
            } else {
                upper_tone = mid_tone;
            }
        }
        Hct::from(self.hue, self.requested_chroma, lower_tone as f64)
    }

    fn max_chroma(&mut self, tone: i32) -> f64 {
        let hue = self.hue;
        *self
            .chroma_cache
            .entry(tone)
            .or_insert_with(|| Hct::from(hue, MAX_CHROMA_VALUE, tone as f64).chroma())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TONES: [f64; 12] = [100.0, 95.0, 90.0, 80.0, 70.0, 60.0, 50.0, 40.0, 30.0, 20.0, 10.0, 0.0];

    #[test]
    fn test_blue_palette_tones() {
        let palette = TonalPalette::from_argb(Argb(0xFF0000FF));
        let expected = [
            0xFFFFFFFF, 0xFFF1EFFF, 0xFFE0E0FF, 0xFFBEC2FF, 0xFF9DA3FF, 0xFF7C84FF, 0xFF5A64FF,
            0xFF343DFF, 0xFF0000EF, 0xFF0001AC, 0xFF00006E, 0xFF000000,
        ];
        for (tone, argb) in TONES.iter().zip(expected) {
            assert_eq!(palette.tone(*tone), Argb(argb), "tone {tone}");
        }
    }

    #[test]
    fn test_hue_and_chroma_palette_tones() {
        let palette = TonalPalette::from_hue_and_chroma(270.0, 36.0);
        let expected = [
            0xFFFFFFFF, 0xFFEEF0FF, 0xFFDAE2FF, 0xFFB1C5FF, 0xFF95AAE4, 0xFF7B8FC8, 0xFF6176AC,
            0xFF485D92, 0xFF304578, 0xFF172E60, 0xFF001847, 0xFF000000,
        ];
        for (tone, argb) in TONES.iter().zip(expected) {
            assert_eq!(palette.tone(*tone), Argb(argb), "tone {tone}");
        }
    }

    #[test]
    fn test_key_color_with_unreachable_chroma() {
        // Chroma 200 is never reachable; the key color is the most chromatic tone.
        let key = TonalPalette::from_hue_and_chroma(149.0, 200.0).key_color();
        assert_eq!(key.to_argb(), Argb(0xFF00FE69));
        assert!((key.chroma() - 89.63).abs() < 0.01);
        assert!((key.tone() - 87.92).abs() < 0.01);
    }

    #[test]
    fn test_key_color_with_low_chroma_sits_at_pivot() {
        let key = TonalPalette::from_hue_and_chroma(50.0, 3.0).key_color();
        assert_eq!(key.to_argb(), Argb(0xFF7D7672));
        assert!((key.tone() - 50.0).abs() < 0.5);
    }

    #[test]
    fn test_key_color_matches_reference_values() {
        assert_eq!(
            TonalPalette::from_hue_and_chroma(149.0, 16.0).key_color().to_argb(),
            Argb(0xFF6A7C68)
        );
        assert_eq!(
            TonalPalette::from_hue_and_chroma(270.0, 36.0).key_color().to_argb(),
            Argb(0xFF6176AC)
        );
    }

    #[test]
    fn test_equality_ignores_cache() {
        let a = TonalPalette::from_hue_and_chroma(270.0, 36.0);
        let b = TonalPalette::from_hue_and_chroma(270.0, 36.0);
        let _ = a.tone(40.0);
        assert_eq!(a, b);
        assert_ne!(a, TonalPalette::from_hue_and_chroma(271.0, 36.0));
    }

    #[test]
    fn test_yellow_tone_99_is_averaged() {
        let palette = TonalPalette::from_hue_and_chroma(110.0, 40.0);
        let expected = average_argb(palette.tone(98.0), palette.tone(100.0));
        assert_eq!(palette.tone(99.0), expected);
    }

    #[test]
    fn test_get_hct_matches_tone() {
        let palette = TonalPalette::from_argb(Argb(0xFF4285F4));
        assert_eq!(palette.get_hct(40.0).to_argb(), palette.tone(40.0));
    }
}
