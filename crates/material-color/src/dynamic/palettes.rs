//! Palette selection: seed + variant + platform -> the six tonal palettes

use crate::cancel::{CancellationToken, Cancelled};
use crate::color::{is_blue_hue, is_yellow_hue, Hct};
use crate::dislike::fix_if_disliked;
use crate::math::sanitize_degrees;
use crate::palettes::TonalPalette;
use crate::temperature::TemperatureCache;

use super::variant::{Platform, SpecVersion, Variant};

/// What palette selection looks at.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PaletteInput {
    pub source: Hct,
    pub variant: Variant,
    pub is_dark: bool,
    pub platform: Platform,
}

impl PaletteInput {
    fn hue(&self) -> f64 {
        self.source.hue()
    }

    fn is_phone(&self) -> bool {
        self.platform == Platform::Phone
    }
}

/// The six palettes of a scheme.
#[derive(Debug, Clone)]
pub(crate) struct SchemePalettes {
    pub primary: TonalPalette,
    pub secondary: TonalPalette,
    pub tertiary: TonalPalette,
    pub neutral: TonalPalette,
    pub neutral_variant: TonalPalette,
    pub error: TonalPalette,
}

impl SchemePalettes {
    pub fn build(version: SpecVersion, input: &PaletteInput) -> Self {
        let temperature =
            scans_temperature(input.variant).then(|| TemperatureCache::new(input.source));
        Self::assemble(version, input, temperature.as_ref())
    }

    /// Like [`build`](Self::build), but the temperature scan stops once
    /// `cancel` is set.
    pub fn build_cancellable(
        version: SpecVersion,
        input: &PaletteInput,
        cancel: &CancellationToken,
    ) -> Result<Self, Cancelled> {
        let temperature = if scans_temperature(input.variant) {
            Some(TemperatureCache::new_cancellable(input.source, Some(cancel))?)
        } else {
            None
        };
        Ok(Self::assemble(version, input, temperature.as_ref()))
    }

    fn assemble(
        version: SpecVersion,
        input: &PaletteInput,
        temperature: Option<&TemperatureCache>,
    ) -> Self {
        let delegate: &dyn PaletteDelegate = match version {
            SpecVersion::V2021 => &Palettes2021,
            SpecVersion::V2025 => &Palettes2025,
        };
        Self {
            primary: delegate.primary(input),
            secondary: delegate.secondary(input),
            tertiary: delegate.tertiary(input, temperature),
            neutral: delegate.neutral(input),
            neutral_variant: delegate.neutral_variant(input),
            error: delegate.error(input),
        }
    }
}

/// Fidelity and content derive their tertiary hue from a temperature scan.
fn scans_temperature(variant: Variant) -> bool {
    matches!(variant, Variant::Fidelity | Variant::Content)
}

/// Version-specific palette rules.
pub(crate) trait PaletteDelegate {
    fn primary(&self, input: &PaletteInput) -> TonalPalette;
    fn secondary(&self, input: &PaletteInput) -> TonalPalette;
    /// `temperature` is the scan of the source when the variant needs one;
    /// without it the scan runs here.
    fn tertiary(&self, input: &PaletteInput, temperature: Option<&TemperatureCache>)
        -> TonalPalette;
    fn neutral(&self, input: &PaletteInput) -> TonalPalette;
    fn neutral_variant(&self, input: &PaletteInput) -> TonalPalette;
    fn error(&self, input: &PaletteInput) -> TonalPalette;
}

/// Adds the rotation of the breakpoint interval holding `source_hue`.
pub(crate) fn rotated_hue(source_hue: f64, breakpoints: &[f64], rotations: &[f64]) -> f64 {
    let rotation = interval_index(source_hue, breakpoints, rotations.len())
        .map(|i| rotations[i])
        .unwrap_or(0.0);
    sanitize_degrees(source_hue + rotation)
}

/// The hue assigned to the breakpoint interval holding `source_hue`.
pub(crate) fn piecewise_hue(source_hue: f64, breakpoints: &[f64], hues: &[f64]) -> f64 {
    match interval_index(source_hue, breakpoints, hues.len()) {
        Some(i) => sanitize_degrees(hues[i]),
        None => source_hue,
    }
}

fn interval_index(hue: f64, breakpoints: &[f64], values: usize) -> Option<usize> {
    let size = breakpoints.len().saturating_sub(1).min(values);
    (0..size).find(|&i| breakpoints[i] <= hue && hue < breakpoints[i + 1])
}

fn palette(hue: f64, chroma: f64) -> TonalPalette {
    TonalPalette::from_hue_and_chroma(hue, chroma)
}

const VIBRANT_HUES_2021: [f64; 9] = [0.0, 41.0, 61.0, 101.0, 131.0, 181.0, 251.0, 301.0, 360.0];
const VIBRANT_SECONDARY_ROTATIONS_2021: [f64; 9] =
    [18.0, 15.0, 10.0, 12.0, 15.0, 18.0, 15.0, 12.0, 12.0];
const VIBRANT_TERTIARY_ROTATIONS_2021: [f64; 9] =
    [35.0, 30.0, 20.0, 25.0, 30.0, 35.0, 30.0, 25.0, 25.0];

const EXPRESSIVE_HUES_2021: [f64; 9] = [0.0, 21.0, 51.0, 121.0, 151.0, 191.0, 271.0, 321.0, 360.0];
const EXPRESSIVE_SECONDARY_ROTATIONS_2021: [f64; 9] =
    [45.0, 95.0, 45.0, 20.0, 45.0, 90.0, 45.0, 45.0, 45.0];
const EXPRESSIVE_TERTIARY_ROTATIONS_2021: [f64; 9] =
    [120.0, 120.0, 20.0, 45.0, 20.0, 15.0, 20.0, 120.0, 120.0];

pub(crate) struct Palettes2021;

impl PaletteDelegate for Palettes2021 {
    fn primary(&self, input: &PaletteInput) -> TonalPalette {
        let hue = input.hue();
        match input.variant {
            Variant::Monochrome => palette(hue, 0.0),
            Variant::Neutral => palette(hue, 12.0),
            Variant::TonalSpot => palette(hue, 36.0),
            Variant::Vibrant => palette(hue, 200.0),
            Variant::Expressive => palette(sanitize_degrees(hue + 240.0), 40.0),
            Variant::Fidelity | Variant::Content => palette(hue, input.source.chroma()),
            Variant::Rainbow => palette(hue, 48.0),
            Variant::FruitSalad => palette(sanitize_degrees(hue - 50.0), 48.0),
        }
    }

    fn secondary(&self, input: &PaletteInput) -> TonalPalette {
        let hue = input.hue();
        match input.variant {
            Variant::Monochrome => palette(hue, 0.0),
            Variant::Neutral => palette(hue, 8.0),
            Variant::TonalSpot | Variant::Rainbow => palette(hue, 16.0),
            Variant::Vibrant => palette(
                rotated_hue(hue, &VIBRANT_HUES_2021, &VIBRANT_SECONDARY_ROTATIONS_2021),
                24.0,
            ),
            Variant::Expressive => palette(
                rotated_hue(hue, &EXPRESSIVE_HUES_2021, &EXPRESSIVE_SECONDARY_ROTATIONS_2021),
                24.0,
            ),
            Variant::Fidelity | Variant::Content => {
                let chroma = input.source.chroma();
                palette(hue, (chroma - 32.0).max(chroma * 0.5))
            }
            Variant::FruitSalad => palette(sanitize_degrees(hue - 50.0), 36.0),
        }
    }

    fn tertiary(
        &self,
        input: &PaletteInput,
        temperature: Option<&TemperatureCache>,
    ) -> TonalPalette {
        let hue = input.hue();
        match input.variant {
            Variant::Monochrome => palette(hue, 0.0),
            Variant::Neutral => palette(hue, 16.0),
            Variant::TonalSpot | Variant::Rainbow => palette(sanitize_degrees(hue + 60.0), 24.0),
            Variant::Vibrant => palette(
                rotated_hue(hue, &VIBRANT_HUES_2021, &VIBRANT_TERTIARY_ROTATIONS_2021),
                32.0,
            ),
            Variant::Expressive => palette(
                rotated_hue(hue, &EXPRESSIVE_HUES_2021, &EXPRESSIVE_TERTIARY_ROTATIONS_2021),
                32.0,
            ),
            Variant::Fidelity | Variant::Content => {
                let analogous = match temperature {
                    Some(cache) => cache.analogous(3, 6),
                    None => TemperatureCache::new(input.source).analogous(3, 6),
                };
                TonalPalette::from_hct(fix_if_disliked(analogous[2]))
            }
            Variant::FruitSalad => palette(hue, 36.0),
        }
    }

    fn neutral(&self, input: &PaletteInput) -> TonalPalette {
        let hue = input.hue();
        match input.variant {
            Variant::Monochrome | Variant::Rainbow => palette(hue, 0.0),
            Variant::Neutral => palette(hue, 2.0),
            Variant::TonalSpot => palette(hue, 6.0),
            Variant::Vibrant | Variant::FruitSalad => palette(hue, 10.0),
            Variant::Expressive => palette(sanitize_degrees(hue + 15.0), 8.0),
            Variant::Fidelity | Variant::Content => palette(hue, input.source.chroma() / 8.0),
        }
    }

    fn neutral_variant(&self, input: &PaletteInput) -> TonalPalette {
        let hue = input.hue();
        match input.variant {
            Variant::Monochrome | Variant::Rainbow => palette(hue, 0.0),
            Variant::Neutral => palette(hue, 2.0),
            Variant::TonalSpot => palette(hue, 8.0),
            Variant::Vibrant => palette(hue, 12.0),
            Variant::Expressive => palette(sanitize_degrees(hue + 15.0), 12.0),
            Variant::Fidelity | Variant::Content => {
                palette(hue, input.source.chroma() / 8.0 + 4.0)
            }
            Variant::FruitSalad => palette(hue, 16.0),
        }
    }

    fn error(&self, _input: &PaletteInput) -> TonalPalette {
        palette(25.0, 84.0)
    }
}

const EXPRESSIVE_HUES_2025: [f64; 9] = [0.0, 105.0, 140.0, 204.0, 253.0, 278.0, 300.0, 333.0, 360.0];
const VIBRANT_HUES_2025: [f64; 6] = [0.0, 38.0, 105.0, 140.0, 333.0, 360.0];
const VIBRANT_ROTATIONS_2025: [f64; 5] = [-14.0, 10.0, -14.0, 10.0, -14.0];

pub(crate) struct Palettes2025;

impl Palettes2025 {
    fn expressive_neutral_hue(input: &PaletteInput) -> f64 {
        rotated_hue(
            input.hue(),
            &[0.0, 71.0, 124.0, 253.0, 278.0, 300.0, 360.0],
            &[10.0, 0.0, 10.0, 0.0, 10.0, 0.0],
        )
    }

    fn expressive_neutral_chroma(input: &PaletteInput) -> f64 {
        let neutral_hue = Self::expressive_neutral_hue(input);
        match (input.is_phone(), input.is_dark) {
            (true, true) if is_yellow_hue(neutral_hue) => 6.0,
            (true, true) => 14.0,
            (true, false) => 18.0,
            (false, _) => 12.0,
        }
    }

    fn vibrant_neutral_hue(input: &PaletteInput) -> f64 {
        rotated_hue(input.hue(), &VIBRANT_HUES_2025, &VIBRANT_ROTATIONS_2025)
    }

    fn vibrant_neutral_chroma(input: &PaletteInput) -> f64 {
        let neutral_hue = Self::vibrant_neutral_hue(input);
        if input.is_phone() || is_blue_hue(neutral_hue) {
            28.0
        } else {
            20.0
        }
    }
}

impl PaletteDelegate for Palettes2025 {
    fn primary(&self, input: &PaletteInput) -> TonalPalette {
        let hue = input.hue();
        let phone = input.is_phone();
        match input.variant {
            Variant::Neutral => {
                let chroma = match (phone, is_blue_hue(hue)) {
                    (true, true) => 12.0,
                    (true, false) => 8.0,
                    (false, true) => 16.0,
                    (false, false) => 12.0,
                };
                palette(hue, chroma)
            }
            Variant::TonalSpot => palette(hue, if phone && input.is_dark { 26.0 } else { 32.0 }),
            Variant::Expressive => {
                let chroma = match (phone, input.is_dark) {
                    (true, true) => 36.0,
                    (true, false) => 48.0,
                    (false, _) => 40.0,
                };
                palette(hue, chroma)
            }
            Variant::Vibrant => palette(hue, if phone { 74.0 } else { 56.0 }),
            _ => Palettes2021.primary(input),
        }
    }

    fn secondary(&self, input: &PaletteInput) -> TonalPalette {
        let hue = input.hue();
        let phone = input.is_phone();
        match input.variant {
            Variant::Neutral => {
                let chroma = match (phone, is_blue_hue(hue)) {
                    (true, true) => 6.0,
                    (true, false) => 4.0,
                    (false, true) => 10.0,
                    (false, false) => 6.0,
                };
                palette(hue, chroma)
            }
            Variant::TonalSpot => palette(hue, 16.0),
            Variant::Expressive => palette(
                rotated_hue(
                    hue,
                    &EXPRESSIVE_HUES_2025,
                    &[-160.0, 155.0, -100.0, 96.0, -96.0, -156.0, -165.0, -160.0],
                ),
                if phone && input.is_dark { 16.0 } else { 24.0 },
            ),
            Variant::Vibrant => palette(
                rotated_hue(hue, &VIBRANT_HUES_2025, &VIBRANT_ROTATIONS_2025),
                if phone { 56.0 } else { 36.0 },
            ),
            _ => Palettes2021.secondary(input),
        }
    }

    fn tertiary(
        &self,
        input: &PaletteInput,
        temperature: Option<&TemperatureCache>,
    ) -> TonalPalette {
        let hue = input.hue();
        let phone = input.is_phone();
        match input.variant {
            Variant::Neutral => palette(
                rotated_hue(
                    hue,
                    &[0.0, 38.0, 105.0, 161.0, 204.0, 278.0, 333.0, 360.0],
                    &[-32.0, 26.0, 10.0, -39.0, 24.0, -15.0, -32.0],
                ),
                if phone { 20.0 } else { 36.0 },
            ),
            Variant::TonalSpot => palette(
                rotated_hue(
                    hue,
                    &[0.0, 20.0, 71.0, 161.0, 333.0, 360.0],
                    &[-40.0, 48.0, -32.0, 40.0, -32.0],
                ),
                if phone { 28.0 } else { 32.0 },
            ),
            Variant::Expressive => palette(
                rotated_hue(
                    hue,
                    &EXPRESSIVE_HUES_2025,
                    &[-165.0, 160.0, -105.0, 101.0, -101.0, -160.0, -170.0, -165.0],
                ),
                48.0,
            ),
            Variant::Vibrant => palette(
                rotated_hue(
                    hue,
                    &[0.0, 38.0, 71.0, 105.0, 140.0, 161.0, 253.0, 333.0, 360.0],
                    &[-72.0, 35.0, 24.0, -24.0, 62.0, 50.0, 62.0, -72.0],
                ),
                56.0,
            ),
            _ => Palettes2021.tertiary(input, temperature),
        }
    }

    fn neutral(&self, input: &PaletteInput) -> TonalPalette {
        let hue = input.hue();
        let phone = input.is_phone();
        match input.variant {
            Variant::Neutral => palette(hue, if phone { 1.4 } else { 6.0 }),
            Variant::TonalSpot => palette(hue, if phone { 5.0 } else { 10.0 }),
            Variant::Expressive => palette(
                Self::expressive_neutral_hue(input),
                Self::expressive_neutral_chroma(input),
            ),
            Variant::Vibrant => palette(
                Self::vibrant_neutral_hue(input),
                Self::vibrant_neutral_chroma(input),
            ),
            _ => Palettes2021.neutral(input),
        }
    }

    fn neutral_variant(&self, input: &PaletteInput) -> TonalPalette {
        let hue = input.hue();
        let phone = input.is_phone();
        match input.variant {
            Variant::Neutral => palette(hue, (if phone { 1.4 } else { 6.0 }) * 2.2),
            Variant::TonalSpot => palette(hue, (if phone { 5.0 } else { 10.0 }) * 1.7),
            Variant::Expressive => {
                let neutral_hue = Self::expressive_neutral_hue(input);
                let chroma = Self::expressive_neutral_chroma(input);
                let factor = if (105.0..125.0).contains(&neutral_hue) {
                    1.6
                } else {
                    2.3
                };
                palette(neutral_hue, chroma * factor)
            }
            Variant::Vibrant => palette(
                Self::vibrant_neutral_hue(input),
                Self::vibrant_neutral_chroma(input) * 1.29,
            ),
            _ => Palettes2021.neutral_variant(input),
        }
    }

    fn error(&self, input: &PaletteInput) -> TonalPalette {
        let error_hue = piecewise_hue(
            input.hue(),
            &[0.0, 3.0, 13.0, 23.0, 33.0, 43.0, 153.0, 273.0, 360.0],
            &[12.0, 22.0, 32.0, 12.0, 22.0, 32.0, 22.0, 12.0],
        );
        let phone = input.is_phone();
        match input.variant {
            Variant::Neutral => palette(error_hue, if phone { 50.0 } else { 40.0 }),
            Variant::TonalSpot => palette(error_hue, if phone { 60.0 } else { 48.0 }),
            Variant::Expressive => palette(error_hue, if phone { 64.0 } else { 48.0 }),
            Variant::Vibrant => palette(error_hue, if phone { 80.0 } else { 60.0 }),
            _ => Palettes2021.error(input),
        }
    }
}
