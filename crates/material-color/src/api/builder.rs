//! SchemeGenerator: pixels in, resolved theme out.
//!
//! [`SchemeGenerator`] wraps quantization, scoring and scheme synthesis
//! behind a fluent configuration API.

use tracing::{debug, info};

use crate::cancel::{self, CancellationToken};
use crate::color::{Argb, Hct};
use crate::dynamic::{DynamicScheme, Platform, Role, SchemeParams, SpecVersion, Variant};
use crate::quantize::{quantize_map, Quantizer, QuantizerCelebi};
use crate::score::{score, ScoreOptions, DEFAULT_FALLBACK};

use super::error::GenerateError;
use super::source::Source;

/// Settings for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub dark: bool,
    /// -1 to 1. Values outside the range behave like the nearest end.
    pub contrast: f64,
    pub variant: Variant,
    pub platform: Platform,
    pub version: SpecVersion,
    /// Upper bound on quantized colors.
    pub max_colors: usize,
    /// How many seed candidates the scorer returns.
    pub desired_seeds: usize,
    /// Seed used when no quantized color qualifies.
    pub fallback: Argb,
    /// Drop near-grey and rare colors before ranking.
    pub filter: bool,
    pub cancellation: Option<CancellationToken>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            dark: false,
            contrast: 0.0,
            variant: Variant::default(),
            platform: Platform::default(),
            version: SpecVersion::default(),
            max_colors: 128,
            desired_seeds: 4,
            fallback: DEFAULT_FALLBACK,
            filter: true,
            cancellation: None,
        }
    }
}

impl GenerateOptions {
    fn scheme_params(&self) -> SchemeParams {
        SchemeParams {
            variant: self.variant,
            is_dark: self.dark,
            contrast_level: self.contrast,
            platform: self.platform,
            spec_version: self.version,
        }
    }

    fn score_options(&self) -> ScoreOptions {
        ScoreOptions {
            desired: self.desired_seeds,
            fallback_color: self.fallback,
            filter: self.filter,
        }
    }
}

/// The outcome of [`SchemeGenerator::generate`].
#[derive(Debug)]
pub struct GeneratedScheme {
    scheme: DynamicScheme,
    candidates: Vec<Argb>,
    colors: Vec<(Role, Option<Argb>)>,
}

impl GeneratedScheme {
    pub fn scheme(&self) -> &DynamicScheme {
        &self.scheme
    }

    /// The color the scheme was built from.
    pub fn seed(&self) -> Argb {
        self.scheme.source_argb()
    }

    /// Ranked seed candidates, best first. Never empty.
    pub fn candidates(&self) -> &[Argb] {
        &self.candidates
    }

    /// Every known role, in theme order. Roles the scheme's rules do not
    /// define are `None`.
    pub fn colors(&self) -> &[(Role, Option<Argb>)] {
        &self.colors
    }

    pub fn color(&self, role: Role) -> Option<Argb> {
        self.colors
            .iter()
            .find(|(r, _)| *r == role)
            .and_then(|(_, argb)| *argb)
    }
}

/// Builds Material themes from images and colors.
///
/// Configuration methods consume and return `self`; [`generate`](Self::generate)
/// borrows, so one generator serves any number of sources.
///
/// # Example
///
/// ```
/// use material_color::{Argb, Role, SchemeGenerator, Source, SpecVersion, Variant};
///
/// let generator = SchemeGenerator::new()
///     .variant(Variant::TonalSpot)
///     .version(SpecVersion::V2021);
/// let theme = generator.generate(&Source::Argb(Argb(0xFF0000FF))).unwrap();
///
/// assert_eq!(theme.seed(), Argb(0xFF0000FF));
/// assert_eq!(theme.color(Role::Primary), Some(Argb(0xFF555992)));
/// assert_eq!(theme.color(Role::PrimaryDim), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchemeGenerator {
    options: GenerateOptions,
}

impl SchemeGenerator {
    /// Defaults: light, standard contrast, expressive, phone, 2025 rules.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    #[inline]
    pub fn dark(mut self, dark: bool) -> Self {
        self.options.dark = dark;
        self
    }

    #[inline]
    pub fn contrast(mut self, contrast: f64) -> Self {
        self.options.contrast = contrast;
        self
    }

    #[inline]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.options.variant = variant;
        self
    }

    #[inline]
    pub fn platform(mut self, platform: Platform) -> Self {
        self.options.platform = platform;
        self
    }

    #[inline]
    pub fn version(mut self, version: SpecVersion) -> Self {
        self.options.version = version;
        self
    }

    #[inline]
    pub fn max_colors(mut self, max_colors: usize) -> Self {
        self.options.max_colors = max_colors;
        self
    }

    #[inline]
    pub fn desired_seeds(mut self, desired: usize) -> Self {
        self.options.desired_seeds = desired;
        self
    }

    #[inline]
    pub fn fallback(mut self, fallback: Argb) -> Self {
        self.options.fallback = fallback;
        self
    }

    #[inline]
    pub fn filter(mut self, filter: bool) -> Self {
        self.options.filter = filter;
        self
    }

    #[inline]
    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.options.cancellation = Some(token);
        self
    }

    /// Runs the pipeline on `source`.
    ///
    /// A source with exactly one distinct opaque color is used as the seed
    /// directly; anything else is quantized and scored.
    pub fn generate(&self, source: &Source) -> Result<GeneratedScheme, GenerateError> {
        let token = self.options.cancellation.as_ref();
        let result = self.run(source, token);
        if let Err(GenerateError::Cancelled) = result {
            info!("scheme generation cancelled");
        }
        result
    }

    fn run(
        &self,
        source: &Source,
        token: Option<&CancellationToken>,
    ) -> Result<GeneratedScheme, GenerateError> {
        // 1. Flatten the source and keep what the quantizer would see
        let pixels: Vec<Argb> = source
            .pixels()?
            .into_iter()
            .filter(|p| p.is_opaque())
            .collect();
        if pixels.is_empty() {
            return Err(GenerateError::EmptySource);
        }
        cancel::check(token)?;

        // 2. Pick seed candidates
        let distinct = quantize_map(&pixels);
        let candidates = if distinct.len() == 1 {
            distinct.keys().copied().collect()
        } else {
            let quantized = QuantizerCelebi.quantize(&pixels, self.options.max_colors, token)?;
            debug!(
                pixels = pixels.len(),
                distinct = distinct.len(),
                clusters = quantized.color_to_count.len(),
                "quantized source"
            );
            score(&quantized.color_to_count, &self.options.score_options())
        };
        let seed = candidates.first().copied().unwrap_or(self.options.fallback);
        debug!(seed = %seed, candidates = candidates.len(), "chose seed");

        // 3. Synthesize the scheme
        let params = self.options.scheme_params();
        let source_hct = Hct::from_argb(seed);
        let scheme = match token {
            Some(token) => DynamicScheme::new_cancellable(source_hct, params, token)?,
            None => DynamicScheme::new(source_hct, params),
        };

        // 4. Materialise every role
        let colors = Role::ALL
            .iter()
            .map(|&role| (role, scheme.get_argb(role)))
            .collect();

        Ok(GeneratedScheme {
            scheme,
            candidates,
            colors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let options = GenerateOptions::default();
        assert!(!options.dark);
        assert_eq!(options.contrast, 0.0);
        assert_eq!(options.variant, Variant::Expressive);
        assert_eq!(options.platform, Platform::Phone);
        assert_eq!(options.version, SpecVersion::V2025);
        assert_eq!(options.max_colors, 128);
        assert_eq!(options.desired_seeds, 4);
        assert_eq!(options.fallback, Argb(0xFF4285F4));
        assert!(options.filter);
    }

    #[test]
    fn test_single_color_is_its_own_seed() {
        let theme = SchemeGenerator::new()
            .generate(&Source::hex("#808080"))
            .unwrap();
        assert_eq!(theme.seed(), Argb(0xFF808080));
        assert_eq!(theme.candidates(), &[Argb(0xFF808080)]);
    }

    #[test]
    fn test_translucent_only_source_is_empty() {
        let source = Source::Image {
            width: 2,
            height: 1,
            pixels: vec![Argb(0x00FF0000), Argb(0x7F00FF00)],
        };
        assert_eq!(
            SchemeGenerator::new().generate(&source).unwrap_err(),
            GenerateError::EmptySource
        );
    }

    #[test]
    fn test_invalid_hex() {
        let err = SchemeGenerator::new()
            .generate(&Source::hex("#12345"))
            .unwrap_err();
        assert_eq!(err.kind(), "invalid_hex");
    }

    #[test]
    fn test_pre_cancelled_token() {
        let token = CancellationToken::new();
        token.cancel();
        let err = SchemeGenerator::new()
            .cancellation(token)
            .generate(&Source::Raw(vec![255, 0, 0, 0, 0, 255]))
            .unwrap_err();
        assert_eq!(err, GenerateError::Cancelled);
    }

    #[test]
    fn test_image_seed_is_the_dominant_hue() {
        let mut pixels = vec![Argb(0xFF0000FF); 90];
        pixels.extend(vec![Argb(0xFF000000); 10]);
        let theme = SchemeGenerator::new()
            .generate(&Source::Image {
                width: 10,
                height: 10,
                pixels,
            })
            .unwrap();
        let seed = Hct::from_argb(theme.seed());
        let blue = Hct::from_argb(Argb(0xFF0000FF));
        assert!((seed.hue() - blue.hue()).abs() < 2.0, "seed hue {}", seed.hue());
        assert_eq!(theme.candidates().len(), 1);
    }

    #[test]
    fn test_role_map_marks_absent_roles() {
        let theme = SchemeGenerator::new()
            .version(SpecVersion::V2021)
            .generate(&Source::Argb(Argb(0xFF4285F4)))
            .unwrap();
        assert_eq!(theme.colors().len(), Role::ALL.len());
        let absent: Vec<Role> = theme
            .colors()
            .iter()
            .filter(|(_, argb)| argb.is_none())
            .map(|(role, _)| *role)
            .collect();
        assert_eq!(
            absent,
            vec![
                Role::PrimaryDim,
                Role::SecondaryDim,
                Role::TertiaryDim,
                Role::ErrorDim
            ]
        );
    }

    #[test]
    fn test_greys_fall_back() {
        let theme = SchemeGenerator::new()
            .fallback(Argb(0xFF00AA00))
            .generate(&Source::List(vec![
                Source::hex("#000"),
                Source::hex("#fff"),
            ]))
            .unwrap();
        assert_eq!(theme.seed(), Argb(0xFF00AA00));
    }
}
