//! A resolved theme: seed, settings and palettes, with roles resolved on
//! demand.

use std::cell::{OnceCell, RefCell};
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cancel::{CancellationToken, Cancelled};
use crate::color::{Argb, Hct};
use crate::palettes::TonalPalette;

use super::calculation;
use super::catalog::{Catalog, PaletteKind};
use super::palettes::{PaletteInput, SchemePalettes};
use super::role::Role;
use super::variant::{Platform, SpecVersion, Variant};

/// The knobs of a scheme besides its seed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemeParams {
    pub variant: Variant,
    pub is_dark: bool,
    /// -1 is reduced, 0 standard, 0.5 medium and 1 high contrast.
    pub contrast_level: f64,
    pub platform: Platform,
    pub spec_version: SpecVersion,
}

impl Default for SchemeParams {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            is_dark: false,
            contrast_level: 0.0,
            platform: Platform::default(),
            spec_version: SpecVersion::default(),
        }
    }
}

/// A Material color scheme.
///
/// Palettes are derived eagerly from the seed; role colors are resolved
/// lazily and memoised, since roles depend on each other's tones. The memo
/// makes a scheme cheap to query repeatedly but not `Sync`; share resolved
/// colors across threads, not schemes.
///
/// # Example
///
/// ```
/// use material_color::dynamic::{DynamicScheme, Role, SchemeParams, SpecVersion, Variant};
/// use material_color::{Argb, Hct};
///
/// let params = SchemeParams {
///     variant: Variant::TonalSpot,
///     spec_version: SpecVersion::V2021,
///     ..SchemeParams::default()
/// };
/// let scheme = DynamicScheme::new(Hct::from_argb(Argb(0xFF0000FF)), params);
/// assert_eq!(scheme.get_argb(Role::Primary), Some(Argb(0xFF555992)));
/// assert_eq!(scheme.get_argb(Role::PrimaryDim), None);
/// ```
pub struct DynamicScheme {
    source: Hct,
    params: SchemeParams,
    palettes: SchemePalettes,
    tones: RefCell<HashMap<Role, f64>>,
    light_standard: OnceCell<Box<DynamicScheme>>,
}

impl DynamicScheme {
    /// Builds the scheme for `source`.
    ///
    /// Variants the 2025 rules do not cover are built with the 2021 rules;
    /// [`spec_version`](Self::spec_version) reports the version in effect.
    pub fn new(source: Hct, params: SchemeParams) -> Self {
        let params = effective(params);
        let palettes = SchemePalettes::build(params.spec_version, &palette_input(source, params));
        Self::from_palettes(source, params, palettes)
    }

    /// Like [`new`](Self::new), but stops early once `cancel` is set.
    ///
    /// Only fidelity and content schemes do enough work to be worth
    /// cancelling.
    pub fn new_cancellable(
        source: Hct,
        params: SchemeParams,
        cancel: &CancellationToken,
    ) -> Result<Self, Cancelled> {
        let params = effective(params);
        let palettes = SchemePalettes::build_cancellable(
            params.spec_version,
            &palette_input(source, params),
            cancel,
        )?;
        Ok(Self::from_palettes(source, params, palettes))
    }

    fn from_palettes(source: Hct, params: SchemeParams, palettes: SchemePalettes) -> Self {
        Self {
            source,
            params,
            palettes,
            tones: RefCell::new(HashMap::new()),
            light_standard: OnceCell::new(),
        }
    }

    pub fn source_hct(&self) -> Hct {
        self.source
    }

    pub fn source_argb(&self) -> Argb {
        self.source.to_argb()
    }

    pub fn params(&self) -> SchemeParams {
        self.params
    }

    pub fn variant(&self) -> Variant {
        self.params.variant
    }

    pub fn is_dark(&self) -> bool {
        self.params.is_dark
    }

    pub fn contrast_level(&self) -> f64 {
        self.params.contrast_level
    }

    pub fn platform(&self) -> Platform {
        self.params.platform
    }

    /// The rules in effect, after falling back for unsupported variants.
    pub fn spec_version(&self) -> SpecVersion {
        self.params.spec_version
    }

    pub fn primary_palette(&self) -> &TonalPalette {
        &self.palettes.primary
    }

    pub fn secondary_palette(&self) -> &TonalPalette {
        &self.palettes.secondary
    }

    pub fn tertiary_palette(&self) -> &TonalPalette {
        &self.palettes.tertiary
    }

    pub fn neutral_palette(&self) -> &TonalPalette {
        &self.palettes.neutral
    }

    pub fn neutral_variant_palette(&self) -> &TonalPalette {
        &self.palettes.neutral_variant
    }

    pub fn error_palette(&self) -> &TonalPalette {
        &self.palettes.error
    }

    pub fn palette(&self, kind: PaletteKind) -> &TonalPalette {
        match kind {
            PaletteKind::Primary => self.primary_palette(),
            PaletteKind::Secondary => self.secondary_palette(),
            PaletteKind::Tertiary => self.tertiary_palette(),
            PaletteKind::Neutral => self.neutral_palette(),
            PaletteKind::NeutralVariant => self.neutral_variant_palette(),
            PaletteKind::Error => self.error_palette(),
        }
    }

    pub(crate) fn catalog(&self) -> &'static Catalog {
        Catalog::get(self.spec_version())
    }

    /// Whether this scheme's rules define `role`.
    pub fn has_role(&self, role: Role) -> bool {
        self.catalog().spec(role).is_some()
    }

    /// Roles this scheme defines, in theme order.
    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.catalog().roles()
    }

    /// The resolved tone of `role`, or `None` if these rules lack it.
    pub fn tone(&self, role: Role) -> Option<f64> {
        self.has_role(role).then(|| self.tone_of(role))
    }

    pub fn get_hct(&self, role: Role) -> Option<Hct> {
        let spec = self.catalog().spec(role)?;
        Some(calculation::for_version(self.spec_version()).hct(self, spec))
    }

    pub fn get_argb(&self, role: Role) -> Option<Argb> {
        self.get_hct(role).map(|hct| hct.to_argb())
    }

    /// Every defined role with its color, in theme order.
    pub fn all_colors(&self) -> Vec<(Role, Argb)> {
        self.roles()
            .filter_map(|role| self.get_argb(role).map(|argb| (role, argb)))
            .collect()
    }

    /// Resolved tone, memoised per scheme. Undefined roles read as 50.
    pub(crate) fn tone_of(&self, role: Role) -> f64 {
        if let Some(&tone) = self.tones.borrow().get(&role) {
            return tone;
        }
        let tone = match self.catalog().spec(role) {
            Some(spec) => calculation::for_version(self.spec_version()).tone(self, spec),
            None => 50.0,
        };
        self.tones.borrow_mut().insert(role, tone);
        tone
    }

    /// Tone a role starts from before contrast is enforced: its own rule,
    /// else its background's resolved tone, else 50.
    pub(crate) fn initial_tone(&self, role: Role) -> f64 {
        let Some(spec) = self.catalog().spec(role) else {
            return 50.0;
        };
        match spec.tone {
            Some(tone) => tone(self),
            None => spec
                .background_in(self)
                .map_or(50.0, |background| self.tone_of(background)),
        }
    }

    /// The same palettes in light mode at standard contrast.
    pub(crate) fn light_standard(&self) -> &DynamicScheme {
        self.light_standard.get_or_init(|| {
            let params = SchemeParams {
                is_dark: false,
                contrast_level: 0.0,
                ..self.params
            };
            Box::new(Self::from_palettes(self.source, params, self.palettes.clone()))
        })
    }
}

/// Variants the 2025 rules do not cover fall back to 2021.
fn effective(params: SchemeParams) -> SchemeParams {
    SchemeParams {
        spec_version: params.spec_version.for_variant(params.variant),
        ..params
    }
}

fn palette_input(source: Hct, params: SchemeParams) -> PaletteInput {
    PaletteInput {
        source,
        variant: params.variant,
        is_dark: params.is_dark,
        platform: params.platform,
    }
}

impl fmt::Debug for DynamicScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicScheme")
            .field("source", &self.source)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::ratio_of_tones;
    use pretty_assertions::assert_eq;

    const BLUE: Argb = Argb(0xFF0000FF);

    fn scheme(params: SchemeParams) -> DynamicScheme {
        DynamicScheme::new(Hct::from_argb(BLUE), params)
    }

    fn tonal_spot_2021(is_dark: bool) -> DynamicScheme {
        scheme(SchemeParams {
            variant: Variant::TonalSpot,
            is_dark,
            spec_version: SpecVersion::V2021,
            ..SchemeParams::default()
        })
    }

    #[test]
    fn test_tonal_spot_2021_light_blue() {
        let scheme = tonal_spot_2021(false);
        assert_eq!(scheme.get_argb(Role::Primary), Some(Argb(0xFF555992)));
        assert_eq!(scheme.get_argb(Role::PrimaryContainer), Some(Argb(0xFFE0E0FF)));
        assert_eq!(scheme.get_argb(Role::OnPrimaryContainer), Some(Argb(0xFF3E4278)));
        assert_eq!(scheme.get_argb(Role::Surface), Some(Argb(0xFFFBF8FF)));
    }

    #[test]
    fn test_role_sets_per_version() {
        let old = tonal_spot_2021(false);
        assert_eq!(old.all_colors().len(), 55);
        assert!(!old.has_role(Role::PrimaryDim));

        let new = scheme(SchemeParams::default());
        assert_eq!(new.spec_version(), SpecVersion::V2025);
        assert_eq!(new.all_colors().len(), 59);
        assert!(new.get_argb(Role::ErrorDim).is_some());
    }

    #[test]
    fn test_unsupported_variant_falls_back_to_2021() {
        let scheme = scheme(SchemeParams {
            variant: Variant::Monochrome,
            spec_version: SpecVersion::V2025,
            ..SchemeParams::default()
        });
        assert_eq!(scheme.spec_version(), SpecVersion::V2021);
        assert_eq!(scheme.tone(Role::PrimaryDim), None);
        assert_eq!(scheme.primary_palette().chroma(), 0.0);
    }

    #[test]
    fn test_text_contrast_in_both_modes() {
        for is_dark in [false, true] {
            let scheme = tonal_spot_2021(is_dark);
            let surface = scheme.tone(Role::SurfaceDim).unwrap();
            let surface_bright = scheme.tone(Role::SurfaceBright).unwrap();
            let background = if is_dark { surface_bright } else { surface };
            let on_surface = scheme.tone(Role::OnSurface).unwrap();
            assert!(ratio_of_tones(background, on_surface) >= 7.0);
        }
    }

    #[test]
    fn test_container_pair_keeps_delta() {
        for is_dark in [false, true] {
            let scheme = tonal_spot_2021(is_dark);
            let primary = scheme.tone(Role::Primary).unwrap();
            let container = scheme.tone(Role::PrimaryContainer).unwrap();
            assert!((primary - container).abs() >= 10.0 - 1e-9);
        }
    }

    #[test]
    fn test_2025_fixed_dim_is_exactly_five_below_fixed() {
        for is_dark in [false, true] {
            let scheme = scheme(SchemeParams {
                variant: Variant::TonalSpot,
                is_dark,
                ..SchemeParams::default()
            });
            let fixed = scheme.tone(Role::PrimaryFixed).unwrap();
            let fixed_dim = scheme.tone(Role::PrimaryFixedDim).unwrap();
            assert!((fixed - fixed_dim - 5.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_2025_fixed_matches_light_container() {
        let dark = scheme(SchemeParams {
            variant: Variant::Vibrant,
            is_dark: true,
            ..SchemeParams::default()
        });
        let light_container = dark.light_standard().tone(Role::PrimaryContainer);
        assert_eq!(dark.tone(Role::PrimaryFixed), light_container);
        assert!(dark.light_standard().tone(Role::PrimaryContainer).is_some());
        assert!(!dark.light_standard().is_dark());
    }

    #[test]
    fn test_2025_backgrounds_skip_awkward_band() {
        for variant in [Variant::Neutral, Variant::TonalSpot, Variant::Expressive, Variant::Vibrant] {
            for is_dark in [false, true] {
                let scheme = scheme(SchemeParams {
                    variant,
                    is_dark,
                    ..SchemeParams::default()
                });
                for role in [Role::Primary, Role::Secondary, Role::Tertiary, Role::Error] {
                    let tone = scheme.tone(role).unwrap();
                    assert!(
                        !(49.0 < tone && tone < 65.0),
                        "{variant} {role} dark={is_dark}: {tone}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let params = SchemeParams {
            variant: Variant::Expressive,
            contrast_level: 0.5,
            ..SchemeParams::default()
        };
        assert_eq!(scheme(params).all_colors(), scheme(params).all_colors());
    }

    #[test]
    fn test_cancelled_fidelity_scheme() {
        let token = CancellationToken::new();
        token.cancel();
        let params = SchemeParams {
            variant: Variant::Fidelity,
            ..SchemeParams::default()
        };
        let result = DynamicScheme::new_cancellable(Hct::from_argb(BLUE), params, &token);
        assert!(matches!(result, Err(Cancelled)));
    }

    #[test]
    fn test_cancellable_scheme_matches_plain_scheme() {
        let token = CancellationToken::new();
        for variant in [Variant::Content, Variant::Vibrant] {
            let params = SchemeParams {
                variant,
                ..SchemeParams::default()
            };
            let plain = scheme(params);
            let scanned = DynamicScheme::new_cancellable(Hct::from_argb(BLUE), params, &token)
                .expect("token was never set");
            assert_eq!(plain.spec_version(), scanned.spec_version());
            assert_eq!(plain.all_colors(), scanned.all_colors());
        }
    }

    fn baseline_ratio(version: SpecVersion, level: f64, role: Role, background: Role) -> f64 {
        let scheme = DynamicScheme::new(
            Hct::from_argb(Argb(0xFF6750A4)),
            SchemeParams {
                variant: Variant::TonalSpot,
                contrast_level: level,
                spec_version: version,
                ..SchemeParams::default()
            },
        );
        ratio_of_tones(scheme.tone(background).unwrap(), scheme.tone(role).unwrap())
    }

    #[test]
    fn test_reduced_contrast_rederives_text_tone() {
        let reduced = baseline_ratio(SpecVersion::V2021, -1.0, Role::OnSurface, Role::Surface);
        let standard = baseline_ratio(SpecVersion::V2021, 0.0, Role::OnSurface, Role::Surface);
        // Text falls back toward the curve's low end instead of keeping tone 10.
        assert!((4.5..7.0).contains(&reduced), "reduced ratio {reduced}");
        assert!(standard > 15.0, "standard ratio {standard}");
    }

    #[test]
    fn test_high_contrast_pushes_text_apart() {
        let standard = baseline_ratio(SpecVersion::V2021, 0.0, Role::OnSurface, Role::Surface);
        let high = baseline_ratio(SpecVersion::V2021, 1.0, Role::OnSurface, Role::Surface);
        assert!(high >= standard, "{high} < {standard}");

        let on_primary = baseline_ratio(SpecVersion::V2021, 1.0, Role::OnPrimary, Role::Primary);
        assert!(on_primary >= 11.0, "on primary ratio {on_primary}");
    }

    #[test]
    fn test_2025_reduced_contrast_equals_standard() {
        let reduced = baseline_ratio(SpecVersion::V2025, -1.0, Role::OnSurface, Role::Surface);
        let standard = baseline_ratio(SpecVersion::V2025, 0.0, Role::OnSurface, Role::Surface);
        assert!((reduced - standard).abs() < 0.01, "{reduced} vs {standard}");
    }
}
