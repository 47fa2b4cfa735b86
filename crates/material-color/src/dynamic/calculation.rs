//! Resolving a role to a tone and a color
//!
//! The two spec versions differ in how they enforce contrast and tone-delta
//! pairs, so each gets its own [`ColorCalculation`].

use crate::color::Hct;
use crate::contrast::{darker, darker_unsafe, lighter, lighter_unsafe, ratio_of_tones};
use crate::math::clamp_f64;

use super::catalog::RoleSpec;
use super::scheme::DynamicScheme;
use super::tone_delta_pair::{DeltaConstraint, TonePolarity};
use super::variant::SpecVersion;

/// Version-specific tone and color resolution.
pub(crate) trait ColorCalculation {
    fn tone(&self, scheme: &DynamicScheme, spec: &RoleSpec) -> f64;
    fn hct(&self, scheme: &DynamicScheme, spec: &RoleSpec) -> Hct;
}

pub(crate) fn for_version(version: SpecVersion) -> &'static dyn ColorCalculation {
    match version {
        SpecVersion::V2021 => &Calculation2021,
        SpecVersion::V2025 => &Calculation2025,
    }
}

/// Whether a background of this tone reads better with light text.
pub fn tone_prefers_light_foreground(tone: f64) -> bool {
    tone.round() < 60.0
}

/// Whether light text is legible on a background of this tone.
pub fn tone_allows_light_foreground(tone: f64) -> bool {
    tone.round() <= 49.0
}

/// Moves a background out of the band where it prefers light text but
/// cannot carry it.
///
/// ```
/// use material_color::dynamic::enable_light_foreground;
///
/// assert_eq!(enable_light_foreground(55.0), 49.0);
/// assert_eq!(enable_light_foreground(70.0), 70.0);
/// ```
pub fn enable_light_foreground(tone: f64) -> f64 {
    if tone_prefers_light_foreground(tone) && !tone_allows_light_foreground(tone) {
        49.0
    } else {
        tone
    }
}

/// The tone with at least `ratio` contrast against `background_tone`,
/// preferring the lighter side on backgrounds that favour light text.
///
/// When neither side reaches the ratio, the side with more contrast wins.
pub fn foreground_tone(background_tone: f64, ratio: f64) -> f64 {
    let lighter_tone = lighter_unsafe(background_tone, ratio);
    let darker_tone = darker_unsafe(background_tone, ratio);
    let lighter_ratio = ratio_of_tones(lighter_tone, background_tone);
    let darker_ratio = ratio_of_tones(darker_tone, background_tone);

    if tone_prefers_light_foreground(background_tone) {
        let negligible_difference = (lighter_ratio - darker_ratio).abs() < 0.1
            && lighter_ratio < ratio
            && darker_ratio < ratio;
        if lighter_ratio >= ratio || lighter_ratio >= darker_ratio || negligible_difference {
            lighter_tone
        } else {
            darker_tone
        }
    } else if darker_ratio >= ratio || darker_ratio >= lighter_ratio {
        darker_tone
    } else {
        lighter_tone
    }
}

/// A tone with `ratio` contrast against both backgrounds, or the closest
/// achievable one.
fn dual_background_tone(
    scheme: &DynamicScheme,
    spec: &RoleSpec,
    answer: f64,
    ratio: f64,
) -> f64 {
    let (Some(first), Some(second)) = (spec.background_in(scheme), spec.second_background_in(scheme))
    else {
        return answer;
    };
    let first_tone = scheme.tone_of(first);
    let second_tone = scheme.tone_of(second);
    let upper = first_tone.max(second_tone);
    let lower = first_tone.min(second_tone);

    if ratio_of_tones(upper, answer) >= ratio && ratio_of_tones(lower, answer) >= ratio {
        return answer;
    }

    let light_option = lighter(upper, ratio);
    let dark_option = darker(lower, ratio);
    let prefers_light = tone_prefers_light_foreground(first_tone)
        || tone_prefers_light_foreground(second_tone);
    if prefers_light {
        return if light_option < 0.0 { 100.0 } else { light_option };
    }
    match (light_option >= 0.0, dark_option >= 0.0) {
        (true, false) => light_option,
        (false, true) => dark_option,
        _ if dark_option < 0.0 => 0.0,
        _ => dark_option,
    }
}

pub(crate) struct Calculation2021;

impl Calculation2021 {
    fn paired_tone(&self, scheme: &DynamicScheme, spec: &RoleSpec) -> Option<f64> {
        let pair = spec.tone_delta_pair_in(scheme)?;
        let catalog = scheme.catalog();
        let level = scheme.contrast_level();
        let is_dark = scheme.is_dark();

        let a_is_nearer = match pair.polarity {
            TonePolarity::Nearer => true,
            TonePolarity::Lighter => !is_dark,
            TonePolarity::Darker => is_dark,
            _ => false,
        };
        let (nearer, farther) = if a_is_nearer {
            (pair.role_a, pair.role_b)
        } else {
            (pair.role_b, pair.role_a)
        };
        let nearer_spec = catalog.spec(nearer)?;
        let farther_spec = catalog.spec(farther)?;
        let background_tone = spec
            .background_in(scheme)
            .map_or(50.0, |background| scheme.tone_of(background));
        let expansion = if is_dark { 1.0 } else { -1.0 };
        let delta = pair.delta;

        let target = |role_spec: &RoleSpec| {
            role_spec
                .contrast_curve_in(scheme)
                .map_or(1.0, |curve| curve.get(level))
        };
        let near_ratio = target(nearer_spec);
        let far_ratio = target(farther_spec);

        // Roles that already contrast enough keep their tone.
        let settle = |initial: f64, ratio: f64| {
            if level < 0.0 || ratio_of_tones(background_tone, initial) < ratio {
                foreground_tone(background_tone, ratio)
            } else {
                initial
            }
        };
        let mut near_tone = settle(scheme.initial_tone(nearer), near_ratio);
        let mut far_tone = settle(scheme.initial_tone(farther), far_ratio);

        if (far_tone - near_tone) * expansion < delta {
            far_tone = clamp_f64(0.0, 100.0, near_tone + delta * expansion);
            if (far_tone - near_tone) * expansion < delta {
                near_tone = clamp_f64(0.0, 100.0, far_tone - delta * expansion);
            }
        }

        let in_band = |tone: f64| (50.0..60.0).contains(&tone);
        if in_band(near_tone) || (in_band(far_tone) && pair.stay_together) {
            if expansion > 0.0 {
                near_tone = 60.0;
                far_tone = far_tone.max(near_tone + delta * expansion);
            } else {
                near_tone = 49.0;
                far_tone = far_tone.min(near_tone + delta * expansion);
            }
        } else if in_band(far_tone) {
            far_tone = if expansion > 0.0 { 60.0 } else { 49.0 };
        }

        Some(if spec.role == nearer { near_tone } else { far_tone })
    }
}

impl ColorCalculation for Calculation2021 {
    fn tone(&self, scheme: &DynamicScheme, spec: &RoleSpec) -> f64 {
        if let Some(tone) = self.paired_tone(scheme, spec) {
            return tone;
        }

        let mut answer = scheme.initial_tone(spec.role);
        let (Some(background), Some(curve)) =
            (spec.background_in(scheme), spec.contrast_curve_in(scheme))
        else {
            return answer;
        };
        let level = scheme.contrast_level();
        let background_tone = scheme.tone_of(background);
        let ratio = curve.get(level);

        if level < 0.0 || ratio_of_tones(background_tone, answer) < ratio {
            answer = foreground_tone(background_tone, ratio);
        }

        if spec.is_background && (50.0..60.0).contains(&answer) {
            answer = if ratio_of_tones(49.0, background_tone) >= ratio {
                49.0
            } else {
                60.0
            };
        }

        dual_background_tone(scheme, spec, answer, ratio)
    }

    fn hct(&self, scheme: &DynamicScheme, spec: &RoleSpec) -> Hct {
        let palette = scheme.palette(spec.palette);
        palette.get_hct(scheme.tone_of(spec.role))
    }
}

pub(crate) struct Calculation2025;

/// Backgrounds skip the 50..65 band where neither light nor dark text reads
/// well.
fn avoid_awkward_band(tone: f64) -> f64 {
    if tone >= 57.0 {
        clamp_f64(65.0, 100.0, tone)
    } else {
        clamp_f64(0.0, 49.0, tone)
    }
}

impl ColorCalculation for Calculation2025 {
    fn tone(&self, scheme: &DynamicScheme, spec: &RoleSpec) -> f64 {
        let level = scheme.contrast_level();
        let adjusts_band = spec.is_background && !spec.role.is_fixed_dim();

        if let Some(pair) = spec.tone_delta_pair_in(scheme) {
            let is_dark = scheme.is_dark();
            let absolute_delta = match pair.polarity {
                TonePolarity::Darker => -pair.delta,
                TonePolarity::RelativeLighter if is_dark => -pair.delta,
                TonePolarity::RelativeDarker if !is_dark => -pair.delta,
                _ => pair.delta,
            };
            let am_role_a = spec.role == pair.role_a;
            let relative_delta = if am_role_a {
                absolute_delta
            } else {
                -absolute_delta
            };
            let reference = scheme.tone_of(pair.other(spec.role));
            let mut tone = scheme.initial_tone(spec.role);

            tone = match pair.constraint {
                Some(DeltaConstraint::Exact) => clamp_f64(0.0, 100.0, reference + relative_delta),
                Some(DeltaConstraint::Nearer) if relative_delta > 0.0 => clamp_f64(
                    0.0,
                    100.0,
                    clamp_f64(reference, reference + relative_delta, tone),
                ),
                Some(DeltaConstraint::Nearer) => clamp_f64(
                    0.0,
                    100.0,
                    clamp_f64(reference + relative_delta, reference, tone),
                ),
                Some(DeltaConstraint::Farther) if relative_delta > 0.0 => {
                    clamp_f64(reference + relative_delta, 100.0, tone)
                }
                Some(DeltaConstraint::Farther) => clamp_f64(0.0, reference + relative_delta, tone),
                None => tone,
            };

            if let (Some(background), Some(curve)) =
                (spec.background_in(scheme), spec.contrast_curve_in(scheme))
            {
                let background_tone = scheme.tone_of(background);
                let ratio = curve.get(level);
                if level < 0.0 || ratio_of_tones(background_tone, tone) < ratio {
                    tone = foreground_tone(background_tone, ratio);
                }
            }

            return if adjusts_band {
                avoid_awkward_band(tone)
            } else {
                tone
            };
        }

        let mut answer = scheme.initial_tone(spec.role);
        let (Some(background), Some(curve)) =
            (spec.background_in(scheme), spec.contrast_curve_in(scheme))
        else {
            return answer;
        };
        let background_tone = scheme.tone_of(background);
        let ratio = curve.get(level);

        if level < 0.0 || ratio_of_tones(background_tone, answer) < ratio {
            answer = foreground_tone(background_tone, ratio);
        }
        if adjusts_band {
            answer = avoid_awkward_band(answer);
        }

        dual_background_tone(scheme, spec, answer, ratio)
    }

    fn hct(&self, scheme: &DynamicScheme, spec: &RoleSpec) -> Hct {
        let palette = scheme.palette(spec.palette);
        let chroma = palette.chroma() * spec.chroma_multiplier_in(scheme);
        Hct::from(palette.hue(), chroma, scheme.tone_of(spec.role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_foreground_thresholds() {
        assert!(tone_prefers_light_foreground(59.4));
        assert!(!tone_prefers_light_foreground(59.5));
        assert!(tone_allows_light_foreground(49.4));
        assert!(!tone_allows_light_foreground(49.5));
        assert_eq!(enable_light_foreground(59.0), 49.0);
        assert_eq!(enable_light_foreground(40.0), 40.0);
    }

    #[test]
    fn test_foreground_on_extremes() {
        // Black and white backgrounds always have a full-contrast answer.
        assert!(ratio_of_tones(foreground_tone(0.0, 4.5), 0.0) >= 4.5);
        assert!(foreground_tone(0.0, 4.5) > 0.0);
        assert!(ratio_of_tones(foreground_tone(100.0, 4.5), 100.0) >= 4.5);
        assert!(foreground_tone(100.0, 4.5) < 100.0);
    }

    #[test]
    fn test_unreachable_ratio_picks_the_stronger_side() {
        assert_eq!(foreground_tone(40.0, 21.0), 100.0);
        assert_eq!(foreground_tone(50.0, 21.0), 0.0);
        assert_eq!(foreground_tone(70.0, 21.0), 0.0);
    }

    #[test]
    fn test_awkward_band() {
        assert_eq!(avoid_awkward_band(55.0), 49.0);
        assert_eq!(avoid_awkward_band(58.0), 65.0);
        assert_eq!(avoid_awkward_band(80.0), 80.0);
        assert_eq!(avoid_awkward_band(20.0), 20.0);
    }
}
